use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::{Anchor, ServiceOffer, SERVICES};

fn service_card(service: &ServiceOffer) -> Html {
    html! {
        <div key={service.title} class="service-card">
            <div class="service-icon">
                <Icon kind={service.icon} size={32} class={service.tone.class()} />
            </div>
            <h4>{ service.title }</h4>
            <p>{ service.description }</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Anchor::Services.id()} class="services">
            <div class="services-inner">
                <div class="services-header">
                    <div>
                        <div class="services-eyebrow">{"Nuestra Oferta"}</div>
                        <h3>{"Soluciones Integrales"}</h3>
                    </div>
                    <p class="services-lede">
                        {"Todo lo que tu empresa necesita para dominar el entorno digital,"}<br/>
                        {" centralizado en un solo proveedor."}
                    </p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(service_card) }
                </div>
            </div>

            <style>
                {r#"
                .services {
                    padding: 8rem 0;
                    background: #09090b;
                }
                .services-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .services-header {
                    margin-bottom: 5rem;
                }
                .services-eyebrow {
                    color: #fbbf24;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    margin-bottom: 1rem;
                }
                .services-header h3 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0;
                }
                .services-lede {
                    display: none;
                    color: #71717a;
                    max-width: 28rem;
                    font-size: 0.875rem;
                    text-align: right;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1px;
                    background: #27272a;
                    border: 1px solid #27272a;
                }
                .service-card {
                    background: #000000;
                    padding: 3rem;
                    transition: background-color 0.3s ease;
                }
                .service-card:hover {
                    background: rgba(24, 24, 27, 0.5);
                }
                .service-icon {
                    margin-bottom: 1.5rem;
                    padding: 0.75rem;
                    background: #18181b;
                    width: fit-content;
                    border-radius: 0.25rem;
                    transition: background-color 0.3s ease;
                }
                .service-card:hover .service-icon {
                    background: rgba(251, 191, 36, 0.1);
                }
                .service-card h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0 0 1rem;
                }
                .service-card p {
                    color: #a1a1aa;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    margin: 0;
                }
                .tone-accent { color: #fbbf24; }
                .tone-light { color: #ffffff; }
                .tone-muted { color: #a1a1aa; }
                @media (min-width: 768px) {
                    .services-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                    }
                    .services-lede {
                        display: block;
                    }
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (min-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
