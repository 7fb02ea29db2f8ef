use yew::prelude::*;

use crate::content::{Anchor, Stat, AGENCY_PARAGRAPHS, AGENCY_STATS};

fn stat_block(stat: &Stat) -> Html {
    html! {
        <div key={stat.label}>
            <div class="about-stat-value">{ stat.value }</div>
            <div class="about-stat-label">{ stat.label }</div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Anchor::Agency.id()} class="about">
            <div class="about-grid">
                <div class="about-copy">
                    <div class="eyebrow">
                        <div class="eyebrow-rule"></div>
                        <h2>{"La Agencia"}</h2>
                    </div>
                    <h3 class="about-title">
                        {"Fusión entre "}
                        <span class="about-title-accent">{"Arte Urbano"}</span>
                        {" y "}<br/>
                        {"Exigencia Corporativa."}
                    </h3>
                    <div class="about-paragraphs">
                        { for AGENCY_PARAGRAPHS.iter().map(|text| html! { <p>{ *text }</p> }) }
                    </div>
                    <div class="about-stats">
                        { for AGENCY_STATS.iter().map(stat_block) }
                    </div>
                </div>

                <div class="about-visual">
                    <div class="about-visual-frame"></div>
                    <div class="about-photo">
                        <img src="/set.png" alt="Equipo Escofilm en Set" />
                        <div class="about-photo-caption">
                            <div class="about-photo-title">{"Set de Producción"}</div>
                            <div class="about-photo-sub">{"Behind the scenes"}</div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about {
                    padding: 8rem 0;
                    background: #000000;
                    position: relative;
                    border-bottom: 1px solid #18181b;
                }
                .about-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .eyebrow {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .eyebrow-rule {
                    height: 1px;
                    width: 3rem;
                    background: #fbbf24;
                }
                .eyebrow h2 {
                    margin: 0;
                    color: #fbbf24;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                }
                .about-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0 0 2rem;
                    line-height: 1.25;
                }
                .about-title-accent {
                    font-style: italic;
                    font-family: Georgia, serif;
                    color: #71717a;
                }
                .about-paragraphs p {
                    color: #a1a1aa;
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.625;
                    margin: 0 0 1.5rem;
                }
                .about-stats {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #18181b;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .about-stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .about-stat-label {
                    font-size: 10px;
                    color: #71717a;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-top: 0.25rem;
                }
                .about-visual {
                    position: relative;
                }
                .about-visual-frame {
                    position: absolute;
                    inset: 0;
                    background: rgba(251, 191, 36, 0.1);
                    transform: translate(1rem, -1rem);
                    border: 1px solid rgba(251, 191, 36, 0.2);
                    border-radius: 2px;
                }
                .about-photo {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    background: #18181b;
                    border-radius: 2px;
                    filter: grayscale(1);
                    transition: filter 0.7s ease;
                }
                .about-photo:hover {
                    filter: grayscale(0);
                }
                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .about-photo-caption {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    padding: 1.5rem;
                    box-sizing: border-box;
                    background: linear-gradient(to top, #000000, transparent);
                }
                .about-photo-title {
                    color: #ffffff;
                    font-weight: 700;
                }
                .about-photo-sub {
                    font-size: 0.75rem;
                    color: #fbbf24;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                @media (min-width: 768px) {
                    .about-title {
                        font-size: 3rem;
                    }
                }
                @media (min-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 7fr 5fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
