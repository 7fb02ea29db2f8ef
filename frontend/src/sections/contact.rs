use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{Anchor, ContactChannel, CONTACT_CHANNELS};

fn channel_card(channel: &ContactChannel) -> Html {
    html! {
        <a key={channel.title} href={channel.href} class={classes!("channel", channel.accent.class())}>
            <div class="channel-icon">
                <Icon kind={channel.icon} size={24} />
            </div>
            <div class="channel-title">{ channel.title }</div>
            <div class="channel-subtitle">{ channel.subtitle }</div>
        </a>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Anchor::Contact.id()} class="contact">
            <div class="contact-inner">
                <h2 class="contact-title">
                    {"HABLEMOS DE "}<span class="contact-title-dim">{"NEGOCIOS"}</span>
                </h2>
                <p class="contact-lede">
                    {"¿Listo para diferenciarte de tu competencia? Agenda una consultoría inicial sin costo."}
                </p>
                <div class="contact-channels">
                    { for CONTACT_CHANNELS.iter().map(channel_card) }
                </div>
                <div class="contact-note">
                    <Icon kind={IconKind::ShieldCheck} size={14} />
                    <span>{"Datos protegidos licencia autorizada"}</span>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 8rem 0;
                    background: #09090b;
                    position: relative;
                    border-top: 1px solid #18181b;
                }
                .contact-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .contact-title {
                    font-size: 3rem;
                    font-weight: 900;
                    color: #ffffff;
                    margin: 0 0 2rem;
                    letter-spacing: -0.05em;
                }
                .contact-title-dim {
                    color: #3f3f46;
                }
                .contact-lede {
                    font-size: 1.25rem;
                    color: #a1a1aa;
                    margin: 0 auto 3rem;
                    max-width: 36rem;
                    font-weight: 300;
                }
                .contact-channels {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .channel {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: #18181b;
                    border: 1px solid #27272a;
                    border-radius: 2px;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .channel:hover {
                    background: rgba(24, 24, 27, 0.8);
                }
                .channel--green:hover { border-color: rgba(34, 197, 94, 0.5); }
                .channel--amber:hover { border-color: rgba(251, 191, 36, 0.5); }
                .channel-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    transition: transform 0.3s ease;
                }
                .channel:hover .channel-icon {
                    transform: scale(1.1);
                }
                .channel--green .channel-icon {
                    background: rgba(34, 197, 94, 0.1);
                    color: #22c55e;
                }
                .channel--amber .channel-icon {
                    background: rgba(251, 191, 36, 0.1);
                    color: #fbbf24;
                }
                .channel-title {
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.125rem;
                }
                .channel-subtitle {
                    color: #71717a;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                .contact-note {
                    margin-top: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    color: #52525b;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                @media (min-width: 768px) {
                    .contact-title {
                        font-size: 4.5rem;
                    }
                    .contact-channels {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
