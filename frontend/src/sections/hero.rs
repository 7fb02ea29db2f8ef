use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{HERO_CTAS, HERO_POSTER, HERO_VIDEO};

#[function_component(Hero)]
pub fn hero() -> Html {
    let [showreel, producer] = HERO_CTAS;

    html! {
        <section class="hero">
            <div class="hero-media">
                <video
                    class="hero-video"
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    poster={HERO_POSTER}
                >
                    <source src={HERO_VIDEO} type="video/mp4" />
                </video>
                // Texture overlays: grain, scanlines, vignette
                <div class="hero-grain"></div>
                <div class="hero-scanlines"></div>
                <div class="hero-vignette"></div>
            </div>

            <div class="hero-body">
                <div class="hero-badge">
                    <span class="hero-badge-dot">
                        <span class="hero-badge-ping"></span>
                        <span class="hero-badge-core"></span>
                    </span>
                    <span class="hero-badge-text">{"Producción Digital High-End"}</span>
                </div>

                <h1 class="hero-title">
                    {"CREAMOS"}<br/>
                    <span class="hero-title-fade">{"LEGADO VISUAL"}</span>
                </h1>

                <p class="hero-subtitle">
                    {"Especialistas en traducir la identidad corporativa en contenido digital de alto impacto. Video, Fotografía y Estrategia."}
                </p>

                <div class="hero-actions">
                    <a href={showreel.target.href()} class="hero-cta hero-cta--primary">
                        { showreel.label }
                        <Icon kind={IconKind::Play} size={14} />
                    </a>
                    <a href={producer.target.href()} class="hero-cta hero-cta--ghost">
                        { producer.label }
                    </a>
                </div>
            </div>

            <div class="hero-scroll-hint">
                <span>{"Scroll"}</span>
                <Icon kind={IconKind::ChevronDown} size={20} />
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #000000;
                }
                .hero-media {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    overflow: hidden;
                }
                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.6;
                    filter: brightness(0.75) contrast(1.25) saturate(1.1);
                }
                .hero-grain {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background-image: url('https://grainy-gradients.vercel.app/noise.svg');
                    opacity: 0.2;
                    mix-blend-mode: overlay;
                }
                .hero-scanlines {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    pointer-events: none;
                    background:
                        linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.25) 50%),
                        linear-gradient(90deg, rgba(255, 0, 0, 0.06), rgba(0, 255, 0, 0.02), rgba(0, 0, 255, 0.06));
                    background-size: 100% 2px, 3px 100%;
                }
                .hero-vignette {
                    position: absolute;
                    inset: 0;
                    z-index: 20;
                    background: radial-gradient(circle at center, transparent 0%, #000000 90%);
                }
                .hero-body {
                    position: relative;
                    z-index: 30;
                    text-align: center;
                    padding: 0 1rem;
                    max-width: 72rem;
                    margin: 2.5rem auto 0;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(251, 191, 36, 0.3);
                    background: rgba(0, 0, 0, 0.4);
                    border-radius: 9999px;
                    backdrop-filter: blur(12px);
                    box-shadow: 0 0 20px rgba(251, 191, 36, 0.2);
                }
                .hero-badge-dot {
                    position: relative;
                    display: flex;
                    width: 0.5rem;
                    height: 0.5rem;
                }
                .hero-badge-ping {
                    position: absolute;
                    inset: 0;
                    border-radius: 9999px;
                    background: #fbbf24;
                    opacity: 0.75;
                    animation: hero-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }
                .hero-badge-core {
                    position: relative;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #f59e0b;
                }
                .hero-badge-text {
                    color: #fbbf24;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .hero-title {
                    font-size: 3rem;
                    font-weight: 900;
                    color: #ffffff;
                    margin: 0 0 2rem;
                    letter-spacing: -0.05em;
                    line-height: 0.9;
                    text-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .hero-title-fade {
                    color: transparent;
                    background: linear-gradient(to right, #ffffff, #a1a1aa, #52525b);
                    -webkit-background-clip: text;
                    background-clip: text;
                }
                .hero-subtitle {
                    max-width: 42rem;
                    margin: 1.5rem auto 0;
                    font-size: 1.125rem;
                    color: #d4d4d8;
                    font-weight: 500;
                    line-height: 1.625;
                }
                .hero-actions {
                    margin-top: 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .hero-cta {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    font-weight: 700;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .hero-cta--primary {
                    background: #fbbf24;
                    color: #000000;
                    box-shadow: 0 0 20px rgba(251, 191, 36, 0.4);
                }
                .hero-cta--primary:hover {
                    background: #ffffff;
                    transform: scale(1.05);
                }
                .hero-cta--ghost {
                    border: 1px solid #71717a;
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(4px);
                    color: #ffffff;
                }
                .hero-cta--ghost:hover {
                    background: #ffffff;
                    color: #000000;
                    border-color: #ffffff;
                }
                .hero-scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 30;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    opacity: 0.5;
                    color: #71717a;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    animation: hero-bounce 1s infinite;
                }
                @keyframes hero-ping {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }
                @keyframes hero-bounce {
                    0%, 100% { transform: translate(-50%, -25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                    50% { transform: translate(-50%, 0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                }
                @media (min-width: 640px) {
                    .hero-actions {
                        flex-direction: row;
                    }
                }
                @media (min-width: 768px) {
                    .hero-title {
                        font-size: 6rem;
                    }
                }
                @media (min-width: 1024px) {
                    .hero-title {
                        font-size: 8rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
