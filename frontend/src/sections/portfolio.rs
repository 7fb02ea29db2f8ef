use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{Anchor, ProjectTile, PROJECTS};

fn tile(project: &ProjectTile) -> Html {
    let caption = match project.category {
        Some(category) if project.span.shows_caption() => html! {
            <div class="tile-caption">
                <div class="tile-category">{ category }</div>
                <div class="tile-title">{ project.title }</div>
            </div>
        },
        _ => html! {
            <div class="tile-hover">
                <div class="tile-hover-title">{ project.title }</div>
            </div>
        },
    };

    html! {
        <div key={project.title} class={classes!("tile", project.span.class())}>
            <img src={project.image} alt={project.alt} loading="lazy" />
            { caption }
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <section id={Anchor::Portfolio.id()} class="portfolio">
            <div class="portfolio-inner">
                <div class="portfolio-header">
                    <div>
                        <h2>{"Showcase"}</h2>
                        <h3>{"Últimos Proyectos"}</h3>
                    </div>
                    <button class="portfolio-more">
                        {"Ver Portafolio Completo"}
                        <Icon kind={IconKind::ArrowRight} size={14} />
                    </button>
                </div>
                <div class="portfolio-grid">
                    { for PROJECTS.iter().map(tile) }
                </div>
            </div>

            <style>
                {r#"
                .portfolio {
                    padding: 8rem 0;
                    background: #000000;
                }
                .portfolio-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .portfolio-header {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .portfolio-header h2 {
                    color: #71717a;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    margin: 0 0 0.5rem;
                }
                .portfolio-header h3 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0;
                }
                .portfolio-more {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    border-bottom: 1px solid #fbbf24;
                    padding: 0 0 0.25rem;
                    color: #ffffff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .portfolio-more:hover {
                    color: #fbbf24;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                }
                .tile {
                    position: relative;
                    overflow: hidden;
                    background: #18181b;
                    min-height: 16rem;
                }
                .tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.7;
                    transition: all 0.7s ease;
                }
                .tile:hover img {
                    opacity: 1;
                    transform: scale(1.05);
                }
                .tile-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2rem;
                    background: linear-gradient(to top, #000000, transparent, transparent);
                    opacity: 0.8;
                }
                .tile-category {
                    color: #fbbf24;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.5rem;
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: all 0.5s ease;
                }
                .tile:hover .tile-category {
                    opacity: 1;
                    transform: translateY(0);
                }
                .tile-title {
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .tile--feature .tile-title {
                    font-size: 1.5rem;
                }
                .tile-hover {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .tile:hover .tile-hover {
                    opacity: 1;
                }
                .tile-hover-title {
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .portfolio-header {
                        flex-direction: row;
                    }
                    .portfolio-grid {
                        grid-template-columns: repeat(2, 1fr);
                        height: 600px;
                    }
                    .tile {
                        min-height: 0;
                    }
                }
                @media (min-width: 1024px) {
                    .portfolio-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .tile--feature {
                        grid-column: span 2;
                        grid-row: span 2;
                    }
                    .tile--wide {
                        grid-column: span 2;
                    }
                }
                "#}
            </style>
        </section>
    }
}
