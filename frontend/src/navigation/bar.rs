use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::logo::Logo;
use crate::content::{NavLink, NAV_LINKS, QUOTE_CTA};
use crate::navigation::scroll::ScrollSubscription;
use crate::navigation::state::{NavEvent, NavigationState};

fn menu_button_icon(menu_open: bool) -> IconKind {
    if menu_open {
        IconKind::Close
    } else {
        IconKind::Menu
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let nav = use_reducer(NavigationState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = ScrollSubscription::attach({
                    let dispatcher = dispatcher.clone();
                    move |offset| dispatcher.dispatch(NavEvent::Scrolled(offset))
                });

                match &subscription {
                    Some(subscription) => {
                        info!("navigation listening for scroll events");
                        // Page may have been restored mid-scroll.
                        if let Some(offset) = subscription.current_offset() {
                            dispatcher.dispatch(NavEvent::Scrolled(offset));
                        }
                    }
                    None => warn!("no window scroll source, navigation stays transparent"),
                }

                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavEvent::MenuToggled);
        })
    };

    // Not prevent_default: the browser still follows the fragment.
    let select_link = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavEvent::LinkSelected))
    };

    let render_link = |link: &NavLink, class: &'static str| {
        html! {
            <a key={link.label} href={link.target.href()} class={class} onclick={select_link.clone()}>
                { link.label }
            </a>
        }
    };

    html! {
        <nav
            class={classes!("nav", nav.presentation().class())}
            data-scrolled={nav.scrolled().to_string()}
        >
            <div class="nav-content">
                <div class="nav-logo">
                    <Logo class="nav-logo-mark" />
                </div>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| render_link(link, "nav-link")) }
                    { render_link(&QUOTE_CTA, "nav-cta") }
                </div>

                <button
                    class="nav-menu-button"
                    aria-label="Menú"
                    aria-expanded={nav.menu_open().to_string()}
                    onclick={toggle_menu}
                >
                    <Icon kind={menu_button_icon(nav.menu_open())} size={28} />
                </button>
            </div>

            if nav.menu_open() {
                <div class="nav-mobile-panel">
                    { for NAV_LINKS.iter().map(|link| render_link(link, "nav-mobile-link")) }
                </div>
            }

            <style>
                {r#"
                .nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.5s ease;
                    border-bottom: 1px solid transparent;
                }
                .nav--clear {
                    background: transparent;
                    padding: 1.5rem 0;
                }
                .nav--solid {
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    border-bottom-color: #27272a;
                    padding: 1rem 0;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #ffffff;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .nav-logo:hover {
                    color: #fbbf24;
                }
                .nav-logo-mark {
                    height: 2rem;
                    width: auto;
                    display: block;
                }
                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 2.5rem;
                }
                .nav-link {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #d4d4d8;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #ffffff;
                }
                .nav-cta {
                    background: #ffffff;
                    color: #000000;
                    padding: 0.75rem 1.5rem;
                    font-weight: 700;
                    font-size: 0.75rem;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    transition: all 0.3s ease;
                }
                .nav-cta:hover {
                    background: #fbbf24;
                }
                .nav-menu-button {
                    background: none;
                    border: none;
                    color: #d4d4d8;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .nav-menu-button:hover {
                    color: #ffffff;
                }
                .nav-mobile-panel {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    background: #000000;
                    border-bottom: 1px solid #27272a;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    box-sizing: border-box;
                    animation: nav-slide-in 0.3s ease-out;
                }
                .nav-mobile-link {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #a1a1aa;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .nav-mobile-link:hover {
                    color: #ffffff;
                }
                @keyframes nav-slide-in {
                    from { transform: translateY(-1.25rem); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (min-width: 768px) {
                    .nav-logo-mark {
                        height: 2.5rem;
                    }
                    .nav-links {
                        display: flex;
                    }
                    .nav-menu-button,
                    .nav-mobile-panel {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_button_shows_close_while_open() {
        assert_eq!(menu_button_icon(true), IconKind::Close);
        assert_eq!(menu_button_icon(false), IconKind::Menu);
    }

    async fn render_navigation() -> String {
        yew::ServerRenderer::<Navigation>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn first_render_is_clear_with_panel_closed() {
        let html = render_navigation().await;
        assert!(html.contains(r#"class="nav nav--clear""#), "{html}");
        assert!(html.contains(r#"data-scrolled="false""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains(r#"class="nav-mobile-panel""#));
    }

    #[tokio::test]
    async fn logo_is_not_a_link() {
        let html = render_navigation().await;
        assert!(html.contains(r#"<div class="nav-logo">"#));
        assert!(!html.contains(r##"href="#""##));
    }

    #[tokio::test]
    async fn desktop_row_links_every_nav_entry() {
        let html = render_navigation().await;
        for link in NAV_LINKS.iter().chain([&QUOTE_CTA]) {
            assert!(html.contains(&format!(r#"href="{}""#, link.target.href())), "{}", link.label);
        }
    }
}
