use log::{debug, info};
use yew::prelude::*;

use crate::content::{Anchor, Section, PAGE_LAYOUT};
use crate::sections::{
    about::About, contact::Contact, footer::Footer, hero::Hero, portfolio::Portfolio,
    services::Services,
};

fn render_section(section: Section) -> Html {
    match section {
        Section::Hero => html! { <Hero /> },
        Section::About => html! { <About /> },
        Section::Services => html! { <Services /> },
        Section::Portfolio => html! { <Portfolio /> },
        Section::Contact => html! { <Contact /> },
        Section::Footer => html! { <Footer /> },
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Rendering landing page ({} sections)", PAGE_LAYOUT.len());
            let anchors: Vec<_> = PAGE_LAYOUT
                .iter()
                .filter_map(|section| section.anchor())
                .map(Anchor::id)
                .collect();
            debug!("in-page anchors: {:?}", anchors);
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            { for PAGE_LAYOUT.iter().copied().map(render_section) }
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #000000;
                }
                .landing {
                    min-height: 100vh;
                    background: #000000;
                    color: #e4e4e7;
                    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                }
                .landing ::selection {
                    background: #fbbf24;
                    color: #000000;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HERO_CTAS, NAV_LINKS, QUOTE_CTA};

    async fn render_landing() -> String {
        yew::ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn every_link_target_is_rendered_once() {
        let html = render_landing().await;
        for link in NAV_LINKS.iter().chain([&QUOTE_CTA]).chain(HERO_CTAS.iter()) {
            let id = format!(r#"id="{}""#, link.target.id());
            assert_eq!(
                html.matches(&id).count(),
                1,
                "{} -> {} has no single matching section",
                link.label,
                link.target.href()
            );
        }
    }

    #[tokio::test]
    async fn hero_ctas_point_at_rendered_sections() {
        let html = render_landing().await;
        for link in HERO_CTAS {
            assert!(html.contains(&format!(r#"href="{}""#, link.target.href())), "{}", link.label);
        }
    }

    #[tokio::test]
    async fn sections_render_in_layout_order() {
        let html = render_landing().await;
        let positions: Vec<_> = PAGE_LAYOUT
            .iter()
            .filter_map(|section| section.anchor())
            .map(|anchor| html.find(&format!(r#"id="{}""#, anchor.id())))
            .collect();
        assert!(positions.iter().all(Option::is_some), "{positions:?}");
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
