use yew::prelude::*;

use crate::config::BRAND_NAME;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Wordmark with the accent rule and amber dot.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <svg
            class={classes!("logo", props.class.clone())}
            viewBox="0 0 240 60"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <text
                x="10"
                y="40"
                font-family="sans-serif"
                font-weight="400"
                font-size="32"
                fill="currentColor"
                letter-spacing="2"
            >
                { BRAND_NAME.to_uppercase() }
            </text>
            <path d="M 145 15 L 210 15" stroke="currentColor" stroke-width="2" />
            <path d="M 145 15 L 145 25" stroke="currentColor" stroke-width="2" />
            <circle cx="215" cy="15" r="2" fill="#fbbf24" />
        </svg>
    }
}
