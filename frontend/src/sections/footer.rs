use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config::COPYRIGHT_YEAR;
use crate::content::SOCIAL_LINKS;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <Logo class="footer-logo" />
                    <span class="footer-copy">{ format!("© {}", COPYRIGHT_YEAR) }</span>
                </div>
                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href}>{ link.label }</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    background: #000000;
                    padding: 3rem 0;
                    border-top: 1px solid #18181b;
                }
                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #ffffff;
                }
                .footer-logo {
                    height: 1.5rem;
                    width: auto;
                }
                .footer-copy {
                    color: #52525b;
                    font-size: 0.75rem;
                }
                .footer-social {
                    display: flex;
                    gap: 2rem;
                }
                .footer-social a {
                    color: #71717a;
                    font-size: 0.75rem;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    transition: color 0.3s ease;
                }
                .footer-social a:hover {
                    color: #ffffff;
                }
                @media (min-width: 768px) {
                    .footer-inner {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
