use chrono::Datelike;
use yew::prelude::*;

use crate::components::parallax::FadeInOnScroll;
use crate::config;
use crate::content::{FooterLink, LEGAL_LINKS, QUICK_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <FadeInOnScroll class={classes!("footer-inner")}>
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">
                            {config::BRAND}
                            <span class="brand-dot">{"."}</span>
                        </h3>
                        <p class="footer-text">
                            {"The finance team that runs at the speed of your restaurant operations."}
                        </p>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul class="footer-links">
                            <li><a href={config::consultation_link()}>{"Book a consultation"}</a></li>
                            { for QUICK_LINKS.iter().map(|FooterLink { label, href }| html! {
                                <li key={*label}><a href={*href}>{*label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact"}</h4>
                        <ul class="footer-links">
                            <li>
                                {"Email: "}
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            </li>
                            <li>{format!("Response time: {}", config::RESPONSE_TIME)}</li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, config::BRAND)}</p>
                    <div class="footer-legal">
                        { for LEGAL_LINKS.iter().map(|FooterLink { label, href }| html! {
                            <a key={*label} href={*href}>{*label}</a>
                        }) }
                    </div>
                </div>
            </FadeInOnScroll>

            <style>
                {r#"
                    .site-footer {
                        background: #000;
                        border-top: 1px solid #27272a;
                    }

                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }

                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 1rem;
                    }

                    .footer-text {
                        color: #9ca3af;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .site-footer h4 {
                        color: #fff;
                        font-weight: 600;
                        margin: 0 0 1rem;
                    }

                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        color: #9ca3af;
                    }

                    .footer-links a,
                    .footer-legal a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-links a:hover,
                    .footer-legal a:hover {
                        color: #34d399;
                    }

                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid #27272a;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }

                    .footer-bottom p {
                        margin: 0;
                    }

                    @media (min-width: 768px) {
                        .footer-bottom {
                            flex-direction: row;
                        }
                    }

                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }
                "#}
            </style>
        </footer>
    }
}
