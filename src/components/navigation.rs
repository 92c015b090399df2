use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::hooks::use_hydrated;
use crate::motion::{animate, Pose, Transition};

/// Scroll distance after which the bar picks up its backdrop.
const SCROLLED_THRESHOLD: f64 = 50.0;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let hydrated = use_hydrated();
    let is_scrolled = scroll_y > SCROLLED_THRESHOLD;

    let hidden = Pose {
        y: crate::motion::Length::Px(-100.0),
        ..Pose::VISIBLE
    };
    let style = animate(&hidden, &Pose::VISIBLE, hydrated, &Transition::new(0.5));

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))} style={style}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="brand-name">{config::BRAND}</span>
                    <span class="brand-dot">{"."}</span>
                </a>
                <a href={config::consultation_link()} class="nav-cta">
                    {"Book a consultation"}
                </a>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                    }

                    .top-nav::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(24px);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    .top-nav.scrolled {
                        border-bottom-color: #27272a;
                    }

                    .top-nav.scrolled::before {
                        opacity: 1;
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }

                    .nav-logo:hover {
                        transform: scale(1.05);
                    }

                    .brand-name { color: #fff; }
                    .brand-dot { color: #34d399; }

                    .nav-cta {
                        padding: 0.625rem 1.5rem;
                        background: linear-gradient(to right, #10b981, #16a34a);
                        color: #fff;
                        font-weight: 600;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        box-shadow: 0 10px 15px -3px rgba(16, 185, 129, 0.3);
                        transition: transform 0.2s ease, box-shadow 0.3s ease;
                    }

                    .nav-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 10px 15px -3px rgba(16, 185, 129, 0.5);
                    }

                    .nav-cta:active {
                        transform: scale(0.95);
                    }

                    @media (max-width: 640px) {
                        .nav-cta {
                            padding: 0.5rem 1rem;
                            font-size: 0.875rem;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
