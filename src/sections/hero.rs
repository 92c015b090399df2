use yew::prelude::*;

use crate::components::animated_text::{AnimatedText, GradientText};
use crate::components::dashboard::DashboardAnimation;
use crate::components::icons::{Icon, IconView};
use crate::components::parallax::ParallaxBackground;
use crate::config;
use crate::content::DASHBOARD_ANCHOR;
use crate::hooks::use_hydrated;
use crate::motion::{animate, Pose, SegmentKind, Transition};

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let hydrated = use_hydrated();
    let entrance = |delay: f64| {
        animate(
            &Pose::rise(20.0),
            &Pose::VISIBLE,
            hydrated,
            &Transition::new(0.8).delayed(delay),
        )
    };
    let microcopy_style = animate(
        &Pose {
            opacity: 0.0,
            ..Pose::VISIBLE
        },
        &Pose::VISIBLE,
        hydrated,
        &Transition::new(0.8).delayed(0.8),
    );
    let dashboard_style = animate(
        &Pose::grow(0.95),
        &Pose::VISIBLE,
        hydrated,
        &Transition::new(1.0).delayed(0.4),
    );

    html! {
        <section class="hero">
            <ParallaxBackground class={classes!("hero-grid-layer")}>
                <div class="hero-grid"></div>
            </ParallaxBackground>

            <div class="hero-inner">
                <div class="hero-columns">
                    <div class="hero-copy" style={entrance(0.0)}>
                        <h1 class="hero-title">
                            <AnimatedText text="Grow Your Restaurants" delay={0.2} kind={SegmentKind::Word} />
                            {" "}
                            <GradientText gradient="#34d399, #22c55e">
                                <AnimatedText
                                    text="Without Losing Financial Control"
                                    delay={0.44}
                                    kind={SegmentKind::Word}
                                />
                            </GradientText>
                        </h1>

                        <p class="hero-lead" style={entrance(0.4)}>
                            {"The finance team that runs at the speed of your operations."}
                        </p>

                        <p class="hero-sub" style={entrance(0.5)}>
                            {"Weekly P&Ls by location. Daily cash flow visibility. Actionable insights on food and labor costs."}
                        </p>

                        <div class="hero-ctas" style={entrance(0.6)}>
                            <a href={config::consultation_link()} class="cta-primary">
                                <span>{"Book a consultation"}</span>
                                <IconView icon={Icon::ArrowRight} class={classes!("cta-arrow")} />
                            </a>
                            <a href={format!("#{}", DASHBOARD_ANCHOR)} class="cta-secondary">
                                <IconView icon={Icon::FileText} class={classes!("cta-icon")} />
                                <span>{"View sample weekly location P&L"}</span>
                            </a>
                        </div>

                        <p class="hero-microcopy" style={microcopy_style}>
                            {"Scale Your Restaurants with Confidence."}
                        </p>
                    </div>

                    <div class="hero-dashboard" style={dashboard_style}>
                        <DashboardAnimation />
                    </div>
                </div>
            </div>

            <div class="hero-fade"></div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #000, #18181b, #000);
                    }

                    .hero-grid-layer {
                        position: absolute;
                        inset: 0;
                    }

                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        background-image:
                            linear-gradient(to right, #1f1f1f 1px, transparent 1px),
                            linear-gradient(to bottom, #1f1f1f 1px, transparent 1px);
                        background-size: 4rem 4rem;
                        mask-image: radial-gradient(ellipse 60% 50% at 50% 0%, #000 70%, transparent 110%);
                        -webkit-mask-image: radial-gradient(ellipse 60% 50% at 50% 0%, #000 70%, transparent 110%);
                    }

                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }

                    .hero-columns {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    @media (min-width: 1024px) {
                        .hero-columns {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .hero-title {
                        font-size: clamp(3rem, 6vw, 4.5rem);
                        font-weight: 700;
                        color: #fff;
                        line-height: 1.15;
                        margin: 0 0 1.5rem;
                    }

                    .hero-lead {
                        font-size: clamp(1.25rem, 2vw, 1.5rem);
                        color: #d1d5db;
                        line-height: 1.6;
                        margin: 0 0 1rem;
                    }

                    .hero-sub {
                        font-size: 1.125rem;
                        color: #9ca3af;
                        line-height: 1.6;
                        margin: 0 0 2.5rem;
                    }

                    .hero-ctas {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .cta-primary,
                    .cta-secondary {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                        transition: transform 0.2s ease, box-shadow 0.3s ease, border-color 0.3s ease, background 0.3s ease;
                    }

                    .cta-primary {
                        background: linear-gradient(to right, #10b981, #16a34a);
                        box-shadow: 0 10px 15px -3px rgba(16, 185, 129, 0.5);
                    }

                    .cta-primary:hover {
                        transform: scale(1.05);
                        background: linear-gradient(to right, #059669, #15803d);
                        box-shadow: 0 10px 15px -3px rgba(16, 185, 129, 0.7);
                    }

                    .cta-secondary {
                        background: #27272a;
                        border: 1px solid #3f3f46;
                    }

                    .cta-secondary:hover {
                        transform: scale(1.05);
                        border-color: #10b981;
                    }

                    .cta-primary:active,
                    .cta-secondary:active {
                        transform: scale(0.95);
                    }

                    .cta-arrow {
                        width: 1.25rem;
                        height: 1.25rem;
                        transition: transform 0.2s ease;
                    }

                    .cta-primary:hover .cta-arrow {
                        transform: translateX(0.25rem);
                    }

                    .cta-icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .hero-microcopy {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #6b7280;
                        margin: 0;
                    }

                    .hero-dashboard {
                        position: relative;
                    }

                    .hero-fade {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 8rem;
                        background: linear-gradient(to top, #000, transparent);
                        pointer-events: none;
                    }
                "#}
            </style>
        </section>
    }
}
