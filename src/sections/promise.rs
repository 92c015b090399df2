use yew::prelude::*;

use crate::components::animated_text::{AnimatedText, TypingText};
use crate::components::icons::IconView;
use crate::components::parallax::{ParallaxSection, ScaleOnScroll};
use crate::config::{self, REVEAL_MARGIN};
use crate::content::{Feature, FEATURES};
use crate::hooks::use_in_view;
use crate::motion::{animate, Pose, Transition};

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    index: usize,
    revealed: bool,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let Some(feature) = FEATURES.get(props.index) else {
        return html! {};
    };
    let Feature {
        icon,
        title,
        subtitle,
        description,
        gradient: (from, to),
    } = feature;
    let style = animate(
        &Pose::rise(30.0),
        &Pose::VISIBLE,
        props.revealed,
        &Transition::new(0.6).delayed(props.index as f64 * 0.2),
    );
    let accent = format!("--accent: linear-gradient(to right, {}, {});", from, to);

    html! {
        <div class="feature-card" style={format!("{} {}", accent, style)}>
            <div class="feature-glow"></div>
            <div class="feature-body">
                <div class="feature-icon">
                    <IconView icon={*icon} class={classes!("feature-icon-svg")} />
                </div>
                <h3>{*title}</h3>
                <p class="feature-subtitle">{*subtitle}</p>
                <p class="feature-description">{*description}</p>
                <div class="feature-corner"></div>
            </div>
        </div>
    }
}

#[function_component(PromiseSection)]
pub fn promise_section() -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_MARGIN);

    let header_style = animate(&Pose::rise(20.0), &Pose::VISIBLE, revealed, &Transition::new(0.6));
    let badge_style = animate(
        &Pose::rise(20.0),
        &Pose::VISIBLE,
        revealed,
        &Transition::new(0.6).delayed(0.8),
    );

    html! {
        <section ref={node} class="promise">
            <div class="promise-backdrop"></div>

            <div class="promise-inner">
                <div class="promise-header" style={header_style}>
                    <h2>
                        <AnimatedText text={format!("The {} Promise", config::BRAND)} />
                    </h2>
                    <p>
                        {"Clarity. Speed. Accountability. "}
                        <TypingText text="Every single day." class={classes!("promise-highlight")} delay={0.4} />
                    </p>
                </div>

                <ParallaxSection speed={0.2}>
                    <div class="feature-grid">
                        { for (0..FEATURES.len()).map(|index| html! {
                            <FeatureCard key={index} index={index} revealed={revealed} />
                        }) }
                    </div>
                </ParallaxSection>

                <ScaleOnScroll class={classes!("guarantee-wrap")}>
                    <div class="guarantee" style={badge_style}>
                        <p class="guarantee-main">
                            <span class="guarantee-strong">{"If we miss the mark"}</span>
                            {" - the month is free."}
                        </p>
                        <p class="guarantee-fine">{"No fine print."}</p>
                    </div>
                </ScaleOnScroll>
            </div>

            <style>
                {r#"
                    .promise {
                        position: relative;
                        padding: 6rem 0;
                        background: #000;
                        overflow: hidden;
                    }

                    .promise-backdrop {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(ellipse at top, rgba(6, 78, 59, 0.2), #000 70%);
                    }

                    .promise-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .promise-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .promise-header h2 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 1rem;
                    }

                    .promise-header p {
                        font-size: clamp(1.25rem, 2vw, 1.5rem);
                        color: #9ca3af;
                        margin: 0;
                    }

                    .promise-highlight {
                        color: #34d399;
                        font-weight: 600;
                    }

                    .feature-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    @media (min-width: 768px) {
                        .feature-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .feature-card {
                        position: relative;
                    }

                    .feature-glow {
                        position: absolute;
                        inset: -2px;
                        background: var(--accent);
                        border-radius: 1rem;
                        opacity: 0;
                        filter: blur(24px);
                        transition: opacity 0.5s ease;
                    }

                    .feature-card:hover .feature-glow {
                        opacity: 0.2;
                    }

                    .feature-body {
                        position: relative;
                        height: 100%;
                        box-sizing: border-box;
                        padding: 2rem;
                        background: rgba(24, 24, 27, 0.5);
                        backdrop-filter: blur(24px);
                        border: 1px solid #27272a;
                        border-radius: 1rem;
                        overflow: hidden;
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }

                    .feature-card:hover .feature-body {
                        transform: translateY(-8px);
                        border-color: #3f3f46;
                    }

                    .feature-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1.5rem;
                        border-radius: 0.75rem;
                        background: var(--accent);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.4);
                        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }

                    .feature-icon:hover {
                        transform: scale(1.1) rotate(5deg);
                    }

                    .feature-icon-svg {
                        width: 2rem;
                        height: 2rem;
                        color: #fff;
                    }

                    .feature-body h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 0.75rem;
                    }

                    .feature-subtitle {
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #d1d5db;
                        margin: 0 0 0.75rem;
                    }

                    .feature-description {
                        color: #9ca3af;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .feature-corner {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 5rem;
                        height: 5rem;
                        background: var(--accent);
                        border-bottom-left-radius: 100%;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }

                    .feature-card:hover .feature-corner {
                        opacity: 0.1;
                    }

                    .guarantee-wrap {
                        margin-top: 4rem;
                        text-align: center;
                    }

                    .guarantee {
                        display: inline-block;
                        padding: 1.5rem 2rem;
                        background: linear-gradient(to right, rgba(16, 185, 129, 0.1), rgba(34, 197, 94, 0.1));
                        border: 1px solid rgba(16, 185, 129, 0.3);
                        border-radius: 1rem;
                    }

                    .guarantee-main {
                        font-size: 1.125rem;
                        color: #fff;
                        margin: 0 0 0.5rem;
                    }

                    .guarantee-strong {
                        font-weight: 700;
                        color: #34d399;
                    }

                    .guarantee-fine {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}
