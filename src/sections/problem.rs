use yew::prelude::*;

use crate::components::animated_text::{GradientText, RevealText, ScaleText};
use crate::components::icons::{Icon, IconView};
use crate::components::parallax::{Direction, ParallaxSection, RotateOnScroll};
use crate::config::REVEAL_MARGIN;
use crate::content::PROBLEMS;
use crate::hooks::use_in_view;
use crate::motion::{animate, Pose, Transition};

#[function_component(ProblemSection)]
pub fn problem_section() -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_MARGIN);

    let header_style = animate(&Pose::rise(20.0), &Pose::VISIBLE, revealed, &Transition::new(0.6));

    html! {
        <section ref={node} class="problem">
            <RotateOnScroll class={classes!("problem-orbit")} degrees={180.0}>
                <div class="problem-ring"></div>
            </RotateOnScroll>

            <div class="problem-inner">
                <div class="problem-header" style={header_style}>
                    <div class="problem-badge">
                        <IconView icon={Icon::AlertCircle} class={classes!("problem-badge-icon")} />
                        <span>{"The Problem"}</span>
                    </div>

                    <h2>
                        {"Running a restaurant is hard. Running multiple locations "}
                        <GradientText gradient="#f87171, #fb923c">
                            {"without real-time financial visibility is chaos."}
                        </GradientText>
                    </h2>

                    <RevealText class={classes!("problem-lead")} delay={0.2}>
                        {"If this is you, we should talk:"}
                    </RevealText>
                </div>

                <ParallaxSection speed={0.1} direction={Direction::Down}>
                    <ul class="problem-list">
                        { for PROBLEMS.iter().enumerate().map(|(index, problem)| {
                            let style = animate(
                                &Pose::slide(-30.0),
                                &Pose::VISIBLE,
                                revealed,
                                &Transition::new(0.5).delayed(index as f64 * 0.1),
                            );
                            html! {
                                <li key={index} class="problem-item" style={style}>
                                    <div class="problem-icon">
                                        <IconView icon={problem.icon} class={classes!("problem-icon-svg")} />
                                    </div>
                                    <p>{problem.text}</p>
                                </li>
                            }
                        }) }
                    </ul>
                </ParallaxSection>

                <ScaleText class={classes!("problem-cta")} delay={0.8}>
                    <p class="problem-cta-main">{"Restaurants operate daily, not monthly."}</p>
                    <p class="problem-cta-sub">{"Your accounting should too."}</p>
                </ScaleText>
            </div>

            <style>
                {r#"
                    .problem {
                        position: relative;
                        padding: 6rem 0;
                        background: linear-gradient(to bottom, #000, #18181b);
                        overflow: hidden;
                    }

                    .problem-orbit {
                        position: absolute;
                        top: 4rem;
                        right: -8rem;
                        width: 24rem;
                        height: 24rem;
                        pointer-events: none;
                    }

                    .problem-ring {
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        border: 1px dashed rgba(239, 68, 68, 0.2);
                    }

                    .problem-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .problem-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .problem-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1.5rem;
                        background: rgba(239, 68, 68, 0.1);
                        border: 1px solid rgba(239, 68, 68, 0.2);
                        border-radius: 9999px;
                        color: #f87171;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }

                    .problem-badge-icon {
                        width: 1rem;
                        height: 1rem;
                    }

                    .problem-header h2 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #fff;
                        line-height: 1.2;
                        margin: 0 0 1.5rem;
                    }

                    .problem-lead {
                        font-size: 1.25rem;
                        color: #9ca3af;
                    }

                    .problem-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .problem-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.5rem;
                        background: rgba(24, 24, 27, 0.5);
                        border: 1px solid #27272a;
                        border-radius: 0.75rem;
                    }

                    .problem-item:hover {
                        border-color: rgba(239, 68, 68, 0.3);
                    }

                    .problem-icon {
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        background: rgba(239, 68, 68, 0.1);
                        transition: background 0.3s ease;
                    }

                    .problem-item:hover .problem-icon {
                        background: rgba(239, 68, 68, 0.2);
                    }

                    .problem-icon-svg {
                        width: 1.5rem;
                        height: 1.5rem;
                        color: #f87171;
                    }

                    .problem-item p {
                        margin: 0;
                        padding-top: 0.75rem;
                        font-size: 1.125rem;
                        color: #d1d5db;
                        line-height: 1.6;
                    }

                    .problem-cta {
                        margin-top: 4rem;
                        text-align: center;
                    }

                    .problem-cta-main {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 0.5rem;
                    }

                    .problem-cta-sub {
                        font-size: 1.25rem;
                        color: #34d399;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}
