//! Wrappers whose transform and opacity follow the scroll position.
//!
//! Each wrapper measures an outer element and styles an inner one, so the
//! transform it writes never feeds back into its own measurement.

use yew::prelude::*;

use crate::hooks::{bind_style, use_scroll_progress};
use crate::motion::{BreakpointTable, Length, Pose, ENTER_CENTER, ENTER_EXIT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

fn pose_at(opacity: f64, y: f64, scale: f64, rotate: f64) -> String {
    Pose {
        opacity,
        y: Length::Px(y),
        scale,
        rotate,
        ..Pose::VISIBLE
    }
    .css()
}

/// Vertical offset over the scroll window: `100 * speed` pixels either side
/// of the resting position.
fn travel_table(speed: f64, direction: Direction) -> BreakpointTable {
    let travel = 100.0 * speed;
    match direction {
        Direction::Up => BreakpointTable::linear(travel, -travel),
        Direction::Down => BreakpointTable::linear(-travel, travel),
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.5)]
    pub speed: f64,
    #[prop_or_default]
    pub direction: Direction,
}

#[function_component(ParallaxSection)]
pub fn parallax_section(props: &ParallaxProps) -> Html {
    let outer = use_node_ref();
    let inner = use_node_ref();
    let progress = use_scroll_progress(outer.clone(), ENTER_EXIT);

    {
        let inner = inner.clone();
        let table = travel_table(props.speed, props.direction);
        use_effect_with_deps(
            move |(progress, _, _)| {
                let y = progress.transform(table);
                let subscription = bind_style(&inner, progress, move || {
                    format!("will-change: transform; {}", pose_at(1.0, y.get(), 1.0, 0.0))
                });
                move || drop(subscription)
            },
            (progress, props.speed.to_bits(), props.direction),
        );
    }

    html! {
        <div ref={outer} class={props.class.clone()}>
            <div ref={inner}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxBackgroundProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.3)]
    pub speed: f64,
}

/// Drifts its layer upward and dims it slightly as the section scrolls by.
#[function_component(ParallaxBackground)]
pub fn parallax_background(props: &ParallaxBackgroundProps) -> Html {
    let outer = use_node_ref();
    let layer = use_node_ref();
    let progress = use_scroll_progress(outer.clone(), ENTER_EXIT);

    {
        let layer = layer.clone();
        let speed = props.speed;
        use_effect_with_deps(
            move |(progress, _)| {
                let y = progress.transform(BreakpointTable::linear(0.0, -100.0 * speed));
                let opacity = progress.transform(BreakpointTable::or_constant(
                    &[0.0, 0.5, 1.0],
                    &[1.0, 0.8, 0.6],
                    1.0,
                ));
                let subscription = bind_style(&layer, progress, move || {
                    format!(
                        "position: absolute; inset: 0; {}",
                        pose_at(opacity.get(), y.get(), 1.0, 0.0)
                    )
                });
                move || drop(subscription)
            },
            (progress, speed.to_bits()),
        );
    }

    html! {
        <div ref={outer} class={classes!("parallax-background", props.class.clone())}>
            <div ref={layer} style="position: absolute; inset: 0;">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollWrapperProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Grows to full size at the middle of its scroll window and fades at the
/// edges.
#[function_component(ScaleOnScroll)]
pub fn scale_on_scroll(props: &ScrollWrapperProps) -> Html {
    let outer = use_node_ref();
    let inner = use_node_ref();
    let progress = use_scroll_progress(outer.clone(), ENTER_EXIT);

    {
        let inner = inner.clone();
        use_effect_with_deps(
            move |progress| {
                let scale = progress.transform(BreakpointTable::or_constant(
                    &[0.0, 0.5, 1.0],
                    &[0.8, 1.0, 0.8],
                    1.0,
                ));
                let opacity = progress.transform(BreakpointTable::or_constant(
                    &[0.0, 0.2, 0.8, 1.0],
                    &[0.0, 1.0, 1.0, 0.0],
                    1.0,
                ));
                let subscription = bind_style(&inner, progress, move || {
                    pose_at(opacity.get(), 0.0, scale.get(), 0.0)
                });
                move || drop(subscription)
            },
            progress,
        );
    }

    html! {
        <div ref={outer} class={props.class.clone()}>
            <div ref={inner}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Rises 50px and fades in until its center reaches the viewport center.
#[function_component(FadeInOnScroll)]
pub fn fade_in_on_scroll(props: &ScrollWrapperProps) -> Html {
    let outer = use_node_ref();
    let inner = use_node_ref();
    let progress = use_scroll_progress(outer.clone(), ENTER_CENTER);

    {
        let inner = inner.clone();
        use_effect_with_deps(
            move |progress| {
                let opacity = progress.transform(BreakpointTable::linear(0.0, 1.0));
                let y = progress.transform(BreakpointTable::linear(50.0, 0.0));
                let subscription = bind_style(&inner, progress, move || {
                    pose_at(opacity.get(), y.get(), 1.0, 0.0)
                });
                move || drop(subscription)
            },
            progress,
        );
    }

    html! {
        <div ref={outer} class={props.class.clone()}>
            <div ref={inner}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RotateOnScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(360.0)]
    pub degrees: f64,
}

#[function_component(RotateOnScroll)]
pub fn rotate_on_scroll(props: &RotateOnScrollProps) -> Html {
    let outer = use_node_ref();
    let inner = use_node_ref();
    let progress = use_scroll_progress(outer.clone(), ENTER_EXIT);

    {
        let inner = inner.clone();
        let degrees = props.degrees;
        use_effect_with_deps(
            move |(progress, _)| {
                let rotate = progress.transform(BreakpointTable::linear(0.0, degrees));
                let subscription = bind_style(&inner, progress, move || {
                    pose_at(1.0, 0.0, 1.0, rotate.get())
                });
                move || drop(subscription)
            },
            (progress, degrees.to_bits()),
        );
    }

    html! {
        <div ref={outer} class={props.class.clone()}>
            <div ref={inner}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_parallax_moves_against_the_scroll() {
        let table = travel_table(0.5, Direction::Up);
        assert_eq!(table.sample(0.0), 50.0);
        assert_eq!(table.sample(0.5), 0.0);
        assert_eq!(table.sample(1.0), -50.0);
    }

    #[test]
    fn downward_parallax_mirrors_upward() {
        let up = travel_table(0.1, Direction::Up);
        let down = travel_table(0.1, Direction::Down);
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(down.sample(p), -up.sample(p));
        }
        assert_eq!(down.sample(1.0), 10.0);
    }
}
