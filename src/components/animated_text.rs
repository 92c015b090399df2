//! Text that animates in the first time it scrolls into view.

use yew::prelude::*;

use crate::config::REVEAL_MARGIN;
use crate::hooks::use_in_view;
use crate::motion::segment::UNIT_HIDDEN;
use crate::motion::{animate, segment, Length, Pose, SegmentKind, Transition, STANDARD_EASE};

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds before the first unit starts.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub kind: SegmentKind,
}

/// Splits the text into words, characters or a single line and staggers
/// their entrance once the text is revealed.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_MARGIN);
    let units = segment(&props.text, props.kind, props.delay);
    let white_space = if props.kind == SegmentKind::Word { "pre" } else { "normal" };

    html! {
        <span ref={node} class={props.class.clone()}>
            { for units.iter().map(|unit| {
                let style = format!(
                    "display: inline-block; white-space: {}; {}",
                    white_space,
                    animate(&UNIT_HIDDEN, &Pose::VISIBLE, revealed, &unit.transition()),
                );
                html! {
                    <span key={unit.index} style={style}>
                        { unit.text.clone() }
                        { if unit.trailing_space { " " } else { "" } }
                    </span>
                }
            }) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientTextProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Color stops, left to right.
    #[prop_or(AttrValue::from("#34d399, #4ade80, #10b981"))]
    pub gradient: AttrValue,
}

#[function_component(GradientText)]
pub fn gradient_text(props: &GradientTextProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_MARGIN);
    let transition = Transition::new(0.8).eased(STANDARD_EASE);
    // the global `.gradient-text` rule clips the gradient to every
    // descendant, which keeps animated word spans painted
    let style = format!(
        "display: inline-block; --text-gradient: linear-gradient(to right, {}); {}",
        props.gradient,
        animate(&Pose::rise(20.0), &Pose::VISIBLE, revealed, &transition),
    );

    html! {
        <span ref={node} class={classes!("gradient-text", props.class.clone())} style={style}>
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct DelayedChildrenProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f64,
}

/// Slides its content up from below a clipping edge.
#[function_component(RevealText)]
pub fn reveal_text(props: &DelayedChildrenProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_MARGIN);
    let hidden = Pose {
        y: Length::Percent(100.0),
        ..Pose::VISIBLE
    };
    let transition = Transition::new(0.8)
        .delayed(props.delay)
        .eased(STANDARD_EASE);

    html! {
        <div ref={node} style="position: relative; overflow: hidden;">
            <div
                class={props.class.clone()}
                style={animate(&hidden, &Pose::VISIBLE, revealed, &transition)}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f64,
}

/// Characters appear one after another like they are being typed.
#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_MARGIN);
    let hidden = Pose {
        opacity: 0.0,
        ..Pose::VISIBLE
    };
    let units = segment(&props.text, SegmentKind::Char, props.delay);

    html! {
        <span ref={node} class={props.class.clone()}>
            { for units.iter().map(|unit| {
                let transition = Transition::new(0.05)
                    .delayed(unit.delay)
                    .eased(crate::motion::Easing::Linear);
                html! {
                    <span key={unit.index} style={animate(&hidden, &Pose::VISIBLE, revealed, &transition)}>
                        { unit.text.clone() }
                    </span>
                }
            }) }
        </span>
    }
}

#[function_component(ScaleText)]
pub fn scale_text(props: &DelayedChildrenProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_MARGIN);
    let transition = Transition::new(0.6)
        .delayed(props.delay)
        .eased(STANDARD_EASE);

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={animate(&Pose::grow(0.8), &Pose::VISIBLE, revealed, &transition)}
        >
            { for props.children.iter() }
        </div>
    }
}
