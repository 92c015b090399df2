//! Motion primitives: poses, transitions and the pure pieces behind the
//! scroll and reveal animations. The browser does the painting; everything
//! here ends up as inline CSS.

pub mod breakpoints;
pub mod reveal;
pub mod scroll;
pub mod segment;
pub mod value;

pub use breakpoints::BreakpointTable;
pub use reveal::RevealLatch;
pub use scroll::{ScrollOffsets, ENTER_CENTER, ENTER_EXIT};
pub use segment::{segment, SegmentKind};
pub use value::{MotionValue, Subscription};

/// Rounds to milliseconds / thousandths so float noise stays out of the CSS.
pub fn num(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    fn css(self) -> String {
        match self {
            Length::Px(v) => format!("{}px", num(v)),
            Length::Percent(v) => format!("{}%", num(v)),
        }
    }
}

/// The visual properties an animation moves between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: Length,
    pub scale: f64,
    pub rotate: f64,
    pub blur: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: Length::Px(0.0),
        scale: 1.0,
        rotate: 0.0,
        blur: 0.0,
    };

    pub const fn rise(distance: f64) -> Pose {
        Pose {
            opacity: 0.0,
            y: Length::Px(distance),
            ..Pose::VISIBLE
        }
    }

    pub const fn slide(distance: f64) -> Pose {
        Pose {
            opacity: 0.0,
            x: distance,
            ..Pose::VISIBLE
        }
    }

    pub const fn grow(from_scale: f64) -> Pose {
        Pose {
            opacity: 0.0,
            scale: from_scale,
            ..Pose::VISIBLE
        }
    }

    /// Inline CSS for this pose. `filter` is left out when there is no blur,
    /// since any filter turns the element into a backdrop root.
    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: translate({}px, {}) scale({}) rotate({}deg);",
            num(self.opacity),
            num(self.x),
            self.y.css(),
            num(self.scale),
            num(self.rotate),
        );
        if num(self.blur) != 0.0 {
            css.push_str(&format!(" filter: blur({}px);", num(self.blur)));
        }
        css
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

/// The house curve for text and section entrances.
pub const STANDARD_EASE: Easing = Easing::CubicBezier(0.25, 0.4, 0.25, 1.0);

impl Easing {
    pub fn css(self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(a, b, c, d) => format!(
                "cubic-bezier({}, {}, {}, {})",
                num(a),
                num(b),
                num(c),
                num(d)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub const fn eased(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "transition-property: opacity, transform, filter; transition-duration: {}s; transition-timing-function: {}; transition-delay: {}s;",
            num(self.duration),
            self.easing.css(),
            num(self.delay),
        )
    }
}

/// Inline style for an element animating from `from` to `to` once `active`
/// flips on. Until then it sits at `from` with transitions disabled.
pub fn animate(from: &Pose, to: &Pose, active: bool, transition: &Transition) -> String {
    if active {
        format!("{} {}", to.css(), transition.css())
    } else {
        format!("{} transition: none;", from.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_trims_float_noise() {
        assert_eq!(num(3.0 * 0.08), 0.24);
        assert_eq!(num(-0.0), 0.0);
        assert_eq!(format!("{}", num(0.1 + 0.2)), "0.3");
    }

    #[test]
    fn pose_renders_as_inline_css() {
        let css = Pose::rise(20.0).css();
        assert_eq!(
            css,
            "opacity: 0; transform: translate(0px, 20px) scale(1) rotate(0deg);"
        );
        assert!(segment::UNIT_HIDDEN.css().ends_with("filter: blur(4px);"));

        let pose = Pose {
            y: Length::Percent(100.0),
            ..Pose::VISIBLE
        };
        assert!(pose.css().contains("translate(0px, 100%)"));
    }

    #[test]
    fn animate_holds_start_pose_until_active() {
        let t = Transition::new(0.6).delayed(0.4).eased(STANDARD_EASE);
        let hidden = animate(&Pose::rise(30.0), &Pose::VISIBLE, false, &t);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.ends_with("transition: none;"));

        let shown = animate(&Pose::rise(30.0), &Pose::VISIBLE, true, &t);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("transition-duration: 0.6s;"));
        assert!(shown.contains("transition-delay: 0.4s;"));
        assert!(shown.contains("cubic-bezier(0.25, 0.4, 0.25, 1)"));
    }
}
