use super::{Length, Pose, Transition, STANDARD_EASE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentKind {
    #[default]
    Word,
    Char,
    Line,
}

impl SegmentKind {
    /// Delay added per unit, in seconds.
    pub fn stagger(self) -> f64 {
        match self {
            SegmentKind::Char => 0.03,
            SegmentKind::Word => 0.08,
            SegmentKind::Line => 0.0,
        }
    }
}

pub const UNIT_DURATION: f64 = 0.5;

pub const UNIT_HIDDEN: Pose = Pose {
    opacity: 0.0,
    y: Length::Px(20.0),
    blur: 4.0,
    ..Pose::VISIBLE
};

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub index: usize,
    /// Seconds after the parent is revealed.
    pub delay: f64,
    /// Words keep their separating space so the line wraps naturally.
    pub trailing_space: bool,
}

impl Segment {
    pub fn transition(&self) -> Transition {
        Transition::new(UNIT_DURATION)
            .delayed(self.delay)
            .eased(STANDARD_EASE)
    }
}

/// Splits `text` into animation units with staggered delays.
pub fn segment(text: &str, kind: SegmentKind, base_delay: f64) -> Vec<Segment> {
    let pieces: Vec<String> = match kind {
        SegmentKind::Word => text.split(' ').map(str::to_string).collect(),
        SegmentKind::Char => text.chars().map(String::from).collect(),
        SegmentKind::Line => vec![text.to_string()],
    };
    let last = pieces.len().saturating_sub(1);
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, text)| Segment {
            text,
            index,
            delay: base_delay + index as f64 * kind.stagger(),
            trailing_space: kind == SegmentKind::Word && index < last,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn assert_delays(segments: &[Segment], expected: &[f64]) {
        assert_eq!(segments.len(), expected.len());
        for (segment, want) in segments.iter().zip(expected) {
            assert!(
                (segment.delay - want).abs() < 1e-9,
                "unit {} delay {} != {}",
                segment.index,
                segment.delay,
                want
            );
        }
    }

    #[test]
    fn words_stagger_by_eighty_ms() {
        let units = segment("Grow Your Restaurants", SegmentKind::Word, 0.0);
        assert_eq!(texts(&units), vec!["Grow", "Your", "Restaurants"]);
        assert_delays(&units, &[0.0, 0.08, 0.16]);
        assert_eq!(
            units.iter().map(|u| u.trailing_space).collect::<Vec<_>>(),
            vec![true, true, false]
        );
    }

    #[test]
    fn base_delay_is_shared() {
        let units = segment("Grow Your Restaurants", SegmentKind::Word, 0.4);
        assert_delays(&units, &[0.4, 0.48, 0.56]);
    }

    #[test]
    fn chars_split_on_scalar_values() {
        let units = segment("P&L€", SegmentKind::Char, 0.1);
        assert_eq!(texts(&units), vec!["P", "&", "L", "€"]);
        assert_delays(&units, &[0.1, 0.13, 0.16, 0.19]);
        assert!(units.iter().all(|u| !u.trailing_space));
    }

    #[test]
    fn line_is_one_unit_without_stagger() {
        let units = segment("Every single day.", SegmentKind::Line, 0.2);
        assert_eq!(texts(&units), vec!["Every single day."]);
        assert_delays(&units, &[0.2]);
    }

    #[test]
    fn double_spaces_keep_empty_words() {
        let units = segment("a  b", SegmentKind::Word, 0.0);
        assert_eq!(texts(&units), vec!["a", "", "b"]);
    }

    #[test]
    fn stagger_is_monotonic_in_index() {
        let units = segment("Clarity. Speed. Accountability.", SegmentKind::Char, 0.0);
        assert!(units.windows(2).all(|w| w[0].delay < w[1].delay));
    }

    #[test]
    fn unit_transition_uses_house_curve() {
        let units = segment("Hi there", SegmentKind::Word, 0.0);
        let t = units[1].transition();
        assert_eq!(t.duration, UNIT_DURATION);
        assert_eq!(t.easing, STANDARD_EASE);
        assert!((t.delay - 0.08).abs() < 1e-9);
        assert_eq!(UNIT_HIDDEN.blur, 4.0);
        assert_eq!(UNIT_HIDDEN.y, Length::Px(20.0));
    }
}
