//! Scroll window geometry.
//!
//! A scroll window is described by two offsets, each pairing an edge of the
//! tracked element with an edge of the viewport: `start end` means "the
//! element's top meets the viewport's bottom". Progress runs from 0 when the
//! start offset is met to 1 when the end offset is met.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

/// `(target edge, viewport edge)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub target: Edge,
    pub viewport: Edge,
}

impl Offset {
    pub const fn new(target: Edge, viewport: Edge) -> Self {
        Self { target, viewport }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffsets {
    pub start: Offset,
    pub end: Offset,
}

/// From the element entering at the bottom to it leaving at the top.
pub const ENTER_EXIT: ScrollOffsets = ScrollOffsets {
    start: Offset::new(Edge::Start, Edge::End),
    end: Offset::new(Edge::End, Edge::Start),
};

/// From the element entering at the bottom to its center reaching the
/// viewport center.
pub const ENTER_CENTER: ScrollOffsets = ScrollOffsets {
    start: Offset::new(Edge::Start, Edge::End),
    end: Offset::new(Edge::Center, Edge::Center),
};

/// Element position relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBox {
    pub top: f64,
    pub height: f64,
}

fn distance(target: TargetBox, viewport_height: f64, offset: Offset) -> f64 {
    target.top + offset.target.fraction() * target.height
        - offset.viewport.fraction() * viewport_height
}

/// Normalized progress of `target` through the window described by
/// `offsets`, clamped to [0,1]. Broken geometry reads as 0.
pub fn element_progress(target: TargetBox, viewport_height: f64, offsets: ScrollOffsets) -> f64 {
    let start = distance(target, viewport_height, offsets.start);
    let end = distance(target, viewport_height, offsets.end);
    if !start.is_finite() || !end.is_finite() {
        return 0.0;
    }
    // both distances shrink by one pixel per pixel scrolled
    let span = end - start;
    if span == 0.0 {
        return if start <= 0.0 { 1.0 } else { 0.0 };
    }
    (-start / span).clamp(0.0, 1.0)
}

/// Progress through the whole document.
pub fn page_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scroll_y.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    #[test]
    fn enter_exit_runs_from_bottom_entry_to_top_exit() {
        let below = TargetBox { top: 900.0, height: 400.0 };
        assert_eq!(element_progress(below, VH, ENTER_EXIT), 0.0);

        let entering = TargetBox { top: 800.0, height: 400.0 };
        assert_eq!(element_progress(entering, VH, ENTER_EXIT), 0.0);

        // window is vh + height = 1200px long; halfway is 600px in
        let halfway = TargetBox { top: 200.0, height: 400.0 };
        assert_eq!(element_progress(halfway, VH, ENTER_EXIT), 0.5);

        let leaving = TargetBox { top: -400.0, height: 400.0 };
        assert_eq!(element_progress(leaving, VH, ENTER_EXIT), 1.0);

        let gone = TargetBox { top: -2000.0, height: 400.0 };
        assert_eq!(element_progress(gone, VH, ENTER_EXIT), 1.0);
    }

    #[test]
    fn enter_center_ends_when_centers_align() {
        let target = TargetBox { top: 200.0, height: 400.0 };
        assert_eq!(element_progress(target, VH, ENTER_CENTER), 1.0);

        // start distance 400, end distance 0 at top=200; 800 -> 200 is 600px
        let quarter = TargetBox { top: 650.0, height: 400.0 };
        assert_eq!(element_progress(quarter, VH, ENTER_CENTER), 0.25);
    }

    #[test]
    fn degenerate_window_is_a_step() {
        let offsets = ScrollOffsets {
            start: Offset::new(Edge::Start, Edge::Start),
            end: Offset::new(Edge::Start, Edge::Start),
        };
        assert_eq!(element_progress(TargetBox { top: 10.0, height: 50.0 }, VH, offsets), 0.0);
        assert_eq!(element_progress(TargetBox { top: -10.0, height: 50.0 }, VH, offsets), 1.0);
    }

    #[test]
    fn broken_geometry_reads_as_zero() {
        let target = TargetBox { top: f64::NAN, height: 400.0 };
        assert_eq!(element_progress(target, VH, ENTER_EXIT), 0.0);
        assert_eq!(page_progress(f64::NAN, 3000.0, VH), 0.0);
    }

    #[test]
    fn page_progress_is_clamped_and_safe_for_short_pages() {
        assert_eq!(page_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(page_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(page_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(page_progress(0.0, 600.0, 1000.0), 0.0);
    }
}
