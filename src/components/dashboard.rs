use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{
    Location, Trend, AI_INSIGHT, DASHBOARD_ANCHOR, AI_QUERY, LOCATIONS, PERFORMANCE_SUMMARY, TABLE_HEADERS,
};
use crate::handles::ScopedHandle;
use crate::hooks::use_hydrated;
use crate::motion::{animate, num, Pose, Transition};

pub const LOCATION_INTERVAL_MS: u32 = 4_000;
pub const OVERLAY_INTERVAL_MS: u32 = 8_000;

/// State of the demo dashboard: which location tab is showing and whether
/// the AI query overlay is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationState {
    pub active_location: usize,
    pub overlay_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationAction {
    /// Location timer fired.
    Advance,
    /// Overlay timer fired.
    ToggleOverlay,
    /// A tab was clicked.
    Select(usize),
}

impl RotationState {
    pub fn apply(self, action: RotationAction) -> Self {
        let count = LOCATIONS.len();
        match action {
            RotationAction::Advance => Self {
                active_location: (self.active_location + 1) % count,
                ..self
            },
            RotationAction::ToggleOverlay => Self {
                overlay_visible: !self.overlay_visible,
                ..self
            },
            RotationAction::Select(index) => Self {
                active_location: index.min(count - 1),
                ..self
            },
        }
    }

    pub fn location(&self) -> &'static Location {
        &LOCATIONS[self.active_location.min(LOCATIONS.len() - 1)]
    }
}

impl Reducible for RotationState {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trend-up",
        Trend::Down => "trend-down",
    }
}

fn trend_icon(trend: Trend) -> Icon {
    match trend {
        Trend::Up => Icon::TrendingUp,
        Trend::Down => Icon::TrendingDown,
    }
}

/// Simulated weekly P&L dashboard that rotates through the demo locations
/// and periodically pops an AI query over the table.
#[function_component(DashboardAnimation)]
pub fn dashboard_animation() -> Html {
    let state = use_reducer(RotationState::default);
    let hydrated = use_hydrated();

    // Both timers run from mount until unmount, independently of clicks.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let location_timer = {
                    let dispatcher = dispatcher.clone();
                    ScopedHandle::new(Interval::new(LOCATION_INTERVAL_MS, move || {
                        dispatcher.dispatch(RotationAction::Advance);
                    }))
                };
                let overlay_timer = ScopedHandle::new(Interval::new(OVERLAY_INTERVAL_MS, move || {
                    dispatcher.dispatch(RotationAction::ToggleOverlay);
                }));
                log::debug!("Dashboard timers started");

                move || {
                    drop(location_timer);
                    drop(overlay_timer);
                    log::debug!("Dashboard timers stopped");
                }
            },
            (),
        );
    }

    let location = state.location();

    let tabs = LOCATIONS.iter().enumerate().map(|(index, tab)| {
        let onclick = {
            let dispatcher = state.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotationAction::Select(index)))
        };
        let active = index == state.active_location;
        html! {
            <button
                key={tab.name}
                class={classes!("dashboard-tab", active.then(|| "active"))}
                onclick={onclick}
            >
                {tab.name}
            </button>
        }
    });

    let rows = location.rows.iter().enumerate().map(|(index, row)| {
        let delay = format!("animation-delay: {}s;", num(index as f64 * 0.05));
        let trend = trend_class(row.trend);
        html! {
            <tr key={row.category} class="dashboard-row" style={delay}>
                <td class="cell-category">{row.category}</td>
                <td class="cell-amount">{row.amount}</td>
                <td class="cell-muted">{row.last_week}</td>
                <td>
                    <span class={classes!("delta", trend)}>
                        <IconView icon={trend_icon(row.trend)} class={classes!("delta-icon")} />
                        {row.vs_last_week}
                    </span>
                </td>
                <td>
                    <span class={classes!("delta", trend)}>
                        <IconView icon={trend_icon(row.trend)} class={classes!("delta-icon")} />
                        {row.vs_last_month}
                    </span>
                </td>
            </tr>
        }
    });

    let card_style = animate(&Pose::rise(20.0), &Pose::VISIBLE, hydrated, &Transition::new(0.5));
    let insight_style = animate(
        &Pose::slide(-20.0),
        &Pose::VISIBLE,
        hydrated,
        &Transition::new(0.5).delayed(0.3),
    );

    html! {
        <div class="dashboard" id={DASHBOARD_ANCHOR}>
            <div class="dashboard-card" style={card_style}>
                <div class="dashboard-tabs">
                    { for tabs }
                </div>

                <div class="dashboard-insight" style={insight_style}>
                    <IconView icon={Icon::Sparkles} class={classes!("insight-icon")} />
                    <p>
                        <span class="insight-label">{"AI Insight:"}</span>
                        {" "}
                        {AI_INSIGHT}
                    </p>
                </div>

                <div class="dashboard-table-wrap">
                    <table class="dashboard-table">
                        <thead>
                            <tr>
                                { for TABLE_HEADERS.iter().map(|header| html! { <th>{*header}</th> }) }
                            </tr>
                        </thead>
                        // re-keyed per location so the rows replay their entrance
                        <tbody key={location.name}>
                            { for rows }
                        </tbody>
                    </table>
                </div>
            </div>

            <div class={classes!("dashboard-overlay", state.overlay_visible.then(|| "visible"))}>
                <div class="overlay-panel">
                    <div class="overlay-query">
                        <div class="overlay-kicker">
                            <IconView icon={Icon::Sparkles} class={classes!("insight-icon")} />
                            <span>{"AI Query"}</span>
                        </div>
                        <p class="overlay-question">{AI_QUERY}</p>
                    </div>
                    <div class="overlay-summary">
                        <h4>{"Performance Summary"}</h4>
                        <div class="summary-grid">
                            { for PERFORMANCE_SUMMARY.iter().map(|callout| html! {
                                <div key={callout.label}>
                                    <div class="summary-label">{callout.label}</div>
                                    <div class="summary-location">{callout.location}</div>
                                    <div class={classes!("summary-detail", trend_class(callout.trend))}>
                                        {callout.detail}
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .dashboard {
                        position: relative;
                        width: 100%;
                    }

                    .dashboard-card {
                        background: rgba(24, 24, 27, 0.5);
                        backdrop-filter: blur(24px);
                        border: 1px solid #27272a;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                        overflow: hidden;
                    }

                    .dashboard-tabs {
                        display: flex;
                        gap: 0.5rem;
                        padding: 1rem;
                        background: rgba(24, 24, 27, 0.8);
                        border-bottom: 1px solid #27272a;
                        flex-wrap: wrap;
                    }

                    .dashboard-tab {
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        background: #27272a;
                        color: #9ca3af;
                        transition: all 0.2s ease;
                    }

                    .dashboard-tab:hover {
                        background: #3f3f46;
                        transform: scale(1.05);
                    }

                    .dashboard-tab:active {
                        transform: scale(0.95);
                    }

                    .dashboard-tab.active {
                        background: #10b981;
                        color: #fff;
                        box-shadow: 0 10px 15px -3px rgba(16, 185, 129, 0.5);
                    }

                    .dashboard-insight {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin: 1rem 1rem 0;
                        padding: 1rem;
                        background: linear-gradient(to right, rgba(16, 185, 129, 0.1), rgba(34, 197, 94, 0.1));
                        border: 1px solid rgba(16, 185, 129, 0.3);
                        border-radius: 0.5rem;
                    }

                    .dashboard-insight p {
                        margin: 0;
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }

                    .insight-icon {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #34d399;
                        flex-shrink: 0;
                    }

                    .insight-label {
                        font-weight: 600;
                        color: #34d399;
                    }

                    .dashboard-table-wrap {
                        padding: 1rem;
                        overflow-x: auto;
                    }

                    .dashboard-table {
                        width: 100%;
                        border-collapse: collapse;
                        font-size: 0.875rem;
                    }

                    .dashboard-table th {
                        padding: 0.75rem 0.5rem;
                        color: #9ca3af;
                        font-weight: 500;
                        text-align: right;
                        border-bottom: 1px solid #27272a;
                    }

                    .dashboard-table th:first-child,
                    .dashboard-table td:first-child {
                        text-align: left;
                    }

                    .dashboard-table td {
                        padding: 0.75rem 0.5rem;
                        text-align: right;
                    }

                    .dashboard-row {
                        border-bottom: 1px solid rgba(39, 39, 42, 0.5);
                        animation: dashboard-row-in 0.3s ease-out both;
                        transition: background 0.2s ease;
                    }

                    .dashboard-row:hover {
                        background: rgba(39, 39, 42, 0.3);
                    }

                    @keyframes dashboard-row-in {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    .cell-category { color: #fff; font-weight: 500; }
                    .cell-amount { color: #fff; font-weight: 600; }
                    .cell-muted { color: #9ca3af; }

                    .delta {
                        display: flex;
                        align-items: center;
                        justify-content: flex-end;
                        gap: 0.25rem;
                    }

                    .delta-icon {
                        width: 1rem;
                        height: 1rem;
                    }

                    .trend-up { color: #34d399; }
                    .trend-down { color: #f87171; }

                    .dashboard-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                        border-radius: 1rem;
                        opacity: 0;
                        transform: scale(0.95);
                        pointer-events: none;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }

                    .dashboard-overlay.visible {
                        opacity: 1;
                        transform: scale(1);
                        pointer-events: auto;
                    }

                    .overlay-panel {
                        width: 100%;
                        max-width: 42rem;
                        margin: 0 1rem;
                        padding: 1.5rem;
                        background: #18181b;
                        border: 1px solid #3f3f46;
                        border-radius: 0.75rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                    }

                    .overlay-kicker {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.5rem;
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }

                    .overlay-question {
                        margin: 0 0 1rem;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 500;
                    }

                    .overlay-summary {
                        padding: 1rem;
                        background: rgba(39, 39, 42, 0.5);
                        border-radius: 0.5rem;
                    }

                    .overlay-summary h4 {
                        margin: 0 0 0.75rem;
                        color: #34d399;
                        font-weight: 600;
                    }

                    .summary-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        font-size: 0.875rem;
                    }

                    .summary-label { color: #9ca3af; margin-bottom: 0.25rem; }
                    .summary-location { color: #fff; font-weight: 600; }
                    .summary-detail { font-size: 0.75rem; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays both timers over `elapsed_ms` of wall time, firing the
    /// location timer first when both are due on the same tick.
    fn run_timers(mut state: RotationState, from_ms: u32, elapsed_ms: u32) -> RotationState {
        for now in (from_ms + 1)..=(from_ms + elapsed_ms) {
            if now % LOCATION_INTERVAL_MS == 0 {
                state = state.apply(RotationAction::Advance);
            }
            if now % OVERLAY_INTERVAL_MS == 0 {
                state = state.apply(RotationAction::ToggleOverlay);
            }
        }
        state
    }

    #[test]
    fn starts_on_first_location_without_overlay() {
        let state = RotationState::default();
        assert_eq!(state.active_location, 0);
        assert!(!state.overlay_visible);
        assert_eq!(state.location().name, "Downtown Austin");
    }

    #[test]
    fn advances_every_four_seconds() {
        let state = run_timers(RotationState::default(), 0, 3_999);
        assert_eq!(state.active_location, 0);

        let state = run_timers(RotationState::default(), 0, 4_000);
        assert_eq!(state.active_location, 1);
        assert!(!state.overlay_visible);
    }

    #[test]
    fn overlay_toggles_once_by_eight_seconds() {
        let state = run_timers(RotationState::default(), 0, 8_000);
        assert_eq!(state.active_location, 2);
        assert!(state.overlay_visible);

        let state = run_timers(state, 8_000, 4_000);
        assert_eq!(state.active_location, 0);
        assert!(state.overlay_visible);

        let state = run_timers(state, 12_000, 4_000);
        assert!(!state.overlay_visible);
    }

    #[test]
    fn tab_click_applies_immediately_and_keeps_timer_phase() {
        let state = run_timers(RotationState::default(), 0, 1_500);
        let state = state.apply(RotationAction::Select(2));
        assert_eq!(state.active_location, 2);
        assert_eq!(state.location().name, "Domain Northside");

        // the next location tick still lands at 4s and wraps around
        let state = run_timers(state, 1_500, 2_500);
        assert_eq!(state.active_location, 0);
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let state = RotationState::default().apply(RotationAction::Select(9));
        assert_eq!(state.active_location, LOCATIONS.len() - 1);
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(RotationState::default());
        let next = state.reduce(RotationAction::ToggleOverlay);
        assert!(next.overlay_visible);
        assert_eq!(next.active_location, 0);
    }
}
