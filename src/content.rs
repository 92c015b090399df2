//! Copy and demo data shown on the page.

use crate::components::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, PartialEq)]
pub struct MetricRow {
    pub category: &'static str,
    pub amount: &'static str,
    pub last_week: &'static str,
    pub vs_last_week: &'static str,
    pub vs_last_month: &'static str,
    pub trend: Trend,
}

#[derive(Debug, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub rows: [MetricRow; 5],
}

const fn row(
    category: &'static str,
    amount: &'static str,
    last_week: &'static str,
    vs_last_week: &'static str,
    vs_last_month: &'static str,
    trend: Trend,
) -> MetricRow {
    MetricRow {
        category,
        amount,
        last_week,
        vs_last_week,
        vs_last_month,
        trend,
    }
}

pub static LOCATIONS: [Location; 3] = [
    Location {
        name: "Downtown Austin",
        rows: [
            row("Revenue", "$48,250", "$45,100", "+7.0%", "+12.3%", Trend::Up),
            row("Food Cost", "$14,475", "$13,530", "+7.0%", "+8.5%", Trend::Up),
            row("Labor Cost", "$16,905", "$16,164", "+4.6%", "+6.2%", Trend::Up),
            row("Operating Expenses", "$8,205", "$8,118", "+1.1%", "+2.8%", Trend::Up),
            row("Net Profit", "$8,665", "$7,288", "+18.9%", "+24.5%", Trend::Up),
        ],
    },
    Location {
        name: "South Congress",
        rows: [
            row("Revenue", "$52,800", "$51,200", "+3.1%", "+8.7%", Trend::Up),
            row("Food Cost", "$15,840", "$15,360", "+3.1%", "+7.2%", Trend::Up),
            row("Labor Cost", "$18,480", "$17,920", "+3.1%", "+5.8%", Trend::Up),
            row("Operating Expenses", "$8,976", "$8,704", "+3.1%", "+4.2%", Trend::Up),
            row("Net Profit", "$9,504", "$9,216", "+3.1%", "+11.3%", Trend::Up),
        ],
    },
    Location {
        name: "Domain Northside",
        rows: [
            row("Revenue", "$41,500", "$43,200", "-3.9%", "-2.1%", Trend::Down),
            row("Food Cost", "$12,450", "$12,960", "-3.9%", "-1.8%", Trend::Down),
            row("Labor Cost", "$14,525", "$15,120", "-3.9%", "-2.5%", Trend::Down),
            row("Operating Expenses", "$7,055", "$7,344", "-3.9%", "-1.2%", Trend::Down),
            row("Net Profit", "$7,470", "$7,776", "-3.9%", "-3.8%", Trend::Down),
        ],
    },
];

pub static TABLE_HEADERS: [&str; 5] = [
    "Category",
    "Amount",
    "Last Week",
    "Δ vs Last Week",
    "Δ vs Last Month",
];

pub const AI_INSIGHT: &str =
    "Labor costs increased 4.6% due to overtime hours on Friday and Saturday.";

pub const AI_QUERY: &str = "Compare performance across my locations this week";

pub struct Callout {
    pub label: &'static str,
    pub location: &'static str,
    pub detail: &'static str,
    pub trend: Trend,
}

pub static PERFORMANCE_SUMMARY: [Callout; 3] = [
    Callout {
        label: "Best Performer",
        location: "South Congress",
        detail: "+3.1% revenue",
        trend: Trend::Up,
    },
    Callout {
        label: "Highest Profit",
        location: "South Congress",
        detail: "$9,504",
        trend: Trend::Up,
    },
    Callout {
        label: "Needs Attention",
        location: "Domain Northside",
        detail: "-3.9% revenue",
        trend: Trend::Down,
    },
];

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Start and end colors of the accent gradient.
    pub gradient: (&'static str, &'static str),
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Calendar,
        title: "Weekly location P&Ls",
        subtitle: "Know how every location performed, every week.",
        description: "Revenue → Food cost → Labor → Net profit, by location.",
        gradient: ("#3b82f6", "#06b6d4"),
    },
    Feature {
        icon: Icon::Zap,
        title: "Day 2 month-end close. Always.",
        subtitle: "Always closed by Day 2. No exceptions.",
        description: "Because decisions can't wait until the 20th of the month.",
        gradient: ("#10b981", "#22c55e"),
    },
    Feature {
        icon: Icon::Clock,
        title: "5 minute average response time.",
        subtitle: "Finance questions shouldn't take days.",
        description: "Your dedicated controller responds within 5 minutes.",
        gradient: ("#a855f7", "#ec4899"),
    },
];

pub struct Problem {
    pub icon: Icon,
    pub text: &'static str,
}

pub static PROBLEMS: [Problem; 5] = [
    Problem {
        icon: Icon::Calendar,
        text: "Food and labor costs move every week, but reporting shows up once a month",
    },
    Problem {
        icon: Icon::DollarSign,
        text: "Toast, DoorDash & Uber Eats deposits don't match sales",
    },
    Problem {
        icon: Icon::FileQuestion,
        text: "Your CPA focuses on taxes, not day-to-day finance ops",
    },
    Problem {
        icon: Icon::MessageSquare,
        text: "Managers text receipts, invoices, and POS screenshots from 4 different apps",
    },
    Problem {
        icon: Icon::TrendingDown,
        text: "You know one location is leaking cash - but can't see where",
    },
];

/// Id of the demo dashboard, the one in-page anchor the footer links to.
pub const DASHBOARD_ANCHOR: &str = "dashboard";

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Quick links after "Book a consultation", which is a mailto link.
pub static QUICK_LINKS: [FooterLink; 2] = [
    FooterLink {
        label: "View sample P&L",
        href: "#dashboard",
    },
    FooterLink {
        label: "Pricing",
        href: "#",
    },
];

/// These pages are not live yet; the links stay on the landing page.
pub static LEGAL_LINKS: [FooterLink; 2] = [
    FooterLink {
        label: "Privacy Policy",
        href: "#",
    },
    FooterLink {
        label: "Terms of Service",
        href: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_distinct_locations() {
        assert_eq!(LOCATIONS.len(), 3);
        assert_ne!(LOCATIONS[0].name, LOCATIONS[1].name);
        assert_ne!(LOCATIONS[1].name, LOCATIONS[2].name);
        assert_ne!(LOCATIONS[0].name, LOCATIONS[2].name);
    }

    #[test]
    fn every_location_reports_the_same_categories() {
        let categories: Vec<_> = LOCATIONS[0].rows.iter().map(|r| r.category).collect();
        for location in &LOCATIONS {
            let other: Vec<_> = location.rows.iter().map(|r| r.category).collect();
            assert_eq!(categories, other, "{}", location.name);
        }
    }

    #[test]
    fn trend_matches_weekly_delta_sign() {
        for location in &LOCATIONS {
            for row in &location.rows {
                let rising = row.vs_last_week.starts_with('+');
                assert_eq!(rising, row.trend == Trend::Up, "{} / {}", location.name, row.category);
            }
        }
    }

    #[test]
    fn summary_names_known_locations() {
        for callout in &PERFORMANCE_SUMMARY {
            assert!(LOCATIONS.iter().any(|l| l.name == callout.location));
        }
    }

    #[test]
    fn footer_links_stay_on_the_landing_page() {
        for link in QUICK_LINKS.iter().chain(LEGAL_LINKS.iter()) {
            let fragment = link
                .href
                .strip_prefix('#')
                .unwrap_or_else(|| panic!("{} leaves the page: {}", link.label, link.href));
            assert!(
                fragment.is_empty() || fragment == DASHBOARD_ANCHOR,
                "{} points at unknown anchor #{}",
                link.label,
                fragment
            );
        }
    }
}
