use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    AlertCircle,
    ArrowRight,
    Calendar,
    Clock,
    DollarSign,
    FileQuestion,
    FileText,
    MessageSquare,
    Sparkles,
    TrendingDown,
    TrendingUp,
    Zap,
}

enum Shape {
    Path(&'static str),
    Polyline(&'static str),
    Polygon(&'static str),
    Circle(u8, u8, u8),
    Line(&'static str, &'static str, &'static str, &'static str),
    Rect(u8, u8, u8, u8, u8),
}

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::AlertCircle => &[
                Shape::Circle(12, 12, 10),
                Shape::Line("12", "12", "8", "12"),
                Shape::Line("12", "12.01", "16", "16"),
            ],
            Icon::ArrowRight => &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")],
            Icon::Calendar => &[
                Shape::Rect(3, 4, 18, 18, 2),
                Shape::Path("M16 2v4"),
                Shape::Path("M8 2v4"),
                Shape::Path("M3 10h18"),
            ],
            Icon::Clock => &[
                Shape::Circle(12, 12, 10),
                Shape::Polyline("12 6 12 12 16 14"),
            ],
            Icon::DollarSign => &[
                Shape::Line("12", "12", "2", "22"),
                Shape::Path("M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"),
            ],
            Icon::FileQuestion => &[
                Shape::Path("M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"),
                Shape::Path("M10 10.3c.2-.4.5-.8.9-1a2.1 2.1 0 0 1 2.6.4c.3.4.5.8.5 1.3 0 1.3-2 2-2 2"),
                Shape::Path("M12 17h.01"),
            ],
            Icon::FileText => &[
                Shape::Path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
                Shape::Path("M14 2v4a2 2 0 0 0 2 2h4"),
                Shape::Path("M10 9H8"),
                Shape::Path("M16 13H8"),
                Shape::Path("M16 17H8"),
            ],
            Icon::MessageSquare => &[Shape::Path(
                "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            )],
            Icon::Sparkles => &[Shape::Path(
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
            )],
            Icon::TrendingDown => &[
                Shape::Polyline("22 17 13.5 8.5 8.5 13.5 2 7"),
                Shape::Polyline("16 17 22 17 22 11"),
            ],
            Icon::TrendingUp => &[
                Shape::Polyline("22 7 13.5 15.5 8.5 10.5 2 17"),
                Shape::Polyline("16 7 22 7 22 13"),
            ],
            Icon::Zap => &[Shape::Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
        }
    }
}

fn render_shape(shape: &Shape) -> Html {
    match shape {
        Shape::Path(d) => html! { <path d={*d} /> },
        Shape::Polyline(points) => html! { <polyline points={*points} /> },
        Shape::Polygon(points) => html! { <polygon points={*points} /> },
        Shape::Circle(cx, cy, r) => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Line(x1, x2, y1, y2) => html! {
            <line x1={*x1} x2={*x2} y1={*y1} y2={*y2} />
        },
        Shape::Rect(x, y, width, height, rx) => html! {
            <rect
                x={x.to_string()}
                y={y.to_string()}
                width={width.to_string()}
                height={height.to_string()}
                rx={rx.to_string()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

/// Stroke icon drawn inline; size and color come from the class.
#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.shapes().iter().map(render_shape) }
        </svg>
    }
}
