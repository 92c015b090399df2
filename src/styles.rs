use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Document-wide rules. Component styles live next to their components.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            *, *::before, *::after {
                box-sizing: border-box;
            }

            html.hydrated {
                scroll-behavior: smooth;
            }

            html, body {
                margin: 0;
                padding: 0;
                background: #0a0a0a;
                color: #ededed;
                font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                -webkit-font-smoothing: antialiased;
                -moz-osx-font-smoothing: grayscale;
            }

            .gradient-text,
            .gradient-text * {
                background-image: var(--text-gradient);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .parallax-background {
                position: relative;
            }
        "#)} />
    }
}
