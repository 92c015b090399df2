use yew::prelude::*;

use crate::hooks::{bind_style, use_page_progress};
use crate::motion::num;

/// Thin bar pinned to the top of the viewport that fills as the page is
/// scrolled.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let bar = use_node_ref();
    let progress = use_page_progress();

    {
        let bar = bar.clone();
        use_effect_with_deps(
            move |progress| {
                let source = progress.clone();
                let subscription = bind_style(&bar, progress, move || {
                    format!("transform: scaleX({});", num(source.get()))
                });
                move || drop(subscription)
            },
            progress,
        );
    }

    html! {
        <>
            <div ref={bar} class="scroll-progress" style="transform: scaleX(0);"></div>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 3px;
                        z-index: 60;
                        transform-origin: 0% 50%;
                        background: linear-gradient(to right, #10b981, #22c55e);
                        transition: transform 0.1s linear;
                        pointer-events: none;
                    }
                "#}
            </style>
        </>
    }
}
