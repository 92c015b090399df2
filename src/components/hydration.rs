use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::handles::ScopedHandle;
use crate::hooks::Hydrated;

/// Short enough to go unnoticed, long enough for the stylesheets to land.
const HYDRATION_DELAY_MS: u32 = 50;

fn mark_document_hydrated() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(err) = root.class_list().add_1("hydrated") {
                log::warn!("Failed to mark document as hydrated: {:?}", err);
            }
        }
        None => log::warn!("No document element to mark as hydrated"),
    }
}

#[derive(Properties, PartialEq)]
pub struct HydrationGateProps {
    #[prop_or_default]
    pub children: Children,
}

/// Holds the page a frame or two after mount so nothing animates before the
/// styles are in, then hands `Hydrated(true)` down to the entrance
/// animations.
#[function_component(HydrationGate)]
pub fn hydration_gate(props: &HydrationGateProps) -> Html {
    let hydrated = use_state(|| false);

    {
        let hydrated = hydrated.clone();
        use_effect_with_deps(
            move |_| {
                let timer = ScopedHandle::new(Timeout::new(HYDRATION_DELAY_MS, move || {
                    mark_document_hydrated();
                    hydrated.set(true);
                    log::debug!("Page hydrated");
                }));
                move || drop(timer)
            },
            (),
        );
    }

    let opacity = if *hydrated { "1" } else { "0.99" };

    html! {
        <ContextProvider<Hydrated> context={Hydrated(*hydrated)}>
            <div style={format!("opacity: {}; transition: opacity 0.1s ease-in;", opacity)}>
                { for props.children.iter() }
            </div>
        </ContextProvider<Hydrated>>
    }
}
