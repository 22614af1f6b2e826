use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close` when one is given; without
/// it the overlay can only be left through its content.
#[component]
pub fn ModalOverlay(on_close: Option<EventHandler<()>>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if let Some(handler) = on_close {
                    handler.call(());
                }
            },
            div {
                class: "modal-card",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
