//! Asking-price field with the advisory face-value check.

use api::pricing::{format_cents, sanitize_price_input, PriceCheck};
use dioxus::prelude::*;

/// Price input that shows how the asking price compares to the known cap.
///
/// The check never blocks submission; the server decides the listing's
/// verification status.
#[component]
pub fn FaceValueInput(
    value: String,
    oninput: EventHandler<String>,
    face_value_cents: Option<u64>,
    section_ceiling_cents: Option<u64>,
) -> Element {
    let check = PriceCheck::from_input(&value, face_value_cents, section_ceiling_cents);
    let percent = check.fill_percent();
    let cap = check.max_cents.map(format_cents);
    let cap_label = if face_value_cents.is_some() { "Face value" } else { "Section cap" };
    let message = check.message();

    rsx! {
        div {
            class: "face-value",
            label { r#for: "asking-price", "Asking price (per ticket)" }
            input {
                id: "asking-price",
                class: if check.is_valid() { "text-input" } else { "text-input text-input--invalid" },
                r#type: "text",
                inputmode: "decimal",
                placeholder: "0.00",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(sanitize_price_input(&evt.value())),
            }
            if let Some(cap) = cap {
                div {
                    class: if check.overflows() { "meter meter--overflow" } else { "meter" },
                    div { class: "meter-fill", style: "width: {percent}%" }
                }
                p { class: "view-muted", "{cap_label}: {cap}" }
            }
            if let Some(message) = message {
                p {
                    class: if check.is_valid() { "face-value-note" } else { "form-error" },
                    "{message}"
                }
            }
        }
    }
}
