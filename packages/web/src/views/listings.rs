//! The user's ticket listings and the new-listing form.

use api::models::{Ceiling, Listing, ListingFilters, NewListing as NewListingBody, VerificationStatus};
use api::pricing::{ceiling_for_section, format_cents, parse_price, sanitize_price_input};
use dioxus::prelude::*;
use ui::{notify, use_app, use_notifications, FaceValueInput, NoticeLevel, ProtectedRoute};

use crate::Route;

#[component]
pub fn Listings() -> Element {
    let app = use_app();
    let listings = use_resource(move || {
        let client = app.client();
        async move {
            let filters = ListingFilters {
                mine: true,
                ..ListingFilters::default()
            };
            client.listings().list(&filters).await
        }
    });

    let body = match &*listings.read() {
        None => rsx! { p { class: "view-muted", "Loading listings..." } },
        Some(Err(e)) => {
            let message = e.user_message();
            rsx! { p { class: "form-error", "{message}" } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "view-muted", "You have no listings yet." } },
        Some(Ok(list)) => {
            let list = list.clone();
            rsx! {
                ul {
                    class: "listing-list",
                    for listing in list {
                        ListingRow { key: "{listing.id}", listing }
                    }
                }
            }
        }
    };

    rsx! {
        ProtectedRoute {
            div {
                class: "view-page",
                div {
                    class: "view-header",
                    h1 { class: "view-title", "My listings" }
                    Link { class: "btn btn-primary", to: Route::NewListing {}, "New listing" }
                }
                {body}
            }
        }
    }
}

#[component]
fn ListingRow(listing: Listing) -> Element {
    let place = [listing.section.as_deref(), listing.row.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", row ");
    let price = format_cents(listing.asking_price_cents);
    let face = listing.face_value_cents.map(format_cents);
    let quantity = listing.quantity;
    let status_class = match listing.verification_status {
        VerificationStatus::Verified => "status status--verified",
        VerificationStatus::Rejected => "status status--rejected",
        VerificationStatus::ManualReview => "status status--review",
        VerificationStatus::Pending => "status status--pending",
    };
    let status = listing.verification_status.label();

    rsx! {
        li {
            class: "listing-row",
            div {
                strong { "{place}" }
                span { class: "view-muted", " × {quantity}" }
            }
            div {
                span { "{price}" }
                if let Some(face) = face {
                    span { class: "view-muted", " (face {face})" }
                }
            }
            span { class: "{status_class}", "{status}" }
        }
    }
}

#[component]
pub fn NewListing() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut notifications = use_notifications();
    let mut event_id = use_signal(String::new);
    let mut section = use_signal(String::new);
    let mut row = use_signal(String::new);
    let mut quantity = use_signal(|| 1u8);
    let mut price = use_signal(String::new);
    let mut face_value = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let ceilings_client = app.client();
    let ceilings = use_resource(move || {
        let client = ceilings_client.clone();
        let event = event_id().trim().to_string();
        async move {
            if event.is_empty() {
                return Vec::<Ceiling>::new();
            }
            client.events().ceilings(&event).await.unwrap_or_else(|e| {
                tracing::warn!("No ceilings for event {}: {}", event, e);
                Vec::new()
            })
        }
    });

    let section_cap = ceilings
        .read()
        .as_ref()
        .and_then(|list| ceiling_for_section(list, &section()).map(|c| c.max_price_cents));

    // Printed face value takes precedence over the section ceiling
    let face_value_cents = parse_price(&face_value());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = app.client();
        spawn(async move {
            error.set(None);
            let Some(asking_price_cents) = parse_price(&price()) else {
                error.set(Some("Please enter an asking price".to_string()));
                return;
            };
            if event_id().trim().is_empty() || section().trim().is_empty() {
                error.set(Some("Event and section are required".to_string()));
                return;
            }
            let row = row().trim().to_string();
            let body = NewListingBody {
                event_id: event_id().trim().to_string(),
                section: section().trim().to_string(),
                row: (!row.is_empty()).then_some(row),
                seats: None,
                quantity: quantity(),
                asking_price_cents,
                receipt_id: None,
            };

            submitting.set(true);
            match client.listings().create(&body).await {
                Ok(listing) => {
                    let level = match listing.verification_status {
                        VerificationStatus::Rejected => NoticeLevel::Error,
                        _ => NoticeLevel::Success,
                    };
                    notify(
                        &mut notifications,
                        level,
                        &format!("Listing submitted: {}", listing.verification_status.label()),
                    );
                    nav.push(Route::Listings {});
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        ProtectedRoute {
            div {
                class: "view-page max-w-form",
                h1 { class: "view-title", "New listing" }
                p {
                    class: "view-muted",
                    "Tickets sell at face value or below. Every listing is verified after you submit."
                }

                form {
                    onsubmit: handle_submit,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        class: "text-input",
                        placeholder: "Event ID",
                        value: event_id(),
                        oninput: move |evt: FormEvent| event_id.set(evt.value()),
                    }
                    input {
                        class: "text-input",
                        placeholder: "Section",
                        value: section(),
                        oninput: move |evt: FormEvent| section.set(evt.value()),
                    }
                    input {
                        class: "text-input",
                        placeholder: "Row (optional)",
                        value: row(),
                        oninput: move |evt: FormEvent| row.set(evt.value()),
                    }
                    select {
                        class: "text-input",
                        value: "{quantity}",
                        onchange: move |evt: FormEvent| {
                            if let Ok(q) = evt.value().parse::<u8>() {
                                quantity.set(q.clamp(1, 2));
                            }
                        },
                        option { value: "1", "1 ticket" }
                        option { value: "2", "2 tickets" }
                    }

                    input {
                        class: "text-input",
                        placeholder: "Face value printed on the ticket (optional)",
                        inputmode: "decimal",
                        value: face_value(),
                        oninput: move |evt: FormEvent| face_value.set(sanitize_price_input(&evt.value())),
                    }

                    FaceValueInput {
                        value: price(),
                        oninput: move |v: String| price.set(v),
                        face_value_cents,
                        section_ceiling_cents: section_cap,
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit listing" }
                    }
                }
            }
        }
    }
}
