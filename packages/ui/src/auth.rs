//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`AppSession`] of the app and mirrors its
//! state into a signal, so components re-render on login, logout and 401
//! expiry without touching the store directly.

use api::gate::{GatePolicy, ServerStatus};
use api::models::Provider;
use api::{ClientConfig, Session};
use dioxus::prelude::*;

use crate::clipboard::redirect_external;
use crate::notifications::{notify, use_notifications, NoticeLevel, Notifications};
use crate::storage::{make_session, AppClient, AppSession};

/// Services shared by every component.
#[derive(Clone)]
pub struct AppContext {
    pub session: AppSession,
    pub config: ClientConfig,
}

impl AppContext {
    pub fn client(&self) -> AppClient {
        self.session.client().clone()
    }

    pub fn gate_policy(&self) -> GatePolicy {
        GatePolicy::from(&self.config)
    }
}

/// Server-side beta status for the signed-in user.
///
/// [`BetaAccess::invalidate`] forces a re-fetch; every gated view re-evaluates
/// once the new answer arrives.
#[derive(Clone, Copy)]
pub struct BetaAccess {
    pub status: Signal<ServerStatus>,
    generation: Signal<u64>,
}

impl BetaAccess {
    pub fn invalidate(&mut self) {
        self.status.set(ServerStatus::Pending);
        *self.generation.write() += 1;
    }
}

/// Bumped every time a 401 ends an active session.
#[derive(Clone, Copy)]
pub struct SessionExpiry(Signal<u64>);

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Get the current session. Updates on every session change.
pub fn use_auth() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

pub fn use_beta_access() -> BetaAccess {
    use_context::<BetaAccess>()
}

/// Provider component that owns the session and the shared contexts.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let app = use_hook(|| AppContext {
        session: make_session(&config),
        config: config.clone(),
    });
    use_context_provider(|| app.clone());

    let auth = use_signal(|| app.session.snapshot());
    use_context_provider(|| auth);

    let notifications = use_signal(Notifications::default);
    use_context_provider(|| notifications);

    let expiries = use_signal(|| 0u64);
    use_context_provider(|| SessionExpiry(expiries));

    let status = use_signal(|| ServerStatus::Pending);
    let generation = use_signal(|| 0u64);
    use_context_provider(|| BetaAccess { status, generation });

    // Mirror the store into the signal and surface 401 expiry
    use_hook(|| {
        app.session.subscribe(move |session| {
            let mut auth = auth;
            auth.set(session.clone());
        });
        app.session.on_expired(move || {
            let mut expiries = expiries;
            *expiries.write() += 1;
            let mut notifications = notifications;
            notify(
                &mut notifications,
                NoticeLevel::Info,
                "Your session has expired. Please sign in again.",
            );
        });
    });

    // Restore the persisted session once
    let init = app.clone();
    let _ = use_resource(move || {
        let session = init.session.clone();
        async move { session.initialize().await }
    });

    // Beta status follows sign-in changes and explicit invalidation. The memo
    // keeps session updates from the fetch itself from re-triggering it.
    let signed_in = use_memo(move || auth.read().is_authenticated());
    let beta = app.clone();
    let _ = use_resource(move || {
        let session = beta.session.clone();
        let authenticated = signed_in();
        let _ = generation();
        let mut status = status;
        async move {
            if !authenticated {
                status.set(ServerStatus::Pending);
                return;
            }
            match session.fetch_beta_status().await {
                Ok(beta) => status.set(ServerStatus::Loaded(beta)),
                Err(e) => {
                    tracing::warn!("Beta status unavailable: {}", e);
                    status.set(ServerStatus::Failed);
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Send the user to `/login` whenever a 401 ends the session.
/// Call from a component inside the router.
pub fn use_expiry_redirect() {
    let SessionExpiry(expiries) = use_context::<SessionExpiry>();
    let nav = use_navigator();
    let mut handled = use_signal(|| *expiries.peek());

    use_effect(move || {
        let count = expiries();
        if count != *handled.peek() {
            handled.set(count);
            nav.replace("/login");
        }
    });
}

/// Loading indicator shown while a guard cannot decide yet.
#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
            span { class: "view-muted", "{label}" }
        }
    }
}

/// Renders children only for a signed-in user; otherwise goes to `/login`.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    if state.is_pending() {
        return rsx! { Spinner {} };
    }
    if !state.is_authenticated() {
        nav.replace("/login");
        return rsx! {};
    }
    rsx! { {children} }
}

/// Renders children only for anonymous visitors; otherwise goes to `/dashboard`.
#[component]
pub fn PublicRoute(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    if state.is_pending() {
        return rsx! { Spinner {} };
    }
    if state.is_authenticated() {
        nav.replace("/dashboard");
        return rsx! {};
    }
    rsx! { {children} }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();
    let nav = use_navigator();

    let onclick = move |_| {
        app.session.logout();
        nav.push("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Button that starts the OAuth flow for an identity anchor.
#[component]
pub fn ConnectButton(
    provider: Provider,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();
    let mut notifications = use_notifications();
    let mut redirecting = use_signal(|| false);
    let label = provider.label();

    let onclick = move |_| match app.session.connect(provider) {
        Ok(url) => {
            redirecting.set(true);
            redirect_external(&url);
        }
        Err(e) => notify(&mut notifications, NoticeLevel::Error, &e.user_message()),
    };

    rsx! {
        button {
            class: "{class}",
            disabled: redirecting(),
            onclick: onclick,
            if redirecting() {
                "Redirecting..."
            } else {
                "Connect {label}"
            }
        }
    }
}
