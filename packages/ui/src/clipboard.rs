//! Clipboard and full-page navigation helpers.

use dioxus::prelude::*;

/// Write `text` to the system clipboard through the webview.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let eval = document::eval(
        r#"
        const text = await dioxus.recv();
        await navigator.clipboard.writeText(text);
        return true;
        "#,
    );
    eval.send(text.to_string()).map_err(|e| e.to_string())?;
    eval.await.map(|_| ()).map_err(|e| e.to_string())
}

/// Leave the app for an external URL (OAuth provider, hard reload).
pub fn redirect_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("Open {} in a browser to continue", url);
}
