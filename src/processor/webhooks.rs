//! Outcome notification delivery.

use crate::types::{Event, HookPayload};

use super::PdfProcessor;

impl PdfProcessor {
    /// Deliver one outcome report to the caller-supplied hook, if any
    ///
    /// Best-effort: exactly one attempt, bounded by the configured webhook
    /// timeout. Delivery failures are logged and emitted as
    /// [`Event::WebhookFailed`] but never propagate; a submission's result
    /// does not depend on whether its hook was reachable.
    pub(crate) async fn post_hook(&self, hook: Option<&str>, url: &str, ok: bool, status_text: &str) {
        let Some(hook) = hook.filter(|h| !h.is_empty()) else {
            return;
        };

        let payload = HookPayload {
            url: url.to_string(),
            ok,
            status_text: status_text.to_string(),
        };

        let result = self.hook_client.post(hook).json(&payload).send().await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(hook = %hook, url = %url, "hook notified");
            }
            Ok(response) => {
                let error_msg = format!("hook returned status {}", response.status());
                tracing::warn!(hook = %hook, url = %url, error = %error_msg, "hook call failed");
                self.emit(Event::WebhookFailed {
                    url: hook.to_string(),
                    error: error_msg,
                });
            }
            Err(e) => {
                let error_msg = format!("failed to call hook: {}", e);
                tracing::warn!(hook = %hook, url = %url, error = %error_msg, "hook call failed");
                self.emit(Event::WebhookFailed {
                    url: hook.to_string(),
                    error: error_msg,
                });
            }
        }
    }
}
