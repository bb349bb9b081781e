//! The dedup → fetch → render → persist pipeline.

use crate::db::NewDocument;
use crate::error::{ConvertError, Error};
use crate::types::Event;

use super::PdfProcessor;

/// Terminal outcome of one submission
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// A thumbnail was rendered and persisted (or an identical concurrent
    /// submission won the insert race, which is the same net result)
    Stored,
    /// The url already had a stored document; no work was performed
    AlreadyExists,
    /// Fetch or render failed; the description was reported to the hook
    Failed(String),
}

impl PdfProcessor {
    /// Schedule a submission to run as a detached task
    ///
    /// This is what the upload ingress calls: it returns immediately and the
    /// pipeline runs to completion (or failure) on its own. There is no
    /// queue-depth limit and no way to abort an in-flight submission; callers
    /// wanting bounded concurrency should put a worker pool in front.
    pub fn spawn_process(&self, url: String, hook: Option<String>) {
        let processor = self.clone();
        tokio::spawn(async move {
            if let Err(e) = processor.process_url(&url, hook.as_deref()).await {
                tracing::error!(url = %url, error = %e, "pipeline aborted on storage failure");
            }
        });
    }

    /// Drive one submitted url through the pipeline
    ///
    /// Steps: dedup pre-check, fetch, render, persist, notify. Fetch and
    /// render failures are terminal but handled: the hook is notified with
    /// `ok = false` and the failure's description, and `Ok(Failed)` is
    /// returned. Storage failures are notified best-effort and then
    /// propagated.
    ///
    /// The pre-check is only a fast path to skip redundant fetch/render
    /// work. Losing a check-then-act race against a concurrent identical
    /// submission is converged at the insert step, where the store's
    /// uniqueness constraint absorbs the duplicate as success.
    pub async fn process_url(
        &self,
        url: &str,
        hook: Option<&str>,
    ) -> crate::Result<ProcessOutcome> {
        match self.db.exists(url).await {
            Ok(true) => {
                // Already-processed urls do not fire the hook
                tracing::debug!(url = %url, "url already processed, skipping");
                self.emit(Event::DuplicateSkipped {
                    url: url.to_string(),
                });
                return Ok(ProcessOutcome::AlreadyExists);
            }
            Ok(false) => {}
            Err(e) => {
                self.post_hook(hook, url, false, &e.to_string()).await;
                return Err(e);
            }
        }

        let pdf = match self.fetcher.fetch(url).await {
            Ok(bytes) => bytes,
            Err(e) => return Ok(self.fail(url, hook, &e).await),
        };

        let thumbnail = match self.renderer.render(&pdf).await {
            Ok(bytes) if bytes.is_empty() => {
                let e = Error::Convert(ConvertError::EmptyThumbnail);
                return Ok(self.fail(url, hook, &e).await);
            }
            Ok(bytes) => bytes,
            Err(e) => return Ok(self.fail(url, hook, &e).await),
        };

        let doc = NewDocument {
            url: url.to_string(),
            thumbnail,
            pdf: self.config.storage.keep_pdf.then_some(pdf),
        };

        match self.db.insert_document(&doc).await {
            Ok(outcome) => {
                tracing::info!(url = %url, ?outcome, "url successfully processed");
                self.emit(Event::DocumentStored {
                    url: url.to_string(),
                });
                self.post_hook(hook, url, true, "").await;
                Ok(ProcessOutcome::Stored)
            }
            Err(e) => {
                tracing::error!(url = %url, error = %e, "failed to persist document");
                self.post_hook(hook, url, false, &e.to_string()).await;
                Err(e)
            }
        }
    }

    /// Record a fetch/render failure: log, emit, notify
    async fn fail(&self, url: &str, hook: Option<&str>, error: &Error) -> ProcessOutcome {
        let status_text = error.to_string();
        tracing::warn!(url = %url, error = %status_text, "failed to process url");
        self.emit(Event::ProcessingFailed {
            url: url.to_string(),
            error: status_text.clone(),
        });
        self.post_hook(hook, url, false, &status_text).await;
        ProcessOutcome::Failed(status_text)
    }
}
