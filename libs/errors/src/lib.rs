//! # inthash-errors
//!
//! Error handlers for out-of-band failure reporting.
//!
//! A [`Handler`] receives an error together with the backtrace captured where
//! it surfaced. [`Messenger`] is the chat implementation: it renders both into
//! one message body and hands it to a [`ChatNotifier`]. Delivery is
//! fire-and-forget; the caller never learns whether the message went out.

use std::backtrace::Backtrace;
use std::error::Error as StdError;

use thiserror::Error;
use tracing::{debug, warn};

/// Errors a chat notifier can report back to the messenger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The chat service refused the message.
    #[error("message rejected: {reason}")]
    Rejected { reason: String },

    /// The chat service could not be reached.
    #[error("notifier unavailable: {0}")]
    Unavailable(String),
}

/// Something that deals with an error after it has been returned to the top.
pub trait Handler: Send + Sync {
    fn handle(&self, err: &(dyn StdError + 'static), trace: &Backtrace);
}

/// An outbound chat channel, already configured with its destination.
pub trait ChatNotifier: Send + Sync {
    /// Sends one message.
    fn send(&self, body: &str) -> Result<(), NotifyError>;
}

/// Renders an error and its backtrace into a single message body.
///
/// The first line is the error itself, followed by one `caused by:` line per
/// source in the chain, then the backtrace.
pub fn format_body(err: &(dyn StdError + 'static), trace: &Backtrace) -> String {
    let mut body = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        body.push_str(&format!("\ncaused by: {cause}"));
        source = cause.source();
    }
    body.push_str(&format!("\n{trace}"));
    body
}

/// Sends handled errors to a chat channel.
#[derive(Debug, Clone)]
pub struct Messenger<N> {
    notifier: N,
}

impl<N: ChatNotifier> Messenger<N> {
    /// Creates a messenger around a configured notifier.
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Returns the wrapped notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl<N: ChatNotifier + 'static> Messenger<N> {
    /// Boxes the messenger for callers that hold handlers as trait objects.
    pub fn into_handler(self) -> Box<dyn Handler> {
        Box::new(self)
    }
}

impl<N: ChatNotifier> Handler for Messenger<N> {
    fn handle(&self, err: &(dyn StdError + 'static), trace: &Backtrace) {
        let body = format_body(err, trace);
        match self.notifier.send(&body) {
            Ok(()) => debug!(error = %err, "error notification sent"),
            Err(e) => warn!(error = %err, notify_error = %e, "failed to send error notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    impl ChatNotifier for RecordingNotifier {
        fn send(&self, body: &str) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push(body.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FailingNotifier {
        attempts: Arc<AtomicUsize>,
    }

    impl ChatNotifier for FailingNotifier {
        fn send(&self, _body: &str) -> Result<(), NotifyError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(NotifyError::Unavailable("connection refused".to_string()))
        }
    }

    #[derive(Debug, Error)]
    #[error("decode failed")]
    struct Outer(#[source] std::num::ParseIntError);

    #[test]
    fn test_format_body_starts_with_error() {
        let err = std::io::Error::other("boom");
        let body = format_body(&err, &Backtrace::disabled());
        assert!(body.starts_with("boom\n"));
        assert!(body.ends_with(&Backtrace::disabled().to_string()));
    }

    #[test]
    fn test_format_body_includes_sources() {
        let inner = "x".parse::<i64>().unwrap_err();
        let err = Outer(inner.clone());
        let body = format_body(&err, &Backtrace::disabled());

        let mut lines = body.lines();
        assert_eq!(lines.next(), Some("decode failed"));
        assert_eq!(lines.next(), Some(format!("caused by: {inner}").as_str()));
    }

    #[test]
    fn test_messenger_sends_formatted_body() {
        let messenger = Messenger::new(RecordingNotifier::default());
        let err = std::io::Error::other("boom");
        let trace = Backtrace::disabled();

        messenger.handle(&err, &trace);

        let sent = messenger.notifier().sent.lock().unwrap();
        assert_eq!(*sent, vec![format_body(&err, &trace)]);
    }

    #[test]
    fn test_messenger_swallows_send_failure() {
        let notifier = FailingNotifier::default();
        let attempts = Arc::clone(&notifier.attempts);
        let handler = Messenger::new(notifier).into_handler();
        let err = std::io::Error::other("boom");

        handler.handle(&err, &Backtrace::capture());

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
