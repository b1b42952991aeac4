//! Top-level script runner: report or swallow, then always signal completion.

use std::any::Any;
use std::future::Future;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{error, warn};

use crate::Error;

/// Run `body` to completion and write its report, or `failure_prefix` plus
/// the error, to `out`. `on_complete` runs exactly once either way.
///
/// The body runs on its own task so a panic inside it is reported like any
/// other failure instead of tearing down the caller.
pub async fn run<F, W, C>(failure_prefix: &str, body: F, out: &mut W, on_complete: C)
where
    F: Future<Output = Result<String, Error>> + Send + 'static,
    W: Write,
    C: FnOnce(),
{
    let line = match tokio::spawn(body).await {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => {
            error!(error = %e, "Script failed");
            format!("{failure_prefix}{e}")
        }
        Err(join_err) => {
            let message = if join_err.is_panic() {
                panic_message(join_err.into_panic().as_ref())
            } else {
                join_err.to_string()
            };
            error!(error = %message, "Script aborted");
            format!("{failure_prefix}{message}")
        }
    };

    if let Err(e) = writeln!(out, "{line}") {
        warn!(error = %e, "Failed to write script output");
    }
    on_complete();
}

/// Render any panic payload as text.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "script panicked with a non-string payload".to_string()
    }
}

/// Seconds since the unix epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

pub fn rental_expiry(now: u64, rental_secs: u64) -> u64 {
    now.saturating_add(rental_secs)
}
