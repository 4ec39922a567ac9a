use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under one target, so `RUST_LOG`
/// can tune them apart from request and driver logs.
pub struct TracingLogger;

const TARGET: &str = "movies_store";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
