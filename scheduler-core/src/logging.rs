//! Diagnostics plumbing, following the teacher's own closure-based logger
//! (`vrp_core::prelude::InfoLogger`) rather than a process-wide logging
//! framework: a solve call is a single in-memory function invocation, often
//! embedded, so the caller decides where a message goes instead of this
//! crate mandating a global subscriber.

use std::sync::Arc;

/// A sink for human-readable progress messages emitted while solving.
/// Mirrors the teacher's `Arc<dyn Fn(&str) + Send + Sync>` exactly.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// A logger that discards every message. Used by [`crate::solve`], which has
/// no caller-supplied logger to report to.
pub fn noop_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
