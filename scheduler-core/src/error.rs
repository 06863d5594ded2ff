//! Error types for the scheduling engine.
//!
//! Public failures are a small closed set of [`ScheduleError`] variants, each
//! carrying the offending entity so a caller can locate the problem without
//! parsing a message. Internal plumbing that cannot fail in a way the public
//! API needs to distinguish uses [`GenericError`]/[`GenericResult`], the same
//! boxed-error convention the rest of this workspace's ancestry uses for
//! fallible constructors that are always converted to a typed error at the
//! public boundary.

use std::error::Error;

/// A type-erased error used by internal model/search helpers.
pub type GenericError = Box<dyn Error + Send + Sync>;

/// Convenience alias for `Result<T, GenericError>`.
pub type GenericResult<T> = Result<T, GenericError>;

/// All fatal outcomes of a single [`crate::solve`] call.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Missing or ill-formed fields, empty stages, non-positive duration,
    /// inverted window, or an unparseable timestamp.
    #[error("invalid input at {entity}: {message}")]
    InvalidInput {
        /// Identifies the offending entity, e.g. `"stage[1].seats[0]"`.
        entity: String,
        message: String,
    },

    /// A (stage, seat, role) candidate set is empty for a role required at
    /// the current phase.
    #[error("empty candidate pool at {entity}: {message}")]
    EmptyPool { entity: String, message: String },

    /// `schedule_on_same_day = false` but the availability windows cover
    /// fewer distinct calendar days than there are stages.
    #[error("insufficient distinct days: found {found}, need at least {needed}")]
    InsufficientDays { found: usize, needed: usize },

    /// The solver returned a terminal non-feasibility code without a
    /// captured solution.
    #[error("solver failure: {status}")]
    SolverFailure { status: String },
}

impl ScheduleError {
    pub fn invalid_input(entity: impl Into<String>, message: impl Into<String>) -> Self {
        ScheduleError::InvalidInput { entity: entity.into(), message: message.into() }
    }

    pub fn empty_pool(entity: impl Into<String>, message: impl Into<String>) -> Self {
        ScheduleError::EmptyPool { entity: entity.into(), message: message.into() }
    }
}

