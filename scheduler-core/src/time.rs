//! Minute-granularity time handling.
//!
//! All times inside the engine are plain `i64` minutes since the request's
//! epoch (the earliest availability window start). Parsing from and
//! formatting back to the wire's `YYYY-MM-DDTHH:MM` representation happens
//! only at the normalizer/formatter boundary.

use crate::error::{GenericError, GenericResult};
use chrono::NaiveDateTime;

const ISO_FMT: &str = "%Y-%m-%dT%H:%M";

/// Minutes since the request epoch. Never negative once past normalization.
pub type Minutes = i64;

/// Parses a `YYYY-MM-DDTHH:MM` timestamp.
pub fn parse_iso(s: &str) -> GenericResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, ISO_FMT)
        .map_err(|e| -> GenericError { format!("invalid timestamp '{s}': {e}").into() })
}

/// Formats a timestamp back to the wire's `YYYY-MM-DDTHH:MM` representation.
pub fn to_iso(dt: NaiveDateTime) -> String {
    dt.format(ISO_FMT).to_string()
}

/// Minutes elapsed from `epoch` to `dt`. Assumes `dt >= epoch`.
pub fn minutes_since_epoch(dt: NaiveDateTime, epoch: NaiveDateTime) -> Minutes {
    (dt - epoch).num_minutes()
}

/// Reconstructs a timestamp `minutes` after `epoch`.
pub fn datetime_from_minutes(minutes: Minutes, epoch: NaiveDateTime) -> NaiveDateTime {
    epoch + chrono::Duration::minutes(minutes)
}

/// Number of whole minutes in a calendar day.
pub const MINUTES_PER_DAY: Minutes = 24 * 60;
