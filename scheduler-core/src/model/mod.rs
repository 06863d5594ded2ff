//! Phase-1 Model Builder (`spec.md` §4.3): the constraint model for one
//! stage ordering, restricted to trained interviewers.

pub mod phase1;
pub mod vars;

pub use phase1::{build_phase1_model, Phase1Model, Phase1ModelBuilder};
pub use vars::{Phase1Event, Phase1Solution};
