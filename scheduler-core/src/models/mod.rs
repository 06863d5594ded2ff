//! Wire types (`request`/`response`) and the validated internal problem
//! representation (`problem`) that sits between the normalizer and the rest
//! of the pipeline.

pub mod problem;
pub mod request;
pub mod response;
