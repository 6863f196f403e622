//! Application-level configuration.
//!
//! - [`SubmissionParams`]: submission mode and request timeout

pub mod submission_params;

pub use submission_params::SubmissionParams;
