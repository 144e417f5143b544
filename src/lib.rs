//! Client for the CovSurver mutation-annotation service.
//!
//! Submits FASTA-formatted sequences to CovSurver and returns the raw
//! tab-separated mutation report the service generates for them. See
//! [`CovSurverClient`] for the fetch contract.

pub mod core;
pub mod utils;

pub use crate::core::client::{CovSurverClient, ANNOTATION_PATH, COVSURVER_BASE_URL};
pub use crate::core::result_link::{find_result_link, RESULT_LINK_PATTERN};
pub use crate::utils::error::{CovSurverError, Result};
