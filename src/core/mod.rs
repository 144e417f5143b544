pub mod client;
pub mod result_link;

pub use crate::core::client::CovSurverClient;
pub use crate::core::result_link::find_result_link;
