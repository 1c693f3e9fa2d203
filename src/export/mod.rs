//! Locating the deployed API and exporting its documentation

pub mod documentation;
pub mod endpoint;

pub use documentation::export_documentation;
pub use endpoint::resolve_api_gateway_id;
