//! API trait definitions split by remote service
//!
//! - [`StackApi`] - CloudFormation stack lookups
//! - [`ExportApi`] - API Gateway documentation exports
//! - [`ObjectStoreApi`] - S3 uploads
//!
//! The [`CloudApi`] super-trait combines all three.

mod export;
mod stack;
mod storage;

pub use export::ExportApi;
pub use stack::StackApi;
pub use storage::ObjectStoreApi;

/// Every remote operation a build needs
pub trait CloudApi: StackApi + ExportApi + ObjectStoreApi {}

impl<T: StackApi + ExportApi + ObjectStoreApi> CloudApi for T {}
