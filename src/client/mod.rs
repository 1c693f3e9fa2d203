//! AWS service clients

pub mod api;
pub mod aws;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{CloudApi, ExportApi, ObjectStoreApi, StackApi};
pub use aws::AwsClient;
#[cfg(test)]
pub use mock::MockAwsClient;
