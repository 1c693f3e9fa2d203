//! Data models exchanged with the AWS services

mod export;
mod object;
mod stack;

pub use export::ExportRequest;
pub use object::PutObjectRequest;
pub use stack::{SERVICE_ENDPOINT_OUTPUT, StackDescription, StackOutput};
