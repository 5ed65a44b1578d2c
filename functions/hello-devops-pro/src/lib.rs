//! Hello DevOps Pro: greets the caller and echoes what it knows about the
//! request back as JSON, behind an API Gateway proxy integration.

pub mod error;
pub mod handler;
pub mod logging;
pub mod request;
pub mod response;

pub use error::ProcessingError;
pub use handler::{function_handler, handle};
pub use request::Request;
pub use response::Response;
