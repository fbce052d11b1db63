pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
