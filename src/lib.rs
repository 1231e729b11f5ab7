pub mod config;
pub mod error;
pub mod features;
pub mod format;
pub mod inference;
pub mod model;
pub mod server;


// Re-export common types
pub use error::InferenceError;
