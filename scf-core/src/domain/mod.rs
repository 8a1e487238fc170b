pub mod catalog;
pub mod configuration;
pub mod dataset;
pub mod error;
pub mod ports;
pub mod snippet;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use dataset::Dataset;
pub use error::DomainError;
