pub mod compensation;
pub mod format;
mod macros;
pub mod structure;

// Re-export all models for easy importing
pub use compensation::*;
pub use structure::*;
