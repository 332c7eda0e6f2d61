pub mod compensation;
pub mod structure;
