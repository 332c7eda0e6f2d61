pub mod compensation;
pub mod health;
pub mod shared;
pub mod structures;
