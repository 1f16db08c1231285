pub mod artifacts;
pub mod scenario;

pub use artifacts::capture_failure;
