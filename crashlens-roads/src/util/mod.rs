pub mod fs;
pub mod serde_ops;
