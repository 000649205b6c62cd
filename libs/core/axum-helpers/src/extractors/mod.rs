//! Extractors whose rejections answer with the error envelope.

pub mod uuid_path;
pub mod validated;

pub use uuid_path::UuidPath;
pub use validated::{ValidatedJson, ValidatedQuery};
