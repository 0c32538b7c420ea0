pub mod errors;
pub mod types;

pub use errors::{ConfigError, DataError, SkymapError};
pub use types::{Color, LayerId, PrimitiveKind};

pub type Result<T> = std::result::Result<T, SkymapError>;
