mod error;
pub use error::{Error, IntoError, SchemaElement};

pub mod document;
pub use document::MappingDocument;

pub mod mapping;
pub use mapping::Mapping;

pub mod schema;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
