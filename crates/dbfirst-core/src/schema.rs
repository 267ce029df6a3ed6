//! Input schemas: the physical store schema and the conceptual schema
//! generated from it.

pub mod conceptual;

mod correlate;
pub use correlate::Correlation;

mod name;
pub use name::{normalize, title_case, Name};

pub mod store;
