//! Physical (store) schema: the tables and columns read from the database.
//!
//! The store schema is produced by an external introspection step and is only
//! ever read here.

mod column;
pub use column::{Column, ColumnId};

mod schema;
pub use schema::Schema;

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::Type;
