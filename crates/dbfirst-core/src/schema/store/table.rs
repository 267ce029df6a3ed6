use super::{Column, ColumnId, Type};

use std::fmt;

/// A database table
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table, exactly as the database and the mapping document
    /// spell it.
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    /// Free-form description recorded in the database, if any
    pub description: Option<String>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(pub usize);

impl Table {
    pub(crate) fn new(id: TableId, name: String) -> Self {
        Self {
            id,
            name,
            columns: vec![],
            description: None,
        }
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        assert_eq!(self.id, id.table, "column belongs to another table");
        &self.columns[id.index]
    }

    /// Finds a column by exact, case-sensitive name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Appends a column and returns it for further configuration.
    pub fn add_column(&mut self, name: impl Into<String>, ty: Type) -> &mut Column {
        let id = ColumnId {
            table: self.id,
            index: self.columns.len(),
        };
        self.columns.push(Column::new(id, name.into(), ty));
        &mut self.columns[id.index]
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
