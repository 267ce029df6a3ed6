use super::{Column, ColumnId, Table, TableId};

use indexmap::IndexMap;

/// The physical schema of one database.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    /// Name of the store container (the database or schema owner)
    pub name: String,

    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: vec![],
        }
    }

    /// Appends an empty table and returns it so columns can be added.
    pub fn add_table(&mut self, name: impl Into<String>) -> &mut Table {
        let id = TableId(self.tables.len());
        self.tables.push(Table::new(id, name.into()));
        &mut self.tables[id.0]
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    /// Returns the description of the named table, matching the name without
    /// regard to case. Returns an empty string when the table is unknown or
    /// has no description.
    pub fn describe_table(&self, name: &str) -> &str {
        self.table_ignore_case(name)
            .and_then(|table| table.description.as_deref())
            .unwrap_or("")
    }

    /// Returns the description of a column, matching both names without regard
    /// to case. Returns an empty string when either is unknown or the column
    /// has no description.
    pub fn describe_column(&self, table: &str, column: &str) -> &str {
        let column = column.to_lowercase();

        self.table_ignore_case(table)
            .and_then(|table| {
                table
                    .columns
                    .iter()
                    .find(|c| c.name.to_lowercase() == column)
            })
            .and_then(|column| column.description.as_deref())
            .unwrap_or("")
    }

    /// Returns the lower-cased column name to description dictionary of a
    /// table. Columns without a description map to an empty string.
    pub fn column_descriptions(&self, table: &str) -> IndexMap<String, String> {
        let Some(table) = self.table_ignore_case(table) else {
            return IndexMap::new();
        };

        table
            .columns
            .iter()
            .map(|column| {
                (
                    column.name.to_lowercase(),
                    column.description.clone().unwrap_or_default(),
                )
            })
            .collect()
    }

    fn table_ignore_case(&self, name: &str) -> Option<&Table> {
        let name = name.to_lowercase();
        self.tables
            .iter()
            .find(|table| table.name.to_lowercase() == name)
    }
}
