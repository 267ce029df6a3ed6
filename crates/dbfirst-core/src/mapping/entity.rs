use crate::schema::{
    conceptual::{EntitySetId, EntityTypeId, PropertyId},
    store::{ColumnId, TableId},
};
use indexmap::IndexMap;

/// Binds one entity type to its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMapping {
    /// The entity type this mapping applies to.
    pub entity_type: EntityTypeId,

    /// The entity set the binding was read from.
    pub entity_set: EntitySetId,

    /// The table storing the entity type.
    pub table: TableId,

    /// Column of every property of the entity type, in property declaration
    /// order.
    pub properties: IndexMap<PropertyId, ColumnId>,

    /// Normalized name of the entity type, used for the generated entity
    /// class.
    pub class_name: String,

    /// Documentation text for the generated class.
    pub description: String,
}

impl EntityMapping {
    /// Returns the column a property is stored in.
    pub fn column(&self, property: impl Into<PropertyId>) -> Option<ColumnId> {
        self.properties.get(&property.into()).copied()
    }

    /// Name of the generated mapping class.
    pub fn map_class_name(&self) -> String {
        format!("{}Map", self.class_name)
    }
}
