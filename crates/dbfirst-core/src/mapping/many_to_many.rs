use crate::schema::{
    conceptual::{AssociationEndId, AssociationSetId, AssociationTypeId, PropertyId},
    store::TableId,
};
use indexmap::IndexMap;

/// Foreign key column names of one relationship end, keyed by the property of
/// the end's entity type that the column refers to.
pub type EndColumns = IndexMap<PropertyId, String>;

/// Binds a many-to-many association type to its junction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManyToManyMapping {
    /// The association type this mapping applies to.
    pub association_type: AssociationTypeId,

    /// The association set the binding was read from.
    pub association_set: AssociationSetId,

    /// The junction table.
    pub table: TableId,

    /// Foreign key columns of each end, keyed by the association type end.
    pub ends: IndexMap<AssociationEndId, EndColumns>,
}

impl ManyToManyMapping {
    /// Returns the foreign key columns of an association end.
    pub fn end(&self, id: impl Into<AssociationEndId>) -> Option<&EndColumns> {
        self.ends.get(&id.into())
    }
}
