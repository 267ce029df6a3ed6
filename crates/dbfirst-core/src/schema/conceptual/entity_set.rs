use super::EntityTypeId;

use std::fmt;

/// Binds an entity type into the entity container under a set name.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySet {
    pub id: EntitySetId,

    /// Name of the set, as referenced by the mapping document
    pub name: String,

    /// The element type of the set
    pub entity_type: EntityTypeId,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySetId(pub usize);

impl From<&EntitySet> for EntitySetId {
    fn from(value: &EntitySet) -> Self {
        value.id
    }
}

impl fmt::Debug for EntitySetId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntitySetId({})", self.0)
    }
}
