use super::{AssociationTypeId, EntitySetId};

use std::fmt;

/// Binds an association type into the entity container.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationSet {
    pub id: AssociationSetId,

    /// Name of the set, as referenced by the mapping document
    pub name: String,

    pub association_type: AssociationTypeId,

    /// One set end per end of the association type
    pub ends: [AssociationSetEnd; 2],
}

/// Binds one end of an association set to an entity set. The name is the role
/// of the corresponding association type end.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationSetEnd {
    pub name: String,
    pub entity_set: EntitySetId,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationSetId(pub usize);

impl From<&AssociationSet> for AssociationSetId {
    fn from(value: &AssociationSet) -> Self {
        value.id
    }
}

impl fmt::Debug for AssociationSetId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "AssociationSetId({})", self.0)
    }
}
