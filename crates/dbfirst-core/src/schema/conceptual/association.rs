use super::EntityTypeId;

use std::fmt;

/// A relationship between two entity types.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationType {
    pub id: AssociationTypeId,

    pub name: String,

    /// The two relationship ends
    pub ends: [AssociationEnd; 2],
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationTypeId(pub usize);

/// One end of an association type.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationEnd {
    pub id: AssociationEndId,

    /// The role name of the end
    pub name: String,

    /// The entity type at this end
    pub entity_type: EntityTypeId,

    pub multiplicity: Multiplicity,
}

/// Identifies an end by its association type and position.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationEndId {
    pub association: AssociationTypeId,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Multiplicity {
    One,
    ZeroOrOne,
    Many,
}

impl AssociationType {
    /// Returns `true` when every end has many-multiplicity, i.e. the
    /// association is stored in a junction table.
    pub fn is_many_to_many(&self) -> bool {
        self.ends.iter().all(|end| end.multiplicity.is_many())
    }

    /// Finds an end by its role name.
    pub fn end_by_name(&self, name: &str) -> Option<&AssociationEnd> {
        self.ends.iter().find(|end| end.name == name)
    }

    pub fn end(&self, id: impl Into<AssociationEndId>) -> &AssociationEnd {
        let id = id.into();
        assert_eq!(self.id, id.association);
        &self.ends[id.index]
    }
}

impl Multiplicity {
    pub fn is_many(self) -> bool {
        matches!(self, Multiplicity::Many)
    }
}

impl AssociationTypeId {
    pub const fn end(self, index: usize) -> AssociationEndId {
        AssociationEndId {
            association: self,
            index,
        }
    }
}

impl From<&AssociationType> for AssociationTypeId {
    fn from(value: &AssociationType) -> Self {
        value.id
    }
}

impl From<&AssociationEnd> for AssociationEndId {
    fn from(value: &AssociationEnd) -> Self {
        value.id
    }
}

impl fmt::Debug for AssociationTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "AssociationTypeId({})", self.0)
    }
}

impl fmt::Debug for AssociationEndId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "AssociationEndId({}/{})", self.association.0, self.index)
    }
}
