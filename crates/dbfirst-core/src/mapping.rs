mod builder;
pub use builder::Builder;

mod context;
pub use context::{Context, ContextEntitySet};

mod entity;
pub use entity::EntityMapping;

mod many_to_many;
pub use many_to_many::{EndColumns, ManyToManyMapping};

use crate::schema::conceptual::{AssociationTypeId, EntityTypeId};
use indexmap::IndexMap;

/// Defines the correspondence between the conceptual schema and the store
/// schema.
///
/// The mapping is built once per run from immutable inputs and is only read
/// afterwards, by the code generator emitting entity, mapping and context
/// classes.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    /// One entry per conceptual entity set, keyed by the set's entity type.
    pub entities: IndexMap<EntityTypeId, EntityMapping>,

    /// One entry per association set whose ends are all many, keyed by the
    /// set's association type.
    pub many_to_many: IndexMap<AssociationTypeId, ManyToManyMapping>,
}

impl Mapping {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the mapping for the specified entity type.
    ///
    /// # Panics
    ///
    /// Panics if the entity type has no mapping.
    pub fn entity(&self, id: impl Into<EntityTypeId>) -> &EntityMapping {
        self.entities
            .get(&id.into())
            .expect("invalid entity type ID")
    }

    /// Returns the junction table mapping for the specified association type,
    /// or `None` if the association is not many-to-many.
    pub fn many_to_many(&self, id: impl Into<AssociationTypeId>) -> Option<&ManyToManyMapping> {
        self.many_to_many.get(&id.into())
    }
}
