//! Conceptual schema: the entity and association types generated from the
//! store schema, and the sets that bind them into the entity container.

mod association;
pub use association::{
    AssociationEnd, AssociationEndId, AssociationType, AssociationTypeId, Multiplicity,
};

mod association_set;
pub use association_set::{AssociationSet, AssociationSetEnd, AssociationSetId};

mod entity;
pub use entity::{Documentation, EntityType, EntityTypeId, Property, PropertyId};

mod entity_set;
pub use entity_set::{EntitySet, EntitySetId};

mod schema;
pub use schema::Schema;
