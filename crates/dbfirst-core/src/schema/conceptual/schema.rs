use super::{
    AssociationEnd, AssociationSet, AssociationSetEnd, AssociationSetId, AssociationType,
    AssociationTypeId, EntitySet, EntitySetId, EntityType, EntityTypeId, Multiplicity, Property,
    PropertyId,
};

/// The conceptual schema of one entity container.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    /// Name of the entity container
    pub container: String,

    pub entity_types: Vec<EntityType>,

    pub entity_sets: Vec<EntitySet>,

    pub association_types: Vec<AssociationType>,

    pub association_sets: Vec<AssociationSet>,
}

impl Schema {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Self::default()
        }
    }

    pub fn entity_type(&self, id: impl Into<EntityTypeId>) -> &EntityType {
        self.entity_types
            .get(id.into().0)
            .expect("invalid entity type ID")
    }

    pub fn entity_type_mut(&mut self, id: impl Into<EntityTypeId>) -> &mut EntityType {
        self.entity_types
            .get_mut(id.into().0)
            .expect("invalid entity type ID")
    }

    pub fn entity_set(&self, id: impl Into<EntitySetId>) -> &EntitySet {
        self.entity_sets
            .get(id.into().0)
            .expect("invalid entity set ID")
    }

    pub fn association_type(&self, id: impl Into<AssociationTypeId>) -> &AssociationType {
        self.association_types
            .get(id.into().0)
            .expect("invalid association type ID")
    }

    pub fn association_set(&self, id: impl Into<AssociationSetId>) -> &AssociationSet {
        self.association_sets
            .get(id.into().0)
            .expect("invalid association set ID")
    }

    pub fn property(&self, id: impl Into<PropertyId>) -> &Property {
        let id = id.into();
        self.entity_type(id.entity_type).property(id)
    }

    /// Returns the element type of an entity set.
    pub fn element_type(&self, set: impl Into<EntitySetId>) -> &EntityType {
        self.entity_type(self.entity_set(set).entity_type)
    }

    /// Appends an entity type without properties and returns it.
    pub fn add_entity_type(&mut self, name: impl Into<String>) -> &mut EntityType {
        let id = EntityTypeId(self.entity_types.len());
        self.entity_types.push(EntityType::new(id, name.into()));
        &mut self.entity_types[id.0]
    }

    pub fn add_entity_set(
        &mut self,
        name: impl Into<String>,
        entity_type: impl Into<EntityTypeId>,
    ) -> EntitySetId {
        let id = EntitySetId(self.entity_sets.len());
        self.entity_sets.push(EntitySet {
            id,
            name: name.into(),
            entity_type: entity_type.into(),
        });
        id
    }

    /// Appends an association type. Each end is given as its role name, the
    /// entity type at that end, and its multiplicity.
    pub fn add_association_type(
        &mut self,
        name: impl Into<String>,
        ends: [(&str, EntityTypeId, Multiplicity); 2],
    ) -> AssociationTypeId {
        let id = AssociationTypeId(self.association_types.len());
        let [a, b] = ends;
        let end = |index: usize, (name, entity_type, multiplicity): (&str, _, _)| AssociationEnd {
            id: id.end(index),
            name: name.to_string(),
            entity_type,
            multiplicity,
        };

        self.association_types.push(AssociationType {
            id,
            name: name.into(),
            ends: [end(0, a), end(1, b)],
        });
        id
    }

    /// Appends an association set. Each end is given as its role name and the
    /// entity set bound to it.
    pub fn add_association_set(
        &mut self,
        name: impl Into<String>,
        association_type: impl Into<AssociationTypeId>,
        ends: [(&str, EntitySetId); 2],
    ) -> AssociationSetId {
        let id = AssociationSetId(self.association_sets.len());
        let ends = ends.map(|(name, entity_set)| AssociationSetEnd {
            name: name.to_string(),
            entity_set,
        });

        self.association_sets.push(AssociationSet {
            id,
            name: name.into(),
            association_type: association_type.into(),
            ends,
        });
        id
    }
}
