use crate::schema::conceptual::EntitySetId;

/// Describes the generated context (unit of work) class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Class name of the context
    pub name: String,

    /// One entry per entity set, in container order
    pub entity_sets: Vec<ContextEntitySet>,
}

/// A set exposed by the context: the normalized entity type name and the
/// normalized set name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntitySet {
    pub entity_set: EntitySetId,
    pub type_name: String,
    pub set_name: String,
}

impl Context {
    pub fn entity_set(&self, id: EntitySetId) -> Option<&ContextEntitySet> {
        self.entity_sets.iter().find(|entry| entry.entity_set == id)
    }
}
