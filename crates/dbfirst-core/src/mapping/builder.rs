mod entity;
mod many_to_many;

use super::{Context, ContextEntitySet, Mapping};
use crate::schema::{conceptual, normalize, store, title_case, Correlation};
use crate::{MappingDocument, Result};

#[derive(Debug, Clone)]
pub struct Builder {
    /// Appended to the database name to form the context class name
    context_suffix: String,

    /// Description used for entity types without documentation
    empty_description: String,

    /// If set, junction table foreign key columns are checked against the
    /// junction table
    strict_many_to_many_columns: bool,
}

/// Used to track state during the build process
struct BuildMapping<'a> {
    /// Build options
    builder: &'a Builder,

    /// Name lookups into both schemas
    cx: Correlation<'a>,

    document: &'a MappingDocument,

    /// The mapping as it is built
    mapping: Mapping,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            context_suffix: "Context".to_string(),
            empty_description: "EmptyDescription".to_string(),
            strict_many_to_many_columns: false,
        }
    }

    pub fn context_suffix(&mut self, suffix: &str) -> &mut Self {
        self.context_suffix = suffix.to_string();
        self
    }

    pub fn empty_description(&mut self, description: &str) -> &mut Self {
        self.empty_description = description.to_string();
        self
    }

    pub fn strict_many_to_many_columns(&mut self, strict: bool) -> &mut Self {
        self.strict_many_to_many_columns = strict;
        self
    }

    /// Builds the mapping model.
    ///
    /// Either every entity set and every many-to-many association set is fully
    /// resolved, or the first inconsistency is returned and no mapping is
    /// produced.
    pub fn build(
        &self,
        conceptual: &conceptual::Schema,
        store: &store::Schema,
        document: &MappingDocument,
    ) -> Result<Mapping> {
        let mut builder = BuildMapping {
            builder: self,
            cx: Correlation::new(conceptual, store)?,
            document,
            mapping: Mapping::default(),
        };

        builder.build_entity_mappings()?;
        builder.build_many_to_many_mappings()?;

        tracing::debug!(
            entities = builder.mapping.entities.len(),
            many_to_many = builder.mapping.many_to_many.len(),
            "built mapping"
        );

        Ok(builder.mapping)
    }

    /// Describes the context class for the entity container of `conceptual`,
    /// named after the database.
    pub fn build_context(&self, conceptual: &conceptual::Schema, database: &str) -> Context {
        let mut name: String = title_case(database)
            .chars()
            .filter(|ch| *ch != ' ' && *ch != '.')
            .collect();
        name.push_str(&self.context_suffix);

        let entity_sets = conceptual
            .entity_sets
            .iter()
            .map(|entity_set| ContextEntitySet {
                entity_set: entity_set.id,
                type_name: normalize(&conceptual.entity_type(entity_set.entity_type).name),
                set_name: normalize(&entity_set.name),
            })
            .collect();

        Context { name, entity_sets }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
