use super::BuildMapping;
use crate::mapping::EntityMapping;
use crate::schema::{conceptual::EntitySet, normalize};
use crate::{bail, err, Error, Result};

use indexmap::IndexMap;

impl BuildMapping<'_> {
    pub(super) fn build_entity_mappings(&mut self) -> Result<()> {
        for entity_set in &self.cx.conceptual().entity_sets {
            let entity = self
                .build_entity_mapping(entity_set)
                .map_err(|e| e.context(err!("mapping entity set `{}`", entity_set.name)))?;

            if self.mapping.entities.contains_key(&entity.entity_type) {
                bail!(
                    "entity type `{}` is bound by more than one entity set",
                    self.cx.conceptual().entity_type(entity.entity_type).name
                );
            }

            tracing::trace!(
                entity_set = %entity_set.name,
                table = %self.cx.store().table(entity.table).name,
                "mapped entity set"
            );

            self.mapping.entities.insert(entity.entity_type, entity);
        }

        Ok(())
    }

    fn build_entity_mapping(&self, entity_set: &EntitySet) -> Result<EntityMapping> {
        let entity_type = self.cx.conceptual().entity_type(entity_set.entity_type);

        let Some(set_mapping) = self.document.entity_set_mapping(&entity_set.name) else {
            return Err(Error::document_malformed(format!(
                "no entity set mapping for `{}`",
                entity_set.name
            )));
        };

        let table = self.cx.table(set_mapping.store_entity_set()?)?;

        let mut properties = IndexMap::with_capacity(entity_type.properties.len());
        for property in &entity_type.properties {
            let Some(column_name) = set_mapping.scalar_property_column(&property.name) else {
                return Err(Error::document_malformed(format!(
                    "entity set mapping `{}` has no scalar property `{}`",
                    entity_set.name, property.name
                )));
            };

            let column = self.cx.column(table, column_name)?;
            properties.insert(property.id, column.id);
        }

        let description = entity_type
            .description()
            .unwrap_or(&self.builder.empty_description)
            .to_string();

        Ok(EntityMapping {
            entity_type: entity_type.id,
            entity_set: entity_set.id,
            table: table.id,
            properties,
            class_name: normalize(&entity_type.name),
            description,
        })
    }
}
