use super::BuildMapping;
use crate::mapping::{EndColumns, ManyToManyMapping};
use crate::schema::conceptual::{AssociationSet, AssociationType};
use crate::{bail, err, Error, Result};

use indexmap::IndexMap;

impl BuildMapping<'_> {
    pub(super) fn build_many_to_many_mappings(&mut self) -> Result<()> {
        let conceptual = self.cx.conceptual();

        for association_set in &conceptual.association_sets {
            let association = conceptual.association_type(association_set.association_type);

            // Associations with a one or zero-or-one end are carried by
            // foreign keys on the entity tables, not by a junction table.
            if !association.is_many_to_many() {
                tracing::trace!(
                    association_set = %association_set.name,
                    "skipping association set that is not many-to-many"
                );
                continue;
            }

            let mapping = self
                .build_many_to_many_mapping(association_set, association)
                .map_err(|e| {
                    e.context(err!("mapping association set `{}`", association_set.name))
                })?;

            if self.mapping.many_to_many.contains_key(&association.id) {
                bail!(
                    "association type `{}` is bound by more than one association set",
                    association.name
                );
            }

            self.mapping.many_to_many.insert(association.id, mapping);
        }

        Ok(())
    }

    fn build_many_to_many_mapping(
        &self,
        association_set: &AssociationSet,
        association: &AssociationType,
    ) -> Result<ManyToManyMapping> {
        let conceptual = self.cx.conceptual();

        let Some(set_mapping) = self.document.association_set_mapping(&association_set.name)
        else {
            return Err(Error::document_malformed(format!(
                "no association set mapping for `{}`",
                association_set.name
            )));
        };

        let table = self.cx.table(set_mapping.store_entity_set()?)?;

        let mut ends = IndexMap::with_capacity(association_set.ends.len());
        for set_end in &association_set.ends {
            let Some(end_mapping) = set_mapping.end(&set_end.name) else {
                return Err(Error::document_malformed(format!(
                    "association set mapping `{}` has no end property `{}`",
                    association_set.name, set_end.name
                )));
            };

            let entity_type = conceptual.element_type(set_end.entity_set);

            let mut columns = EndColumns::with_capacity(end_mapping.properties().len());
            for (property_name, column_name) in end_mapping.columns() {
                let property = self.cx.property(entity_type, property_name)?;

                if self.builder.strict_many_to_many_columns {
                    self.cx.column(table, column_name)?;
                }

                if columns
                    .insert(property.id, column_name.to_string())
                    .is_some()
                {
                    return Err(Error::document_malformed(format!(
                        "end property `{}` maps property `{}` more than once",
                        set_end.name, property_name
                    )));
                }
            }

            // Ends are keyed by the association type's end, the identity the
            // code generator navigates relationships by.
            let end = self.cx.corresponding_end(association, set_end)?;
            ends.insert(end.id, columns);
        }

        Ok(ManyToManyMapping {
            association_type: association.id,
            association_set: association_set.id,
            table: table.id,
            ends,
        })
    }
}
