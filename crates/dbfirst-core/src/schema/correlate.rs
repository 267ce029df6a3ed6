use super::conceptual::{
    self, AssociationEnd, AssociationSetEnd, AssociationType, EntityType, Property,
};
use super::store::{self, Column, ColumnId, Table, TableId};
use crate::{bail, Error, Result, SchemaElement};

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Name-based lookup between the store schema and the conceptual schema.
///
/// Names are matched exactly and case-sensitively, the way the mapping
/// document spells them. Any failed lookup is a [`SchemaMismatch`] error: a
/// name the document references but the schema lacks means the inputs are out
/// of sync.
///
/// [`SchemaMismatch`]: crate::Error::is_schema_mismatch
#[derive(Debug)]
pub struct Correlation<'a> {
    conceptual: &'a conceptual::Schema,
    store: &'a store::Schema,

    /// Store tables by name
    tables: HashMap<&'a str, &'a Table>,
}

impl<'a> Correlation<'a> {
    /// Indexes both schemas.
    ///
    /// Fails if either side declares the same table or entity set name twice,
    /// since name lookups would then be ambiguous, or if an element's id does
    /// not match its position, since ids are resolved by position.
    pub fn new(conceptual: &'a conceptual::Schema, store: &'a store::Schema) -> Result<Self> {
        verify_ids(conceptual, store)?;

        let mut tables = HashMap::with_capacity(store.tables.len());
        for table in &store.tables {
            if tables.insert(table.name.as_str(), table).is_some() {
                bail!(
                    "store schema `{}` declares table `{}` more than once",
                    store.name,
                    table.name
                );
            }
        }

        let mut entity_sets = HashSet::with_capacity(conceptual.entity_sets.len());
        for entity_set in &conceptual.entity_sets {
            if !entity_sets.insert(entity_set.name.as_str()) {
                bail!(
                    "entity container `{}` declares entity set `{}` more than once",
                    conceptual.container,
                    entity_set.name
                );
            }
        }

        Ok(Self {
            conceptual,
            store,
            tables,
        })
    }

    pub fn conceptual(&self) -> &'a conceptual::Schema {
        self.conceptual
    }

    pub fn store(&self) -> &'a store::Schema {
        self.store
    }

    /// Resolves a store table by name.
    pub fn table(&self, name: &str) -> Result<&'a Table> {
        self.tables.get(name).copied().ok_or_else(|| {
            Error::schema_mismatch(SchemaElement::Table, name, Some(&self.store.name))
        })
    }

    /// Resolves a column of `table` by name.
    pub fn column(&self, table: &'a Table, name: &str) -> Result<&'a Column> {
        table
            .column_by_name(name)
            .ok_or_else(|| Error::schema_mismatch(SchemaElement::Column, name, Some(&table.name)))
    }

    /// Resolves a property of `entity_type` by name.
    pub fn property(&self, entity_type: &'a EntityType, name: &str) -> Result<&'a Property> {
        entity_type.property_by_name(name).ok_or_else(|| {
            Error::schema_mismatch(SchemaElement::Property, name, Some(&entity_type.name))
        })
    }

    /// Returns the association type end that an association set end binds,
    /// matched by role name.
    pub fn corresponding_end(
        &self,
        association: &'a AssociationType,
        set_end: &AssociationSetEnd,
    ) -> Result<&'a AssociationEnd> {
        association.end_by_name(&set_end.name).ok_or_else(|| {
            Error::schema_mismatch(
                SchemaElement::AssociationEnd,
                &set_end.name,
                Some(&association.name),
            )
        })
    }
}

/// Checks that every id in both schemas names the element's own position.
fn verify_ids(conceptual: &conceptual::Schema, store: &store::Schema) -> Result<()> {
    for (index, table) in store.tables.iter().enumerate() {
        verify_id("table", &table.name, table.id, TableId(index))?;

        for (index, column) in table.columns.iter().enumerate() {
            let expected = ColumnId {
                table: table.id,
                index,
            };
            verify_id("column", &column.name, column.id, expected)?;
        }
    }

    for (index, entity_type) in conceptual.entity_types.iter().enumerate() {
        verify_id(
            "entity type",
            &entity_type.name,
            entity_type.id,
            conceptual::EntityTypeId(index),
        )?;

        for (index, property) in entity_type.properties.iter().enumerate() {
            let expected = entity_type.id.property(index);
            verify_id("property", &property.name, property.id, expected)?;
        }
    }

    for (index, entity_set) in conceptual.entity_sets.iter().enumerate() {
        verify_id(
            "entity set",
            &entity_set.name,
            entity_set.id,
            conceptual::EntitySetId(index),
        )?;
    }

    for (index, association) in conceptual.association_types.iter().enumerate() {
        verify_id(
            "association type",
            &association.name,
            association.id,
            conceptual::AssociationTypeId(index),
        )?;

        for (index, end) in association.ends.iter().enumerate() {
            verify_id("association end", &end.name, end.id, association.id.end(index))?;
        }
    }

    for (index, association_set) in conceptual.association_sets.iter().enumerate() {
        verify_id(
            "association set",
            &association_set.name,
            association_set.id,
            conceptual::AssociationSetId(index),
        )?;
    }

    Ok(())
}

fn verify_id<T>(kind: &str, name: &str, id: T, expected: T) -> Result<()>
where
    T: PartialEq + fmt::Debug,
{
    if id != expected {
        bail!("{kind} `{name}` is stored at {expected:?} but has id {id:?}");
    }
    Ok(())
}
