//! Storage mapping document.
//!
//! The mapping document states, for every conceptual entity set and
//! association set, which store entity set backs it and how its properties
//! correspond to columns. The document is parsed once into typed nodes; the
//! layout differences between [`Dialect`]s are resolved while parsing, so
//! lookups never need to know which dialect the document was written in.

mod dialect;
pub use dialect::Dialect;

mod element;
use element::Element;

mod node;
pub use node::{AssociationSetMapping, EndProperty, EntitySetMapping, ScalarProperty};

use crate::{Error, Result};

use indexmap::IndexMap;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct MappingDocument {
    dialect: Dialect,

    /// Namespace URI declared by the root element
    namespace: String,

    /// Entity set mappings by conceptual entity set name
    entity_sets: IndexMap<String, EntitySetMapping>,

    /// Association set mappings by conceptual association set name
    association_sets: IndexMap<String, AssociationSetMapping>,
}

impl MappingDocument {
    /// Parses a mapping document from UTF-8 bytes.
    pub fn from_bytes(src: &[u8]) -> Result<Self> {
        let src = std::str::from_utf8(src).map_err(|err| {
            Error::document_malformed(format!("document is not valid UTF-8: {err}"))
        })?;
        Self::parse(src)
    }

    /// Parses a mapping document.
    pub fn parse(src: &str) -> Result<Self> {
        let root = Element::parse(src)?;

        if root.local_name != "Mapping" {
            return Err(Error::document_malformed(format!(
                "expected root element `Mapping`, found `{}`",
                root.local_name
            )));
        }

        let Some(namespace) = root.namespace.clone() else {
            return Err(Error::document_malformed(
                "root element does not declare a namespace",
            ));
        };

        let Some(dialect) = Dialect::from_namespace(&namespace) else {
            return Err(Error::document_malformed(format!(
                "unrecognized mapping namespace `{namespace}`"
            )));
        };

        tracing::debug!(?dialect, %namespace, "detected mapping document dialect");

        let mut entity_sets = IndexMap::new();
        let mut association_sets = IndexMap::new();

        for element in root.descendants() {
            if element.is(&namespace, "EntitySetMapping") {
                let mapping = EntitySetMapping::lower(element, &namespace, dialect)?;
                // The first mapping for a name wins, as a single-node query would.
                entity_sets
                    .entry(mapping.name().to_string())
                    .or_insert(mapping);
            } else if element.is(&namespace, "AssociationSetMapping") {
                let mapping = AssociationSetMapping::lower(element, &namespace)?;
                association_sets
                    .entry(mapping.name().to_string())
                    .or_insert(mapping);
            }
        }

        Ok(MappingDocument {
            dialect,
            namespace,
            entity_sets,
            association_sets,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the mapping of the named conceptual entity set, if the document
    /// has one.
    pub fn entity_set_mapping(&self, name: &str) -> Option<&EntitySetMapping> {
        self.entity_sets.get(name)
    }

    /// Returns the mapping of the named conceptual association set, if the
    /// document has one.
    pub fn association_set_mapping(&self, name: &str) -> Option<&AssociationSetMapping> {
        self.association_sets.get(name)
    }

    pub fn entity_set_mappings(&self) -> impl ExactSizeIterator<Item = &EntitySetMapping> {
        self.entity_sets.values()
    }

    pub fn association_set_mappings(
        &self,
    ) -> impl ExactSizeIterator<Item = &AssociationSetMapping> {
        self.association_sets.values()
    }
}

impl FromStr for MappingDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
