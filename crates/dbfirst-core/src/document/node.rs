use super::{element::Element, Dialect};
use crate::{err, Error, Result};

/// Maps a conceptual entity set to a store entity set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySetMapping {
    name: String,

    /// The element the dialect places the table binding on, if the document
    /// has one for this set.
    fragment: Option<MappingFragment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MappingFragment {
    store_entity_set: Option<String>,
    scalar_properties: Vec<ScalarProperty>,
}

/// Maps a conceptual association set to its junction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationSetMapping {
    name: String,
    store_entity_set: Option<String>,
    ends: Vec<EndProperty>,
}

/// The foreign key columns of one association set end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndProperty {
    name: String,
    scalar_properties: Vec<ScalarProperty>,
}

/// A property name to column name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarProperty {
    name: String,
    column_name: String,
}

impl EntitySetMapping {
    pub(super) fn lower(element: &Element, namespace: &str, dialect: Dialect) -> Result<Self> {
        let name = element.expect_attr("Name")?.to_string();

        let fragment = element
            .descend(namespace, dialect.entity_fragment_path())
            .map(|fragment| {
                Ok::<_, Error>(MappingFragment {
                    store_entity_set: fragment.attr("StoreEntitySet").map(String::from),
                    scalar_properties: ScalarProperty::lower_children(fragment, namespace)?,
                })
            })
            .transpose()?;

        Ok(EntitySetMapping { name, fragment })
    }

    /// Name of the conceptual entity set
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the store entity set (table) the conceptual set is bound to.
    pub fn store_entity_set(&self) -> Result<&str> {
        let Some(fragment) = &self.fragment else {
            return Err(Error::document_malformed(format!(
                "entity set mapping `{}` has no mapping fragment",
                self.name
            )));
        };

        fragment.store_entity_set.as_deref().ok_or_else(|| {
            Error::document_malformed(format!(
                "entity set mapping `{}` does not name a store entity set",
                self.name
            ))
        })
    }

    /// Returns the column mapped to `property`, if the mapping has one.
    pub fn scalar_property_column(&self, property: &str) -> Option<&str> {
        self.scalar_properties()
            .iter()
            .find(|scalar| scalar.name == property)
            .map(ScalarProperty::column_name)
    }

    pub fn scalar_properties(&self) -> &[ScalarProperty] {
        self.fragment
            .as_ref()
            .map(|fragment| &fragment.scalar_properties[..])
            .unwrap_or_default()
    }
}

impl AssociationSetMapping {
    pub(super) fn lower(element: &Element, namespace: &str) -> Result<Self> {
        let name = element.expect_attr("Name")?.to_string();
        let store_entity_set = element.attr("StoreEntitySet").map(String::from);

        let ends = element
            .children_named(namespace, "EndProperty")
            .map(|end| EndProperty::lower(end, namespace))
            .collect::<Result<_>>()
            .map_err(|err| err.context(err!("in association set mapping `{name}`")))?;

        Ok(AssociationSetMapping {
            name,
            store_entity_set,
            ends,
        })
    }

    /// Name of the conceptual association set
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the store entity set serving as the junction table.
    pub fn store_entity_set(&self) -> Result<&str> {
        self.store_entity_set.as_deref().ok_or_else(|| {
            Error::document_malformed(format!(
                "association set mapping `{}` does not name a store entity set",
                self.name
            ))
        })
    }

    /// Returns the end property mapping for the association set end `name`.
    pub fn end(&self, name: &str) -> Option<&EndProperty> {
        self.ends.iter().find(|end| end.name == name)
    }

    pub fn ends(&self) -> &[EndProperty] {
        &self.ends
    }
}

impl EndProperty {
    fn lower(element: &Element, namespace: &str) -> Result<Self> {
        let name = element.expect_attr("Name")?.to_string();

        // Every child of an end is a foreign key column mapping.
        let scalar_properties = element
            .children
            .iter()
            .map(|child| {
                if !child.is(namespace, "ScalarProperty") {
                    return Err(Error::document_malformed(format!(
                        "end property `{name}` contains unexpected element `{}`",
                        child.local_name
                    )));
                }
                ScalarProperty::lower(child)
            })
            .collect::<Result<_>>()?;

        Ok(EndProperty {
            name,
            scalar_properties,
        })
    }

    /// Role name of the association set end
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[ScalarProperty] {
        &self.scalar_properties
    }

    /// Iterates `(property name, column name)` pairs in document order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.scalar_properties
            .iter()
            .map(|scalar| (scalar.name(), scalar.column_name()))
    }
}

impl ScalarProperty {
    fn lower(element: &Element) -> Result<Self> {
        Ok(ScalarProperty {
            name: element.expect_attr("Name")?.to_string(),
            column_name: element.expect_attr("ColumnName")?.to_string(),
        })
    }

    fn lower_children(element: &Element, namespace: &str) -> Result<Vec<Self>> {
        element
            .children_named(namespace, "ScalarProperty")
            .map(ScalarProperty::lower)
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }
}
