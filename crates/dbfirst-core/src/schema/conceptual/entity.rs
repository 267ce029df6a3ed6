use std::fmt;

/// A conceptual record shape.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityType {
    /// Uniquely identifies the entity type within the schema
    pub id: EntityTypeId,

    /// Name of the entity type
    pub name: String,

    /// Scalar properties, in declaration order
    pub properties: Vec<Property>,

    /// Documentation attached to the type, if any
    pub documentation: Option<Documentation>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityTypeId(pub usize);

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// Uniquely identifies the property within the schema
    pub id: PropertyId,

    /// The property name
    pub name: String,

    /// Name of the conceptual primitive type (`Int32`, `String`, ...)
    pub ty: String,

    /// True if the property can be null
    pub nullable: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyId {
    pub entity_type: EntityTypeId,
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Documentation {
    pub summary: Option<String>,
    pub long_description: Option<String>,
}

impl EntityType {
    pub(crate) fn new(id: EntityTypeId, name: String) -> Self {
        Self {
            id,
            name,
            properties: vec![],
            documentation: None,
        }
    }

    pub fn property(&self, id: impl Into<PropertyId>) -> &Property {
        let id = id.into();
        assert_eq!(self.id, id.entity_type);
        &self.properties[id.index]
    }

    /// Finds a property by exact, case-sensitive name.
    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Appends a property and returns it for further configuration.
    pub fn add_property(
        &mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
    ) -> &mut Property {
        let id = self.id.property(self.properties.len());
        self.properties.push(Property {
            id,
            name: name.into(),
            ty: ty.into(),
            nullable: false,
        });
        &mut self.properties[id.index]
    }

    /// Returns the most descriptive documentation text: the long description
    /// when present and non-empty, otherwise the summary.
    pub fn description(&self) -> Option<&str> {
        self.documentation.as_ref().and_then(Documentation::text)
    }
}

impl Documentation {
    fn text(&self) -> Option<&str> {
        [&self.long_description, &self.summary]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.is_empty())
    }
}

impl EntityTypeId {
    /// Create a `PropertyId` representing the current entity type's property
    /// at index `index`.
    pub const fn property(self, index: usize) -> PropertyId {
        PropertyId {
            entity_type: self,
            index,
        }
    }
}

impl From<&EntityType> for EntityTypeId {
    fn from(value: &EntityType) -> Self {
        value.id
    }
}

impl From<&Property> for PropertyId {
    fn from(value: &Property) -> Self {
        value.id
    }
}

impl fmt::Debug for EntityTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityTypeId({})", self.0)
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyId({}/{})", self.entity_type.0, self.index)
    }
}
