/// Layout of a storage mapping document, selected by its root namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Scalar property mappings sit directly under `EntitySetMapping`.
    Flat,

    /// Scalar property mappings sit under
    /// `EntitySetMapping/EntityTypeMapping/MappingFragment`.
    Fragmented,
}

/// Known mapping namespaces and the dialect each one is written in.
const NAMESPACES: &[(&str, Dialect)] = &[
    (
        "urn:schemas-microsoft-com:windows:storage:mapping:CS",
        Dialect::Flat,
    ),
    (
        "http://schemas.microsoft.com/ado/2008/09/mapping/cs",
        Dialect::Flat,
    ),
    (
        "http://schemas.microsoft.com/ado/2009/11/mapping/cs",
        Dialect::Fragmented,
    ),
];

impl Dialect {
    /// Returns the dialect of a document whose root element is in `namespace`.
    pub fn from_namespace(namespace: &str) -> Option<Dialect> {
        NAMESPACES
            .iter()
            .find(|(uri, _)| *uri == namespace)
            .map(|(_, dialect)| *dialect)
    }

    /// Returns the newest namespace written in this dialect.
    pub fn namespace(self) -> &'static str {
        NAMESPACES
            .iter()
            .rev()
            .find(|(_, dialect)| *dialect == self)
            .map(|(uri, _)| *uri)
            .unwrap_or_default()
    }

    /// Child element path from an `EntitySetMapping` to the element that holds
    /// its `StoreEntitySet` attribute and `ScalarProperty` children.
    pub(crate) fn entity_fragment_path(self) -> &'static [&'static str] {
        match self {
            Dialect::Flat => &[],
            Dialect::Fragmented => &["EntityTypeMapping", "MappingFragment"],
        }
    }
}
