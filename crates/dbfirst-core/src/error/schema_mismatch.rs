use super::Error;

/// Error when a name referenced by the mapping document does not exist in the
/// schema it is supposed to refer to.
///
/// The mapping document and the schemas are produced together, so a mismatch
/// means the inputs are out of sync. Retrying cannot fix it.
#[derive(Debug)]
pub(super) struct SchemaMismatch {
    element: SchemaElement,
    name: Box<str>,
    scope: Option<Box<str>>,
}

/// The kind of schema element a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaElement {
    Table,
    Column,
    Property,
    AssociationEnd,
}

impl std::error::Error for SchemaMismatch {}

impl core::fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema mismatch: {} `{}`", self.element, self.name)?;
        match &self.scope {
            Some(scope) => write!(f, " not found in `{}`", scope),
            None => f.write_str(" not found"),
        }
    }
}

impl core::fmt::Display for SchemaElement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self {
            SchemaElement::Table => "table",
            SchemaElement::Column => "column",
            SchemaElement::Property => "property",
            SchemaElement::AssociationEnd => "association end",
        })
    }
}

impl Error {
    /// Creates a schema mismatch error for an element that could not be found.
    ///
    /// `scope` names the container that was searched (the table for a column,
    /// the entity type for a property), if any.
    pub fn schema_mismatch(
        element: SchemaElement,
        name: impl Into<String>,
        scope: Option<&str>,
    ) -> Error {
        Error::from(super::ErrorKind::SchemaMismatch(SchemaMismatch {
            element,
            name: name.into().into(),
            scope: scope.map(Into::into),
        }))
    }

    /// Returns `true` if this error, or any error in its cause chain, is a
    /// schema mismatch error.
    pub fn is_schema_mismatch(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::SchemaMismatch(_)))
    }

    /// Returns the kind of element that was missing, if a schema mismatch is
    /// part of this error's cause chain.
    pub fn schema_element(&self) -> Option<SchemaElement> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::SchemaMismatch(err) => Some(err.element),
            _ => None,
        })
    }
}
