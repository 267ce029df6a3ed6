use super::Error;

/// Error when the storage mapping document cannot be used.
///
/// This occurs when:
/// - The document is not well-formed XML
/// - The root element declares a namespace that is not a known mapping dialect
/// - An expected element (entity set mapping, end property, scalar property) is missing
/// - An element is missing a required attribute (`StoreEntitySet`, `Name`, `ColumnName`)
#[derive(Debug)]
pub(super) struct DocumentMalformed {
    message: Box<str>,
}

impl std::error::Error for DocumentMalformed {}

impl core::fmt::Display for DocumentMalformed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed mapping document: {}", self.message)
    }
}

impl Error {
    /// Creates a malformed document error.
    pub fn document_malformed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DocumentMalformed(DocumentMalformed {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its cause chain, is a
    /// malformed document error.
    pub fn is_document_malformed(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::DocumentMalformed(_)))
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Error {
        Error::document_malformed(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Error {
        Error::document_malformed(err.to_string())
    }
}
