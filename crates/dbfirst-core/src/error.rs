mod adhoc;
mod document_malformed;
mod schema_mismatch;

use adhoc::AdhocError;
use document_malformed::DocumentMalformed;
use schema_mismatch::SchemaMismatch;
use std::sync::Arc;

pub use schema_mismatch::SchemaElement;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while correlating schemas or building the mapping model.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        let inner = err
            .inner
            .get_or_insert_with(|| Arc::new(ErrorInner::new(ErrorKind::Unknown)));

        match Arc::get_mut(inner) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                err
            }
            // The consequent is shared or already has a cause; wrap it instead
            // of mutating it.
            _ => Error {
                inner: Some(Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(AdhocError::from_display(&err)),
                    cause: Some(self),
                })),
            },
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl ErrorInner {
    fn new(kind: ErrorKind) -> ErrorInner {
        ErrorInner { kind, cause: None }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .inner
                .as_ref()
                .and_then(|inner| inner.cause.as_ref())
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    SchemaMismatch(SchemaMismatch),
    DocumentMalformed(DocumentMalformed),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            SchemaMismatch(err) => core::fmt::Display::fmt(err, f),
            DocumentMalformed(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown mapping error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner::new(kind))),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let err = Error::schema_mismatch(SchemaElement::Column, "cust_id", Some("customer_order"))
            .context(err!("mapping property `CustId`"))
            .context(err!("mapping entity set `CustomerOrders`"));

        assert_eq!(
            err.to_string(),
            "mapping entity set `CustomerOrders`: mapping property `CustId`: \
             schema mismatch: column `cust_id` not found in `customer_order`"
        );
    }

    #[test]
    fn predicates_see_through_context() {
        let err = Error::schema_mismatch(SchemaElement::Table, "orders", None)
            .context(err!("mapping entity set `Orders`"));

        assert!(err.is_schema_mismatch());
        assert!(!err.is_document_malformed());
        assert_eq!(err.schema_element(), Some(SchemaElement::Table));
    }

    #[test]
    fn shared_consequent_is_wrapped() {
        let consequent = err!("outer");
        let _keep = consequent.clone();

        let err = Error::document_malformed("missing `Name`").context(consequent);
        assert_eq!(
            err.to_string(),
            "outer: malformed mapping document: missing `Name`"
        );
        assert!(err.is_document_malformed());
    }

    #[test]
    fn schema_mismatch_without_scope() {
        let err = Error::schema_mismatch(SchemaElement::Table, "customer_order", None);
        assert_eq!(
            err.to_string(),
            "schema mismatch: table `customer_order` not found"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }
}
