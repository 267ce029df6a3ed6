use super::Error;

/// An error built from a formatted message, without a more specific kind.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from format arguments. Used by the `err!` and `bail!`
    /// macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message = match args.as_str() {
            Some(s) => s.into(),
            None => args.to_string().into_boxed_str(),
        };

        Error::from(super::ErrorKind::Adhoc(AdhocError { message }))
    }
}

impl AdhocError {
    pub(super) fn from_display(value: &impl core::fmt::Display) -> AdhocError {
        AdhocError {
            message: value.to_string().into_boxed_str(),
        }
    }
}
