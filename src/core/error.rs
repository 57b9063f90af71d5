use thiserror::Error;

/// Errors that can occur while compiling or writing an IIF file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IifError {
    /// A record's field list is malformed (no fields, empty or unprintable field name).
    #[error("adapter error: {0}")]
    Adapter(String),

    /// The blocks cannot be assembled under the configured policy.
    #[error("assembly error: {0}")]
    Assembly(String),

    /// A record type code outside ACCNT, INVITEM, CLASS, CUST, VEND, TRNS, SPL.
    #[error("unknown record type: {0}")]
    UnknownRecordType(String),

    /// Filesystem failure while writing the output file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IifError {
    pub(crate) fn adapter(msg: impl Into<String>) -> Self {
        Self::Adapter(msg.into())
    }

    pub(crate) fn assembly(msg: impl Into<String>) -> Self {
        Self::Assembly(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            IifError::adapter("record has no fields").to_string(),
            "adapter error: record has no fields"
        );
        assert_eq!(
            IifError::UnknownRecordType("BUD".into()).to_string(),
            "unknown record type: BUD"
        );
    }

    #[test]
    fn io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: IifError = io.into();
        assert_eq!(err.to_string(), "denied");
        assert!(matches!(err, IifError::Io(_)));
    }
}
