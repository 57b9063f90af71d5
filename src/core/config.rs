use serde::{Deserialize, Serialize};

/// Line separator used between IIF lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`, as written by QuickBooks Desktop itself.
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// What to do when the input holds no TRNS or SPL record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingTransactions {
    /// Write the list blocks only, without an `!ENDTRNS`/`ENDTRNS` section.
    #[default]
    OmitSection,
    /// Fail with [`IifError::Assembly`](super::IifError::Assembly).
    Error,
}

/// Configuration for IIF export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IifConfig {
    /// Separator between lines. No separator follows the last line.
    pub line_ending: LineEnding,
    /// Behavior for input without transaction records.
    pub missing_transactions: MissingTransactions,
    /// Reject input where records of one type produce different headers.
    pub check_headers: bool,
}

/// Builder for [`IifConfig`].
///
/// # Example
///
/// ```
/// use iif::core::{IifConfigBuilder, LineEnding, MissingTransactions};
///
/// let config = IifConfigBuilder::new()
///     .line_ending(LineEnding::CrLf)
///     .missing_transactions(MissingTransactions::Error)
///     .build();
/// assert!(!config.check_headers);
/// ```
#[derive(Debug, Default)]
pub struct IifConfigBuilder {
    config: IifConfig,
}

impl IifConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line separator.
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    /// Set the policy for input without TRNS/SPL records.
    pub fn missing_transactions(mut self, policy: MissingTransactions) -> Self {
        self.config.missing_transactions = policy;
        self
    }

    /// Enable or disable the per-type header consistency check.
    pub fn check_headers(mut self, check: bool) -> Self {
        self.config.check_headers = check;
        self
    }

    pub fn build(self) -> IifConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_export() {
        let config = IifConfig::default();
        assert_eq!(config.line_ending, LineEnding::Lf);
        assert_eq!(config.missing_transactions, MissingTransactions::OmitSection);
        assert!(!config.check_headers);
    }

    #[test]
    fn builder_sets_all_fields() {
        let config = IifConfigBuilder::new()
            .line_ending(LineEnding::CrLf)
            .missing_transactions(MissingTransactions::Error)
            .check_headers(true)
            .build();
        assert_eq!(config.line_ending.as_str(), "\r\n");
        assert_eq!(config.missing_transactions, MissingTransactions::Error);
        assert!(config.check_headers);
    }

    #[test]
    fn partial_config_deserializes() {
        let config: IifConfig = serde_json::from_str(r#"{"line_ending":"CrLf"}"#).unwrap();
        assert_eq!(config.line_ending, LineEnding::CrLf);
        assert_eq!(config.missing_transactions, MissingTransactions::OmitSection);
    }
}
