//! Options shared by `astify` and `sqlify`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dialect::{dialect_for, Dialect, DialectName};
use crate::error::Result;

/// Caller-supplied options.
///
/// Only `database` affects parsing and serialization; it selects the
/// dialect, falling back to the generic dialect when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Dialect name, e.g. `"spark"`.
    pub database: Option<String>,
}

impl Options {
    /// Creates options selecting the default dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self { database: None }
    }

    /// Selects a dialect by name.
    #[must_use]
    pub fn database(mut self, name: impl Into<String>) -> Self {
        self.database = Some(name.into());
        self
    }

    /// Reads options from a JSON object such as `{"database": "spark"}`.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not a JSON object of the
    /// expected shape.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolves the selected dialect.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedDialect` if `database` names an unknown
    /// dialect.
    pub fn dialect(&self) -> Result<&'static dyn Dialect> {
        let Some(name) = self.database.as_deref() else {
            return Ok(DialectName::default().dialect());
        };
        dialect_for(name).inspect_err(|_| warn!(database = name, "unknown dialect requested"))
    }
}

impl From<DialectName> for Options {
    fn from(name: DialectName) -> Self {
        Self::new().database(name.as_str())
    }
}
