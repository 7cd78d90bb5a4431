//! Validated user input.
//!
//! Object names and query text arrive from the view as free text. They are
//! parsed into these types before any network call, so a rejected value
//! never reaches the org.

use std::fmt;

use sf_explorer_client::security::soql;

use crate::error::{Error, Result};

/// An SObject API name that is safe to place in a URL path and a SOQL
/// string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(String);

impl ObjectName {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::invalid_input("object name is empty"));
        }
        if raw.contains(['\'', '"']) {
            return Err(Error::invalid_input(format!(
                "object name contains a quote: {raw}"
            )));
        }
        if !soql::is_safe_sobject_name(raw) {
            return Err(Error::invalid_input(format!("not an object API name: {raw}")));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A query that starts with `SELECT`.
///
/// This is a guard against pasting DML into the query box, not a SOQL
/// parser; the org rejects anything else that is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadQuery(String);

impl ReadQuery {
    pub fn parse(raw: &str) -> Result<Self> {
        let text = raw.trim_start();
        if text.is_empty() {
            return Err(Error::invalid_input("query is empty"));
        }

        let keyword = text.get(..6).unwrap_or_default();
        let after = text[keyword.len()..].chars().next();
        let is_select = keyword.eq_ignore_ascii_case("select")
            && after.is_some_and(char::is_whitespace);
        if !is_select {
            return Err(Error::invalid_input(
                "only SELECT queries can be run from the explorer",
            ));
        }

        Ok(Self(text.trim_end().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReadQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
