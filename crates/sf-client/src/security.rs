//! Security utilities for Salesforce API operations.
//!
//! Every user-provided value that ends up inside SOQL text, a URL, or a SOAP
//! envelope goes through one of the helpers in this module.
//!
//! ```rust
//! use sf_explorer_client::security::soql;
//!
//! let name = soql::escape_string("O'Brien");
//! let query = format!("SELECT Id FROM Account WHERE Name = '{}'", name);
//! assert_eq!(query, "SELECT Id FROM Account WHERE Name = 'O\\'Brien'");
//! ```

/// SOQL escaping utilities for injection prevention.
pub mod soql {
    /// Escape a string value for use in SOQL string literals.
    ///
    /// - Single quotes (`'`) are escaped to (`\'`)
    /// - Backslashes (`\`) are escaped to (`\\`)
    /// - Newlines, carriage returns and tabs are escaped
    ///
    /// # Example
    ///
    /// ```rust
    /// use sf_explorer_client::security::soql;
    ///
    /// let safe = soql::escape_string("O'Brien & Co.");
    /// assert_eq!(safe, "O\\'Brien & Co.");
    /// ```
    #[must_use]
    pub fn escape_string(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '\'' => escaped.push_str("\\'"),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Validate that an SObject API name contains only safe characters.
    ///
    /// API names start with a letter and contain only ASCII alphanumerics and
    /// underscores (`Account`, `ns__Invoice__c`, `Order_Event__e`).
    ///
    /// ```rust
    /// use sf_explorer_client::security::soql;
    ///
    /// assert!(soql::is_safe_sobject_name("Custom_Object__c"));
    /// assert!(!soql::is_safe_sobject_name("Account/../limits"));
    /// ```
    #[must_use]
    pub fn is_safe_sobject_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }
}

/// URL encoding utilities for parameter safety.
pub mod url {
    /// URL-encode a parameter value.
    ///
    /// ```rust
    /// use sf_explorer_client::security::url;
    ///
    /// assert_eq!(url::encode_param("001/../secret"), "001%2F..%2Fsecret");
    /// ```
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Percent-decode a value, keeping the input unchanged when it does not
    /// decode to valid UTF-8.
    ///
    /// ```rust
    /// use sf_explorer_client::security::url;
    ///
    /// assert_eq!(url::decode_param("Account %28Sales%29 Layout"), "Account (Sales) Layout");
    /// ```
    #[must_use]
    pub fn decode_param(value: &str) -> String {
        match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value.to_string(),
        }
    }
}

/// XML escaping utilities for SOAP/Metadata API.
pub mod xml {
    /// Escape a string for safe inclusion in XML content.
    ///
    /// ```rust
    /// use sf_explorer_client::security::xml;
    ///
    /// let safe = xml::escape("Hello <World> & 'Friends'");
    /// assert_eq!(safe, "Hello &lt;World&gt; &amp; &apos;Friends&apos;");
    /// ```
    #[must_use]
    pub fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Reverse the five predefined XML entities.
    #[must_use]
    pub fn unescape(value: &str) -> String {
        value
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&")
    }
}
