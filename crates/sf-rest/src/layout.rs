//! Metadata API `listMetadata` for page layouts.
//!
//! Layouts are not exposed through describe in a form that carries their
//! full names, so they come from the SOAP Metadata API. The envelope is small
//! and the response is flat, so plain string extraction is enough.

use sf_explorer_client::security::xml;

pub(crate) const LIST_METADATA_ACTION: &str = "listMetadata";

/// Build a `listMetadata` request for every `Layout` in the org.
pub(crate) fn list_layouts_envelope(session_id: &str, api_version: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <soap:Header>
    <SessionHeader xmlns="http://soap.sforce.com/2006/04/metadata">
      <sessionId>{session_id}</sessionId>
    </SessionHeader>
  </soap:Header>
  <soap:Body>
    <listMetadata xmlns="http://soap.sforce.com/2006/04/metadata">
      <queries>
        <type>Layout</type>
      </queries>
      <asOfVersion>{api_version}</asOfVersion>
    </listMetadata>
  </soap:Body>
</soap:Envelope>"#,
        session_id = xml::escape(session_id),
        api_version = xml::escape(api_version),
    )
}

/// A SOAP fault from the Metadata API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SoapFault {
    pub fault_code: String,
    pub fault_string: String,
}

impl std::fmt::Display for SoapFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.fault_code, self.fault_string)
    }
}

pub(crate) fn parse_soap_fault(body: &str) -> Option<SoapFault> {
    if !body.contains("faultcode") {
        return None;
    }

    let fault_code = extract_element(body, "faultcode")?;
    let fault_string =
        extract_element(body, "faultstring").unwrap_or_else(|| "Unknown error".to_string());

    Some(SoapFault {
        fault_code,
        fault_string,
    })
}

/// `fullName` of each `<result>` in a `listMetadata` response.
pub(crate) fn parse_full_names(body: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut search_from = body;

    while let Some(start) = search_from.find("<result>") {
        let remaining = &search_from[start..];
        let Some(end) = remaining.find("</result>") else {
            break;
        };
        let block = &remaining[..end];
        if let Some(full_name) = extract_element(block, "fullName") {
            names.push(xml::unescape(&full_name));
        }
        search_from = &remaining[end + "</result>".len()..];
    }

    names
}

/// Text of the first `<tag>`, with or without a namespace prefix.
fn extract_element(body: &str, tag: &str) -> Option<String> {
    let start_patterns = [
        format!("<{tag}>"),
        format!("<sf:{tag}>"),
        format!("<met:{tag}>"),
        format!("<tns:{tag}>"),
    ];

    for start in &start_patterns {
        if let Some(start_idx) = body.find(start.as_str()) {
            let content = &body[start_idx + start.len()..];
            let end_idx = content.find("</")?;
            return Some(content[..end_idx].to_string());
        }
    }
    None
}
