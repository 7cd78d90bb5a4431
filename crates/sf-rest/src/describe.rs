//! Describe wire types.
//!
//! Only the attributes the explorer shows are modelled. Everything optional
//! upstream is defaulted so that a describe from an older API version, or an
//! object with no relationships, still deserializes.

use serde::{Deserialize, Serialize};

// ============================================================================
// Describe Global Types
// ============================================================================

/// Result of `GET sobjects`.
#[derive(Debug, Clone, Deserialize)]
pub struct DescribeGlobalResult {
    #[serde(default)]
    pub sobjects: Vec<SObjectBasicInfo>,
}

/// One entry of the object catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct SObjectBasicInfo {
    pub name: String,
    pub label: String,
}

// ============================================================================
// Describe SObject Types
// ============================================================================

/// Result of `GET sobjects/{name}/describe`.
#[derive(Debug, Clone, Deserialize)]
pub struct DescribeSObjectResult {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub fields: Vec<FieldDescribe>,
    #[serde(rename = "childRelationships", default)]
    pub child_relationships: Vec<ChildRelationship>,
}

/// Field metadata from a describe.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescribe {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub nillable: bool,
    #[serde(default)]
    pub custom: bool,
    #[serde(rename = "picklistValues", default)]
    pub picklist_values: Option<Vec<PicklistValue>>,
    #[serde(rename = "referenceTo", default)]
    pub reference_to: Option<Vec<String>>,
    #[serde(rename = "relationshipName", default)]
    pub relationship_name: Option<String>,
}

/// A picklist entry. Passed through to the view as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PicklistValue {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub default_value: bool,
}

/// Child relationship metadata for an SObject.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildRelationship {
    #[serde(rename = "childSObject")]
    pub child_sobject: String,
    pub field: String,
    #[serde(rename = "relationshipName", default)]
    pub relationship_name: Option<String>,
}

/// Row of `SELECT Name, DeveloperName FROM RecordType`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordTypeRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "DeveloperName", default)]
    pub developer_name: Option<String>,
}
