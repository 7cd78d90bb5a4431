//! The normalized object schema sent to the view.
//!
//! Describe, the record-type query and the layout listing each have their own
//! shape upstream. Each gets one normalization function here, and
//! [`ObjectMetadata::assemble`] joins them.

use serde::{Deserialize, Serialize};
use sf_explorer_client::security::url;

use crate::describe::{
    ChildRelationship, DescribeGlobalResult, DescribeSObjectResult, FieldDescribe, PicklistValue,
    RecordTypeRow,
};

/// `{label, apiName}` entry of the object list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    pub label: String,
    pub api_name: String,
}

/// Label and API name of a record type or page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedItem {
    pub label: String,
    pub api_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub api_name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
    pub picklist_values: Vec<PicklistValue>,
    pub reference_to: Vec<String>,
    pub relationship_name: Option<String>,
    pub custom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRelationshipInfo {
    #[serde(rename = "childSObject")]
    pub child_sobject: String,
    pub relationship_name: Option<String>,
    pub field: String,
}

/// Everything the view shows for one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    pub api_name: String,
    pub label: String,
    pub fields: Vec<FieldInfo>,
    pub child_relationships: Vec<ChildRelationshipInfo>,
    pub record_types: Vec<NamedItem>,
    pub page_layouts: Vec<NamedItem>,
}

impl ObjectMetadata {
    /// Join the three upstream results for `object`.
    ///
    /// `layout_names` is the unfiltered `fullName` list of every layout in
    /// the org.
    pub fn assemble(
        object: &str,
        describe: DescribeSObjectResult,
        record_types: Vec<RecordTypeRow>,
        layout_names: &[String],
    ) -> Self {
        Self {
            api_name: describe.name,
            label: describe.label,
            fields: describe.fields.into_iter().map(normalize_field).collect(),
            child_relationships: describe
                .child_relationships
                .into_iter()
                .map(normalize_child_relationship)
                .collect(),
            record_types: record_types.into_iter().map(normalize_record_type).collect(),
            page_layouts: layouts_for_object(object, layout_names),
        }
    }
}

pub fn object_summaries(global: DescribeGlobalResult) -> Vec<ObjectSummary> {
    global
        .sobjects
        .into_iter()
        .map(|s| ObjectSummary {
            label: s.label,
            api_name: s.name,
        })
        .collect()
}

pub fn normalize_field(field: FieldDescribe) -> FieldInfo {
    let reference_to = if field.field_type == "reference" {
        field.reference_to.unwrap_or_default()
    } else {
        Vec::new()
    };

    FieldInfo {
        api_name: field.name,
        label: field.label,
        required: !field.nillable,
        picklist_values: field.picklist_values.unwrap_or_default(),
        reference_to,
        relationship_name: field.relationship_name.filter(|r| !r.is_empty()),
        custom: field.custom,
        field_type: field.field_type,
    }
}

pub fn normalize_child_relationship(rel: ChildRelationship) -> ChildRelationshipInfo {
    ChildRelationshipInfo {
        child_sobject: rel.child_sobject,
        relationship_name: rel.relationship_name,
        field: rel.field,
    }
}

pub fn normalize_record_type(row: RecordTypeRow) -> NamedItem {
    let api_name = row
        .developer_name
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| row.name.clone());
    NamedItem {
        label: row.name,
        api_name,
    }
}

/// Layouts of `object`, from layout full names of the form
/// `{Object}-{Encoded Layout Name}`.
///
/// The label is everything after the first `-`, percent-decoded, so layout
/// names that themselves contain `-` keep their full text.
pub fn layouts_for_object(object: &str, layout_names: &[String]) -> Vec<NamedItem> {
    let prefix = format!("{object}-");
    layout_names
        .iter()
        .filter(|full_name| full_name.starts_with(&prefix))
        .map(|full_name| {
            let encoded = full_name.split_once('-').map_or("", |(_, rest)| rest);
            NamedItem {
                label: url::decode_param(encoded),
                api_name: full_name.clone(),
            }
        })
        .collect()
}
