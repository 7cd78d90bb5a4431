//! Messages exchanged with the view and the host.
//!
//! Both directions use a `command` tag, matching what the view script posts
//! and listens for.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sf_explorer_rest::{ObjectMetadata, ObjectSummary};

/// A command posted by the view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum InboundCommand {
    #[serde(rename_all = "camelCase")]
    SelectObject { object_name: String },

    /// Older views post `runSOQLQuery`.
    #[serde(alias = "runSOQLQuery")]
    RunQuery { query: String },

    Reauthenticate,
}

/// A notification pushed to the view.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum OutboundMessage {
    #[serde(rename_all = "camelCase")]
    LoadObjects {
        objects: Vec<ObjectSummary>,
        user_name: String,
        org_name: String,
        current_object: Option<String>,
    },

    DisplayMetadata { data: ObjectMetadata },

    #[serde(rename = "displaySOQLResults")]
    DisplaySoqlResults { data: Vec<Value> },

    Error { message: String },
}

/// Panel lifecycle signals from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LifecycleEvent {
    Visible,
    Hidden,
    Dispose,
}

/// One line of host input: a lifecycle event or a view command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HostMessage {
    Lifecycle(LifecycleEvent),
    Command(InboundCommand),
}
