//! # sf-explorer-rest
//!
//! REST and Metadata API calls behind the object explorer.
//!
//! ## Features
//!
//! - **Object catalog** - every object in the org as `{label, apiName}`
//! - **Object metadata** - describe, record types and page layouts fetched
//!   concurrently and normalized into one schema
//! - **Read-only SOQL** - `SELECT` queries with pagination up to a row limit
//! - **Identity** - the user behind the current session
//!
//! Object names and query text are validated into [`ObjectName`] and
//! [`ReadQuery`] before anything is sent to the org.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_explorer_rest::{ExplorerRestClient, ReadQuery};
//!
//! let rest = ExplorerRestClient::new(http);
//! let rows = rest
//!     .run_query(&session, &ReadQuery::parse("SELECT Id, Name FROM Account")?)
//!     .await?;
//! ```

mod client;
mod describe;
mod error;
mod identity;
mod input;
mod layout;
mod metadata;

pub use client::{ExplorerRestClient, DEFAULT_ROW_LIMIT};

// Describe wire types
pub use describe::{
    ChildRelationship, DescribeGlobalResult, DescribeSObjectResult, FieldDescribe, PicklistValue,
    RecordTypeRow, SObjectBasicInfo,
};

pub use error::{Error, ErrorKind, Result};
pub use identity::Identity;
pub use input::{ObjectName, ReadQuery};

// Normalized model
pub use metadata::{
    layouts_for_object, normalize_field, ChildRelationshipInfo, FieldInfo, NamedItem,
    ObjectMetadata, ObjectSummary,
};
