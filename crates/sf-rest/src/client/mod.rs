//! REST client for the explorer.
//!
//! The client holds no credentials. Each call takes the [`Session`] to use,
//! so the session cache in `sf-explorer-auth` stays the single owner of the
//! token and every call sees the session that was just probed.

use serde::de::DeserializeOwned;
use sf_explorer_auth::Session;
use sf_explorer_client::{QueryResult, SalesforceClient, SfHttpClient};

use crate::error::Result;

mod describe;
mod identity;
mod layout;
mod query;

/// Default cap on rows collected by a user query.
pub const DEFAULT_ROW_LIMIT: usize = 2000;

/// Explorer calls against one org.
///
/// # Example
///
/// ```rust,ignore
/// use sf_explorer_rest::{ExplorerRestClient, ObjectName};
///
/// let rest = ExplorerRestClient::new(http);
/// let objects = rest.list_objects(&session).await?;
/// let account = rest
///     .get_object_metadata(&session, &ObjectName::parse("Account")?)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ExplorerRestClient {
    http: SfHttpClient,
    row_limit: usize,
}

impl ExplorerRestClient {
    pub fn new(http: SfHttpClient) -> Self {
        Self {
            http,
            row_limit: DEFAULT_ROW_LIMIT,
        }
    }

    /// Cap the rows collected by [`run_query`](Self::run_query).
    pub fn with_row_limit(mut self, limit: usize) -> Self {
        self.row_limit = limit.max(1);
        self
    }

    pub fn row_limit(&self) -> usize {
        self.row_limit
    }

    fn client(&self, session: &Session) -> SalesforceClient {
        session.client(&self.http)
    }
}

/// Run `soql` and follow `nextRecordsUrl` until `limit` rows are collected or
/// the result is done.
async fn collect_rows<T: DeserializeOwned>(
    client: &SalesforceClient,
    soql: &str,
    limit: usize,
) -> Result<Vec<T>> {
    let mut page: QueryResult<T> = client.query(soql).await?;
    let mut rows = Vec::new();

    loop {
        let QueryResult {
            records,
            done,
            next_records_url,
            ..
        } = page;
        rows.extend(records);

        if rows.len() >= limit {
            rows.truncate(limit);
            break;
        }
        match next_records_url {
            Some(next) if !done => page = client.query_more(&next).await?,
            _ => break,
        }
    }

    Ok(rows)
}
