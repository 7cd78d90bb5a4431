use serde_json::Value;
use sf_explorer_auth::Session;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::input::ReadQuery;

impl super::ExplorerRestClient {
    /// Run a read-only query and return its rows in order, unmodified.
    ///
    /// Pages are followed until the configured row limit is reached; rows
    /// beyond the limit are dropped.
    #[instrument(skip(self, session), fields(query = %query))]
    pub async fn run_query(&self, session: &Session, query: &ReadQuery) -> Result<Vec<Value>> {
        let rows: Vec<Value> =
            super::collect_rows(&self.client(session), query.as_str(), self.row_limit).await?;
        debug!(rows = rows.len(), "Query complete");
        Ok(rows)
    }
}
