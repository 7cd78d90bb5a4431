use sf_explorer_auth::Session;
use sf_explorer_client::security::soql;
use sf_explorer_client::SalesforceClient;
use tracing::{debug, instrument};

use crate::describe::{DescribeGlobalResult, DescribeSObjectResult, RecordTypeRow};
use crate::error::Result;
use crate::input::ObjectName;
use crate::metadata::{object_summaries, ObjectMetadata, ObjectSummary};

impl super::ExplorerRestClient {
    /// Every object in the org as `{label, apiName}`.
    #[instrument(skip(self, session))]
    pub async fn list_objects(&self, session: &Session) -> Result<Vec<ObjectSummary>> {
        let global: DescribeGlobalResult = self.client(session).rest_get("sobjects").await?;
        debug!(count = global.sobjects.len(), "Object catalog fetched");
        Ok(object_summaries(global))
    }

    /// Describe, record types and page layouts of one object, normalized.
    ///
    /// The three lookups run concurrently; the first failure aborts the rest.
    #[instrument(skip(self, session), fields(object = %object))]
    pub async fn get_object_metadata(
        &self,
        session: &Session,
        object: &ObjectName,
    ) -> Result<ObjectMetadata> {
        let client = self.client(session);

        let (describe, record_types, layout_names) = tokio::try_join!(
            describe_sobject(&client, object),
            record_types(&client, object),
            self.list_layout_names(&client),
        )?;

        Ok(ObjectMetadata::assemble(
            object.as_str(),
            describe,
            record_types,
            &layout_names,
        ))
    }
}

async fn describe_sobject(
    client: &SalesforceClient,
    object: &ObjectName,
) -> Result<DescribeSObjectResult> {
    let path = format!("sobjects/{object}/describe");
    Ok(client.rest_get(&path).await?)
}

async fn record_types(client: &SalesforceClient, object: &ObjectName) -> Result<Vec<RecordTypeRow>> {
    let soql = format!(
        "SELECT Name, DeveloperName FROM RecordType WHERE SobjectType = '{}'",
        soql::escape_string(object.as_str())
    );
    super::collect_rows(client, &soql, usize::MAX).await
}
