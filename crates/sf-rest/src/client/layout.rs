use sf_explorer_client::{sanitize_error_message, SalesforceClient};
use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::layout::{list_layouts_envelope, parse_full_names, parse_soap_fault, LIST_METADATA_ACTION};

impl super::ExplorerRestClient {
    /// Full names of every page layout in the org (`{Object}-{Layout}`).
    #[instrument(skip(self, client))]
    pub(crate) async fn list_layout_names(&self, client: &SalesforceClient) -> Result<Vec<String>> {
        let envelope = list_layouts_envelope(client.access_token(), client.api_version());
        let (status, body) = client.metadata_call(LIST_METADATA_ACTION, envelope).await?;

        if let Some(fault) = parse_soap_fault(&body) {
            return Err(Error::new(ErrorKind::SoapFault(fault.to_string())));
        }
        if !(200..300).contains(&status) {
            return Err(Error::new(ErrorKind::Http {
                status,
                body: sanitize_error_message(&body),
            }));
        }

        let names = parse_full_names(&body);
        debug!(count = names.len(), "Layouts listed");
        Ok(names)
    }
}
