use sf_explorer_auth::Session;
use tracing::instrument;

use crate::error::Result;
use crate::identity::Identity;

impl super::ExplorerRestClient {
    /// The user the session belongs to.
    #[instrument(skip(self, session))]
    pub async fn identity(&self, session: &Session) -> Result<Identity> {
        Ok(self
            .client(session)
            .get_json("/services/oauth2/userinfo")
            .await?)
    }
}
