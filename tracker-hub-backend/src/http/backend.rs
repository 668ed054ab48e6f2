//! `TrackerBackend` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::TrackerBackend;
use crate::types::{
    Connection, ConnectionList, ConnectionSnapshot, ExecuteRequest, ExecuteResult, VerifyResponse,
};
use crate::utils::log_sanitizer::mask_secret;

use super::{
    CONNECTION_STATUS, DELETE_CONNECTION, EXECUTE, GET_CONNECTIONS, HttpBackend, SET_CURRENT,
    TEST_CREDENTIALS,
};

#[async_trait]
impl TrackerBackend for HttpBackend {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn connection_status(&self) -> Result<ConnectionSnapshot> {
        let body = self.get(CONNECTION_STATUS).await?;
        HttpUtils::parse_json(&body, CONNECTION_STATUS)
    }

    async fn list_connections(&self) -> Result<ConnectionList> {
        let body = self.get(GET_CONNECTIONS).await?;
        HttpUtils::parse_json(&body, GET_CONNECTIONS)
    }

    async fn delete_connection(&self, index: usize) -> Result<()> {
        // Only the status matters; the body echoes the updated store
        self.get_with_index(DELETE_CONNECTION, index).await?;
        Ok(())
    }

    async fn set_current(&self, index: usize) -> Result<()> {
        self.get_with_index(SET_CURRENT, index).await?;
        Ok(())
    }

    async fn test_credentials(&self, credentials: &Connection) -> Result<VerifyResponse> {
        log::debug!(
            "Verifying {} as {} (token {})",
            credentials.domain,
            credentials.account,
            mask_secret(&credentials.token)
        );
        let body = self.post_json(TEST_CREDENTIALS, credentials).await?;
        HttpUtils::parse_json(&body, TEST_CREDENTIALS)
    }

    async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResult> {
        log::debug!(
            "Executing query on {} (projects={}, workflows={}, statuses={})",
            request.credentials.domain,
            request.projects,
            request.workflows,
            request.statuses
        );
        let body = self.post_json(EXECUTE, request).await?;
        HttpUtils::parse_json(&body, EXECUTE)
    }
}
