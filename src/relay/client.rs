use std::time::Duration;

use alloy::primitives::{Address, U256};
use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use super::types::{MultisigTransactionsPage, ProposeTransactionBody, SafeInfoResponse, SignedProposal};
use super::RelayService;
use crate::error::{Error, Result};

/// HTTP client for a Safe Transaction Service deployment
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: Url,
}

impl RelayClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn get<T, Q>(&self, endpoint: &str, query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.build_url(endpoint);
        debug!(%url, "GET");

        let mut request = self.client.get(&url);
        if let Some(q) = query {
            request = request.query(q);
        }

        let response = check_status(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_status<B>(&self, endpoint: &str, body: &B) -> Result<()>
    where
        B: Serialize,
    {
        let url = self.build_url(endpoint);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Fetches the Safe as indexed by the service
    pub async fn safe_info(&self, safe: Address) -> Result<SafeInfoResponse> {
        self.get(&safe_endpoint(safe, ""), None::<&()>).await
    }

    /// Nonces of proposals not yet executed, at or above `from`
    pub async fn pending_nonces(&self, safe: Address, from: U256) -> Result<Vec<U256>> {
        let query = [("executed", "false".to_string()), ("nonce__gte", from.to_string())];
        let page: MultisigTransactionsPage = self
            .get(&safe_endpoint(safe, "multisig-transactions/"), Some(&query))
            .await?;
        Ok(page.results.into_iter().map(|entry| entry.nonce).collect())
    }
}

impl RelayService for RelayClient {
    async fn next_nonce(&self, safe: Address) -> Result<U256> {
        let current = self.safe_info(safe).await?.nonce;
        let pending = self.pending_nonces(safe, current).await?;

        let next = match pending.into_iter().max() {
            Some(highest) => highest + U256::from(1),
            None => current,
        };
        debug!(%safe, %current, %next, "Resolved next nonce");
        Ok(next)
    }

    async fn propose_transaction(&self, proposal: &SignedProposal) -> Result<()> {
        let body = ProposeTransactionBody::from(proposal);
        self.post_status(&safe_endpoint(proposal.safe, "multisig-transactions/"), &body)
            .await
    }
}

fn safe_endpoint(safe: Address, suffix: &str) -> String {
    format!("api/v1/safes/{}/{}", safe.to_checksum(None), suffix)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Relay {
        status: status.as_u16(),
        body,
    })
}
