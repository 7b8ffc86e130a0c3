//! GitHub Actions repository secrets operations.
//!
//! Every call is a single request/response; failures propagate immediately
//! without retries.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::core::constants;
use crate::core::context::RequestContext;
use crate::core::domain::{PublicKey, SealedSecret, SecretList, SetOutcome};
use crate::core::seal::seal_secret;
use crate::core::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
use crate::error::{Error, RemoteError, Result};

/// Secrets API client for one repository.
pub struct Client<T = HttpTransport> {
    ctx: RequestContext,
    transport: T,
}

impl Client<HttpTransport> {
    /// Client over the real HTTP transport.
    pub fn connect(ctx: RequestContext) -> Result<Self> {
        Ok(Self::new(ctx, HttpTransport::new()?))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(ctx: RequestContext, transport: T) -> Self {
        Self { ctx, transport }
    }

    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the repository public key used for sealing.
    pub fn fetch_public_key(&self) -> Result<PublicKey> {
        let request = self
            .ctx
            .request(Method::Get, self.ctx.secrets_path("/public-key"));
        let key: PublicKey = self.send_json(&request)?;
        debug!(key_id = %key.key_id, "fetched public key");
        Ok(key)
    }

    /// List secret names and timestamps, following pagination.
    pub fn list_secrets(&self) -> Result<SecretList> {
        let mut all = SecretList::default();
        let mut page = 1usize;

        loop {
            let request = self
                .ctx
                .request(Method::Get, self.ctx.secrets_path(""))
                .query("per_page", constants::SECRETS_PER_PAGE)
                .query("page", page);
            let batch: SecretList = self.send_json(&request)?;
            trace!(page, count = batch.secrets.len(), total = batch.total_count, "page");

            all.total_count = batch.total_count;
            let done = batch.secrets.is_empty();
            all.secrets.extend(batch.secrets);

            if done || all.secrets.len() >= all.total_count {
                break;
            }
            page += 1;
        }

        debug!(count = all.secrets.len(), "listed secrets");
        Ok(all)
    }

    /// Seal `plaintext` with `public_key` and create or update secret `name`.
    pub fn set_secret(
        &self,
        public_key: &PublicKey,
        name: &str,
        plaintext: &[u8],
    ) -> Result<SetOutcome> {
        let body = SealedSecret {
            encrypted_value: seal_secret(plaintext, &public_key.key)?,
            key_id: public_key.key_id.clone(),
        };

        let request = self
            .ctx
            .request(Method::Put, self.ctx.secrets_path(&format!("/{}", name)))
            .json(serde_json::to_value(&body)?);
        let response = self.send(&request)?;

        let outcome = if response.status == 201 {
            SetOutcome::Created
        } else {
            SetOutcome::Updated
        };
        debug!(name, key_id = %body.key_id, %outcome, "set secret");
        Ok(outcome)
    }

    /// Delete secret `name`. A missing secret is an error.
    pub fn delete_secret(&self, name: &str) -> Result<()> {
        let request = self
            .ctx
            .request(Method::Delete, self.ctx.secrets_path(&format!("/{}", name)));
        self.send(&request)?;
        debug!(name, "deleted secret");
        Ok(())
    }

    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let response = self.transport.send(request)?;
        debug!(
            method = request.method.as_str(),
            path = %request.path,
            status = response.status,
            "response"
        );

        if !response.is_success() {
            return Err(RemoteError::Status {
                method: request.method.as_str(),
                path: request.path.clone(),
                status: response.status,
                body: response.body,
            }
            .into());
        }
        Ok(response)
    }

    fn send_json<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R> {
        let response = self.send(request)?;
        serde_json::from_str(&response.body).map_err(|e| {
            Error::from(RemoteError::UnexpectedPayload {
                path: request.path.clone(),
                status: response.status,
                reason: e.to_string(),
            })
        })
    }
}
