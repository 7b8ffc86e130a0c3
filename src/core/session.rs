//! Per-command session.
//!
//! Opening a session validates the token and repository access by fetching
//! the repository public key once; it is reused for every seal in the
//! command and dropped when the command ends.

use tracing::info;

use crate::core::config::Settings;
use crate::core::context::RequestContext;
use crate::core::domain::{PublicKey, SetOutcome};
use crate::core::github::Client;
use crate::core::transport::{HttpTransport, Transport};
use crate::error::Result;

/// Client plus the cached repository public key.
pub struct Session<T = HttpTransport> {
    client: Client<T>,
    public_key: PublicKey,
}

impl Session<HttpTransport> {
    /// Open a session against GitHub over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` before any network call if no
    /// token is configured.
    pub fn open(settings: Settings) -> Result<Self> {
        let ctx = RequestContext::new(settings)?;
        Self::with_client(Client::connect(ctx)?)
    }
}

impl<T: Transport> Session<T> {
    /// Open a session over an existing client.
    pub fn with_client(client: Client<T>) -> Result<Self> {
        let public_key = client.fetch_public_key()?;
        info!(repo = %client.context().slug(), key_id = %public_key.key_id, "session opened");
        Ok(Self { client, public_key })
    }

    pub fn client(&self) -> &Client<T> {
        &self.client
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Seal and upload a secret with the cached public key.
    pub fn set_secret(&self, name: &str, plaintext: &[u8]) -> Result<SetOutcome> {
        self.client.set_secret(&self.public_key, name, plaintext)
    }
}
