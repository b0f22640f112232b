//! API client for the Bitget UTA REST API

use crate::{
    api::{
        request::{RequestBuilder, RequestDescriptor},
        response::{decode, Response},
        transport::{ReqwestTransport, Transport},
        utils::timestamp_ms,
    },
    error::{BitgetError, Result},
    services::{Endpoint, GetAccountAssets, GetAccountSettings, GetServerTime},
    signer::Config,
    types::{account::*, market::ServerTime},
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Bitget API client
///
/// Cloning is cheap; clones share the transport. All request state is
/// immutable, so one client can issue any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Configuration the builder was derived from
    config: Config,
    /// Assembles signed requests
    requests: RequestBuilder,
    /// Executes requests
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a new API client backed by `reqwest`
    pub fn new(config: Config) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(config, transport)
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let requests = RequestBuilder::new(&config)?;
        debug!(
            base_url = requests.base_url(),
            signed = requests.can_sign(),
            demo = config.demo_trading,
            "Created API client"
        );
        Ok(Self {
            config,
            requests,
            transport,
        })
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.requests.base_url()
    }

    /// Whether signed endpoints can be called
    pub fn has_credentials(&self) -> bool {
        self.requests.can_sign()
    }

    /// Point the client at another base URL
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        let config = self.config.clone().with_base_url(base_url)?;
        self.reconfigure(config)
    }

    /// Toggle the demo trading marker
    pub fn set_demo_trading(&mut self, enabled: bool) -> Result<()> {
        let config = self.config.clone().with_demo_trading(enabled);
        self.reconfigure(config)
    }

    fn reconfigure(&mut self, config: Config) -> Result<()> {
        self.requests = RequestBuilder::new(&config)?;
        self.config = config;
        Ok(())
    }

    /// Issue one API call
    ///
    /// Build, dispatch, check the HTTP status, decode the envelope and check
    /// its code. The first failing step ends the call and its error is
    /// returned unchanged.
    #[instrument(
        skip_all,
        fields(
            method = %descriptor.method(),
            path = descriptor.path(),
            signed = descriptor.is_signed()
        )
    )]
    pub async fn call(&self, descriptor: &RequestDescriptor) -> Result<Response> {
        let request = self.requests.build(descriptor, timestamp_ms())?;
        debug!("Dispatching request");

        let raw = self.transport.send(request, self.config.timeout()).await?;
        match decode(raw) {
            Ok(response) => {
                debug!(code = %response.envelope.code, "Request succeeded");
                Ok(response)
            }
            Err(e) => {
                warn!(
                    code = e.api_code().unwrap_or_default(),
                    status = e.status().unwrap_or_default(),
                    "Request failed: {}",
                    e
                );
                Err(e)
            }
        }
    }

    /// Like [`call`](Self::call), but gives up with [`BitgetError::Cancelled`]
    /// as soon as `cancel` resolves
    pub async fn call_with_cancel<F>(&self, descriptor: &RequestDescriptor, cancel: F) -> Result<Response>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                warn!(path = descriptor.path(), "Request cancelled");
                Err(BitgetError::Cancelled)
            }
            result = self.call(descriptor) => result,
        }
    }

    /// Validate, send and decode one endpoint request
    ///
    /// Validation runs before anything is built, so a missing parameter never
    /// reaches the network.
    pub async fn execute<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output> {
        endpoint.validate()?;
        let descriptor = endpoint.descriptor()?;
        self.call(&descriptor).await?.into_data()
    }

    /// [`execute`](Self::execute) with a cancellation signal
    pub async fn execute_with_cancel<E, F>(&self, endpoint: &E, cancel: F) -> Result<E::Output>
    where
        E: Endpoint,
        F: Future<Output = ()>,
    {
        endpoint.validate()?;
        let descriptor = endpoint.descriptor()?;
        self.call_with_cancel(&descriptor, cancel).await?.into_data()
    }

    // === Shortcuts for parameterless endpoints ===

    /// Get server time
    pub async fn server_time(&self) -> Result<ServerTime> {
        self.execute(&GetServerTime::new()).await
    }

    /// Get account settings
    pub async fn account_settings(&self) -> Result<AccountSettings> {
        self.execute(&GetAccountSettings::new()).await
    }

    /// Get account assets
    pub async fn account_assets(&self) -> Result<AccountAssets> {
        self.execute(&GetAccountAssets::new()).await
    }
}
