//! ViaCEP Address Provider
//!
//! Implements AddressProvider against the public ViaCEP HTTP API.
//!
//! See: https://viacep.com.br

use crate::domain::entities::Address;
use crate::domain::ports::AddressProvider;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Payload returned by ViaCEP's `/ws/{cep}/json/` endpoint.
///
/// A miss is reported as `{"erro": true}` with no address fields, so
/// every field except the marker is optional.
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default)]
    erro: bool,
    cep: Option<String>,
    logradouro: Option<String>,
    bairro: Option<String>,
    localidade: Option<String>,
    uf: Option<String>,
}

/// Configuration for the ViaCEP client.
#[derive(Debug, Clone)]
pub struct ViaCepConfig {
    /// Base URL of the ViaCEP API (e.g., "https://viacep.com.br")
    pub base_url: String,
    /// Timeout applied to each lookup request
    pub timeout: Duration,
}

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self {
            base_url: "https://viacep.com.br".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// ViaCEP-backed address provider.
///
/// Issues one GET per lookup; no retries and no caching. The configured
/// timeout is the only deadline applied to the call.
pub struct ViaCepProvider {
    config: ViaCepConfig,
    client: reqwest::Client,
}

impl ViaCepProvider {
    /// Create a provider with the given configuration.
    pub fn new(config: ViaCepConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Map a decoded payload to the domain entity.
    ///
    /// Fields ViaCEP omits come through as empty strings; the values it
    /// does send are passed through untouched.
    fn payload_into_address(payload: ViaCepPayload) -> Option<Address> {
        if payload.erro {
            return None;
        }
        Some(Address {
            cep: payload.cep.unwrap_or_default(),
            street: payload.logradouro.unwrap_or_default(),
            district: payload.bairro.unwrap_or_default(),
            city: payload.localidade.unwrap_or_default(),
            state: payload.uf.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl AddressProvider for ViaCepProvider {
    async fn find_by_cep(&self, key: &str) -> anyhow::Result<Option<Address>> {
        let url = format!("{}/ws/{}/json/", self.config.base_url, key);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("ViaCEP lookup failed: {} - {}", status, body);
        }

        let payload: ViaCepPayload = response.json().await?;
        Ok(Self::payload_into_address(payload))
    }
}
