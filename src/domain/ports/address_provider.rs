//! Address Provider Port
//!
//! Defines the interface to the external address-lookup collaborator.

use crate::domain::entities::Address;
use async_trait::async_trait;

/// Lookup collaborator resolving a CEP to an address.
///
/// This is an outbound port with a fixed contract: the request is the
/// 8-digit lookup key (separator already stripped) and the response
/// either carries the address fields or an explicit not-found marker.
///
/// `Ok(None)` is the not-found marker. Transport failures and
/// unparseable payloads surface as `Err`.
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Resolve an 8-digit CEP key to an address.
    async fn find_by_cep(&self, key: &str) -> anyhow::Result<Option<Address>>;
}
