//! CEP Lookup Service - Main application use case
//!
//! Owns the typed input, drives one lookup at a time against the
//! address provider, and publishes every state transition for the
//! presentation layer.

use crate::domain::ports::AddressProvider;
use crate::domain::value_objects::{mask_input, CepCode, LookupError, LookupState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// CEP lookup service - main application use case.
///
/// This service holds the state the original screen derives its render
/// from:
/// 1. The masked input (FormattedCode)
/// 2. The current `LookupState`, observable via [`subscribe`](Self::subscribe)
///
/// At most one lookup is logically current. Racing submits are allowed;
/// every valid submit takes a fresh sequence number and only the newest
/// submission may publish its outcome, so a slow superseded response
/// never clobbers a newer result. The in-flight HTTP call itself is
/// never cancelled.
pub struct CepLookupService {
    provider: Arc<dyn AddressProvider>,
    input: RwLock<String>,
    seq: AtomicU64,
    state_tx: watch::Sender<LookupState>,
}

impl CepLookupService {
    /// Create a new lookup service in the `Idle` state.
    pub fn new(provider: Arc<dyn AddressProvider>) -> Self {
        let (state_tx, _) = watch::channel(LookupState::Idle);
        Self {
            provider,
            input: RwLock::new(String::new()),
            seq: AtomicU64::new(0),
            state_tx,
        }
    }

    /// Subscribe to state transitions.
    ///
    /// The receiver always holds the latest `LookupState`; presentation
    /// layers re-render on change.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LookupState {
        self.state_tx.borrow().clone()
    }

    /// The current FormattedCode.
    pub async fn formatted(&self) -> String {
        self.input.read().await.clone()
    }

    /// Apply the input mask to raw text from the input widget.
    ///
    /// Stores and returns the FormattedCode. Performs no validation and
    /// never fails. Typing does not interrupt an in-flight lookup.
    pub async fn input_changed(&self, text: &str) -> String {
        let formatted = mask_input(text);
        *self.input.write().await = formatted.clone();
        formatted
    }

    /// Validate the current input and, if valid, run one lookup.
    ///
    /// Invalid input fails locally with zero provider calls. A valid
    /// submit publishes `Pending` (replacing any previous address or
    /// failure), issues exactly one provider call, and publishes the
    /// terminal outcome unless a newer submit superseded this one while
    /// the call was in flight.
    pub async fn submit(&self) -> LookupState {
        let formatted = self.input.read().await.clone();

        let code = match CepCode::parse(&formatted) {
            Ok(code) => code,
            Err(err) => {
                tracing::debug!("rejected input {:?}: {}", formatted, err);
                let failed = LookupState::Failed(err);
                self.state_tx.send_replace(failed.clone());
                return failed;
            }
        };

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx
            .send_replace(LookupState::Pending { code: code.clone() });
        tracing::debug!("lookup {} started, seq={}", code, seq);

        let outcome = match self.provider.find_by_cep(code.key()).await {
            Ok(Some(address)) => LookupState::Resolved(address),
            Ok(None) => LookupState::Failed(LookupError::NotFound),
            Err(err) => {
                tracing::error!("lookup {} failed: {:?}", code, err);
                LookupState::Failed(LookupError::Network)
            }
        };

        // Only the newest submission publishes its outcome.
        if self.seq.load(Ordering::SeqCst) == seq {
            self.state_tx.send_replace(outcome.clone());
            outcome
        } else {
            tracing::debug!("lookup {} superseded, dropping response", code);
            self.state()
        }
    }
}
