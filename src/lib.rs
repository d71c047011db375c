//! cep-lookup Library
//!
//! This module exposes the CEP lookup components for use in integration
//! tests and as a library.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::inbound::ConsoleUi;
pub use adapters::outbound::{ViaCepConfig, ViaCepProvider};
pub use application::CepLookupService;
pub use config::load_config;
pub use domain::entities::Address;
pub use domain::ports::AddressProvider;
pub use domain::value_objects::{mask_input, CepCode, LookupError, LookupState, MAX_INPUT_LEN};
