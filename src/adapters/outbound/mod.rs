mod viacep_provider;

pub use viacep_provider::{ViaCepConfig, ViaCepProvider};
