//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the CEP lookup domain.
//! They have no external dependencies and contain only business logic.

/// An address as returned by the lookup provider.
///
/// All fields are carried verbatim from the provider payload; no
/// validation or normalization is applied to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Postal code in display form (e.g. "01001-000")
    pub cep: String,
    /// Street name (logradouro)
    pub street: String,
    /// District / neighborhood (bairro)
    pub district: String,
    /// City name (localidade)
    pub city: String,
    /// Two-letter state code (UF: SP, RJ, etc)
    pub state: String,
}
