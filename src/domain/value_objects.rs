//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use crate::domain::entities::Address;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum input length exposed to the presentation layer (`XXXXX-XXX`).
pub const MAX_INPUT_LEN: usize = 9;

/// A complete CEP: 5 digits, optional separator, 3 digits.
static CEP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}-?\d{3}$").expect("CEP pattern compiles"));

/// Apply the display mask to raw text from the input widget.
///
/// Strips all non-digit characters, truncates to 8 digits, and inserts
/// a single `-` after the 5th digit once the digit count exceeds 5.
/// Never fails; partial input stays partial (`"123"` masks to `"123"`).
pub fn mask_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(8).collect();
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

/// A validated CEP, ready for lookup.
///
/// Can only be constructed from input that matches the CEP format, so
/// holding a `CepCode` is proof the format check passed. Stores the
/// separator-stripped 8-digit lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CepCode(String);

impl CepCode {
    /// Validate a formatted code (`NNNNN-NNN` or `NNNNNNNN`).
    pub fn parse(formatted: &str) -> Result<Self, LookupError> {
        if !CEP_PATTERN.is_match(formatted) {
            return Err(LookupError::InvalidFormat);
        }
        Ok(Self(formatted.replace('-', "")))
    }

    /// The 8-digit key sent to the lookup provider.
    pub fn key(&self) -> &str {
        &self.0
    }

    /// Display form with the separator re-inserted (`01001-000`).
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl std::fmt::Display for CepCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Terminal, user-visible lookup failures.
///
/// None of these is retried; the user edits the input and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The input does not match the CEP format; never reaches the provider.
    #[error("invalid format")]
    InvalidFormat,
    /// The provider explicitly reported no match for the code.
    #[error("not found")]
    NotFound,
    /// The provider call failed or returned an unparseable payload.
    #[error("network error")]
    Network,
}

/// Current position in the lookup lifecycle.
///
/// Exactly one state is current at any time. Transitions are published
/// on the service's watch channel so the presentation layer re-renders
/// on change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    /// Nothing submitted yet.
    Idle,
    /// A request for `code` is in flight.
    Pending {
        /// The validated code being looked up
        code: CepCode,
    },
    /// The provider returned an address.
    Resolved(Address),
    /// Terminal failure; the reason is the user-visible message.
    Failed(LookupError),
}

impl LookupState {
    /// Loading flag for the presentation layer.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}
