/// The [`keccak_sponge`](crate) package has a single error type, [`SpongeError`],
/// raised synchronously by the call that violates a precondition.
///
/// - Configuration errors ([`SpongeError::InvalidParameter`]):
///   bitrate and capacity must be positive multiples of 8 summing to the permutation width.
///   The same variant reports malformed messages (a bit length longer than the bytes supplied)
///   and unknown algorithm names.
///
/// - Lifecycle errors ([`SpongeError::NotInitialized`], [`SpongeError::AlreadyFinalized`], [`SpongeError::NotFinalized`]):
///   a sponge moves from absorbing to squeezing exactly once, and stops accepting calls after being disposed.
///
/// - Domain separation errors ([`SpongeError::InvalidSuffix`]):
///   only the Keccak, SHA-3, RawSHAKE and SHAKE suffixes are recognized.
///
/// Operations are pure and deterministic: repeating a failing call fails identically.
/// A [`core::result::Result`] wrapper called [`SpongeResult`] (having error fixed to [`SpongeError`]) is also provided.
use std::{error::Error, fmt::Display};

/// An error happened while configuring or driving a sponge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpongeError {
    /// Signals a bad bitrate, capacity, output length, or message length.
    InvalidParameter(String),
    /// The sponge has been disposed, and holds no state to operate on.
    NotInitialized,
    /// The domain suffix is not one of the recognized bit strings.
    InvalidSuffix(String),
    /// The sponge was finalized and cannot absorb anymore.
    AlreadyFinalized,
    /// The sponge must be finalized before squeezing.
    NotFinalized,
}

/// The result type of fallible sponge operations.
pub type SpongeResult<T> = Result<T, SpongeError>;

impl Display for SpongeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(reason) => write!(f, "Invalid parameter: {}", reason),
            Self::NotInitialized => write!(f, "Sponge not initialized"),
            Self::InvalidSuffix(suffix) => write!(f, "Invalid domain suffix {:?}", suffix),
            Self::AlreadyFinalized => write!(f, "Sponge already finalized"),
            Self::NotFinalized => write!(f, "Sponge not finalized"),
        }
    }
}

impl Error for SpongeError {}

impl From<&str> for SpongeError {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<String> for SpongeError {
    fn from(s: String) -> Self {
        Self::InvalidParameter(s)
    }
}
