use core::fmt;
use core::str::FromStr;

use crate::errors::SpongeError;

/// Bits appended to the message before padding, separating the
/// Keccak, SHA-3, RawSHAKE and SHAKE domains.
///
/// Each suffix is written as a bit string in absorption order:
/// SHA-3 appends a `0` then a `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainSuffix {
    /// No suffix: the pre-standardization Keccak submission.
    Keccak,
    /// `01`
    Sha3,
    /// `11`
    RawShake,
    /// `1111`
    Shake,
}

impl DomainSuffix {
    pub const ALL: [Self; 4] = [Self::Keccak, Self::Sha3, Self::RawShake, Self::Shake];

    /// The suffix as a string of `'0'` and `'1'`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Keccak => "",
            Self::Sha3 => "01",
            Self::RawShake => "11",
            Self::Shake => "1111",
        }
    }

    /// The suffix bits packed little-endian, and how many there are.
    pub const fn packed(&self) -> (u8, usize) {
        match self {
            Self::Keccak => (0b0, 0),
            Self::Sha3 => (0b10, 2),
            Self::RawShake => (0b11, 2),
            Self::Shake => (0b1111, 4),
        }
    }
}

impl FromStr for DomainSuffix {
    type Err = SpongeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suffix| suffix.as_str() == s)
            .ok_or_else(|| SpongeError::InvalidSuffix(s.to_string()))
    }
}

impl TryFrom<&str> for DomainSuffix {
    type Error = SpongeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for DomainSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
