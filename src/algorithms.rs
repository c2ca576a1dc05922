use core::fmt;
use core::str::FromStr;

use crate::bits::Bits;
use crate::errors::{SpongeError, SpongeResult};
use crate::hash::{KeccakSponge, SpongeConfig};
use crate::suffix::DomainSuffix;

/// The standard parametrizations of the Keccak sponge.
///
/// The capacity is always twice the security level.
/// Extendable-output functions default to an output of twice their security level,
/// see [`Algorithm::config_with_output`] for other lengths.
///
/// ```
/// use keccak_sponge::Algorithm;
///
/// let algorithm: Algorithm = "SHA3-256".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::Sha3_256);
/// assert_eq!(algorithm.hash(b"").len(), 32);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Keccak224,
    Keccak256,
    Keccak384,
    Keccak512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
    RawShake128,
    RawShake256,
}

impl Algorithm {
    pub const ALL: [Self; 12] = [
        Self::Keccak224,
        Self::Keccak256,
        Self::Keccak384,
        Self::Keccak512,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Shake128,
        Self::Shake256,
        Self::RawShake128,
        Self::RawShake256,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Keccak224 => "Keccak-224",
            Self::Keccak256 => "Keccak-256",
            Self::Keccak384 => "Keccak-384",
            Self::Keccak512 => "Keccak-512",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Shake128 => "SHAKE128",
            Self::Shake256 => "SHAKE256",
            Self::RawShake128 => "RawSHAKE128",
            Self::RawShake256 => "RawSHAKE256",
        }
    }

    pub const fn suffix(&self) -> DomainSuffix {
        match self {
            Self::Keccak224 | Self::Keccak256 | Self::Keccak384 | Self::Keccak512 => {
                DomainSuffix::Keccak
            }
            Self::Sha3_224 | Self::Sha3_256 | Self::Sha3_384 | Self::Sha3_512 => DomainSuffix::Sha3,
            Self::Shake128 | Self::Shake256 => DomainSuffix::Shake,
            Self::RawShake128 | Self::RawShake256 => DomainSuffix::RawShake,
        }
    }

    pub const fn is_extendable(&self) -> bool {
        matches!(
            self,
            Self::Shake128 | Self::Shake256 | Self::RawShake128 | Self::RawShake256
        )
    }

    /// Security level in bits; for fixed-length functions, also the digest length.
    const fn strength(&self) -> usize {
        match self {
            Self::Keccak224 | Self::Sha3_224 => 224,
            Self::Keccak256 | Self::Sha3_256 | Self::Shake256 | Self::RawShake256 => 256,
            Self::Keccak384 | Self::Sha3_384 => 384,
            Self::Keccak512 | Self::Sha3_512 => 512,
            Self::Shake128 | Self::RawShake128 => 128,
        }
    }

    pub const fn config(&self) -> SpongeConfig {
        let capacity = 2 * self.strength();
        let output = if self.is_extendable() {
            2 * self.strength()
        } else {
            self.strength()
        };
        SpongeConfig::new_unchecked(1600 - capacity, capacity, output)
    }

    /// The configuration with another output length, in bits.
    ///
    /// Only extendable-output functions accept a length other than their own;
    /// 0 selects open-ended output.
    pub fn config_with_output(&self, output: usize) -> SpongeResult<SpongeConfig> {
        let config = self.config();
        if !self.is_extendable() && output != config.output() {
            return Err(format!("{} has a fixed output of {} bits", self, config.output()).into());
        }
        Ok(SpongeConfig::new_unchecked(
            config.bitrate(),
            config.capacity(),
            output,
        ))
    }

    /// A fresh sponge for this algorithm.
    pub fn sponge(&self) -> KeccakSponge {
        KeccakSponge::new_unchecked(self.config())
    }

    /// Hash a whole message at once.
    pub fn hash<'a>(&self, message: impl Into<Bits<'a>>) -> Vec<u8> {
        let mut sponge = self.sponge();
        sponge.finalize_unchecked(message.into(), self.suffix());
        sponge.read_digest_unchecked()
    }

    /// Hash each message with its own sponge.
    pub fn hash_many(&self, messages: &[&[u8]]) -> Vec<Vec<u8>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            messages.par_iter().map(|message| self.hash(*message)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            messages.iter().map(|message| self.hash(*message)).collect()
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Algorithm {
    type Err = SpongeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|algorithm| normalize(algorithm.name()) == wanted)
            .ok_or_else(|| SpongeError::InvalidParameter(format!("unknown algorithm {:?}", s)))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
        assert_eq!("sha3_512".parse::<Algorithm>(), Ok(Algorithm::Sha3_512));
        assert_eq!("rawshake256".parse::<Algorithm>(), Ok(Algorithm::RawShake256));
        assert_eq!("keccak256".parse::<Algorithm>(), Ok(Algorithm::Keccak256));
        assert!("sha2-256".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_configs_are_valid() {
        for algorithm in Algorithm::ALL {
            let config = algorithm.config();
            assert_eq!(
                SpongeConfig::new(config.bitrate(), config.capacity(), config.output()),
                Ok(config)
            );
        }
        assert_eq!(Algorithm::Sha3_256.config().bitrate(), 1088);
        assert_eq!(Algorithm::Shake128.config().bitrate(), 1344);
        assert_eq!(Algorithm::Keccak512.config().capacity(), 1024);
    }

    #[test]
    fn test_output_override() {
        let config = Algorithm::Shake256.config_with_output(0).unwrap();
        assert!(config.is_extendable());
        assert_eq!(config.output_bytes(), 136);
        assert!(Algorithm::Sha3_256.config_with_output(256).is_ok());
        assert!(Algorithm::Sha3_256.config_with_output(512).is_err());
    }

    #[test]
    fn test_hash_many_matches_hash() {
        let messages: [&[u8]; 3] = [b"", b"abc", &[0x5a; 300]];
        let digests = Algorithm::Sha3_384.hash_many(&messages);
        for (message, digest) in messages.iter().zip(&digests) {
            assert_eq!(*digest, Algorithm::Sha3_384.hash(*message));
        }
    }
}
