//! Safe contract versions as reported by `VERSION()`

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A Safe singleton version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SafeVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl SafeVersion {
    pub const V1_1_1: SafeVersion = SafeVersion::new(1, 1, 1);
    pub const V1_2_0: SafeVersion = SafeVersion::new(1, 2, 0);
    pub const V1_3_0: SafeVersion = SafeVersion::new(1, 3, 0);
    pub const V1_4_1: SafeVersion = SafeVersion::new(1, 4, 1);

    // 1.0.0 hashes `dataGas` instead of `baseGas`
    const OLDEST_SUPPORTED: SafeVersion = SafeVersion::new(1, 1, 0);

    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether the EIP-712 domain carries the chain id (v1.3.0 and later)
    pub fn domain_includes_chain_id(&self) -> bool {
        *self >= Self::V1_3_0
    }

    /// Whether this crate can hash transactions for this version
    pub fn is_supported(&self) -> bool {
        *self >= Self::OLDEST_SUPPORTED
    }
}

impl Default for SafeVersion {
    fn default() -> Self {
        Self::V1_3_0
    }
}

impl FromStr for SafeVersion {
    type Err = Error;

    /// Parses `1.3.0`, `1.3.0+L2` or `1.2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::UnsupportedSafeVersion(s.to_string());

        let core = s.trim().split('+').next().unwrap_or_default();
        let mut parts = core.split('.').map(|p| p.parse::<u16>());

        let major = parts.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        let minor = parts.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        let patch = parts.next().transpose().map_err(|_| invalid())?.unwrap_or(0);
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for SafeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
