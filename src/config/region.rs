//! Lazada region definitions.
//!
//! This module provides the [`Region`] enum, which maps a seller's country
//! to the regional REST gateway that serves it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Gateway used for token creation and refresh, independent of region.
///
/// Token calls go through a client whose gateway is overridden with this URL:
///
/// ```rust
/// use lazada_api::config::AUTHORIZATION_GATEWAY_URL;
/// use lazada_api::{AppKey, AppSecret, GatewayUrl, LazadaConfig};
///
/// let config = LazadaConfig::builder()
///     .app_key(AppKey::new("100123").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .gateway_url(GatewayUrl::new(AUTHORIZATION_GATEWAY_URL).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.gateway_url(), "https://auth.lazada.com/rest");
/// ```
pub const AUTHORIZATION_GATEWAY_URL: &str = "https://auth.lazada.com/rest";

/// A Lazada marketplace region.
///
/// Each region is served by its own REST gateway. Unrecognized country codes
/// resolve to [`Region::default()`] (Thailand) instead of failing.
///
/// # Example
///
/// ```rust
/// use lazada_api::Region;
///
/// let region = Region::from_code("sg");
/// assert_eq!(region, Region::Sg);
/// assert_eq!(region.gateway_url(), "https://api.lazada.sg/rest");
///
/// // Unknown codes fall back to the default gateway
/// assert_eq!(Region::from_code("US"), Region::Th);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Singapore
    Sg,
    /// Malaysia
    My,
    /// Vietnam
    Vn,
    /// Thailand
    #[default]
    Th,
    /// Philippines
    Ph,
    /// Indonesia
    Id,
}

impl Region {
    /// All regions with a dedicated gateway.
    pub const ALL: [Self; 6] = [Self::Sg, Self::My, Self::Vn, Self::Th, Self::Ph, Self::Id];

    /// Resolves a two-letter country code, case-insensitively.
    ///
    /// Unknown codes resolve to the default region.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "SG" => Self::Sg,
            "MY" => Self::My,
            "VN" => Self::Vn,
            "TH" => Self::Th,
            "PH" => Self::Ph,
            "ID" => Self::Id,
            other => {
                tracing::debug!(code = other, "Unrecognized region code, using default gateway");
                Self::default()
            }
        }
    }

    /// Returns the upper-case country code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sg => "SG",
            Self::My => "MY",
            Self::Vn => "VN",
            Self::Th => "TH",
            Self::Ph => "PH",
            Self::Id => "ID",
        }
    }

    /// Returns the REST gateway base URL for this region.
    #[must_use]
    pub const fn gateway_url(&self) -> &'static str {
        match self {
            Self::Sg => "https://api.lazada.sg/rest",
            Self::My => "https://api.lazada.com.my/rest",
            Self::Vn => "https://api.lazada.vn/rest",
            Self::Th => "https://api.lazada.co.th/rest",
            Self::Ph => "https://api.lazada.com.ph/rest",
            Self::Id => "https://api.lazada.co.id/rest",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_has_https_gateway() {
        for region in Region::ALL {
            assert!(region.gateway_url().starts_with("https://api.lazada."));
            assert!(region.gateway_url().ends_with("/rest"));
        }
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Region::from_code("my"), Region::My);
        assert_eq!(Region::from_code(" Ph "), Region::Ph);
        assert_eq!(Region::from_code("ID"), Region::Id);
    }

    #[test]
    fn test_lowercase_code_selects_its_region_not_the_fallback() {
        let region = Region::from_code("sg");
        assert_eq!(region, Region::Sg);
        assert_ne!(region.gateway_url(), Region::default().gateway_url());
        assert_eq!(region.gateway_url(), "https://api.lazada.sg/rest");
    }

    #[test]
    fn test_authorization_gateway_is_separate_from_regions() {
        assert_eq!(AUTHORIZATION_GATEWAY_URL, "https://auth.lazada.com/rest");
        assert!(Region::ALL
            .iter()
            .all(|region| region.gateway_url() != AUTHORIZATION_GATEWAY_URL));
    }

    #[test]
    fn test_unknown_code_falls_back_to_thailand() {
        assert_eq!(Region::from_code("JP"), Region::Th);
        assert_eq!(Region::from_code(""), Region::Th);
        assert_eq!(
            Region::from_code("XX").gateway_url(),
            "https://api.lazada.co.th/rest"
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for region in Region::ALL {
            let parsed: Region = region.to_string().parse().unwrap();
            assert_eq!(parsed, region);
        }
    }
}
