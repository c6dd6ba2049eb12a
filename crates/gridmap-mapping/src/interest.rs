use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// InterestPolicy
///
/// Delivery policy for region subscription interest. Unrelated to the
/// mapping core; carried on the public surface for grid configuration.
/// Variant order matches the grid client's ordinals.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum InterestPolicy {
    All,

    #[default]
    CacheContent,
}

impl InterestPolicy {
    pub const DEFAULT: Self = Self::CacheContent;

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::All => 0,
            Self::CacheContent => 1,
        }
    }

    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::All),
            1 => Some(Self::CacheContent),
            _ => None,
        }
    }
}

///
/// ParseInterestPolicyError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown interest policy: '{0}'")]
pub struct ParseInterestPolicyError(String);

impl FromStr for InterestPolicy {
    type Err = ParseInterestPolicyError;

    // case- and underscore-insensitive, so "Cache_Content" and
    // "CACHE_ConTent" both parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "all" => Ok(Self::All),
            "cachecontent" => Ok(Self::CacheContent),
            _ => Err(ParseInterestPolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cache_content() {
        assert_eq!(InterestPolicy::default(), InterestPolicy::CacheContent);
        assert_eq!(InterestPolicy::DEFAULT, InterestPolicy::CacheContent);
    }

    #[test]
    fn ordinals_round_trip() {
        for ordinal in 0..u8::MAX {
            match InterestPolicy::from_ordinal(ordinal) {
                Some(policy) => assert_eq!(policy.ordinal(), ordinal),
                None => assert!(ordinal > 1),
            }
        }
    }

    #[test]
    fn from_ordinal_rejects_unknown_values() {
        assert_eq!(InterestPolicy::from_ordinal(2), None);
        assert_eq!(InterestPolicy::from_ordinal(u8::MAX), None);
    }

    #[test]
    fn parse_ignores_case_and_underscores() {
        assert_eq!("all".parse(), Ok(InterestPolicy::All));
        assert_eq!("ALL".parse(), Ok(InterestPolicy::All));
        assert_eq!("Cache_Content".parse(), Ok(InterestPolicy::CacheContent));
        assert_eq!("CACHE_ConTent".parse(), Ok(InterestPolicy::CacheContent));
        assert_eq!("CacheContent".parse(), Ok(InterestPolicy::CacheContent));
    }

    #[test]
    fn parse_rejects_invalid_values() {
        for value in ["@11", "CACHE_KEYS", "invalid", "test", "  ", ""] {
            assert!(value.parse::<InterestPolicy>().is_err(), "parsed {value:?}");
        }
    }

    #[test]
    fn display_uses_variant_names() {
        assert_eq!(InterestPolicy::All.to_string(), "All");
        assert_eq!(InterestPolicy::CacheContent.to_string(), "CacheContent");
    }
}
