use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Server clusters served by the Riot API.
///
/// Each value is substituted verbatim for the `{region}` placeholder of the
/// configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Tr,
    Ru,
    Tw,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::Br,
        Region::Eune,
        Region::Euw,
        Region::Jp,
        Region::Kr,
        Region::Lan,
        Region::Las,
        Region::Na,
        Region::Oce,
        Region::Tr,
        Region::Ru,
        Region::Tw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Br => "BR",
            Region::Eune => "EUNE",
            Region::Euw => "EUW",
            Region::Jp => "JP",
            Region::Kr => "KR",
            Region::Lan => "LAN",
            Region::Las => "LAS",
            Region::Na => "NA",
            Region::Oce => "OCE",
            Region::Tr => "TR",
            Region::Ru => "RU",
            Region::Tw => "TW",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown region: {0}")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}

impl TryFrom<&str> for Region {
    type Error = ParseRegionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_string()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_host_safe() {
        for region in Region::ALL {
            assert!(
                region.as_str().chars().all(|c| c.is_ascii_uppercase()),
                "{region:?} is not a plain host token"
            );
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_round_trips() {
        assert_eq!("lan".parse::<Region>().unwrap(), Region::Lan);
        assert_eq!(Region::try_from("EUNE").unwrap(), Region::Eune);

        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        let err = "la1".parse::<Region>().unwrap_err();
        assert_eq!(err, ParseRegionError("la1".to_string()));
        assert_eq!(err.to_string(), "Unknown region: la1");
    }
}
