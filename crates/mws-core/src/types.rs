//! Marketplace definitions: endpoint and marketplace id per region.

use std::fmt;
use std::str::FromStr;

use crate::error::MwsError;

/// An MWS marketplace, identified by its region code.
///
/// `Uk` is an alias for `Gb` and shares its endpoint and marketplace id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Marketplace {
    /// United Arab Emirates.
    Ae,
    /// Australia.
    Au,
    /// Brazil.
    Br,
    /// Canada.
    Ca,
    /// Germany.
    De,
    /// Egypt.
    Eg,
    /// Spain.
    Es,
    /// France.
    Fr,
    /// United Kingdom.
    Gb,
    /// India.
    In,
    /// Italy.
    It,
    /// Japan.
    Jp,
    /// Mexico.
    Mx,
    /// Netherlands.
    Nl,
    /// Saudi Arabia.
    Sa,
    /// Singapore.
    Sg,
    /// Turkey.
    Tr,
    /// United Kingdom (alias for `Gb`).
    Uk,
    /// United States.
    #[default]
    Us,
}

impl Marketplace {
    /// Every marketplace, in region-code order.
    pub const ALL: [Marketplace; 19] = [
        Self::Ae,
        Self::Au,
        Self::Br,
        Self::Ca,
        Self::De,
        Self::Eg,
        Self::Es,
        Self::Fr,
        Self::Gb,
        Self::In,
        Self::It,
        Self::Jp,
        Self::Mx,
        Self::Nl,
        Self::Sa,
        Self::Sg,
        Self::Tr,
        Self::Uk,
        Self::Us,
    ];

    /// The two-letter region code, e.g. `"US"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Ae => "AE",
            Self::Au => "AU",
            Self::Br => "BR",
            Self::Ca => "CA",
            Self::De => "DE",
            Self::Eg => "EG",
            Self::Es => "ES",
            Self::Fr => "FR",
            Self::Gb => "GB",
            Self::In => "IN",
            Self::It => "IT",
            Self::Jp => "JP",
            Self::Mx => "MX",
            Self::Nl => "NL",
            Self::Sa => "SA",
            Self::Sg => "SG",
            Self::Tr => "TR",
            Self::Uk => "UK",
            Self::Us => "US",
        }
    }

    /// The API endpoint, including the `https://` scheme.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Ae => "https://mws.amazonservices.ae",
            Self::Au => "https://mws.amazonservices.com.au",
            Self::Br | Self::Us => "https://mws.amazonservices.com",
            Self::Ca => "https://mws.amazonservices.ca",
            Self::De
            | Self::Eg
            | Self::Es
            | Self::Fr
            | Self::Gb
            | Self::It
            | Self::Nl
            | Self::Sa
            | Self::Tr
            | Self::Uk => "https://mws-eu.amazonservices.com",
            Self::In => "https://mws.amazonservices.in",
            Self::Jp => "https://mws.amazonservices.jp",
            Self::Mx => "https://mws.amazonservices.com.mx",
            Self::Sg => "https://mws-fe.amazonservices.com",
        }
    }

    /// The marketplace id sent in `MarketplaceId` parameters.
    #[must_use]
    pub fn marketplace_id(self) -> &'static str {
        match self {
            Self::Ae => "A2VIGQ35RCS4UG",
            Self::Au => "A39IBJ37TRP1C6",
            Self::Br => "A2Q3Y263D00KWC",
            Self::Ca => "A2EUQ1WTGCTBG2",
            Self::De => "A1PA6795UKMFR9",
            Self::Eg => "ARBP9OOSHTCHU",
            Self::Es => "A1RKKUPIHCS9HS",
            Self::Fr => "A13V1IB3VIYZZH",
            Self::Gb | Self::Uk => "A1F83G8C2ARO7P",
            Self::In => "A21TJRUUN4KGV",
            Self::It => "APJ6JRA9NG5V4",
            Self::Jp => "A1VC38T7YXB528",
            Self::Mx => "A1AM78C64UM0Y8",
            Self::Nl => "A1805IZSGTT6HS",
            Self::Sa => "A17E79C6D8DWNP",
            Self::Sg => "A19VAU5U5O7RUS",
            Self::Tr => "A33AVAJ2PDY3EV",
            Self::Us => "ATVPDKIKX0DER",
        }
    }

    /// The endpoint host without scheme, e.g. `mws.amazonservices.com`.
    #[must_use]
    pub fn host(self) -> &'static str {
        self.endpoint().trim_start_matches("https://")
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Marketplace {
    type Err = MwsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MwsError::InvalidRegion {
                region: s.to_owned(),
                valid: Self::ALL.map(Self::code).join(", "),
            })
    }
}
