use std::fmt;

use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Which lookup table a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogDomain {
    App,
    Currency,
}

impl fmt::Display for CatalogDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogDomain::App => f.write_str("app ID"),
            CatalogDomain::Currency => f.write_str("currency"),
        }
    }
}

/// Steam applications whose items can be priced on the community market.
///
/// Parsing is case-insensitive and also accepts `tf2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[repr(u32)]
pub enum App {
    #[strum(to_string = "TEAM_FORTRESS_2", serialize = "TF2")]
    TeamFortress2 = 440,
    #[strum(to_string = "DOTA_2")]
    Dota2 = 570,
    Cs2 = 730,
    Rust = 252490,
    Pubg = 578080,
}

impl App {
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Display name inserted into the formatted response as `game_name`
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn contains(code: u32) -> bool {
        App::from_repr(code).is_some()
    }
}

/// Steam wallet currency codes, names follow ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[repr(u32)]
pub enum Currency {
    #[default]
    Usd = 1,
    Gbp = 2,
    Eur = 3,
    Chf = 4,
    Rub = 5,
    Pln = 6,
    Brl = 7,
    Jpy = 8,
    Sek = 9,
    Idr = 10,
    Myr = 11,
    Php = 12,
    Sgd = 13,
    Thb = 14,
    Vnd = 15,
    Krw = 16,
    Try = 17,
    Uah = 18,
    Mxn = 19,
    Cad = 20,
    Aud = 21,
    Nzd = 22,
    Cny = 23,
    Inr = 24,
    Clp = 25,
    Cup = 26,
    Cop = 27,
    Zar = 28,
    Hkd = 29,
    Twd = 30,
    Sar = 31,
    Aed = 32,
    // 33 is not assigned
    Ars = 34,
    Ils = 35,
    // 36 is not assigned
    Kzt = 37,
    Kwd = 38,
    Qar = 39,
    Crc = 40,
    Uyu = 41,
}

impl Currency {
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Display name inserted into the formatted response as `currency_name`
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn contains(code: u32) -> bool {
        Currency::from_repr(code).is_some()
    }
}
