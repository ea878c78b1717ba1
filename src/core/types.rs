use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{Result, SuperFakturaError};

/// Wire format for every date the API accepts or returns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`SuperFakturaError::InvalidDate`] for any other shape or an
/// impossible calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| SuperFakturaError::InvalidDate(s.into()))
}

/// Invoice currencies supported by SuperFaktura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Czech koruna.
    #[serde(rename = "CZK")]
    Czk,
    /// Euro.
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Czk => "CZK",
            Self::Eur => "EUR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CZK" => Some(Self::Czk),
            "EUR" => Some(Self::Eur),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Document languages. The code doubles as the URL prefix for PDF downloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "cze")]
    Czech,
    #[serde(rename = "deu")]
    German,
    #[serde(rename = "eng")]
    English,
    #[serde(rename = "hrv")]
    Croatian,
    #[serde(rename = "hun")]
    Hungarian,
    #[serde(rename = "ita")]
    Italian,
    #[serde(rename = "nld")]
    Dutch,
    #[serde(rename = "pol")]
    Polish,
    #[serde(rename = "rom")]
    Romanian,
    #[serde(rename = "rus")]
    Russian,
    #[serde(rename = "slo")]
    Slovak,
    #[serde(rename = "slv")]
    Slovene,
    #[serde(rename = "spa")]
    Spanish,
    #[serde(rename = "ukr")]
    Ukrainian,
}

impl Language {
    pub const ALL: [Language; 14] = [
        Self::Czech,
        Self::German,
        Self::English,
        Self::Croatian,
        Self::Hungarian,
        Self::Italian,
        Self::Dutch,
        Self::Polish,
        Self::Romanian,
        Self::Russian,
        Self::Slovak,
        Self::Slovene,
        Self::Spanish,
        Self::Ukrainian,
    ];

    /// Three-letter code used by the API (note `rom` and `slo`, not ISO 639-2/T).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Czech => "cze",
            Self::German => "deu",
            Self::English => "eng",
            Self::Croatian => "hrv",
            Self::Hungarian => "hun",
            Self::Italian => "ita",
            Self::Dutch => "nld",
            Self::Polish => "pol",
            Self::Romanian => "rom",
            Self::Russian => "rus",
            Self::Slovak => "slo",
            Self::Slovene => "slv",
            Self::Spanish => "spa",
            Self::Ukrainian => "ukr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Representation a document can be fetched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    Json,
    Pdf,
}

/// Kind of invoice document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    /// Pro forma invoice (request for advance payment).
    Proforma,
    /// Regular tax document.
    Regular,
}

impl InvoiceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Proforma => "proforma",
            Self::Regular => "regular",
        }
    }
}
