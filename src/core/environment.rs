//! SuperFaktura deployments and their base URLs.
//!
//! Each national deployment and each sandbox lives under its own host. The
//! table is closed: there is no way to register another deployment at runtime.
//! Custom hosts go through [`crate::core::Config`] directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SuperFakturaError;

/// A SuperFaktura deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    /// moja.superfaktura.sk
    Slovakia,
    /// moje.superfaktura.cz
    CzechRepublic,
    /// meine.superfaktura.at
    Austria,
    /// Slovak sandbox.
    SandboxSk,
    /// Czech sandbox.
    SandboxCz,
}

impl Environment {
    /// Every deployment, in documentation order.
    pub const ALL: [Environment; 5] = [
        Self::Slovakia,
        Self::CzechRepublic,
        Self::Austria,
        Self::SandboxSk,
        Self::SandboxCz,
    ];

    /// Base URL of the deployment, without a trailing slash.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Slovakia => "https://moja.superfaktura.sk",
            Self::CzechRepublic => "https://moje.superfaktura.cz",
            Self::Austria => "https://meine.superfaktura.at",
            Self::SandboxSk => "https://sandbox.superfaktura.sk",
            Self::SandboxCz => "https://sandbox.superfaktura.cz",
        }
    }

    /// Short identifier accepted by [`FromStr`].
    pub fn code(&self) -> &'static str {
        match self {
            Self::Slovakia => "sk",
            Self::CzechRepublic => "cz",
            Self::Austria => "at",
            Self::SandboxSk => "sandbox-sk",
            Self::SandboxCz => "sandbox-cz",
        }
    }

    pub fn is_sandbox(&self) -> bool {
        matches!(self, Self::SandboxSk | Self::SandboxCz)
    }

    /// Reverse lookup of [`Environment::base_url`]. A single trailing slash is tolerated.
    pub fn from_base_url(url: &str) -> Option<Self> {
        let url = url.strip_suffix('/').unwrap_or(url);
        Self::ALL.into_iter().find(|env| env.base_url() == url)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slovakia => "Slovakia",
            Self::CzechRepublic => "Czech Republic",
            Self::Austria => "Austria",
            Self::SandboxSk => "Sandbox (SK)",
            Self::SandboxCz => "Sandbox (CZ)",
        };
        f.write_str(name)
    }
}

impl FromStr for Environment {
    type Err = SuperFakturaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sk" | "slovakia" => Ok(Self::Slovakia),
            "cz" | "czech-republic" => Ok(Self::CzechRepublic),
            "at" | "austria" => Ok(Self::Austria),
            "sandbox-sk" => Ok(Self::SandboxSk),
            "sandbox-cz" => Ok(Self::SandboxCz),
            _ => Err(SuperFakturaError::UnknownEnvironment(s.to_string())),
        }
    }
}
