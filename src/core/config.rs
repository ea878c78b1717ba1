//! Credential resolution from the process environment.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::path::Path;

use tracing::debug;

use super::environment::Environment;
use super::error::{Result, SuperFakturaError};

/// API key from the account's API-access settings.
pub const ENV_API_KEY: &str = "SUPERFAKTURA_API_KEY";
/// Base URL of the target deployment.
pub const ENV_API_URL: &str = "SUPERFAKTURA_API_URL";
/// Account email from the API-access settings.
pub const ENV_API_EMAIL: &str = "SUPERFAKTURA_API_EMAIL";
/// Company identifier from the API-access settings.
pub const ENV_API_COMPANY_ID: &str = "SUPERFAKTURA_API_COMPANY_ID";

/// The variables [`Config::from_env`] reads, in the order they are reported when missing.
pub const ENV_VARS: [&str; 4] = [ENV_API_KEY, ENV_API_URL, ENV_API_EMAIL, ENV_API_COMPANY_ID];

/// Credentials and target deployment for one SuperFaktura company.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    api_url: String,
    email: String,
    company_id: String,
}

impl Config {
    /// Build a configuration from explicit values.
    ///
    /// A trailing `/` on `api_url` is removed.
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        email: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_key: api_key.into(),
            api_url: api_url.trim_end_matches('/').to_string(),
            email: email.into(),
            company_id: company_id.into(),
        }
    }

    /// Build a configuration targeting one of the known deployments.
    pub fn for_environment(
        environment: Environment,
        api_key: impl Into<String>,
        email: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Self {
        Self::new(api_key, environment.base_url(), email, company_id)
    }

    /// Resolve the configuration from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is read first;
    /// variables already set in the process take precedence over it. The
    /// process environment itself is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`SuperFakturaError::MissingCredentials`] naming every variable
    /// that is unset or empty.
    pub fn from_env() -> Result<Self> {
        let file = read_env_file(dotenvy::dotenv_iter());
        Self::from_layers(&file, |name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env`], but reads the `.env` file at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`]. A missing file is not an error.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_and_lookup(path.as_ref(), |name| std::env::var(name).ok())
    }

    fn from_file_and_lookup<F>(path: &Path, env_lookup: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        let file = read_env_file(dotenvy::from_path_iter(path));
        Self::from_layers(&file, env_lookup)
    }

    fn from_layers<F>(file: &HashMap<String, String>, mut env_lookup: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        Self::from_lookup(|name| env_lookup(name).or_else(|| file.get(name).cloned()))
    }

    /// Resolve the configuration through an arbitrary lookup function.
    ///
    /// `lookup` is called once for each name in [`ENV_VARS`] and nothing else.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut values: [String; 4] = Default::default();

        for (slot, name) in values.iter_mut().zip(ENV_VARS) {
            match lookup(name).filter(|v| !v.is_empty()) {
                Some(v) => *slot = v,
                None => missing.push(name),
            }
        }

        if !missing.is_empty() {
            return Err(SuperFakturaError::MissingCredentials(missing));
        }

        let [api_key, api_url, email, company_id] = values;
        let config = Self::new(api_key, api_url, email, company_id);
        debug!(
            api_url = %config.api_url,
            email = %config.email,
            company_id = %config.company_id,
            "resolved SuperFaktura configuration"
        );
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL, without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    /// The known deployment behind [`Config::api_url`], if it is one.
    pub fn environment(&self) -> Option<Environment> {
        Environment::from_base_url(&self.api_url)
    }

    /// Value of the `Authorization` header sent with every request.
    pub fn authorization_header(&self) -> String {
        format!(
            "SFAPI email={}&apikey={}&company_id={}",
            self.email, self.api_key, self.company_id
        )
    }

    /// Absolute URL of `endpoint` below the base URL, joined by exactly one `/`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_url, endpoint.trim_start_matches('/'))
    }
}

/// Collect the entries of a `.env` file. A missing file yields no entries;
/// an unreadable file or malformed line is logged and skipped.
fn read_env_file(iter: dotenvy::Result<dotenvy::Iter<File>>) -> HashMap<String, String> {
    let iter = match iter {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return HashMap::new(),
        Err(e) => {
            debug!(error = %e, "ignoring unreadable .env file");
            return HashMap::new();
        }
    };
    let mut entries = HashMap::new();
    for entry in iter {
        match entry {
            Ok((key, value)) => {
                entries.insert(key, value);
            }
            Err(e) => debug!(error = %e, "skipping malformed .env line"),
        }
    }
    debug!(entries = entries.len(), "read .env file");
    entries
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("email", &self.email)
            .field("company_id", &self.company_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full() -> HashMap<String, String> {
        vars(&[
            (ENV_API_KEY, "test_key"),
            (ENV_API_URL, "https://sandbox.superfaktura.sk/"),
            (ENV_API_EMAIL, "test@example.com"),
            (ENV_API_COMPANY_ID, "42"),
        ])
    }

    #[test]
    fn resolves_all_four() {
        let env = full();
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.api_key(), "test_key");
        assert_eq!(config.api_url(), "https://sandbox.superfaktura.sk");
        assert_eq!(config.email(), "test@example.com");
        assert_eq!(config.company_id(), "42");
        assert_eq!(config.environment(), Some(Environment::SandboxSk));
    }

    #[test]
    fn reads_exactly_the_documented_names() {
        let env = full();
        let mut asked = Vec::new();
        Config::from_lookup(|k| {
            asked.push(k);
            env.get(k).cloned()
        })
        .unwrap();
        assert_eq!(asked, ENV_VARS);
    }

    #[test]
    fn names_are_verbatim() {
        assert_eq!(
            ENV_VARS,
            [
                "SUPERFAKTURA_API_KEY",
                "SUPERFAKTURA_API_URL",
                "SUPERFAKTURA_API_EMAIL",
                "SUPERFAKTURA_API_COMPANY_ID",
            ]
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let env = vars(&[
            ("superfaktura_api_key", "k"),
            ("superfaktura_api_url", "u"),
            ("superfaktura_api_email", "e"),
            ("superfaktura_api_company_id", "c"),
        ]);
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, SuperFakturaError::MissingCredentials(ref m) if m.len() == 4));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut env = full();
        env.insert(ENV_API_EMAIL.into(), String::new());
        match Config::from_lookup(|k| env.get(k).cloned()) {
            Err(SuperFakturaError::MissingCredentials(missing)) => {
                assert_eq!(missing, [ENV_API_EMAIL]);
            }
            other => panic!("expected MissingCredentials, got {other:?}"),
        }
    }

    #[test]
    fn reports_every_missing_variable() {
        let env = vars(&[(ENV_API_URL, "https://moja.superfaktura.sk")]);
        match Config::from_lookup(|k| env.get(k).cloned()) {
            Err(SuperFakturaError::MissingCredentials(missing)) => {
                assert_eq!(missing, [ENV_API_KEY, ENV_API_EMAIL, ENV_API_COMPANY_ID]);
            }
            other => panic!("expected MissingCredentials, got {other:?}"),
        }
    }

    #[test]
    fn authorization_header_format() {
        let config = Config::new("key", "https://moja.superfaktura.sk", "a@b.sk", "7");
        assert_eq!(
            config.authorization_header(),
            "SFAPI email=a@b.sk&apikey=key&company_id=7"
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = Config::new("very-secret", "https://moja.superfaktura.sk", "a@b.sk", "7");
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("very-secret"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn endpoint_url_single_slash() {
        let config = Config::for_environment(Environment::Austria, "k", "e", "c");
        assert_eq!(
            config.endpoint_url("/invoices/create"),
            "https://meine.superfaktura.at/invoices/create"
        );
        assert_eq!(
            config.endpoint_url("countries"),
            "https://meine.superfaktura.at/countries"
        );
    }

    #[test]
    fn custom_url_has_no_environment() {
        let config = Config::new("k", "http://127.0.0.1:1234", "e", "c");
        assert_eq!(config.environment(), None);
    }

    fn write_env_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(".env");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn env_file_fills_in_and_process_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_env_file(
            &dir,
            "SUPERFAKTURA_API_KEY=file_key\n\
             SUPERFAKTURA_API_URL=https://sandbox.superfaktura.cz\n\
             SUPERFAKTURA_API_EMAIL=file@example.com\n",
        );
        let process = vars(&[
            (ENV_API_EMAIL, "process@example.com"),
            (ENV_API_COMPANY_ID, "9"),
        ]);

        let config = Config::from_file_and_lookup(&path, |k| process.get(k).cloned()).unwrap();
        assert_eq!(config.api_key(), "file_key");
        assert_eq!(config.environment(), Some(Environment::SandboxCz));
        assert_eq!(config.email(), "process@example.com");
        assert_eq!(config.company_id(), "9");
    }

    #[test]
    fn missing_env_file_falls_back_to_process() {
        let dir = tempfile::tempdir().unwrap();
        let env = full();
        let config =
            Config::from_file_and_lookup(&dir.path().join(".env"), |k| env.get(k).cloned()).unwrap();
        assert_eq!(config.api_key(), "test_key");
    }

    #[test]
    fn env_file_alone_cannot_hide_missing_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_env_file(&dir, "SUPERFAKTURA_API_KEY=k\n");
        match Config::from_file_and_lookup(&path, |_| None) {
            Err(SuperFakturaError::MissingCredentials(missing)) => {
                assert_eq!(missing, [ENV_API_URL, ENV_API_EMAIL, ENV_API_COMPANY_ID]);
            }
            other => panic!("expected MissingCredentials, got {other:?}"),
        }
    }
}
