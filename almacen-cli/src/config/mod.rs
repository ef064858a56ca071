//! Application configuration
//!
//! One immutable `Config`, loaded from a TOML file at startup and passed
//! explicitly to the components that need it. Lookup of per-client
//! credentials and station ids goes through [`Config::client`]; an unknown
//! key is an error that names the key, since which clients exist is decided
//! entirely by this file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the default config file location.
pub const CONFIG_ENV_VAR: &str = "ALMACEN_CONFIG";

/// Which comment the creation payload carries.
///
/// Two variants were in production use at different times; the flag makes
/// the choice explicit instead of silently picking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStyle {
    /// The configured `comment` label, the same for every order.
    #[default]
    FixedLabel,
    /// The original unsanitized address, followed by the row's own comment
    /// (or the configured label when the row has none).
    AddressEcho,
}

impl CommentStyle {
    pub fn label(&self) -> &'static str {
        match self {
            CommentStyle::FixedLabel => "fixed-label",
            CommentStyle::AddressEcho => "address-echo",
        }
    }
}

/// Where the order sheet lives and how to export it as CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Spreadsheet identifier, interpolated into the export URL template.
    #[serde(default)]
    pub id: String,
    /// Sheet tab within the spreadsheet.
    #[serde(default)]
    pub gid: u32,
    /// Full export URL override; when set, `id`/`gid` are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Timeout applied to every outbound request, sheet fetch included.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_comment() -> String {
    "Yango Warehouse order".to_string()
}

/// Per-client credentials: which pickup station orders ship from and which
/// token authorizes the platform calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEntry {
    pub api_key: String,
    pub station_id: String,
}

/// Process-wide configuration, constructed once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delivery platform base URL, without a trailing slash.
    pub base_url: String,
    /// Link to the sheet shown to the operator before upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_link: Option<String>,
    /// Default comment label for creation payloads.
    #[serde(default = "default_comment")]
    pub comment: String,
    #[serde(default)]
    pub comment_style: CommentStyle,
    pub sheet: SheetConfig,
    #[serde(default)]
    pub http: HttpConfig,
    /// Keyed by the sheet's Client column.
    #[serde(default)]
    pub clients: BTreeMap<String, ClientEntry>,
}

impl Config {
    /// Resolve the config file path: explicit override, then the
    /// `ALMACEN_CONFIG` variable, then the platform config directory.
    pub fn resolve_path(override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(dir.join("almacen").join("config.toml"))
    }

    /// Load and validate the configuration file.
    pub fn load(override_path: Option<&Path>) -> Result<Config> {
        let path = Self::resolve_path(override_path)?;
        if !path.exists() {
            bail!(
                "Config file not found: {} (run 'almacen-cli config init' to create one)",
                path.display()
            );
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("Config error: base_url must not be empty");
        }
        if self.sheet.export_url.is_none() && self.sheet.id.trim().is_empty() {
            bail!("Config error: either sheet.id or sheet.export_url must be set");
        }
        if self.http.timeout_secs == 0 {
            bail!("Config error: http.timeout_secs must be greater than zero");
        }
        if self.clients.is_empty() {
            bail!("Config error: at least one [clients.<key>] entry is required");
        }
        for (key, entry) in &self.clients {
            if entry.api_key.trim().is_empty() || entry.station_id.trim().is_empty() {
                bail!(
                    "Config error: client '{}' needs both api_key and station_id",
                    key
                );
            }
        }
        Ok(())
    }

    /// Look up the credentials for a sheet row's Client value.
    pub fn client(&self, key: &str) -> Result<&ClientEntry> {
        self.clients.get(key).with_context(|| {
            format!(
                "Unknown client '{}': no [clients.{}] entry in the config",
                key, key
            )
        })
    }

    /// Copy with every API key replaced, for `config show` output.
    pub fn redacted(&self) -> Config {
        let mut redacted = self.clone();
        for entry in redacted.clients.values_mut() {
            entry.api_key = "<redacted>".to_string();
        }
        redacted
    }
}

/// Starter file written by `config init`.
pub const CONFIG_TEMPLATE: &str = r#"# almacen-cli configuration

# Delivery platform base URL (no trailing slash).
base_url = "https://b2b.example.com/api/b2b/platform/offers"

# Shown to the operator before upload.
# load_link = "https://docs.google.com/spreadsheets/d/<id>/edit"

# Default comment label for creation payloads.
comment = "Yango Warehouse order"

# "fixed-label" sends the comment above on every order;
# "address-echo" sends the original address plus the row's comment.
comment_style = "fixed-label"

[sheet]
id = "<spreadsheet id>"
gid = 0
# Full override for non-Google CSV hosts:
# export_url = "https://example.com/orders.csv"

[http]
timeout_secs = 30

# One table per Client value in the sheet.
[clients.example]
api_key = "<bearer token>"
station_id = "<platform station id>"
"#;
