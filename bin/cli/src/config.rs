use std::path::{Path, PathBuf};

use datocms::{DEFAULT_ENDPOINT, PREVIEW_ENDPOINT};
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use marketplace::output::{DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_PATH};
use marketplace::Styles;
use serde::Deserialize;

pub const DEFAULT_CONFIG_NAME: &str = "integrations.toml";

pub const ENV_PREFIX: &str = "INTEGRATIONS_";

pub const API_TOKEN_ENV: &str = "DATOCMS_API_TOKEN";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub content: ContentSettings,
    pub output: OutputSettings,
    /// Class name overrides, keyed by logical component name.
    pub styles: Styles,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    pub endpoint: String,
    pub preview_endpoint: String,
    pub api_token: Option<String>,
    /// Fetch draft content instead of the published version
    pub preview: bool,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            preview_endpoint: PREVIEW_ENDPOINT.to_string(),
            api_token: None,
            preview: false,
        }
    }
}

impl ContentSettings {
    pub fn endpoint(&self, preview: bool) -> &str {
        if preview || self.preview {
            &self.preview_endpoint
        } else {
            &self.endpoint
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub dir: PathBuf,
    /// Location of the page relative to `dir`
    pub path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            path: PathBuf::from(DEFAULT_PAGE_PATH),
        }
    }
}

impl Settings {
    /// Layers, lowest precedence first: built in defaults, the TOML file,
    /// `INTEGRATIONS_` prefixed variables (`__` separates sections) and finally
    /// `DATOCMS_API_TOKEN`.
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME));

        Figment::new()
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&[API_TOKEN_ENV])
                    .map(|_| "content.api_token".into()),
            )
    }

    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }
}
