use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

use grantdb_core::{entities::SortKey, view::ViewOptions};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "grantdb.toml";

const ENV_NAME_API_URL: &str = "GRANTDB_API_URL";

pub struct Config {
    pub api: Api,
    pub view: View,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            cfg.api.base_url = api_url;
        }
        Ok(cfg)
    }
}

pub struct Api {
    /// Base URL of the grant API, e.g. `http://127.0.0.1:5000/api`
    pub base_url: String,
    pub timeout: Duration,
}

pub struct View {
    pub max_ranked_tags: usize,
    /// Number of tags listed on the submission screen.
    pub tag_preview_len: usize,
    pub default_sort: SortKey,
}

impl View {
    pub const fn options(&self) -> ViewOptions {
        ViewOptions {
            max_ranked_tags: self.max_ranked_tags,
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, view } = from;

        let raw::Api { base_url, timeout } = api.unwrap_or_default();
        let defaults = raw::Api::default();

        let base_url = base_url
            .or(defaults.base_url)
            .ok_or_else(|| anyhow!("Missing API base URL"))?;
        if base_url.trim().is_empty() {
            return Err(anyhow!("The API base URL must not be empty"));
        }
        let timeout = timeout
            .or(defaults.timeout)
            .ok_or_else(|| anyhow!("Missing API timeout"))?;
        let api = Api { base_url, timeout };

        let raw::View {
            max_ranked_tags,
            tag_preview_len,
            default_sort,
        } = view.unwrap_or_default();
        let defaults = raw::View::default();

        let max_ranked_tags = max_ranked_tags
            .or(defaults.max_ranked_tags)
            .ok_or_else(|| anyhow!("Missing max. ranked tags configuration"))?;
        let tag_preview_len = tag_preview_len
            .or(defaults.tag_preview_len)
            .ok_or_else(|| anyhow!("Missing tag preview configuration"))?;
        let default_sort = match default_sort.or(defaults.default_sort) {
            Some(key) => key
                .parse()
                .map_err(|_| anyhow!("Invalid default sort order '{key}'"))?,
            None => SortKey::default(),
        };
        let view = View {
            max_ranked_tags,
            tag_preview_len,
            default_sort,
        };

        Ok(Self { api, view })
    }
}
