// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::benchmark::DEFAULT_BUDGET_FACTOR;
use crate::cli::RunArgs;
use crate::error::ConfigError;
use crate::error::PhonebenchError;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use figment::providers::Toml;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Prefix for environment variable overrides, e.g. `PHONEBENCH_BUDGET_FACTOR`.
pub const ENV_PREFIX: &str = "PHONEBENCH_";

/// How the report is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// Human-readable summary per pipeline.
  #[default]
  Text,
  /// One JSON object per pipeline.
  Json,
}

// --- Default Values ---
fn default_directory() -> PathBuf {
  PathBuf::from("directory.txt")
}

fn default_queries() -> PathBuf {
  PathBuf::from("find.txt")
}

/// Fully resolved configuration for a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  /// Directory listing, one `<identifier> <name>` per line.
  #[serde(default = "default_directory")]
  pub directory: PathBuf,

  /// Names to look up, one per line.
  #[serde(default = "default_queries")]
  pub queries: PathBuf,

  /// Sort budget as a multiple of the linear-search time.
  #[serde(default = "default_budget_factor")]
  pub budget_factor: u32,

  #[serde(default)]
  pub format: OutputFormat,
}

fn default_budget_factor() -> u32 {
  DEFAULT_BUDGET_FACTOR
}

impl Default for Config {
  fn default() -> Self {
    Self {
      directory: default_directory(),
      queries: default_queries(),
      budget_factor: DEFAULT_BUDGET_FACTOR,
      format: OutputFormat::default(),
    }
  }
}

/// Values given on the command line. Unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct Overrides {
  #[serde(skip_serializing_if = "Option::is_none")]
  directory: Option<PathBuf>,
  #[serde(skip_serializing_if = "Option::is_none")]
  queries: Option<PathBuf>,
  #[serde(skip_serializing_if = "Option::is_none")]
  budget_factor: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  format: Option<OutputFormat>,
}

impl Config {
  /// Defaults, then the config file, then `PHONEBENCH_*` variables.
  ///
  /// A missing config file is skipped. Files ending in `.json` are read as
  /// JSON, anything else as TOML.
  pub fn figment(config_file: &Path) -> Figment {
    let figment = Figment::from(Serialized::defaults(Config::default()));

    let figment = if config_file.extension().is_some_and(|ext| ext == "json") {
      figment.merge(Json::file(config_file))
    } else {
      figment.merge(Toml::file(config_file))
    };

    figment.merge(Env::prefixed(ENV_PREFIX).only(&["directory", "queries", "budget_factor", "format"]))
  }

  fn validate(self) -> Result<Self, ConfigError> {
    if self.directory.as_os_str().is_empty() || self.queries.as_os_str().is_empty() {
      return Err(ConfigError::EmptyPath);
    }
    Ok(self)
  }
}

impl TryFrom<RunArgs> for Config {
  type Error = PhonebenchError;

  fn try_from(
    RunArgs {
      config,
      directory,
      queries,
      budget_factor,
      format,
    }: RunArgs,
  ) -> Result<Self, Self::Error> {
    let overrides = Overrides {
      directory,
      queries,
      budget_factor,
      format,
    };

    let resolved: Config = Config::figment(&config)
      .merge(Serialized::defaults(overrides))
      .extract()
      .map_err(ConfigError::from)?;

    tracing::debug!(config = ?resolved, source = %config.display(), "Resolved configuration");

    Ok(resolved.validate()?)
  }
}
