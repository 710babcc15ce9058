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
use crate::config::OutputFormat;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Phone directory search benchmark")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Run linear, jump, binary and hash-table lookups and report timings.
  Run(RunArgs),

  /// Write a synthetic directory listing and query list.
  Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
  /// Configuration file (TOML, or JSON if it ends in `.json`). Skipped if missing.
  #[arg(long, env = "PHONEBENCH_CONFIG", default_value = "phonebench.toml")]
  pub config: PathBuf,

  /// Directory listing, one `<identifier> <name>` per line. [default: directory.txt]
  #[arg(long)]
  pub directory: Option<PathBuf>,

  /// Names to look up, one per line. [default: find.txt]
  #[arg(long)]
  pub queries: Option<PathBuf>,

  /// Sorts give up after this many times the linear-search time. [default: 10]
  #[arg(long)]
  pub budget_factor: Option<u32>,

  /// Report format. [default: text]
  #[arg(long, value_enum)]
  pub format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
  /// Where `directory.txt` and `find.txt` are written.
  #[arg(long, default_value = ".")]
  pub out_dir: PathBuf,

  /// Number of directory entries.
  #[arg(long, default_value_t = 1000)]
  pub entries: usize,

  /// Number of query names.
  #[arg(long, default_value_t = 100)]
  pub queries: usize,

  /// Fraction of queries that name an existing entry.
  #[arg(long, default_value_t = 0.5)]
  pub hit_ratio: f64,

  /// Seed for the random number generator.
  #[arg(long)]
  pub seed: Option<u64>,
}
