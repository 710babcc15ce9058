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
use Commands::Generate;
use Commands::Run;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use phonebench::benchmark::run_benchmarks;
use phonebench::cli::Cli;
use phonebench::cli::Commands;
use phonebench::cli::GenerateArgs;
use phonebench::config::Config;
use phonebench::generator::GenerateSpec;
use phonebench::generator::generate_into;
use phonebench::generator::generate_seed;
use phonebench::logging::setup_tracing;
use phonebench::report::render;
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let _log_guard = setup_tracing()?;

  let Cli { command } = Cli::parse();
  let main_span = tracing::info_span!("phonebench");
  let _enter = main_span.enter();

  match command {
    Run(run_args) => {
      tracing::info!("Initializing Benchmark Run...");

      let config = Config::try_from(run_args).context("Invalid configuration")?;
      let report = run_benchmarks(&config).await?;

      let mut stdout = std::io::stdout().lock();
      render(&report, config.format, &mut stdout)?;
      stdout.flush()?;
    }
    Generate(GenerateArgs {
      out_dir,
      entries,
      queries,
      hit_ratio,
      seed,
    }) => {
      let seed = seed.unwrap_or_else(generate_seed);
      tracing::info!(seed, entries, queries, hit_ratio, "Generating dataset...");

      let spec = GenerateSpec {
        entries,
        queries,
        hit_ratio,
      };
      let (directory, queries) = generate_into(&spec, seed, &out_dir)?;

      tracing::info!(
        directory = %directory.display(),
        queries = %queries.display(),
        "Dataset written"
      );
    }
  }

  Ok(())
}
