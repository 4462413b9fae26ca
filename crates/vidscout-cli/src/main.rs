// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidscout_cli_config::runtime::LoggingConfig;
use vidscout_cli_config::sources::API_KEY_ENV_VARS;
use vidscout_cli_config::{load_config_with_cli, CliOverrides, LogFormat, LogLevel, VidscoutConfig};
use vidscout_search::{Resolver, ResolverOptions, ResultRecord, SearchQuery, SearchSession};
use vidscout_youtube::YouTubeClient;

mod interactive;
mod render;

/// vidscout - search YouTube from the terminal
///
/// With a keyword, runs one search and prints the results. Without one,
/// reads keywords from stdin line by line.
#[derive(Parser, Debug)]
#[command(name = "vidscout", version, about, long_about = None)]
struct Args {
	/// Search keyword; several words are joined with spaces
	keyword: Vec<String>,

	/// Result order: relevance, date or rating
	#[arg(short, long)]
	order: Option<String>,

	/// Number of videos to fetch (1-50)
	#[arg(short = 'n', long)]
	max_results: Option<u32>,

	/// Print results as JSON
	#[arg(long)]
	json: bool,

	/// Path to an extra configuration file
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Override the YouTube API base URL
	#[arg(long, hide = true)]
	base_url: Option<String>,

	/// Log level (overrides config)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long)]
	json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
	Text,
	Json,
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		Self {
			max_results: args.max_results,
			sort_order: args.order.clone(),
			base_url: args.base_url.clone(),
			log_level: args.log_level.clone(),
			log_format: if args.json_logs {
				Some("json".to_string())
			} else {
				None
			},
			config_file: args.config.clone(),
		}
	}
}

fn log_level_to_tracing(level: LogLevel) -> tracing::Level {
	match level {
		LogLevel::Trace => tracing::Level::TRACE,
		LogLevel::Debug => tracing::Level::DEBUG,
		LogLevel::Info => tracing::Level::INFO,
		LogLevel::Warn => tracing::Level::WARN,
		LogLevel::Error => tracing::Level::ERROR,
	}
}

/// Logs go to stderr; stdout carries only results.
fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(format!("vidscout={}", log_level_to_tracing(logging.level)))
	});

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(io::stderr))
				.init();
		}
	}
}

fn build_resolver(config: &VidscoutConfig) -> Result<Resolver<YouTubeClient>> {
	let api_key = config.api_key().cloned().with_context(|| {
		format!(
			"no YouTube API key configured; set {} or youtube.api_key in {}",
			API_KEY_ENV_VARS.join(" or "),
			config.paths.user_config_file.display()
		)
	})?;

	let client = YouTubeClient::with_timeout(api_key, config.youtube.timeout)
		.context("failed to create YouTube client")?
		.with_base_url(config.youtube.base_url.clone())
		.with_retry_config(config.retry.clone());

	Ok(Resolver::new(client).with_options(ResolverOptions {
		preserve_search_order: config.search.preserve_search_order,
	}))
}

pub(crate) fn print_records(keyword: &str, records: &[ResultRecord], format: OutputFormat) -> Result<()> {
	let now = Utc::now();
	let mut stdout = io::stdout().lock();

	match format {
		OutputFormat::Json => {
			let json = render::render_json(records, now).context("failed to serialize results")?;
			writeln!(stdout, "{json}")?;
		}
		OutputFormat::Text if records.is_empty() => {
			writeln!(stdout, "No videos found for '{keyword}'.")?;
		}
		OutputFormat::Text => {
			write!(stdout, "{}", render::render_text(records, now))?;
		}
	}

	stdout.flush()?;
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config =
		load_config_with_cli(CliOverrides::from(&args)).context("failed to load configuration")?;

	init_tracing(&config.logging);

	info!(
		sort_order = %config.search.sort_order,
		max_results = config.search.max_results,
		"starting vidscout"
	);

	let resolver = build_resolver(&config)?;
	let format = if args.json {
		OutputFormat::Json
	} else {
		OutputFormat::Text
	};

	if args.keyword.is_empty() {
		let session = SearchSession::new(config.search.sort_order, config.search.max_results);
		return interactive::run(Arc::new(resolver), session, format).await;
	}

	let keyword = args.keyword.join(" ");
	let query = SearchQuery::new(&keyword)
		.context("nothing to search for")?
		.with_sort_order(config.search.sort_order)
		.with_max_results(config.search.max_results);

	let records = resolver
		.resolve(&query)
		.await
		.with_context(|| format!("search for '{}' failed", query.keyword()))?;

	print_records(query.keyword(), &records, format)
}
