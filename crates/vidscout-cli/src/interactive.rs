// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Line-driven search loop.
//!
//! Each line is a keyword, or a `:`-command. Searches run in the background
//! so a new line can supersede the one in flight; only the newest search
//! prints.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use vidscout_search::{PendingSearch, ResolveError, Resolver, SearchSession, SortOrder, VideoProvider};

use crate::OutputFormat;

const HELP: &str = "\
Type a keyword to search. Commands:
  :sort <relevance|date|rating>   change the result order
  :help                           show this help
  :quit                           exit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input {
	Keyword(String),
	Sort(SortOrder),
	Help,
	Quit,
	Invalid(String),
	Blank,
}

pub(crate) fn parse_input(line: &str) -> Input {
	let line = line.trim();
	if line.is_empty() {
		return Input::Blank;
	}
	let Some(command) = line.strip_prefix(':') else {
		return Input::Keyword(line.to_string());
	};

	let mut parts = command.split_whitespace();
	match (parts.next(), parts.next()) {
		(Some("q" | "quit" | "exit"), None) => Input::Quit,
		(Some("h" | "help"), None) => Input::Help,
		(Some("sort"), Some(order)) => match SortOrder::from_str(order) {
			Ok(order) => Input::Sort(order),
			Err(e) => Input::Invalid(e.to_string()),
		},
		_ => Input::Invalid(format!("unknown command ':{command}' (try :help)")),
	}
}

/// What one `read_line` produced.
#[derive(Debug, PartialEq, Eq)]
enum ReadOutcome {
	Line,
	Eof,
	/// The line was not valid UTF-8. Its bytes are consumed, so the next
	/// read starts on the following line.
	Unreadable(String),
}

fn classify_read(read: io::Result<usize>) -> io::Result<ReadOutcome> {
	match read {
		Ok(0) => Ok(ReadOutcome::Eof),
		Ok(_) => Ok(ReadOutcome::Line),
		Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(ReadOutcome::Unreadable(e.to_string())),
		Err(e) => Err(e),
	}
}

pub(crate) async fn run<P>(
	resolver: Arc<Resolver<P>>,
	mut session: SearchSession,
	format: OutputFormat,
) -> Result<()>
where
	P: VideoProvider + 'static,
{
	let mut reader = BufReader::new(tokio::io::stdin());
	let mut in_flight: Option<JoinHandle<()>> = None;

	eprintln!("{HELP}");

	loop {
		prompt(&session)?;
		let mut line = String::new();

		tokio::select! {
			biased;

			_ = tokio::signal::ctrl_c() => {
				info!("interrupted, cancelling search");
				session.cancel();
				break;
			}

			read = reader.read_line(&mut line) => {
				match classify_read(read)? {
					ReadOutcome::Line => {}
					ReadOutcome::Eof => {
						debug!("EOF received");
						// Let the last search finish so piped input still prints.
						if let Some(handle) = in_flight.take() {
							let _ = handle.await;
						}
						break;
					}
					ReadOutcome::Unreadable(reason) => {
						warn!(error = %reason, "skipping unreadable input line");
						eprintln!("skipped a line that is not valid UTF-8");
						continue;
					}
				}

				let pending = match parse_input(&line) {
					Input::Blank => None,
					Input::Quit => {
						session.cancel();
						break;
					}
					Input::Help => {
						eprintln!("{HELP}");
						None
					}
					Input::Invalid(message) => {
						eprintln!("{message}");
						None
					}
					Input::Keyword(keyword) => session.set_keyword(&keyword),
					Input::Sort(order) => {
						let pending = session.set_sort_order(order);
						if pending.is_none() {
							eprintln!("sort order: {order}");
						}
						pending
					}
				};

				if let Some(pending) = pending {
					in_flight = Some(spawn_search(Arc::clone(&resolver), pending, format));
				}
			}
		}
	}

	Ok(())
}

fn prompt(session: &SearchSession) -> io::Result<()> {
	let mut stderr = io::stderr();
	match session.keyword() {
		Some(keyword) => write!(stderr, "[{keyword} / {}] > ", session.sort_order())?,
		None => write!(stderr, "[{}] > ", session.sort_order())?,
	}
	stderr.flush()
}

fn spawn_search<P>(
	resolver: Arc<Resolver<P>>,
	pending: PendingSearch,
	format: OutputFormat,
) -> JoinHandle<()>
where
	P: VideoProvider + 'static,
{
	tokio::spawn(async move {
		match pending.run(&resolver).await {
			// A newer search started after this one finished.
			Ok(_) if pending.is_cancelled() => {}
			Ok(records) => {
				if let Err(e) = crate::print_records(pending.query().keyword(), &records, format) {
					error!(error = %e, "failed to print results");
				}
			}
			Err(ResolveError::Cancelled) => {
				debug!(keyword = %pending.query().keyword(), "search superseded");
			}
			Err(e) => {
				error!(error = %e, keyword = %pending.query().keyword(), "search failed");
				eprintln!("search failed: {e}");
			}
		}
	})
}
