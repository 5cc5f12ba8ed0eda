//! Logger
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (defaults to `info`), and
//! optionally to a file, filtered by `RUST_LOG_FILE` (defaults to `debug`).

// Imports
use {
	std::{fs, io, path::Path, sync::Mutex},
	tracing::level_filters::LevelFilter,
	tracing_subscriber::{fmt, prelude::*, EnvFilter},
};

/// Initializes the logger.
///
/// Any messages logged through [`pre_init`] are emitted once the logger is set up.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	let term_layer = fmt::layer()
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", LevelFilter::INFO));

	let file_layer = log_file.and_then(|log_file| {
		let file = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(log_file);

		match file {
			Ok(file) => Some(
				fmt::layer()
					.with_ansi(false)
					.with_writer(Mutex::new(file))
					.with_filter(self::env_filter("RUST_LOG_FILE", LevelFilter::DEBUG)),
			),
			Err(err) => {
				pre_init::warn(format!("Unable to open log file {log_file:?}: {err}"));
				None
			},
		}
	});

	if let Err(err) = tracing_subscriber::registry().with(term_layer).with(file_layer).try_init() {
		eprintln!("Unable to initialize logger: {err}");
	}

	// Then flush everything that came before us
	let messages = std::mem::take(&mut *pre_init::MESSAGES.lock().unwrap_or_else(|err| err.into_inner()));
	for (level, message) in messages {
		match level {
			pre_init::Level::Warn => tracing::warn!("{message}"),
			pre_init::Level::Debug => tracing::debug!("{message}"),
		}
	}
}

/// Creates an env filter from `var`, falling back to `default`
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(default.into())
		.with_env_var(var)
		.from_env_lossy()
}

/// Logging before the logger is initialized
pub mod pre_init {
	// Imports
	use std::sync::Mutex;

	/// Messages logged before initialization
	pub(super) static MESSAGES: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

	/// Level of a queued message
	#[derive(PartialEq, Eq, Clone, Copy, Debug)]
	pub(super) enum Level {
		Warn,
		Debug,
	}

	/// Queues a message
	fn push(level: Level, message: String) {
		MESSAGES
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.push((level, message));
	}

	/// Queues a warning message
	pub fn warn(message: impl Into<String>) {
		self::push(Level::Warn, message.into());
	}

	/// Queues a debug message
	pub fn debug(message: impl Into<String>) {
		self::push(Level::Debug, message.into());
	}
}
