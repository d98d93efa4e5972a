use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;
use time::macros::format_description;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

const APP_DIR: &str = "vix";
const LOG_FILE_NAME: &str = "vix.log";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("create log directory {} failed", path.display())]
	CreateLogDir {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("initialize tracing subscriber failed")]
	InitSubscriber {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

/// Routes `tracing` output to a log file. The terminal belongs to the
/// editor, so nothing is ever written to stdout or stderr from here.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() -> Result<(), LoggingError> {
	let log_dir = prepare_log_dir(user_log_dir(|key| std::env::var_os(key)))?;

	let timer = UtcTime::new(format_description!(
		"[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
	));
	let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
	tracing_subscriber::fmt()
		.with_timer(timer)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
		.with_writer(file_appender)
		.with_ansi(false)
		.try_init()
		.map_err(|source| LoggingError::InitSubscriber { source })?;

	tracing::info!("logging to {}", log_dir.join(LOG_FILE_NAME).display());
	Ok(())
}

/// Creates `preferred`, falling back to a directory under the system temp
/// dir when that is not possible (read-only home, missing parent).
fn prepare_log_dir(preferred: PathBuf) -> Result<PathBuf, LoggingError> {
	if std::fs::create_dir_all(&preferred).is_ok() {
		return Ok(preferred);
	}
	let fallback = std::env::temp_dir().join(APP_DIR).join("logs");
	std::fs::create_dir_all(&fallback)
		.map_err(|source| LoggingError::CreateLogDir { path: fallback.clone(), source })?;
	Ok(fallback)
}

fn user_log_dir(var: impl Fn(&str) -> Option<OsString>) -> PathBuf {
	#[cfg(target_os = "windows")]
	{
		var("LOCALAPPDATA").map(PathBuf::from).unwrap_or_else(std::env::temp_dir).join(APP_DIR).join("logs")
	}

	#[cfg(target_os = "macos")]
	{
		let home = var("HOME").map(PathBuf::from).unwrap_or_else(std::env::temp_dir);
		home.join("Library").join("Logs").join(APP_DIR)
	}

	#[cfg(all(unix, not(target_os = "macos")))]
	{
		match var("XDG_STATE_HOME").filter(|dir| !dir.is_empty()) {
			Some(state_home) => PathBuf::from(state_home).join(APP_DIR).join("logs"),
			None => {
				let home = var("HOME").map(PathBuf::from).unwrap_or_else(std::env::temp_dir);
				home.join(".local").join("state").join(APP_DIR).join("logs")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::prepare_log_dir;

	#[test]
	fn writable_log_dir_should_be_kept() {
		let preferred = std::env::temp_dir().join(format!("vix-log-dir-{}", std::process::id())).join("logs");
		let dir = prepare_log_dir(preferred.clone()).expect("temp dir is writable");
		assert_eq!(dir, preferred);
		assert!(dir.is_dir());
		let _ = std::fs::remove_dir_all(preferred.parent().expect("has parent"));
	}

	#[test]
	fn unusable_log_dir_should_fall_back_to_temp_dir() {
		let blocker = std::env::temp_dir().join(format!("vix-log-blocker-{}", std::process::id()));
		std::fs::write(&blocker, b"not a directory").expect("temp dir is writable");

		let dir = prepare_log_dir(blocker.join("logs")).expect("fallback is writable");
		assert_eq!(dir, std::env::temp_dir().join("vix").join("logs"));
		assert!(dir.is_dir());
		let _ = std::fs::remove_file(&blocker);
	}

	#[cfg(all(unix, not(target_os = "macos")))]
	mod dir_resolution {
		use std::ffi::OsString;
		use std::path::PathBuf;

		use crate::logging::user_log_dir;

		fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<OsString> {
			move |key: &str| {
				pairs.iter().find(|(name, _)| *name == key).map(|(_, value)| OsString::from(value))
			}
		}

		#[test]
		fn xdg_state_home_should_take_precedence() {
			let dir = user_log_dir(env(&[("XDG_STATE_HOME", "/state"), ("HOME", "/home/u")]));
			assert_eq!(dir, PathBuf::from("/state/vix/logs"));
		}

		#[test]
		fn home_should_be_used_when_xdg_state_home_is_unset_or_empty() {
			let expected = PathBuf::from("/home/u/.local/state/vix/logs");
			assert_eq!(user_log_dir(env(&[("HOME", "/home/u")])), expected);
			assert_eq!(user_log_dir(env(&[("XDG_STATE_HOME", ""), ("HOME", "/home/u")])), expected);
		}

		#[test]
		fn temp_dir_should_be_the_last_resort() {
			let expected = std::env::temp_dir().join(".local/state/vix/logs");
			assert_eq!(user_log_dir(env(&[])), expected);
		}
	}
}
