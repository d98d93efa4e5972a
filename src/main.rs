use anyhow::{Context, Result};
use vix::{app::App, logging};

fn main() {
	if let Err(err) = run() {
		eprintln!("{:#}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	logging::init_logging().context("initialize logging failed")?;
	App::new().run().context("run editor failed")
}
