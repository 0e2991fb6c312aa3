use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::Verbosity;

impl From<Verbosity> for LevelFilter {
  fn from(v: Verbosity) -> Self {
    match v {
      Verbosity::Quiet => LevelFilter::Error,
      Verbosity::Normal => LevelFilter::Info,
      Verbosity::Debug => LevelFilter::Debug,
    }
  }
}

/// Installs the terminal logger: errors go to stderr, everything else to stdout
pub(crate) fn init(v: Verbosity) {
  let config = ConfigBuilder::new()
    .set_time_level(LevelFilter::Off)
    .set_thread_level(LevelFilter::Off)
    .set_target_level(LevelFilter::Off)
    .set_location_level(LevelFilter::Off)
    .build();

  if let Err(err) = TermLogger::init(v.into(), config, TerminalMode::Mixed, ColorChoice::Never) {
    eprintln!("Warning: could not set up logging: {err}");
  }
}
