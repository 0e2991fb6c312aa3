use assert_cmd::{assert::Assert, Command};
use assert_fs::{fixture::ChildPath, prelude::*, TempDir};
use predicates::prelude::*;
use std::error::Error;
use std::fmt::Display;
use std::path::Path;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
  Quiet,
  #[default]
  Normal,
  Debug,
}
impl Verbosity {
  fn name(&self) -> &str {
    match self {
      Verbosity::Quiet => "quiet",
      Verbosity::Normal => "normal",
      Verbosity::Debug => "debug",
    }
  }
}
impl Display for Verbosity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

pub struct DataPrepare {
  tmp: TempDir,
}
impl DataPrepare {
  pub fn new() -> TestResult<Self> {
    let tmp = TempDir::new()?;
    tmp.child("out").create_dir_all()?;
    tmp.child("out").assert(predicate::path::is_dir());
    Ok(Self { tmp })
  }

  pub fn out_dir(&self) -> ChildPath {
    self.tmp.child("out")
  }

  /// Writes `data` into a new input file
  pub fn input(&self, name: &str, data: &[u8]) -> TestResult<ChildPath> {
    let input = self.tmp.child(name);
    input.write_binary(data)?;
    Ok(input)
  }

  pub fn output(&self, name: &str) -> ChildPath {
    self.out_dir().child(name)
  }
}

#[derive(Debug, Default)]
pub struct CmdOptions {
  verbosity: Option<Verbosity>,
}

impl CmdOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_verbosity(mut self, verbosity: Verbosity) -> Self {
    self.verbosity = Some(verbosity);
    self
  }

  pub fn apply(self, cmd: &mut Command) {
    if let Some(verbosity) = self.verbosity {
      cmd.args(["-v", verbosity.name()]);
    }
  }
}

pub fn run<I, O>(exe_name: &str, input: I, words: &str, output: O, opts: CmdOptions) -> TestResult<Assert>
where
  I: AsRef<Path>,
  O: AsRef<Path>,
{
  let mut cmd = Command::cargo_bin(exe_name)?;

  opts.apply(&mut cmd);

  cmd.arg(input.as_ref()).arg(words).arg(output.as_ref());

  Ok(cmd.assert())
}

/// Reads back a produced image
pub fn read_image<P: AsRef<Path>>(path: P) -> TestResult<Vec<u8>> {
  Ok(std::fs::read(path)?)
}
