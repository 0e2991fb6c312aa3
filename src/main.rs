mod logger;

use clap::Parser;
use log::{debug, error};
use word_image_convert_lib::{convert, ConvertParams};

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, PartialEq, clap::ValueEnum, Default)]
enum Verbosity {
  Quiet,
  #[default]
  Normal,
  Debug,
}

/// Converts a raw binary into an image of big-endian 32-bit words.
///
/// Each 4-byte group of the input is byte-swapped, a trailing partial group is zero-padded
/// and the image is zero-filled up to the requested number of words.
#[derive(Parser, Debug)]
#[command(version)]
struct WordImageConvert {
  /// Sets the output verbosity
  #[arg(short, long, default_value = "normal")]
  verbosity: Verbosity,

  /// The raw binary file to read
  #[arg(name = "INPUT")]
  input: PathBuf,

  /// The number of 32-bit words of the image, the input must be shorter than 4 * WORDS bytes
  #[arg(name = "WORDS")]
  words: usize,

  /// The image file to create (or overwrite)
  #[arg(name = "OUTPUT")]
  output: PathBuf,
}

fn main() -> ExitCode {
  // get the arguments
  let args = WordImageConvert::parse();

  logger::init(args.verbosity);

  let params = ConvertParams::new(args.input, args.words, args.output);
  debug!("Converting {params}");

  match convert(&params) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      error!("{err}");
      ExitCode::FAILURE
    }
  }
}
