//! Error types shared by the conversion operations

use crate::PathError;

#[derive(Debug)]
/// Defines the ways a conversion can fail
pub enum Error {
  /// The input does not strictly fit in the requested number of words
  InputTooLarge {
    /// The length of the input, in bytes
    input_len: usize,
    /// The length of the requested image, in bytes
    capacity: usize,
  },
  /// The byte length of the requested word count does not fit in memory addressing
  WordCountOverflow(usize),
  /// A file could not be read or written
  Io(PathError),
  /// An unspecified IO error happened
  Other(std::io::Error),
}

/// Result of the conversion operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
  fn from(error: std::io::Error) -> Self {
    Self::Other(error)
  }
}

impl From<PathError> for Error {
  fn from(error: PathError) -> Self {
    Self::Io(error)
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::InputTooLarge {
        input_len,
        capacity,
      } => f.write_fmt(format_args!(
        "input of {input_len} bytes does not fit in {} words (must be less than {capacity} bytes)",
        capacity / crate::WORD_SIZE
      )),
      Self::WordCountOverflow(words) => {
        f.write_fmt(format_args!("word count {words} is too large"))
      }
      Self::Io(path_err) => f.write_fmt(format_args!("{path_err}")),
      Self::Other(io_err) => f.write_fmt(format_args!("unexpected: {io_err}")),
    }
  }
}

impl std::error::Error for Error {}
