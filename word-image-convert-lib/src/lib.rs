//! # Word Image Converter Lib
//!
//! `word-image-convert-lib` is the library portion of `word_image_convert`: it turns a raw
//! binary into an image of `N` big-endian 32-bit words, ready to be loaded into a
//! word-addressed memory such as an FPGA block RAM or a boot ROM.
//!
//! Each group of 4 input bytes is byte-reversed, a trailing partial group is zero-padded on
//! its high side, and every word past the end of the input is zero.
//!
//! ```
//! use word_image_convert_lib::reorder;
//!
//! let image = reorder(&[0x01, 0x02, 0x03, 0x04, 0x05], 2).unwrap();
//! assert_eq!(image, [0x04, 0x03, 0x02, 0x01, 0x00, 0x00, 0x00, 0x05]);
//! ```

#![deny(missing_docs)]

mod convert;
mod io;
mod utils;
mod words;

use std::{fmt, io as std_io, path::Path, path::PathBuf};

pub use convert::{convert, ConvertParams};
pub use io::{Error, Result};
pub use words::{capacity, reorder, swap_word, write_image, WordImage, Words, WORD_SIZE};

/// Provides the path to which the error originated from
#[derive(Debug)]
pub struct PathError(PathBuf, std_io::Error);

impl PathError {
  pub(crate) fn new<P: Into<PathBuf>>(path: P, error: std_io::Error) -> Self {
    Self(path.into(), error)
  }

  /// Gets the path that could not be read or written
  pub fn path(&self) -> &Path {
    &self.0
  }

  /// Gets the kind of the underlying IO error
  pub fn kind(&self) -> std_io::ErrorKind {
    self.1.kind()
  }
}

impl fmt::Display for PathError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let PathError(path, err) = self;
    match err.kind() {
      std_io::ErrorKind::NotFound => f.write_fmt(format_args!("file {} not found", path.display())),
      std_io::ErrorKind::PermissionDenied => {
        f.write_fmt(format_args!("could not access {}", path.display()))
      }
      std_io::ErrorKind::WriteZero => f.write_fmt(format_args!(
        "could not write all data into {}",
        path.display()
      )),
      _ => f.write_fmt(format_args!("{err} ({})", path.display())),
    }
  }
}

impl std::error::Error for PathError {}
