use std::{
  fmt,
  fs::{self, File},
  io::{BufWriter, Write},
  path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{PathError, Result, WordImage};

/// Provides the parameters to convert a binary file into a word image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertParams {
  input: PathBuf,
  word_count: usize,
  output: PathBuf,
}

impl ConvertParams {
  /// Returns conversion parameters for the given files
  ///
  /// # Arguments
  ///
  /// * `input` - The raw binary to read
  /// * `word_count` - The number of words of the image
  /// * `output` - The image file to create, or overwrite
  ///
  /// # Examples
  ///
  /// ```
  /// use word_image_convert_lib::ConvertParams;
  ///
  /// let params = ConvertParams::new("firmware.bin", 4096, "firmware.img");
  ///
  /// assert_eq!(params.word_count(), 4096);
  /// ```
  pub fn new<I, O>(input: I, word_count: usize, output: O) -> Self
  where
    I: Into<PathBuf>,
    O: Into<PathBuf>,
  {
    Self {
      input: input.into(),
      word_count,
      output: output.into(),
    }
  }

  /// Gets the path of the raw binary
  pub fn input(&self) -> &Path {
    &self.input
  }

  /// Gets the number of words of the image
  pub fn word_count(&self) -> usize {
    self.word_count
  }

  /// Gets the path of the image file
  pub fn output(&self) -> &Path {
    &self.output
  }
}

impl fmt::Display for ConvertParams {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_fmt(format_args!(
      "{} into {} ({} words)",
      self.input.display(),
      self.output.display(),
      self.word_count
    ))
  }
}

/// Converts the input file of `params` into its word image file
///
/// The input is read whole and checked against the word count before the output file is
/// created, so a rejected input never touches the output. An existing output is truncated.
pub fn convert(params: &ConvertParams) -> Result<()> {
  let data = fs::read(&params.input).map_err(|err| PathError::new(&params.input, err))?;
  debug!("Read {} byte(s) from {}", data.len(), params.input.display());

  let image = WordImage::new(&data, params.word_count)?;

  let file = File::create(&params.output).map_err(|err| PathError::new(&params.output, err))?;
  let mut out = BufWriter::new(file);
  image
    .write_to(&mut out)
    .and_then(|()| out.flush())
    .map_err(|err| PathError::new(&params.output, err))?;

  info!(
    "Wrote {} words ({} bytes) to {}",
    image.word_count(),
    image.byte_len(),
    params.output.display()
  );
  Ok(())
}
