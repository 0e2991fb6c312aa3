use std::{io::Write, slice::Chunks};

use log::debug;

use crate::{utils::word_swap, Error, Result};

/// The size in bytes of a single image word
pub const WORD_SIZE: usize = 4;

/// Gets the byte length of an image of `word_count` words
///
/// # Errors
///
/// Returns [Error::WordCountOverflow] when the length does not fit in a `usize`.
pub fn capacity(word_count: usize) -> Result<usize> {
  word_count
    .checked_mul(WORD_SIZE)
    .ok_or(Error::WordCountOverflow(word_count))
}

/// Byte-reverses a group of up to [WORD_SIZE] bytes into a word
///
/// The first byte of the group always ends up as the last byte of the word; when the group is
/// shorter than a word the missing high bytes are zero. Bytes past [WORD_SIZE] are ignored.
///
/// # Examples
///
/// ```
/// use word_image_convert_lib::swap_word;
///
/// assert_eq!(swap_word(&[1, 2, 3, 4]), [4, 3, 2, 1]);
/// assert_eq!(swap_word(&[1, 2]), [0, 0, 2, 1]);
/// ```
pub fn swap_word(group: &[u8]) -> [u8; WORD_SIZE] {
  let mut word = [0u8; WORD_SIZE];
  for (dst, src) in word.iter_mut().rev().zip(group) {
    *dst = *src;
  }
  word
}

/// An input that fits in an image of a given number of words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordImage<'a> {
  input: &'a [u8],
  word_count: usize,
}

impl<'a> WordImage<'a> {
  /// Checks that `input` fits in `word_count` words
  ///
  /// The input must be strictly shorter than the image, so an input that would fill every
  /// word is rejected.
  ///
  /// # Examples
  ///
  /// ```
  /// use word_image_convert_lib::{Error, WordImage};
  ///
  /// assert!(WordImage::new(&[1, 2, 3], 1).is_ok());
  /// assert!(matches!(
  ///   WordImage::new(&[1, 2, 3, 4], 1),
  ///   Err(Error::InputTooLarge { input_len: 4, capacity: 4 })
  /// ));
  /// ```
  pub fn new(input: &'a [u8], word_count: usize) -> Result<Self> {
    let capacity = capacity(word_count)?;
    if input.len() >= capacity {
      return Err(Error::InputTooLarge {
        input_len: input.len(),
        capacity,
      });
    }

    let image = Self { input, word_count };
    debug!(
      "{} full word(s), {} trailing byte(s), {} padding word(s)",
      image.full_words(),
      image.remainder(),
      image.padding_words()
    );
    Ok(image)
  }

  /// Gets the number of words of the image
  pub fn word_count(&self) -> usize {
    self.word_count
  }

  /// Gets the length of the image in bytes
  pub fn byte_len(&self) -> usize {
    self.word_count * WORD_SIZE
  }

  /// Gets the number of complete words taken from the input
  pub fn full_words(&self) -> usize {
    self.input.len() / WORD_SIZE
  }

  /// Gets the number of input bytes left over after the complete words
  pub fn remainder(&self) -> usize {
    self.input.len() % WORD_SIZE
  }

  /// Gets the number of zero words following the input
  pub fn padding_words(&self) -> usize {
    self.word_count - self.input.len().div_ceil(WORD_SIZE)
  }

  /// Iterates over the words of the image, in ascending address order
  pub fn words(&self) -> Words<'a> {
    Words {
      groups: self.input.chunks(WORD_SIZE),
      padding: self.padding_words(),
    }
  }

  /// Writes every word of the image into `out`
  pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
    for word in self.words() {
      out.write_all(&word)?;
    }
    Ok(())
  }
}

/// Iterator over the words of a [WordImage]
#[derive(Debug, Clone)]
pub struct Words<'a> {
  groups: Chunks<'a, u8>,
  padding: usize,
}

impl Iterator for Words<'_> {
  type Item = [u8; WORD_SIZE];

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(group) = self.groups.next() {
      return Some(swap_word(group));
    }
    if self.padding > 0 {
      self.padding -= 1;
      return Some([0; WORD_SIZE]);
    }
    None
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.groups.len() + self.padding;
    (len, Some(len))
  }
}

impl ExactSizeIterator for Words<'_> {}

/// Reorders `input` into an image of `word_count` big-endian words
///
/// # Arguments
///
/// * `input` - The raw bytes to reorder
/// * `word_count` - The number of words of the resulting image
///
/// # Errors
///
/// Fails with [Error::InputTooLarge] when `input` is not strictly shorter than
/// `word_count * 4` bytes.
///
/// # Examples
///
/// ```
/// use word_image_convert_lib::reorder;
///
/// assert_eq!(reorder(&[], 1).unwrap(), [0, 0, 0, 0]);
/// assert_eq!(reorder(&[1, 2, 3], 1).unwrap(), [0, 3, 2, 1]);
/// ```
pub fn reorder(input: &[u8], word_count: usize) -> Result<Vec<u8>> {
  let image = WordImage::new(input, word_count)?;
  let mut buf = Vec::with_capacity(image.byte_len());
  buf.extend_from_slice(input);
  buf.resize(image.byte_len(), 0);
  word_swap(&mut buf);
  Ok(buf)
}

/// Checks that `input` fits in `word_count` words and streams the image into `out`
///
/// Nothing is written when the input does not fit.
pub fn write_image<W: Write>(input: &[u8], word_count: usize, out: W) -> Result<()> {
  WordImage::new(input, word_count)?.write_to(out)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(37).wrapping_add(11)).collect()
  }

  #[test]
  fn empty_input_single_word() {
    assert_eq!(reorder(&[], 1).unwrap(), [0, 0, 0, 0]);
  }

  #[test]
  fn partial_word_only() {
    assert_eq!(reorder(&[0xaa, 0xbb, 0xcc], 1).unwrap(), [0, 0xcc, 0xbb, 0xaa]);
  }

  #[test]
  fn input_filling_capacity_is_rejected() {
    let err = reorder(&[1, 2, 3, 4], 1).unwrap_err();
    assert!(matches!(
      err,
      Error::InputTooLarge {
        input_len: 4,
        capacity: 4
      }
    ));
  }

  #[test]
  fn zero_words_reject_everything() {
    assert!(matches!(
      reorder(&[], 0),
      Err(Error::InputTooLarge {
        input_len: 0,
        capacity: 0
      })
    ));
  }

  #[test]
  fn full_word_then_padding() {
    assert_eq!(
      reorder(&[1, 2, 3, 4], 2).unwrap(),
      [4, 3, 2, 1, 0, 0, 0, 0]
    );
  }

  #[test]
  fn trailing_byte_is_right_aligned() {
    assert_eq!(
      reorder(&[0x01, 0x02, 0x03, 0x04, 0x05], 2).unwrap(),
      [0x04, 0x03, 0x02, 0x01, 0x00, 0x00, 0x00, 0x05]
    );
  }

  #[test]
  fn partial_words_keep_reversal() {
    assert_eq!(swap_word(&[7]), [0, 0, 0, 7]);
    assert_eq!(swap_word(&[7, 8]), [0, 0, 8, 7]);
    assert_eq!(swap_word(&[7, 8, 9]), [0, 9, 8, 7]);
    assert_eq!(swap_word(&[7, 8, 9, 10]), [10, 9, 8, 7]);
    assert_eq!(swap_word(&[]), [0, 0, 0, 0]);
  }

  #[test]
  fn word_overflow() {
    assert!(matches!(
      capacity(usize::MAX),
      Err(Error::WordCountOverflow(usize::MAX))
    ));
    assert!(matches!(
      reorder(&[], usize::MAX),
      Err(Error::WordCountOverflow(_))
    ));
  }

  #[test]
  fn layout_counts() {
    let input = pattern(9);
    let image = WordImage::new(&input, 5).unwrap();
    assert_eq!(image.word_count(), 5);
    assert_eq!(image.byte_len(), 20);
    assert_eq!(image.full_words(), 2);
    assert_eq!(image.remainder(), 1);
    assert_eq!(image.padding_words(), 2);
    assert_eq!(image.words().len(), 5);
  }

  #[test]
  fn every_layout_follows_the_word_table() {
    for len in 0..=13 {
      let input = pattern(len);
      let min_words = len / WORD_SIZE + 1;
      for word_count in min_words..min_words + 3 {
        let image = reorder(&input, word_count).unwrap();
        assert_eq!(image.len(), word_count * WORD_SIZE);

        let full = len / WORD_SIZE;
        for (i, word) in image.chunks_exact(WORD_SIZE).enumerate() {
          let start = i * WORD_SIZE;
          let expected = if i < full {
            [input[start + 3], input[start + 2], input[start + 1], input[start]]
          } else if i == full {
            let mut word = [0u8; WORD_SIZE];
            for (k, b) in input[start..].iter().enumerate() {
              word[WORD_SIZE - 1 - k] = *b;
            }
            word
          } else {
            [0; WORD_SIZE]
          };
          assert_eq!(word, expected, "len {len}, {word_count} words, word {i}");
        }
      }
    }
  }

  #[test]
  fn streamed_matches_in_memory() {
    for len in 0..=9 {
      let input = pattern(len);
      let mut streamed = Vec::new();
      write_image(&input, 4, &mut streamed).unwrap();
      assert_eq!(streamed, reorder(&input, 4).unwrap());
    }
  }

  #[test]
  fn rejected_input_writes_nothing() {
    let mut out = Vec::new();
    assert!(write_image(&pattern(8), 2, &mut out).is_err());
    assert!(out.is_empty());
  }

  #[test]
  fn reorder_is_repeatable() {
    let input = pattern(11);
    assert_eq!(reorder(&input, 6).unwrap(), reorder(&input, 6).unwrap());
  }
}
