use crate::WORD_SIZE;

/// Swaps value in a 4-byte boundary, a trailing partial word is left untouched
pub(crate) fn word_swap(buf: &mut [u8]) {
  for word in buf.chunks_exact_mut(WORD_SIZE) {
    word.reverse();
  }
}

#[cfg(test)]
mod tests {
  use super::word_swap;

  #[test]
  fn verify_word_swap() {
    let mut bytes = [1, 2, 3, 4];
    word_swap(&mut bytes);
    assert_eq!(bytes, [4, 3, 2, 1]);
  }

  #[test]
  fn word_swap_multiple_words() {
    let mut bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    word_swap(&mut bytes);
    assert_eq!(bytes, [4, 3, 2, 1, 8, 7, 6, 5, 9]);
  }
}
