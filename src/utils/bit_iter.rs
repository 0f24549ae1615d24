use num_bigint::BigUint;

/// Walks the binary expansion of a `BigUint`, most significant set bit first.
/// Zero yields a single `false`.
#[derive(Debug, PartialOrd, PartialEq)]
pub struct BitIter {
  done: bool,
  pub(crate) b: usize, // biggest
  pub(crate) l: usize, // least
  bytes: Vec<u8>,
}

impl BitIter {
  fn bit (&self, i: usize) -> bool {
    self.bytes
        .get(i / 8)
        .map_or(false, |byte| (byte >> (i % 8)) & 1 == 1)
  }
}

impl From<&BigUint> for BitIter {
  fn from (value: &BigUint) -> Self {
    BitIter {
      done: false,
      b: (value.bits() as usize).saturating_sub(1),
      l: 0,
      bytes: value.to_bytes_le(),
    }
  }
}

impl Iterator for BitIter {
  type Item = bool;
  fn next (&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    let bit = self.bit(self.b);
    if self.b == self.l {
      self.done = true
    } else {
      self.b -= 1;
    }

    Some(bit)
  }
}

impl DoubleEndedIterator for BitIter {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    let bit = self.bit(self.l);
    if self.b == self.l {
      self.done = true
    } else {
      self.l += 1;
    }

    Some(bit)
  }
}
