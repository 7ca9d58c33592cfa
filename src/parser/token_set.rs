use std::fmt::{self, Debug, Formatter};
use crate::bnf::TermId;

type BitBlock = u64;

const BLOCK_NBITS: usize = std::mem::size_of::<BitBlock>() * 8;

/// A set of terminals of one grammar, one bit per `TermId`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct TokenSet {
  slice: Box<[BitBlock]>,
}

impl TokenSet {
  pub fn new(num_tokens: usize) -> Self {
    let len = (num_tokens + BLOCK_NBITS - 1) / BLOCK_NBITS;
    Self {
      slice: vec![0; len].into_boxed_slice(),
    }
  }

  pub fn from_token(num_tokens: usize, token: TermId) -> Self {
    let mut s = Self::new(num_tokens);
    s.insert(token);
    s
  }

  pub fn clear(&mut self) {
    for x in self.slice.iter_mut() {
      *x = 0;
    }
  }

  fn locate(token: TermId) -> (usize, BitBlock) {
    let bit = token.0 as usize;
    (bit / BLOCK_NBITS, 1 << (bit % BLOCK_NBITS))
  }

  /// Returns whether the token was newly inserted.
  pub fn insert(&mut self, token: TermId) -> bool {
    let (ix, mask) = Self::locate(token);
    let old = self.slice[ix];
    self.slice[ix] |= mask;
    old != self.slice[ix]
  }

  pub fn contains(&self, token: TermId) -> bool {
    let (ix, mask) = Self::locate(token);
    self.slice[ix] & mask != 0
  }

  pub fn is_empty(&self) -> bool {
    self.slice.iter().all(|&x| x == 0)
  }

  /// Returns whether the set has changed.
  pub fn union_with(&mut self, other: &TokenSet) -> bool {
    let mut changed = false;
    for i in 0..self.slice.len() {
      let old = self.slice[i];
      self.slice[i] |= other.slice[i];
      changed |= old != self.slice[i];
    }
    changed
  }

  /// Like `union_with`, but never adds `token`.
  pub fn union_without(&mut self, other: &TokenSet, token: TermId) -> bool {
    let (skip_ix, skip_mask) = Self::locate(token);
    let mut changed = false;
    for i in 0..self.slice.len() {
      let old = self.slice[i];
      let mut bits = other.slice[i];
      if i == skip_ix {
        bits &= !skip_mask;
      }
      self.slice[i] |= bits;
      changed |= old != self.slice[i];
    }
    changed
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      slice: &*self.slice,
      bit: 0,
      index: 0,
    }
  }
}

pub(crate) struct Iter<'a> {
  slice: &'a [BitBlock],
  bit: usize,
  index: usize,
}

impl<'a> Iterator for Iter<'a> {
  type Item = TermId;

  fn next(&mut self) -> Option<TermId> {
    while self.index < self.slice.len() {
      if self.bit < BLOCK_NBITS {
        let bit = (self.slice[self.index] & !((1 << self.bit) - 1))
          .trailing_zeros() as usize;
        if bit < BLOCK_NBITS {
          self.bit = bit + 1;
          return Some(TermId((self.index * BLOCK_NBITS + bit) as u32));
        }
      }

      self.index += 1;
      self.bit = 0;
    }
    None
  }
}

impl Debug for TokenSet {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_set().entries(self.iter().map(|t| t.0)).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn ids(set: &TokenSet) -> Vec<u32> {
    set.iter().map(|t| t.0).collect()
  }

  #[test]
  fn insert() {
    let mut set = TokenSet::new(15);

    assert!(set.insert(TermId(7)));
    assert!(set.insert(TermId(3)));
    assert!(!set.insert(TermId(7)));
    assert!(set.insert(TermId(14)));

    assert_eq!(ids(&set), vec![3, 7, 14]);
    assert!(set.contains(TermId(3)));
    assert!(!set.contains(TermId(4)));
  }

  #[test]
  fn crosses_block_boundary() {
    let mut set = TokenSet::new(130);

    set.insert(TermId(0));
    set.insert(TermId(63));
    set.insert(TermId(64));
    set.insert(TermId(129));

    assert_eq!(ids(&set), vec![0, 63, 64, 129]);
    assert!(set.contains(TermId(64)));
    assert!(!set.contains(TermId(65)));
  }

  #[test]
  fn union_without_skips_token() {
    let mut a = TokenSet::from_token(10, TermId(1));
    let mut b = TokenSet::new(10);
    b.insert(TermId(0));
    b.insert(TermId(5));

    assert!(a.union_without(&b, TermId(0)));
    assert_eq!(ids(&a), vec![1, 5]);
    assert!(!a.union_without(&b, TermId(0)));

    assert!(a.union_with(&b));
    assert_eq!(ids(&a), vec![0, 1, 5]);
    assert!(!a.is_empty());

    a.clear();
    assert!(a.is_empty());
  }
}
