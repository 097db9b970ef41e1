//! Schoolbook long multiplication of [`DigitSequence`]s.
//!
//! Each digit of the right operand produces one [`PartialProduct`] against the
//! whole left operand. The rows are shifted into place, padded to a common
//! width, and summed column by column with an explicit carry.

use std::ops::Mul;

use crate::{digits::DigitSequence, stats::Stats};

/// A single digit of the right operand times the whole left operand, scaled
/// by `10^position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialProduct {
  /// Least significant first, starting with `position` zero digits.
  digits: Vec<u8>,
}

#[allow(clippy::len_without_is_empty)]
impl PartialProduct {
  pub fn new(lhs: &DigitSequence, digit: u8, position: usize) -> Self {
    debug_assert!(digit < DigitSequence::RADIX);
    let mut digits = Vec::with_capacity(position + lhs.len() + 1);
    digits.resize(position, 0);
    let mut carry = 0;
    for &d in lhs.lsf() {
      // at most 9 * 9 + 8
      let product = d * digit + carry;
      digits.push(product % DigitSequence::RADIX);
      carry = product / DigitSequence::RADIX;
    }
    if carry > 0 {
      digits.push(carry);
    }
    PartialProduct { digits }
  }

  pub fn len(&self) -> usize {
    self.digits.len()
  }

  /// Pads with high zero digits up to `width`.
  pub fn pad_to(&mut self, width: usize) {
    debug_assert!(width >= self.digits.len());
    self.digits.resize(width, 0);
  }

  pub fn digits(&self) -> &[u8] {
    &self.digits
  }
}

/// Sums one column of aligned partial products, returning the output digit and
/// the carry into the next column.
pub fn column_step(partials: &[PartialProduct], column: usize, carry: u64) -> (u8, u64) {
  let radix = DigitSequence::RADIX as u64;
  let sum = partials.iter().map(|p| p.digits[column] as u64).sum::<u64>() + carry;
  ((sum % radix) as u8, sum / radix)
}

/// Multiplies `lhs` by `rhs`, recording the work in `stats`.
pub fn multiply_with(lhs: &DigitSequence, rhs: &DigitSequence, stats: &mut Stats) -> DigitSequence {
  let mut partials = rhs
    .lsf()
    .iter()
    .enumerate()
    .map(|(position, &digit)| PartialProduct::new(lhs, digit, position))
    .collect::<Vec<_>>();

  let width = partials.iter().map(PartialProduct::len).max().unwrap_or(0);
  for partial in &mut partials {
    partial.pad_to(width);
  }

  let mut digits = Vec::with_capacity(width + 1);
  let mut carry = 0;
  for column in 0..width {
    let (digit, next) = column_step(&partials, column, carry);
    digits.push(digit);
    carry = next;
  }
  while carry != 0 {
    digits.push((carry % DigitSequence::RADIX as u64) as u8);
    carry /= DigitSequence::RADIX as u64;
  }
  let product = DigitSequence::new(digits);

  stats.multiplications += 1;
  stats.partial_products += partials.len() as u64;
  stats.digit_products += (lhs.len() * rhs.len()) as u64;
  stats.columns += width as u64;
  stats.digits_peak = stats.digits_peak.max(product.len() as u64);

  product
}

pub fn multiply(lhs: &DigitSequence, rhs: &DigitSequence) -> DigitSequence {
  multiply_with(lhs, rhs, &mut Stats::default())
}

impl Mul<&DigitSequence> for &DigitSequence {
  type Output = DigitSequence;

  fn mul(self, rhs: &DigitSequence) -> DigitSequence {
    multiply(self, rhs)
  }
}

impl Mul for DigitSequence {
  type Output = DigitSequence;

  fn mul(self, rhs: DigitSequence) -> DigitSequence {
    multiply(&self, &rhs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn operands() -> impl Iterator<Item = u64> + Clone {
    [0, 1, 2, 7, 9, 10, 11, 99, 100, 101, 123, 999, 4096, 65535, 99999, 123456789]
      .into_iter()
      .chain([999_999_999, 4_294_967_295, 2432902008176640000, u64::MAX])
  }

  #[test]
  fn matches_native_product() {
    for a in operands() {
      for b in operands() {
        let product = &DigitSequence::from(a) * &DigitSequence::from(b);
        assert_eq!(product.to_string(), (a as u128 * b as u128).to_string(), "{a} * {b}");
      }
    }
  }

  #[test]
  fn commutativity() {
    for a in operands() {
      for b in operands() {
        let a = DigitSequence::from(a);
        let b = DigitSequence::from(b);
        assert_eq!(&a * &b, &b * &a);
      }
    }
  }

  #[test]
  fn zero_annihilates() {
    for a in operands() {
      let a = DigitSequence::from(a);
      assert_eq!(&a * &DigitSequence::zero(), DigitSequence::zero());
      assert_eq!(&DigitSequence::zero() * &a, DigitSequence::zero());
    }
  }

  #[test]
  fn one_is_identity() {
    for a in operands() {
      let a = DigitSequence::from(a);
      assert_eq!(&a * &DigitSequence::one(), a);
    }
  }

  #[test]
  fn large_operands() {
    let a: DigitSequence = "18446744073709551616".parse().unwrap();
    assert_eq!((&a * &a).to_string(), "340282366920938463463374607431768211456");

    let nines: DigitSequence = "9".repeat(40).parse().unwrap();
    let expected = format!("{}8{}1", "9".repeat(39), "0".repeat(39));
    assert_eq!((&nines * &nines).to_string(), expected);
  }

  #[test]
  fn partial_products_are_shifted() {
    let lhs = DigitSequence::from(123u32);
    assert_eq!(PartialProduct::new(&lhs, 7, 0).digits(), [1, 6, 8]);
    assert_eq!(PartialProduct::new(&lhs, 7, 2).digits(), [0, 0, 1, 6, 8]);
    assert_eq!(PartialProduct::new(&lhs, 9, 1).digits(), [0, 7, 0, 1, 1]);
    assert_eq!(PartialProduct::new(&lhs, 0, 1).digits(), [0, 0, 0, 0]);
  }

  #[test]
  fn padding() {
    let mut partial = PartialProduct::new(&DigitSequence::from(5u32), 3, 1);
    assert_eq!(partial.digits(), [0, 5, 1]);
    partial.pad_to(5);
    assert_eq!(partial.digits(), [0, 5, 1, 0, 0]);
  }

  #[test]
  fn column_carry_can_exceed_nine() {
    let nine = DigitSequence::from(9u32);
    let partials = vec![PartialProduct::new(&nine, 9, 0); 12];
    // each row is 81
    assert_eq!(column_step(&partials, 0, 0), (2, 1));
    assert_eq!(column_step(&partials, 1, 1), (7, 9));
    assert_eq!(column_step(&partials, 1, 25), (1, 12));
  }

  #[test]
  fn records_stats() {
    let mut stats = Stats::default();
    let lhs = DigitSequence::from(999u32);
    let product = multiply_with(&lhs, &DigitSequence::from(99u32), &mut stats);
    assert_eq!(product.to_string(), "98901");
    assert_eq!(stats.multiplications, 1);
    assert_eq!(stats.partial_products, 2);
    assert_eq!(stats.digit_products, 6);
    assert_eq!(stats.columns, 5);
    assert_eq!(stats.digits_peak, 5);
  }
}
