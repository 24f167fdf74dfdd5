//! Multiplication: a linear pass for single-digit factors, schoolbook
//! multiplication for small operands and FFT-based multiplication for large
//! ones, chosen by [`MulSelector`].

use std::ops::Mul;

use num_complex::Complex;

use crate::big_uint_cache::DEFAULT_CROSSOVER;
use crate::big_uint_constants::*;
use crate::big_uint_fft::transform;
use crate::BigUint;

/// A multiplication strategy for two multi-digit operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulAlgorithm {
    /// O(n·m) digit-by-digit convolution.
    Schoolbook,
    /// O(n log n) convolution through a floating point Fourier transform.
    Spectral,
}

impl MulAlgorithm {
    pub fn multiply(self, x: &BigUint, y: &BigUint) -> BigUint {
        match self {
            MulAlgorithm::Schoolbook => BigUint::mul_schoolbook(x, y),
            MulAlgorithm::Spectral => BigUint::mul_spectral(x, y),
        }
    }
}

/// Picks a [`MulAlgorithm`] from the operand sizes.
///
/// Spectral multiplication is chosen when
/// `schoolbook_cost >= crossover * spectral_cost`, see
/// [`schoolbook_cost`](MulSelector::schoolbook_cost) and
/// [`spectral_cost`](MulSelector::spectral_cost).
///
/// The default crossover is [`SPECTRAL_CROSSOVER`], unless the
/// `BIG_UINT_SPECTRAL_CROSSOVER` environment variable held a positive
/// integer when it was first needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulSelector {
    crossover: u64,
}

impl Default for MulSelector {
    fn default() -> Self {
        MulSelector::new(*DEFAULT_CROSSOVER)
    }
}

impl MulSelector {
    /// A zero crossover is raised to 1.
    pub fn new(crossover: u64) -> Self {
        MulSelector { crossover: crossover.max(1) }
    }

    pub fn crossover(&self) -> u64 {
        self.crossover
    }

    pub fn schoolbook_cost(x_len: usize, y_len: usize) -> u64 {
        x_len as u64 * y_len as u64
    }

    pub fn spectral_cost(x_len: usize, y_len: usize) -> u64 {
        let n = transform_len(x_len, y_len) as u64;
        SPECTRAL_COST_FACTOR * n * n.trailing_zeros() as u64
    }

    pub fn select(&self, x_len: usize, y_len: usize) -> MulAlgorithm {
        let schoolbook = MulSelector::schoolbook_cost(x_len, y_len);
        let spectral = MulSelector::spectral_cost(x_len, y_len);
        let algorithm = if schoolbook >= self.crossover.saturating_mul(spectral) {
            MulAlgorithm::Spectral
        } else {
            MulAlgorithm::Schoolbook
        };
        tracing::trace!(x_len, y_len, schoolbook, spectral, ?algorithm, "selected multiplication");
        algorithm
    }

    pub fn multiply(&self, x: &BigUint, y: &BigUint) -> BigUint {
        if x.digits.len() == 1 || y.digits.len() == 1 {
            return BigUint::mul_by_digit(x, y);
        }
        self.select(x.digits.len(), y.digits.len()).multiply(x, y)
    }
}

/// Transform length for operands of `x_len` and `y_len` digits: the smallest
/// power of two holding the larger operand's sub-digits, doubled so that the
/// cyclic convolution never wraps around.
pub(crate) fn transform_len(x_len: usize, y_len: usize) -> usize {
    (SUB_DIGITS_PER_DIGIT * x_len.max(y_len)).next_power_of_two() * 2
}

// 实现乘法
impl BigUint {
    /// Multiplies with a specific algorithm instead of letting [`MulSelector`] choose.
    pub fn mul_with(&self, other: &BigUint, algorithm: MulAlgorithm) -> BigUint {
        algorithm.multiply(self, other)
    }

    /// `num` must be below [`RADIX`].
    pub(crate) fn mul_small(&mut self, num: u32) {
        debug_assert!(num < RADIX);
        if num == 0 {
            *self = BigUint::zero();
            return;
        }
        let mut carry: u64 = 0;
        for d in self.digits.iter_mut() {
            let product = *d as u64 * num as u64 + carry;
            *d = (product % RADIX as u64) as u32;
            carry = product / RADIX as u64;
        }
        if carry > 0 {
            self.digits.push(carry as u32);
        }
        self.normalize();
    }

    pub(crate) fn mul_scalar(&mut self, num: u128) {
        if num < RADIX as u128 {
            self.mul_small(num as u32);
        } else {
            *self = &*self * &BigUint::from(num);
        }
    }

    /// One of `x`, `y` has a single digit.
    fn mul_by_digit(x: &BigUint, y: &BigUint) -> BigUint {
        let (long, digit) = if y.digits.len() == 1 { (x, y.digits[0]) } else { (y, x.digits[0]) };
        let mut result = long.clone();
        result.mul_small(digit);
        result
    }

    fn mul_schoolbook(x: &BigUint, y: &BigUint) -> BigUint {
        if x.digits.len() == 1 || y.digits.len() == 1 {
            return BigUint::mul_by_digit(x, y);
        }
        let y_len = y.digits.len();
        let mut z = vec![0_u32; x.digits.len() + y_len];

        for (i, &a) in x.digits.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let mut carry: u64 = 0;
            for (j, &b) in y.digits.iter().enumerate() {
                let cur = z[i + j] as u64 + a as u64 * b as u64 + carry;
                z[i + j] = (cur % RADIX as u64) as u32;
                carry = cur / RADIX as u64;
            }
            // z[i + y_len] has not been written by any earlier row
            z[i + y_len] = carry as u32;
        }
        BigUint::new(z)
    }

    fn mul_spectral(x: &BigUint, y: &BigUint) -> BigUint {
        if x.digits.len() == 1 || y.digits.len() == 1 {
            return BigUint::mul_by_digit(x, y);
        }
        let n = transform_len(x.digits.len(), y.digits.len());
        tracing::debug!(x_len = x.digits.len(), y_len = y.digits.len(), transform_len = n, "spectral multiplication");

        let mut fx = to_sub_digits(x, n);
        let mut fy = to_sub_digits(y, n);
        transform(&mut fx, false);
        transform(&mut fy, false);
        fx.iter_mut().zip(&fy).for_each(|(a, b)| *a *= b);
        transform(&mut fx, true);

        let mut sub_digits: Vec<u64> = Vec::with_capacity(n + SUB_DIGITS_PER_DIGIT);
        let mut carry: u64 = 0;
        for coefficient in &fx {
            // |rounding error| < 0.5, and the exact coefficient is non-negative
            let value = coefficient.re.round().max(0.0) as u64 + carry;
            sub_digits.push(value % SUB_RADIX);
            carry = value / SUB_RADIX;
        }
        while carry > 0 {
            sub_digits.push(carry % SUB_RADIX);
            carry /= SUB_RADIX;
        }

        let digits = sub_digits
            .chunks(SUB_DIGITS_PER_DIGIT)
            .map(|group| group.iter().rev().fold(0, |acc, &s| acc * SUB_RADIX + s) as u32)
            .collect();
        BigUint::new(digits)
    }
}

/// Splits every digit into [`SUB_DIGITS_PER_DIGIT`] sub-digits below
/// [`SUB_RADIX`], least significant first, zero padded to `n`.
fn to_sub_digits(x: &BigUint, n: usize) -> Vec<Complex<f64>> {
    let mut values = Vec::with_capacity(n);
    for &d in &x.digits {
        let mut d = d as u64;
        for _ in 0..SUB_DIGITS_PER_DIGIT {
            values.push(Complex::new((d % SUB_RADIX) as f64, 0.0));
            d /= SUB_RADIX;
        }
    }
    values.resize(n, Complex::default());
    values
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> Self::Output {
        MulSelector::default().multiply(self, rhs)
    }
}

forward_binop_to_ref!(impl Mul, mul, MulAssign, mul_assign);

#[cfg(test)]
fn big(val: &str) -> BigUint {
    val.parse().unwrap()
}

#[test]
fn test_mul_by_int() {
    let a = big("10000000000000000");
    let result = big("30010000000000000000");
    assert_eq!(&a * 3001_u32, result);
    assert_eq!(3001_u32 * &a, result);
    assert_eq!(&a * &big("3001"), result);
    assert_eq!(&a * 0_u32, BigUint::zero());
    assert_eq!(big("999999999999999999") * 999_999_999_u32, big("999999998999999999000000001"));

    let mut b = big("123456789");
    b *= 1_000_000_000_000_u64;
    assert_eq!(b, big("123456789000000000000"));
}

#[test]
fn test_mul() {
    assert_eq!(big("123456789") * big("987654321"), big("121932631112635269"));
    let a = big("10000000000000000");
    let b = big("30000000000000000");
    assert_eq!(a * b, big("300000000000000000000000000000000"));
    assert_eq!(big("0") * big("123456789123456789"), BigUint::zero());

    let mut c = big("999999999999999999999999999");
    c *= c.clone();
    assert_eq!(c, big("999999999999999999999999998000000000000000000000000001"));
}

#[test]
fn test_schoolbook_and_spectral_agree() {
    let cases = [
        ("2", "3"),
        ("1000000000", "1000000000"),
        ("123456789123456789", "987654321987654321987654321"),
        (
            "124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321",
            "5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376",
        ),
    ];
    for (a, b) in cases {
        let (a, b) = (big(a), big(b));
        let expected = a.mul_with(&b, MulAlgorithm::Schoolbook);
        assert_eq!(a.mul_with(&b, MulAlgorithm::Spectral), expected, "{} * {}", a, b);
        assert_eq!(b.mul_with(&a, MulAlgorithm::Spectral), expected, "{} * {}", b, a);
    }
}

#[test]
fn test_spectral_all_nines() {
    // every sub-digit is 999, the worst case for coefficient size
    let a = BigUint::from_digits(vec![RADIX - 1; 700]);
    let b = BigUint::from_digits(vec![RADIX - 1; 500]);
    assert_eq!(
        a.mul_with(&b, MulAlgorithm::Spectral),
        a.mul_with(&b, MulAlgorithm::Schoolbook)
    );
}

#[test]
fn test_selector() {
    let selector = MulSelector::new(SPECTRAL_CROSSOVER);
    assert_eq!(selector.select(2, 2), MulAlgorithm::Schoolbook);
    assert_eq!(selector.select(100, 100), MulAlgorithm::Schoolbook);
    assert_eq!(selector.select(1, 1_000_000), MulAlgorithm::Schoolbook);
    assert_eq!(selector.select(20_000, 20_000), MulAlgorithm::Spectral);

    // even the smallest crossover keeps small operands on schoolbook
    let eager = MulSelector::new(0);
    assert_eq!(eager.crossover(), 1);
    assert_eq!(eager.select(2, 2), MulAlgorithm::Schoolbook);
    assert_eq!(eager.select(64, 64), MulAlgorithm::Schoolbook);
}

#[test]
fn test_costs() {
    assert_eq!(transform_len(1, 1), 8);
    assert_eq!(transform_len(3, 2), 32);
    assert_eq!(MulSelector::schoolbook_cost(3, 7), 21);
    // n = 32, log2(n) = 5
    assert_eq!(MulSelector::spectral_cost(3, 2), 3 * 32 * 5);
}
