//! # BigUint
//! Arbitrary-precision unsigned integers stored as base 10^9 digits, least significant first.
//! # Example
//! ```
//! use big_uint::BigUint;
//!
//! let a: BigUint = "10000000000000".parse().unwrap();
//! let b: BigUint = "900000000000".parse().unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a ^ 10 = {}", a.pow(10));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display, Write};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
};
use std::str::FromStr;

use crate::big_uint_constants::*;
use crate::error::{NegativeValueError, ParseBigUintError, TryFromBigUintError};

/// Implements the owned and mixed reference forms of a binary operator, plus
/// its compound assignment, on top of an `$imp<&BigUint> for &BigUint` impl.
macro_rules! forward_binop_to_ref {
    (impl $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl std::ops::$imp<$crate::BigUint> for $crate::BigUint {
            type Output = $crate::BigUint;

            fn $method(self, rhs: $crate::BigUint) -> Self::Output {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl std::ops::$imp<&$crate::BigUint> for $crate::BigUint {
            type Output = $crate::BigUint;

            fn $method(self, rhs: &$crate::BigUint) -> Self::Output {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl std::ops::$imp<$crate::BigUint> for &$crate::BigUint {
            type Output = $crate::BigUint;

            fn $method(self, rhs: $crate::BigUint) -> Self::Output {
                std::ops::$imp::$method(self, &rhs)
            }
        }

        impl std::ops::$imp_assign<$crate::BigUint> for $crate::BigUint {
            fn $method_assign(&mut self, rhs: $crate::BigUint) {
                *self = std::ops::$imp::$method(&*self, &rhs);
            }
        }

        impl std::ops::$imp_assign<&$crate::BigUint> for $crate::BigUint {
            fn $method_assign(&mut self, rhs: &$crate::BigUint) {
                *self = std::ops::$imp::$method(&*self, rhs);
            }
        }
    };
}

/// Same as [`forward_binop_to_ref`], but for operators whose real work is
/// done in place by `$imp_assign<&BigUint> for BigUint`.
macro_rules! forward_binop_to_assign {
    (impl $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp_assign<BigUint> for BigUint {
            fn $method_assign(&mut self, rhs: BigUint) {
                $imp_assign::$method_assign(self, &rhs);
            }
        }

        impl $imp<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(mut self, rhs: BigUint) -> Self::Output {
                $imp_assign::$method_assign(&mut self, &rhs);
                self
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(mut self, rhs: &BigUint) -> Self::Output {
                $imp_assign::$method_assign(&mut self, rhs);
                self
            }
        }

        impl $imp<BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> Self::Output {
                let mut result = self.clone();
                $imp_assign::$method_assign(&mut result, &rhs);
                result
            }
        }

        impl $imp<&BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> Self::Output {
                let mut result = self.clone();
                $imp_assign::$method_assign(&mut result, rhs);
                result
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    /// Never empty, no most significant zero unless the value is zero,
    /// every digit below [`RADIX`].
    pub(crate) digits: Vec<u32>,
}

// 规范化
impl BigUint {
    /// Restores the representation invariants after a mutation.
    pub(crate) fn normalize(&mut self) -> &mut Self {
        while self.digits.len() > 1 && self.digits[self.digits.len() - 1] == 0 {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        debug_assert!(
            self.digits.iter().all(|&d| d < RADIX),
            "digit out of range: {:?}",
            self.digits
        );
        self
    }

    pub(crate) fn new(digits: Vec<u32>) -> Self {
        let mut result = BigUint { digits };
        result.normalize();
        result
    }

    /// Most significant digit.
    pub(crate) fn top(&self) -> u32 {
        self.digits[self.digits.len() - 1]
    }

    /// `self = self * RADIX + digit`
    pub(crate) fn push_low_digit(&mut self, digit: u32) {
        if self.is_zero() {
            self.digits[0] = digit;
        } else {
            self.digits.insert(0, digit);
        }
    }
}

// 实现构造
impl BigUint {
    pub fn zero() -> Self {
        BigUint { digits: vec![0] }
    }

    pub fn one() -> Self {
        BigUint { digits: vec![1] }
    }

    /// Builds a value from raw base 10^9 digits, least significant first.
    /// Most significant zeros are dropped and an empty vector is zero.
    ///
    /// # Panics
    /// If any digit is not below [`RADIX`].
    pub fn from_digits(digits: Vec<u32>) -> Self {
        if let Some(d) = digits.iter().find(|&&d| d >= RADIX) {
            panic!("digit {} out of range [0, {})", d, RADIX);
        }
        BigUint::new(digits)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Base 10^9 digits, least significant first.
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    pub fn into_digits(self) -> Vec<u32> {
        self.digits
    }

    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }

    fn value_of(mut val: u128) -> Self {
        let mut digits = Vec::with_capacity(5);
        loop {
            digits.push((val % RADIX as u128) as u32);
            val /= RADIX as u128;
            if val == 0 {
                break;
            }
        }
        BigUint::new(digits)
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.digits
            .iter()
            .rev()
            .try_fold(0_u64, |acc, &d| acc.checked_mul(RADIX as u64)?.checked_add(d as u64))
    }
}

impl Default for BigUint {
    fn default() -> Self {
        BigUint::zero()
    }
}

macro_rules! impl_unsigned_to_big_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUint {
        fn from(val: $u) -> Self {
            BigUint::value_of(val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_uint {
    ($($i: ty),*) => {
    $(
    impl TryFrom<$i> for BigUint {
        type Error = NegativeValueError;

        fn try_from(val: $i) -> Result<Self, Self::Error> {
            if val < 0 {
                Err(NegativeValueError(val as i128))
            } else {
                Ok(BigUint::value_of(val as u128))
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_uint!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_uint!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&BigUint> for u64 {
    type Error = TryFromBigUintError;

    fn try_from(val: &BigUint) -> Result<Self, Self::Error> {
        val.to_u64().ok_or(TryFromBigUintError("u64"))
    }
}

// 实现大小比较
impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        // both sides are normalized, so the longer one is larger
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 实现加法
impl BigUint {
    /// `num` must be below [`RADIX`].
    pub(crate) fn add_small(&mut self, num: u32) {
        debug_assert!(num < RADIX);
        let mut carry = num;
        for d in self.digits.iter_mut() {
            if carry == 0 {
                break;
            }
            let sum = *d + carry;
            if sum >= RADIX {
                *d = sum - RADIX;
                carry = 1;
            } else {
                *d = sum;
                carry = 0;
            }
        }
        if carry > 0 {
            self.digits.push(carry);
        }
        self.normalize();
    }

    pub(crate) fn add_scalar(&mut self, num: u128) {
        if num < RADIX as u128 {
            self.add_small(num as u32);
        } else {
            *self += BigUint::from(num);
        }
    }
}

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, other: &BigUint) {
        if other.digits.len() == 1 {
            return self.add_small(other.digits[0]);
        }
        if self.digits.len() < other.digits.len() {
            self.digits.resize(other.digits.len(), 0);
        }

        let mut carry = 0;
        for (i, d) in self.digits.iter_mut().enumerate() {
            if i >= other.digits.len() && carry == 0 {
                break;
            }
            let sum = *d + other.digits.get(i).copied().unwrap_or(0) + carry;
            if sum >= RADIX {
                *d = sum - RADIX;
                carry = 1;
            } else {
                *d = sum;
                carry = 0;
            }
        }
        if carry > 0 {
            self.digits.push(carry);
        }
        self.normalize();
    }
}

forward_binop_to_assign!(impl Add, add, AddAssign, add_assign);

// 实现减法
impl BigUint {
    /// `num` must be below [`RADIX`].
    pub(crate) fn sub_small(&mut self, num: u32) {
        debug_assert!(num < RADIX);
        assert!(
            self.digits.len() > 1 || self.digits[0] >= num,
            "attempt to subtract {} from {}", num, self
        );
        let mut borrow = num;
        for d in self.digits.iter_mut() {
            if borrow == 0 {
                break;
            }
            if *d >= borrow {
                *d -= borrow;
                borrow = 0;
            } else {
                *d = *d + RADIX - borrow;
                borrow = 1;
            }
        }
        self.normalize();
    }

    pub(crate) fn sub_scalar(&mut self, num: u128) {
        if num < RADIX as u128 {
            self.sub_small(num as u32);
        } else {
            *self -= BigUint::from(num);
        }
    }

    /// `self - other`, or `None` when `other > self`.
    pub fn checked_sub(&self, other: &BigUint) -> Option<BigUint> {
        if *self < *other {
            None
        } else {
            Some(self - other)
        }
    }
}

impl SubAssign<&BigUint> for BigUint {
    /// # Panics
    /// If `other > self`.
    fn sub_assign(&mut self, other: &BigUint) {
        if other.digits.len() == 1 {
            return self.sub_small(other.digits[0]);
        }
        assert!(*self >= *other, "attempt to subtract {} from {}", other, self);

        let mut borrow = 0;
        for (i, d) in self.digits.iter_mut().enumerate() {
            if i >= other.digits.len() && borrow == 0 {
                break;
            }
            let rhs = other.digits.get(i).copied().unwrap_or(0) + borrow;
            if *d >= rhs {
                *d -= rhs;
                borrow = 0;
            } else {
                *d = *d + RADIX - rhs;
                borrow = 1;
            }
        }
        self.normalize();
    }
}

forward_binop_to_assign!(impl Sub, sub, SubAssign, sub_assign);

// 实现与原生整数的运算
macro_rules! impl_scalar_ops {
    ($($t: ty),*) => {
    $(
    impl AddAssign<$t> for BigUint {
        fn add_assign(&mut self, rhs: $t) {
            self.add_scalar(rhs as u128);
        }
    }

    impl Add<$t> for BigUint {
        type Output = BigUint;

        fn add(mut self, rhs: $t) -> Self::Output {
            self += rhs;
            self
        }
    }

    impl Add<$t> for &BigUint {
        type Output = BigUint;

        fn add(self, rhs: $t) -> Self::Output {
            self.clone() + rhs
        }
    }

    impl Add<BigUint> for $t {
        type Output = BigUint;

        fn add(self, rhs: BigUint) -> Self::Output {
            rhs + self
        }
    }

    impl Add<&BigUint> for $t {
        type Output = BigUint;

        fn add(self, rhs: &BigUint) -> Self::Output {
            rhs + self
        }
    }

    impl SubAssign<$t> for BigUint {
        fn sub_assign(&mut self, rhs: $t) {
            self.sub_scalar(rhs as u128);
        }
    }

    impl Sub<$t> for BigUint {
        type Output = BigUint;

        fn sub(mut self, rhs: $t) -> Self::Output {
            self -= rhs;
            self
        }
    }

    impl Sub<$t> for &BigUint {
        type Output = BigUint;

        fn sub(self, rhs: $t) -> Self::Output {
            self.clone() - rhs
        }
    }

    impl MulAssign<$t> for BigUint {
        fn mul_assign(&mut self, rhs: $t) {
            self.mul_scalar(rhs as u128);
        }
    }

    impl Mul<$t> for BigUint {
        type Output = BigUint;

        fn mul(mut self, rhs: $t) -> Self::Output {
            self *= rhs;
            self
        }
    }

    impl Mul<$t> for &BigUint {
        type Output = BigUint;

        fn mul(self, rhs: $t) -> Self::Output {
            self.clone() * rhs
        }
    }

    impl Mul<BigUint> for $t {
        type Output = BigUint;

        fn mul(self, rhs: BigUint) -> Self::Output {
            rhs * self
        }
    }

    impl Mul<&BigUint> for $t {
        type Output = BigUint;

        fn mul(self, rhs: &BigUint) -> Self::Output {
            rhs * self
        }
    }

    impl DivAssign<$t> for BigUint {
        fn div_assign(&mut self, rhs: $t) {
            self.div_scalar(rhs as u128);
        }
    }

    impl Div<$t> for BigUint {
        type Output = BigUint;

        fn div(mut self, rhs: $t) -> Self::Output {
            self /= rhs;
            self
        }
    }

    impl Div<$t> for &BigUint {
        type Output = BigUint;

        fn div(self, rhs: $t) -> Self::Output {
            self.clone() / rhs
        }
    }

    impl RemAssign<$t> for BigUint {
        fn rem_assign(&mut self, rhs: $t) {
            *self = self.rem_scalar(rhs as u128);
        }
    }

    impl Rem<$t> for BigUint {
        type Output = BigUint;

        fn rem(self, rhs: $t) -> Self::Output {
            self.rem_scalar(rhs as u128)
        }
    }

    impl Rem<$t> for &BigUint {
        type Output = BigUint;

        fn rem(self, rhs: $t) -> Self::Output {
            self.rem_scalar(rhs as u128)
        }
    }
    )*
    };
}
impl_scalar_ops!(u8, u16, u32, u64, u128, usize);

impl Sum for BigUint {
    fn sum<I: Iterator<Item = BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigUint> for BigUint {
    fn sum<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::zero(), |acc, x| acc + x)
    }
}

impl Product for BigUint {
    fn product<I: Iterator<Item = BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigUint> for BigUint {
    fn product<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::one(), |acc, x| acc * x)
    }
}

// 实现打印
impl BigUint {
    fn write_decimal<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut digits = self.digits.iter().rev();
        if let Some(top) = digits.next() {
            write!(out, "{}", top)?;
        }
        for d in digits {
            write!(out, "{:0width$}", d, width = RADIX_WIDTH)?;
        }
        Ok(())
    }
}

impl Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() {
            return self.write_decimal(f);
        }
        let mut s = String::with_capacity(self.digits.len() * RADIX_WIDTH);
        self.write_decimal(&mut s)?;
        f.pad_integral(true, "", &s)
    }
}

// 实现解析
impl FromStr for BigUint {
    type Err = ParseBigUintError;

    /// Reads plain decimal digits: no sign, no separators. Leading zeros are accepted.
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        if val.is_empty() {
            return Err(ParseBigUintError::Empty);
        }
        if let Some((index, found)) = val.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigUintError::InvalidDigit { index, found });
        }

        // groups of RADIX_WIDTH characters from the least significant end,
        // the most significant group may be shorter
        let mut digits = Vec::with_capacity(val.len() / RADIX_WIDTH + 1);
        let mut end = val.len();
        while end > 0 {
            let start = end.saturating_sub(RADIX_WIDTH);
            digits.push(val[start..end].parse::<u32>()?);
            end = start;
        }
        Ok(BigUint::new(digits))
    }
}

impl TryFrom<&str> for BigUint {
    type Error = ParseBigUintError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        val.parse()
    }
}

#[cfg(test)]
fn big(val: &str) -> BigUint {
    val.parse().unwrap()
}

#[test]
fn test_from() {
    assert_eq!(BigUint::from(0_u8).digits(), &[0]);
    assert_eq!(BigUint::from(999_999_999_u32).digits(), &[999_999_999]);
    assert_eq!(BigUint::from(1_000_000_000_u64).digits(), &[0, 1]);
    assert_eq!(BigUint::from(u64::MAX).digits(), &[709_551_615, 446_744_073, 18]);
    assert_eq!(BigUint::from(u128::MAX).to_string(), u128::MAX.to_string());

    assert_eq!(BigUint::try_from(12_i8), Ok(BigUint::from(12_u8)));
    assert_eq!(BigUint::try_from(-100_i16), Err(NegativeValueError(-100)));
    assert_eq!(BigUint::try_from(i64::MIN), Err(NegativeValueError(i64::MIN as i128)));
}

#[test]
fn test_from_digits() {
    assert_eq!(BigUint::from_digits(vec![]), BigUint::zero());
    assert_eq!(BigUint::from_digits(vec![0, 0, 0]).digits(), &[0]);
    assert_eq!(BigUint::from_digits(vec![5, 0, 7, 0, 0]).digits(), &[5, 0, 7]);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_from_digits_out_of_range() {
    BigUint::from_digits(vec![1, RADIX]);
}

#[test]
fn test_to_u64() {
    assert_eq!(big("123456789110").to_u64(), Some(123456789110));
    assert_eq!(big("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(big("18446744073709551616").to_u64(), None);
    assert_eq!(u64::try_from(&big("18446744073709551616")), Err(TryFromBigUintError("u64")));
}

#[test]
fn test_parse() {
    assert_eq!(big("0"), BigUint::zero());
    assert_eq!(big("000000000000000000000"), BigUint::zero());
    assert_eq!(big("1000000000000000000").digits(), &[0, 0, 1]);
    assert_eq!(big("00012").digits(), &[12]);
    assert_eq!(big("1234567890123").digits(), &[567_890_123, 1234]);

    assert_eq!("".parse::<BigUint>(), Err(ParseBigUintError::Empty));
    assert_eq!(
        "12a4".parse::<BigUint>(),
        Err(ParseBigUintError::InvalidDigit { index: 2, found: 'a' })
    );
    assert_eq!(
        "-1".parse::<BigUint>(),
        Err(ParseBigUintError::InvalidDigit { index: 0, found: '-' })
    );
    assert_eq!(
        "1 000".parse::<BigUint>(),
        Err(ParseBigUintError::InvalidDigit { index: 1, found: ' ' })
    );
    assert!(BigUint::try_from("+5").is_err());
}

#[test]
fn test_to_string() {
    let s = "1000000000000000000";
    assert_eq!(big(s).to_string(), s);
    assert_eq!(big("000123").to_string(), "123");
    assert_eq!(BigUint::zero().to_string(), "0");
    assert_eq!(BigUint::from_digits(vec![7, 0, 42]).to_string(), "42000000000000000007");

    let a = "12345678909876543213456789098574635425364758697096854736526458798765444375328977748874784874";
    assert_eq!(big(a).to_string(), a);

    assert_eq!(format!("{:>8}", BigUint::from(42_u32)), "      42");
    assert_eq!(format!("{:08}", BigUint::from(42_u32)), "00000042");
}

#[test]
fn test_cmp() {
    let a = big("1000000000");
    let b = big("999999999");
    let c = big("1000000001");
    assert!(a > b);
    assert!(b < a);
    assert!(a < c);
    assert!(a <= a.clone());
    assert!(a >= a.clone());
    assert_ne!(a, c);
    assert_eq!(big("0001000000000"), a);
    assert_eq!(big("123456789123456789").cmp(&big("123456789123456788")), Ordering::Greater);
}

#[test]
fn test_add() {
    assert_eq!(big("999999999") + 1_u32, big("1000000000"));
    assert_eq!(big("999999999999999999") + big("1"), big("1000000000000000000"));
    assert_eq!(
        big("999999999999999999") + big("999999999999999999"),
        big("1999999999999999998")
    );
    assert_eq!(big("5") + big("1000000000000000000000"), big("1000000000000000000005"));
    assert_eq!(1_000_000_000_000_u64 + big("1"), big("1000000000001"));

    let mut a = big("123");
    a += 5_000_000_000_u64;
    assert_eq!(a, big("5000000123"));
    a += &big("1000000000000000000000000");
    assert_eq!(a, big("1000000000000005000000123"));
}

#[test]
fn test_sub() {
    assert_eq!(big("1000000000") - 1_u32, big("999999999"));
    assert_eq!(big("1000000000000000000") - big("1"), big("999999999999999999"));
    assert_eq!(big("1000000000000000000") - big("1000000000000000000"), BigUint::zero());
    assert_eq!(
        big("1000000000000000000000000005") - big("5"),
        big("1000000000000000000000000000")
    );
    assert_eq!(big("1000000000000000000000000000") - big("1"), big("999999999999999999999999999"));
    assert_eq!(big("12345678901234567890") - 10_000_000_000_u64, big("12345678891234567890"));

    assert_eq!(big("10").checked_sub(&big("11")), None);
    assert_eq!(big("11").checked_sub(&big("10")), Some(big("1")));
}

#[test]
#[should_panic(expected = "attempt to subtract")]
fn test_sub_underflow() {
    let _ = big("1000000000000") - big("1000000000001");
}

#[test]
#[should_panic(expected = "attempt to subtract")]
fn test_sub_small_underflow() {
    let _ = big("3") - 4_u32;
}

#[test]
fn test_sum_product() {
    let values = vec![big("999999999"), big("1"), big("1000000000")];
    assert_eq!(values.iter().sum::<BigUint>(), big("2000000000"));
    assert_eq!(values.into_iter().product::<BigUint>(), big("999999999000000000"));
}
