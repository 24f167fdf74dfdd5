use std::ops::{Div, Rem};

use crate::big_uint_constants::*;
use crate::BigUint;

// 实现除法
impl BigUint {
    /// Quotient and remainder of a division by a single digit.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn div_rem_small(&self, divisor: u32) -> (BigUint, u32) {
        if divisor >= RADIX {
            return (self / &BigUint::from(divisor), self.rem_u64(divisor as u64) as u32);
        }
        let mut quotient = self.clone();
        let remainder = quotient.div_assign_small(divisor);
        (quotient, remainder)
    }

    /// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16.
    /// Returns the remainder.
    pub(crate) fn div_assign_small(&mut self, divisor: u32) -> u32 {
        assert!(divisor != 0, "attempt to divide by zero");
        debug_assert!(divisor < RADIX);
        let divisor = divisor as u64;
        let mut rem: u64 = 0;
        for d in self.digits.iter_mut().rev() {
            let cur = rem * RADIX as u64 + *d as u64;
            *d = (cur / divisor) as u32;
            rem = cur % divisor;
        }
        self.normalize();
        rem as u32
    }

    /// Remainder-only pass of [`div_assign_small`](BigUint::div_assign_small).
    pub(crate) fn rem_small(&self, divisor: u32) -> u32 {
        assert!(divisor != 0, "attempt to calculate the remainder with a divisor of zero");
        debug_assert!(divisor < RADIX);
        let divisor = divisor as u64;
        self.digits
            .iter()
            .rev()
            .fold(0, |rem, &d| (rem * RADIX as u64 + d as u64) % divisor) as u32
    }

    /// `self % divisor` as a native integer.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn rem_u64(&self, divisor: u64) -> u64 {
        assert!(divisor != 0, "attempt to calculate the remainder with a divisor of zero");
        // rem < 2^64 and d < 2^30, so the accumulator stays below 2^94
        let divisor = divisor as u128;
        self.digits
            .iter()
            .rev()
            .fold(0, |rem, &d| (rem * RADIX as u128 + d as u128) % divisor) as u64
    }

    pub(crate) fn div_scalar(&mut self, num: u128) {
        if num < RADIX as u128 {
            self.div_assign_small(num as u32);
        } else {
            *self = &*self / &BigUint::from(num);
        }
    }

    pub(crate) fn rem_scalar(&self, num: u128) -> BigUint {
        if num < RADIX as u128 {
            BigUint::from(self.rem_small(num as u32))
        } else {
            self % &BigUint::from(num)
        }
    }

    /// Quotient and remainder in a single pass.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigUint) -> (BigUint, BigUint) {
        assert!(!divisor.is_zero(), "attempt to divide by zero");
        if divisor.digits.len() == 1 {
            let mut quotient = self.clone();
            let remainder = quotient.div_assign_small(divisor.digits[0]);
            return (quotient, BigUint::from(remainder));
        }
        if *self < *divisor {
            return (BigUint::zero(), self.clone());
        }
        self.divide_knuth(divisor)
    }

    /// [`div_rem`](BigUint::div_rem), or `None` when `divisor` is zero.
    pub fn checked_div_rem(&self, divisor: &BigUint) -> Option<(BigUint, BigUint)> {
        if divisor.is_zero() {
            None
        } else {
            Some(self.div_rem(divisor))
        }
    }

    /// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
    /// `divisor` has at least two digits.
    fn divide_knuth(&self, divisor: &BigUint) -> (BigUint, BigUint) {
        // D1 normalize
        // scale both sides so that the divisor's leading digit is close to RADIX,
        // which keeps qhat at most a couple of units above the true digit
        let norm = RADIX / (divisor.top() + 1);
        let mut u = self.clone();
        u.mul_small(norm);
        let mut v = divisor.clone();
        v.mul_small(norm);

        let n = v.digits.len();
        let v_top = v.top() as u64;
        let mut q = vec![0_u32; u.digits.len()];
        let mut r = BigUint::zero();

        // D2 loop over the dividend from the most significant digit
        for j in (0..u.digits.len()).rev() {
            r.push_low_digit(u.digits[j]);

            // D3 calculate qhat from the two leading digits of the partial remainder
            let s1 = r.digits.get(n).copied().unwrap_or(0) as u64;
            let s2 = r.digits.get(n - 1).copied().unwrap_or(0) as u64;
            let mut qhat = ((s1 * RADIX as u64 + s2) / v_top).min(RADIX as u64 - 1) as u32;

            // D4 multiply and subtract, D6 add back while it would underflow
            let mut product = v.clone();
            product.mul_small(qhat);
            while r < product {
                r += &v;
                qhat -= 1;
            }
            r -= &product;
            q[j] = qhat;
        }

        // D8 unnormalize
        r.div_assign_small(norm);
        (BigUint::new(q), r)
    }
}

impl Div<&BigUint> for &BigUint {
    type Output = BigUint;

    fn div(self, rhs: &BigUint) -> Self::Output {
        self.div_rem(rhs).0
    }
}

forward_binop_to_ref!(impl Div, div, DivAssign, div_assign);

// 实现求余
impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> Self::Output {
        if rhs.digits.len() == 1 {
            return BigUint::from(self.rem_small(rhs.digits[0]));
        }
        self.div_rem(rhs).1
    }
}

forward_binop_to_ref!(impl Rem, rem, RemAssign, rem_assign);

#[cfg(test)]
fn big(val: &str) -> BigUint {
    val.parse().unwrap()
}

#[test]
fn test_div() {
    // test divide one word
    assert_eq!(big("120") / big("13"), big("9"));
    let a = big("10000000000000000000000000000000000");
    assert_eq!(&a / &big("1000"), big("10000000000000000000000000000000"));
    assert_eq!(&a / 1000_u32, big("10000000000000000000000000000000"));
    // test divide Knuth
    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(&a / &b, c);
    assert_eq!(&c * &b + &a % &b, a);
}

#[test]
fn test_div_rem() {
    let (q, r) = big("100000000000000000000").div_rem(&big("7"));
    assert_eq!(q, big("14285714285714285714"));
    assert_eq!(r, big("2"));

    let (q, r) = big("5").div_rem(&big("1000000000000"));
    assert_eq!(q, BigUint::zero());
    assert_eq!(r, big("5"));

    let (q, r) = big("1000000000000").div_rem(&big("1000000000000"));
    assert_eq!(q, BigUint::one());
    assert_eq!(r, BigUint::zero());

    // leading divisor digit already at RADIX - 1, norm == 1
    let (q, r) = big("999999999999999999999999999999").div_rem(&big("999999999000000001"));
    assert_eq!(&q * &big("999999999000000001") + &r, big("999999999999999999999999999999"));
    assert!(r < big("999999999000000001"));

    assert_eq!(big("7").div_rem_small(2), (big("3"), 1));
    assert_eq!(big("12345678901234567890").div_rem_small(RADIX), (big("12345678901"), 234567890));
    assert_eq!(big("10").checked_div_rem(&BigUint::zero()), None);
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("10000000000000000") % big("10"), BigUint::zero());
    assert_eq!(big("10000000000000001") % 10_u8, BigUint::one());

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(&a % &b, r);

    let mut c = a.clone();
    c %= &b;
    assert_eq!(c, r);
}

#[test]
fn test_rem_u64() {
    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    assert_eq!(a.rem_u64(7), (&a % 7_u32).to_u64().unwrap());
    assert_eq!(a.rem_u64(u64::MAX), (&a % u64::MAX).to_u64().unwrap());
    assert_eq!(big("18446744073709551616").rem_u64(u64::MAX), 1);
}

#[test]
fn test_scalar_div() {
    let mut a = big("1000000000000000000000");
    a /= 1_000_000_000_000_u64;
    assert_eq!(a, big("1000000000"));
    assert_eq!(big("1000000000000000000000") / 3_u8, big("333333333333333333333"));
    assert_eq!(big("1000000000000000000000") % 1_000_000_000_007_u64, big("993000000007"));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_by_zero() {
    let _ = big("10") / BigUint::zero();
}

#[test]
#[should_panic(expected = "divisor of zero")]
fn test_rem_by_zero() {
    let _ = big("10") % 0_u32;
}
