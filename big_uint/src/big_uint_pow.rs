use crate::BigUint;

// 实现乘方
impl BigUint {
    /// `self^exponent` by binary exponentiation. `0^0` is 1.
    pub fn pow(&self, exponent: u64) -> BigUint {
        self.pow_impl(exponent, None)
    }

    /// Binary exponentiation that reduces the running base modulo `modulus`
    /// after every squaring. The accumulator is never reduced, so the result
    /// is congruent to `self^exponent` modulo `modulus` but is not
    /// necessarily below it; apply `% modulus` for the canonical residue.
    ///
    /// # Panics
    /// If `modulus` is zero.
    pub fn pow_mod(&self, exponent: u64, modulus: &BigUint) -> BigUint {
        assert!(!modulus.is_zero(), "attempt to calculate the remainder with a divisor of zero");
        self.pow_impl(exponent, Some(modulus))
    }

    fn pow_impl(&self, mut exponent: u64, modulus: Option<&BigUint>) -> BigUint {
        let mut result = BigUint::one();
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result *= &base;
            }
            exponent >>= 1;
            // the last squaring would never be used
            if exponent == 0 {
                break;
            }
            base = &base * &base;
            if let Some(modulus) = modulus {
                base %= modulus;
            }
        }
        result
    }
}

// 实现最大公约数
impl BigUint {
    /// Greatest common divisor by the Euclidean algorithm. `gcd(a, 0) == a`.
    pub fn gcd(&self, other: &BigUint) -> BigUint {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }
}

#[cfg(test)]
fn big(val: &str) -> BigUint {
    val.parse().unwrap()
}

#[test]
fn test_pow() {
    assert_eq!(big("2").pow(0), BigUint::one());
    assert_eq!(BigUint::zero().pow(0), BigUint::one());
    assert_eq!(BigUint::zero().pow(5), BigUint::zero());
    assert_eq!(big("2").pow(64), big("18446744073709551616"));
    assert_eq!(big("10").pow(30), big("1000000000000000000000000000000"));
    assert_eq!(big("999999999").pow(3), big("999999997000000002999999999"));
}

#[test]
fn test_pow_mod() {
    // even exponent: every factor is a reduced power
    assert_eq!(big("4").pow_mod(2, &big("5")), big("1"));
    assert_eq!(big("3").pow_mod(200, &big("1000000007")) % big("1000000007"), big("3").pow(200) % big("1000000007"));

    // odd exponent: the unreduced base enters the accumulator
    let m = big("13");
    let r = big("100").pow_mod(3, &m);
    // 100 * (100^2 mod 13)
    assert_eq!(r, big("300"));
    assert_eq!(r % &m, big("100").pow(3) % &m);
    assert_eq!(big("100").pow_mod(3, &m) % &m, big("9").pow_mod(3, &m) % &m);

    let m = big("1000000000000000000000000000057");
    let a = big("123456789123456789123456789123456789");
    assert_eq!(a.pow_mod(77, &m) % &m, a.pow(77) % &m);
}

#[test]
#[should_panic(expected = "divisor of zero")]
fn test_pow_mod_zero() {
    big("3").pow_mod(3, &BigUint::zero());
}

#[test]
fn test_gcd() {
    assert_eq!(big("48").gcd(&big("18")), big("6"));
    assert_eq!(big("18").gcd(&big("48")), big("6"));
    assert_eq!(big("17").gcd(&BigUint::zero()), big("17"));
    assert_eq!(BigUint::zero().gcd(&big("17")), big("17"));
    assert_eq!(BigUint::zero().gcd(&BigUint::zero()), BigUint::zero());

    let p = big("1000000000000000000000000000057");
    let a = &p * &big("123456789123456789");
    let b = &p * &big("987654321");
    assert_eq!(a.gcd(&b), &p * &big("9"));
}
