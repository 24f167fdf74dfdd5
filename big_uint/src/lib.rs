//! Big Uint \
//! This crate provides:
//! - [`BigUint`]: arbitrary-precision unsigned integers in base 10^9, with
//!   decimal parsing and printing, `+ - * / %` against other `BigUint`s and
//!   native unsigned integers, [`div_rem`](BigUint::div_rem),
//!   [`pow`](BigUint::pow), [`pow_mod`](BigUint::pow_mod) and [`gcd`](BigUint::gcd).
//! - [`MulSelector`] / [`MulAlgorithm`]: the choice between schoolbook and
//!   FFT multiplication, tunable through the `BIG_UINT_SPECTRAL_CROSSOVER`
//!   environment variable.
//!
//! Arithmetic preconditions (subtracting a larger value, dividing by zero)
//! panic; parsing text returns [`ParseBigUintError`].
//!
//! # Features
//!
//! - Benchmarks can be run by activating the `bench` feature :
//! `cargo bench --bench mul --features bench`.

#[macro_use]
mod big_uint;
mod big_uint_cache;
mod big_uint_constants;
mod big_uint_div;
mod big_uint_fft;
mod big_uint_mul;
mod big_uint_pow;
mod error;

pub use big_uint::BigUint;
pub use big_uint_constants::{RADIX, RADIX_WIDTH, SPECTRAL_CROSSOVER, SPECTRAL_CROSSOVER_ENV};
pub use big_uint_mul::{MulAlgorithm, MulSelector};
pub use error::{NegativeValueError, ParseBigUintError, TryFromBigUintError};

#[cfg(test)]
mod tests {
    use crate::BigUint;

    #[test]
    fn it_works() {
        let a: BigUint = "10000000000000".parse().unwrap();
        let b: BigUint = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!(a.gcd(&b).to_string(), "100000000000");
    }
}
