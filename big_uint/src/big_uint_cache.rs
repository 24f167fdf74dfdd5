use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, Mutex};

use lazy_static::*;
use num_complex::Complex;

use crate::big_uint_constants::*;

lazy_static! {
    /// Roots of unity per transform length, see [`roots_of_unity`].
    static ref ROOT_CACHE: Mutex<HashMap<usize, Arc<[Complex<f64>]>>> = Mutex::new(HashMap::new());

    /// Process-wide crossover of the multiplication selector.
    pub static ref DEFAULT_CROSSOVER: u64 = crossover_from_env();
}

/// Returns `exp(-2πik/n)` for `k` in `0..n/2`.
///
/// Every root is computed directly rather than by repeated multiplication,
/// which would let the rounding error grow with `n`.
pub fn roots_of_unity(n: usize) -> Arc<[Complex<f64>]> {
    // entries are never mutated after insertion, a poisoned map is still valid
    let mut cache = ROOT_CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(n)
        .or_insert_with(|| {
            (0..n / 2)
                .map(|k| {
                    let (sin, cos) = (-2.0 * PI * k as f64 / n as f64).sin_cos();
                    Complex::new(cos, sin)
                })
                .collect()
        })
        .clone()
}

fn crossover_from_env() -> u64 {
    parse_crossover(std::env::var(SPECTRAL_CROSSOVER_ENV).ok().as_deref())
}

fn parse_crossover(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return SPECTRAL_CROSSOVER;
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => {
            tracing::debug!(crossover = value, "spectral crossover overridden by {}", SPECTRAL_CROSSOVER_ENV);
            value
        }
        _ => {
            tracing::warn!(
                value = %raw,
                default = SPECTRAL_CROSSOVER,
                "ignoring {}: expected a positive integer",
                SPECTRAL_CROSSOVER_ENV
            );
            SPECTRAL_CROSSOVER
        }
    }
}

#[test]
fn test_roots_of_unity() {
    let roots = roots_of_unity(8);
    assert_eq!(roots.len(), 4);
    assert!((roots[0] - Complex::new(1.0, 0.0)).norm() < 1e-15);
    assert!((roots[2] - Complex::new(0.0, -1.0)).norm() < 1e-15);
    // every root has unit modulus and the table is shared
    assert!(roots.iter().all(|w| (w.norm() - 1.0).abs() < 1e-15));
    assert!(Arc::ptr_eq(&roots, &roots_of_unity(8)));
}

#[test]
fn test_parse_crossover() {
    assert_eq!(parse_crossover(None), SPECTRAL_CROSSOVER);
    assert_eq!(parse_crossover(Some("40")), 40);
    assert_eq!(parse_crossover(Some(" 7\n")), 7);
    assert_eq!(parse_crossover(Some("0")), SPECTRAL_CROSSOVER);
    assert_eq!(parse_crossover(Some("fast")), SPECTRAL_CROSSOVER);
}
