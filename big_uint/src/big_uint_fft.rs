//! Iterative radix-2 discrete Fourier transform over `Complex<f64>`.

use num_complex::Complex;

use crate::big_uint_cache::roots_of_unity;

/// In-place transform of `values`, whose length must be a power of two.
/// The inverse transform includes the `1/n` scaling.
pub fn transform(values: &mut [Complex<f64>], invert: bool) {
    let n = values.len();
    assert!(n.is_power_of_two(), "transform length {} is not a power of two", n);
    if n == 1 {
        return;
    }

    bit_reverse_permute(values);

    let roots = roots_of_unity(n);
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        for block in values.chunks_exact_mut(len) {
            let (low, high) = block.split_at_mut(half);
            for (j, (u, v)) in low.iter_mut().zip(high.iter_mut()).enumerate() {
                let w = if invert { roots[j * stride].conj() } else { roots[j * stride] };
                let t = *v * w;
                *v = *u - t;
                *u += t;
            }
        }
        len <<= 1;
    }

    if invert {
        let scale = 1.0 / n as f64;
        values.iter_mut().for_each(|x| *x *= scale);
    }
}

fn bit_reverse_permute(values: &mut [Complex<f64>]) {
    let n = values.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            values.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_dft(input: &[Complex<f64>]) -> Vec<Complex<f64>> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(j, x)| {
                        let angle = -2.0 * std::f64::consts::PI * (j * k) as f64 / n as f64;
                        x * Complex::new(angle.cos(), angle.sin())
                    })
                    .sum()
            })
            .collect()
    }

    #[test]
    fn test_matches_naive_dft() {
        let input: Vec<Complex<f64>> = (0..16).map(|i| Complex::new((i * 37 % 11) as f64, 0.0)).collect();
        let mut fast = input.clone();
        transform(&mut fast, false);
        for (a, b) in fast.iter().zip(naive_dft(&input)) {
            assert!((a - b).norm() < 1e-9, "{} != {}", a, b);
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let input: Vec<Complex<f64>> = (0..64).map(|i| Complex::new((i % 1000) as f64, 0.0)).collect();
        let mut values = input.clone();
        transform(&mut values, false);
        transform(&mut values, true);
        for (a, b) in values.iter().zip(&input) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_cyclic_convolution() {
        // (1 + 2x) * (3 + 4x) = 3 + 10x + 8x^2
        let mut a = vec![Complex::new(1.0, 0.0), Complex::new(2.0, 0.0), Complex::default(), Complex::default()];
        let mut b = vec![Complex::new(3.0, 0.0), Complex::new(4.0, 0.0), Complex::default(), Complex::default()];
        transform(&mut a, false);
        transform(&mut b, false);
        a.iter_mut().zip(&b).for_each(|(x, y)| *x *= y);
        transform(&mut a, true);
        let coefficients: Vec<i64> = a.iter().map(|x| x.re.round() as i64).collect();
        assert_eq!(coefficients, vec![3, 10, 8, 0]);
    }
}
