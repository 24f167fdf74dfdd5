use big_uint::{BigUint, MulAlgorithm, MulSelector, RADIX};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn big(val: &str) -> BigUint {
    val.parse().unwrap()
}

/// Same value as a `num_bigint::BigUint`, used as the reference result.
fn oracle(val: &BigUint) -> num_bigint::BigUint {
    val.to_string().parse().unwrap()
}

fn random_big_uint(rng: &mut StdRng, len: usize) -> BigUint {
    let mut digits: Vec<u32> = (0..len).map(|_| rng.gen_range(0..RADIX)).collect();
    // keep the requested length
    if let Some(top) = digits.last_mut() {
        *top = rng.gen_range(1..RADIX);
    }
    BigUint::from_digits(digits)
}

fn decimal() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,120}"]
}

fn big_uint() -> impl Strategy<Value = BigUint> {
    decimal().prop_map(|s| big(&s))
}

fn non_zero_big_uint() -> impl Strategy<Value = BigUint> {
    "[1-9][0-9]{0,80}".prop_map(|s| big(&s))
}

fn raw_digits() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(0..RADIX, 1..300).prop_map(BigUint::from_digits)
}

proptest! {
    #[test]
    fn test_round_trip(s in decimal()) {
        prop_assert_eq!(big(&s).to_string(), s);
    }

    #[test]
    fn test_leading_zeros_dropped(zeros in 0usize..20, s in decimal()) {
        let padded = format!("{}{}", "0".repeat(zeros), s);
        prop_assert_eq!(big(&padded).to_string(), s);
    }

    #[test]
    fn test_digits_round_trip(x in raw_digits()) {
        prop_assert_eq!(BigUint::from_digits(x.digits().to_vec()), x.clone());
        prop_assert!(x.digits().len() == 1 || *x.digits().last().unwrap() != 0);
    }

    #[test]
    fn test_matches_oracle(a in big_uint(), b in big_uint()) {
        prop_assert_eq!(oracle(&(&a + &b)), oracle(&a) + oracle(&b));
        prop_assert_eq!(oracle(&(&a * &b)), oracle(&a) * oracle(&b));
        prop_assert_eq!(a.cmp(&b), oracle(&a).cmp(&oracle(&b)));
        if a >= b {
            prop_assert_eq!(oracle(&(&a - &b)), oracle(&a) - oracle(&b));
        }
    }

    #[test]
    fn test_div_rem_matches_oracle(a in big_uint(), b in non_zero_big_uint()) {
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(oracle(&q), oracle(&a) / oracle(&b));
        prop_assert_eq!(oracle(&r), oracle(&a) % oracle(&b));
    }

    #[test]
    fn test_add_commutative_associative(a in big_uint(), b in big_uint(), c in big_uint()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
    }

    #[test]
    fn test_mul_commutative_associative(a in big_uint(), b in big_uint(), c in big_uint()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
    }

    #[test]
    fn test_sub_then_add(a in big_uint(), b in big_uint()) {
        let (larger, smaller) = if a >= b { (a, b) } else { (b, a) };
        prop_assert_eq!((&larger - &smaller) + &smaller, larger.clone());
        prop_assert_eq!(smaller.checked_sub(&larger).is_some(), smaller == larger);
    }

    #[test]
    fn test_division_identity(a in raw_digits(), b in raw_digits()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r < b);
        prop_assert_eq!(&a / &b, q);
        prop_assert_eq!(&a % &b, r);
    }

    #[test]
    fn test_scalar_ops(a in big_uint(), n in any::<u64>()) {
        let n_big = BigUint::from(n);
        prop_assert_eq!(&a + n, &a + &n_big);
        prop_assert_eq!(&a * n, &a * &n_big);
        if a >= n_big {
            prop_assert_eq!(&a - n, &a - &n_big);
        }
        if n > 0 {
            prop_assert_eq!(&a / n, &a / &n_big);
            prop_assert_eq!(&a % n, &a % &n_big);
            prop_assert_eq!(BigUint::from(a.rem_u64(n)), &a % &n_big);
        }
    }

    #[test]
    fn test_schoolbook_equals_spectral(a in raw_digits(), b in raw_digits()) {
        prop_assert_eq!(
            a.mul_with(&b, MulAlgorithm::Spectral),
            a.mul_with(&b, MulAlgorithm::Schoolbook)
        );
    }

    #[test]
    fn test_gcd_properties(a in big_uint(), b in non_zero_big_uint()) {
        let g = a.gcd(&b);
        prop_assert_eq!(a.gcd(&BigUint::zero()), a.clone());
        prop_assert!((&a % &g).is_zero());
        prop_assert!((&b % &g).is_zero());
        prop_assert_eq!(g, b.gcd(&(&a % &b)));
    }

    #[test]
    fn test_pow_mod_reduced_base(a in big_uint(), n in 0u64..200, m in non_zero_big_uint()) {
        prop_assert_eq!(
            a.pow_mod(n, &m) % &m,
            (&a % &m).pow_mod(n, &m) % &m
        );
    }

    #[test]
    fn test_pow_mod_matches_oracle(a in big_uint(), n in 1u64..200, m in "[2-9]|[1-9][0-9]{1,40}") {
        let m = big(&m);
        let expected = oracle(&a).modpow(&num_bigint::BigUint::from(n), &oracle(&m));
        prop_assert_eq!(oracle(&(a.pow_mod(n, &m) % &m)), expected);
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(big("1000000000000000000").to_string(), "1000000000000000000");
    assert_eq!(big("999999999") + 1_u32, big("1000000000"));
    assert_eq!(big("123456789") * big("987654321"), big("121932631112635269"));
    let (q, r) = big("100000000000000000000").div_rem(&big("7"));
    assert_eq!(q, big("14285714285714285714"));
    assert_eq!(r, big("2"));
    assert_eq!(big("48").gcd(&big("18")), big("6"));
}

#[test]
fn test_large_operands_across_crossover() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let selector = MulSelector::default();
    for (x_len, y_len) in [(2, 3), (100, 1000), (2500, 2500), (6000, 6000), (7000, 7000)] {
        let a = random_big_uint(&mut rng, x_len);
        let b = random_big_uint(&mut rng, y_len);
        let expected = oracle(&a) * oracle(&b);

        let product = &a * &b;
        assert_eq!(oracle(&product), expected, "{} x {} digits, {:?}", x_len, y_len, selector.select(x_len, y_len));
        assert_eq!(a.mul_with(&b, MulAlgorithm::Spectral), product);
        assert_eq!(a.mul_with(&b, MulAlgorithm::Schoolbook), product);
    }
}

#[test]
fn test_large_division() {
    let mut rng = StdRng::seed_from_u64(42);
    for (u_len, v_len) in [(2, 2), (40, 3), (500, 250), (1200, 17)] {
        let u = random_big_uint(&mut rng, u_len);
        let v = random_big_uint(&mut rng, v_len);
        let (q, r) = u.div_rem(&v);
        assert_eq!(oracle(&q), oracle(&u) / oracle(&v));
        assert_eq!(oracle(&r), oracle(&u) % oracle(&v));
    }
}
