// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the key generation of the [`Lwe`](super::Lwe) scheme.

use super::{PublicKey, SecretKey, SecurityParameters};
use crate::{
    error::LweError,
    sample::uniform::{sample_bounded_vec, sample_uniform_mat, sample_uniform_vec},
    utils::modular::Modulus,
};
use rand::Rng;
use tracing::debug;

/// Generates a key pair `(sk, pk)` for the parameters `n`, `q`, `m` and
/// the default error magnitude `2`.
///
/// Parameters:
/// - `n`: specifies the length of the secret vector
/// - `q`: specifies the modulus
/// - `m`: specifies the number of rows of `A`, defaults to `2n`
/// - `rng`: specifies the randomness source
///
/// Returns the secret key `s` and the public key `(A, b)` or an [`LweError`]
/// if the parameters violate their domain. No randomness is drawn in
/// that case.
///
/// # Examples
/// ```
/// use qfall_lwe::construction::pk_encryption::lwe::generate;
/// use rand::thread_rng;
///
/// let (sk, pk) = generate(10, 257, None, &mut thread_rng()).unwrap();
///
/// assert_eq!(10, sk.dimension());
/// assert_eq!(20, pk.vec_b().len());
/// ```
///
/// # Errors and Failures
/// - Returns a [`LweError`] of type [`InvalidParameter`](LweError::InvalidParameter)
///   if `n < 1`, `q < 2`, or `m < n`.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    q: u64,
    m: Option<usize>,
    rng: &mut R,
) -> Result<(SecretKey, PublicKey), LweError> {
    let params = SecurityParameters::new(n, q, m)?;
    Ok(generate_with_params(&params, rng))
}

/// Generates a key pair `(sk, pk)` by following these steps:
/// - s <- Z_q^n
/// - A <- Z_q^{m x n}
/// - e <- [0, error_magnitude]^m
/// - b = A * s + e
///
/// Then, `sk = s` and `pk = (A, b)` is output.
pub fn generate_with_params<R: Rng + ?Sized>(
    params: &SecurityParameters,
    rng: &mut R,
) -> (SecretKey, PublicKey) {
    let q = params.q();

    // s <- Z_q^n
    let vec_s = sample_uniform_vec(params.n(), &q, rng);
    // A <- Z_q^{m x n}
    let mat_a = sample_uniform_mat(params.m(), params.n(), &q, rng);
    // e <- [0, error_magnitude]^m
    let vec_e = sample_bounded_vec(params.m(), params.error_magnitude(), rng);

    let vec_b = noisy_product(&mat_a, &vec_s, &vec_e, &q);

    debug!(
        n = params.n(),
        m = params.m(),
        q = q.value(),
        error_magnitude = params.error_magnitude(),
        "generated LWE key pair"
    );

    (SecretKey::new(vec_s), PublicKey::new(mat_a, vec_b))
}

/// Computes `b = A * s + e mod q`.
fn noisy_product(mat_a: &[Vec<u64>], vec_s: &[u64], vec_e: &[u64], q: &Modulus) -> Vec<u64> {
    q.mat_vec(mat_a, vec_s)
        .into_iter()
        .zip(vec_e)
        .map(|(entry, &e)| q.add(entry, e))
        .collect()
}

#[cfg(test)]
mod test_generate {
    use super::{generate, generate_with_params, noisy_product};
    use crate::{
        construction::pk_encryption::lwe::SecurityParameters, error::LweError,
        sample::seed::rng_from_seed_phrase, utils::modular::Modulus,
    };

    /// Ensures that invalid parameters are rejected.
    #[test]
    fn invalid_parameters() {
        let mut rng = rng_from_seed_phrase("invalid");

        for (n, q, m) in [(0, 257, None), (10, 1, None), (10, 257, Some(5))] {
            assert!(matches!(
                generate(n, q, m, &mut rng),
                Err(LweError::InvalidParameter(_))
            ));
        }
    }

    /// Checks shapes and ranges of the generated keys for several
    /// valid parameter sets, including `m = n` and `q = 2`.
    #[test]
    fn shapes_and_ranges() {
        let mut rng = rng_from_seed_phrase("shapes");

        for (n, q, m) in [(1, 2, None), (3, 5, Some(3)), (10, 257, None), (16, 12289, Some(40))] {
            let (sk, pk) = generate(n, q, m, &mut rng).unwrap();
            let m = m.unwrap_or(2 * n);

            assert_eq!(n, sk.dimension());
            assert_eq!(m, pk.mat_a().len());
            assert!(pk.mat_a().iter().all(|row| row.len() == n));
            assert_eq!(m, pk.vec_b().len());

            assert!(sk.as_slice().iter().all(|&x| x < q));
            assert!(pk.mat_a().iter().flatten().all(|&x| x < q));
            assert!(pk.vec_b().iter().all(|&x| x < q));
        }
    }

    /// Ensures that `b - A * s` only consists of noise entries in
    /// `[0, error_magnitude]`.
    #[test]
    fn b_is_noisy_product() {
        let mut rng = rng_from_seed_phrase("noise");
        let params = SecurityParameters::default().with_error_magnitude(3);

        let (sk, pk) = generate_with_params(&params, &mut rng);
        let q = params.q();
        let vec_as = q.mat_vec(pk.mat_a(), sk.as_slice());

        for (&b, a_s) in pk.vec_b().iter().zip(vec_as) {
            assert!(q.sub(b, a_s) <= 3);
        }
    }

    /// Ensures that an error magnitude of `0` yields `b = A * s`.
    #[test]
    fn zero_noise() {
        let mut rng = rng_from_seed_phrase("zero noise");
        let params = SecurityParameters::default().with_error_magnitude(0);

        let (sk, pk) = generate_with_params(&params, &mut rng);

        assert_eq!(
            params.q().mat_vec(pk.mat_a(), sk.as_slice()),
            pk.vec_b().to_vec()
        );
    }

    /// Ensures that equally seeded randomness sources yield equal keys.
    #[test]
    fn reproducible() {
        let params = SecurityParameters::default();

        let keys_0 = generate_with_params(&params, &mut rng_from_seed_phrase("seed"));
        let keys_1 = generate_with_params(&params, &mut rng_from_seed_phrase("seed"));
        let keys_2 = generate_with_params(&params, &mut rng_from_seed_phrase("other seed"));

        assert_eq!(keys_0, keys_1);
        assert_ne!(keys_0, keys_2);
    }

    /// Checks `b = A * s + e` on a small hand-computed instance.
    #[test]
    fn noisy_product_small() {
        let q = Modulus::new(257).unwrap();
        let mat_a = vec![vec![1, 2], vec![3, 4], vec![5, 6]];

        let vec_b = noisy_product(&mat_a, &[10, 20], &[1, 0, 2], &q);

        assert_eq!(vec![51, 110, 172], vec_b);
    }

    /// Ensures that `b` is reduced modulo `q`.
    #[test]
    fn noisy_product_wraps() {
        let q = Modulus::new(7).unwrap();

        // 6 * 6 + 2 = 38 = 3 mod 7
        assert_eq!(vec![3], noisy_product(&[vec![6]], &[6], &[2], &q));
    }
}
