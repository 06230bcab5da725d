// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the encryption of the [`Lwe`](super::Lwe) scheme.

use super::{Ciphertext, PublicKey, SecurityParameters};
use crate::{error::LweError, sample::uniform::sample_binary_vec};
use rand::Rng;
use tracing::trace;

/// Generates an encryption of the bit `message` for the public key `pk`
/// by following these steps:
/// - r <- {0,1}^m
/// - u = r^t * A
/// - v = r^t * b + message * ⌊q/2⌋
///
/// Then, cipher `(u, v)` is output.
///
/// The blinding vector `r` is binary, which bounds the accumulated noise
/// `r^t * e` by `m * error_magnitude`.
///
/// Parameters:
/// - `message`: specifies the bit that should be encrypted
/// - `pk`: specifies the public key `pk = (A, b)`
/// - `params`: specifies the public parameters `pk` was generated for
/// - `rng`: specifies the randomness source `r` is drawn from
///
/// Returns a [`Ciphertext`] or an [`LweError`] if `message` is not a bit
/// or `pk` does not fit `params`.
///
/// # Examples
/// ```
/// use qfall_lwe::construction::pk_encryption::lwe::{encrypt, generate_with_params, SecurityParameters};
/// use rand::thread_rng;
/// let params = SecurityParameters::default();
/// let (_, pk) = generate_with_params(&params, &mut thread_rng());
///
/// let cipher = encrypt(1, &pk, &params, &mut thread_rng()).unwrap();
///
/// assert_eq!(10, cipher.u().len());
/// ```
///
/// # Errors and Failures
/// - Returns a [`LweError`] of type [`InvalidMessage`](LweError::InvalidMessage)
///   if `message` is neither `0` nor `1`.
/// - Returns a [`LweError`] of type [`InvalidKey`](LweError::InvalidKey)
///   if `A` is not an `m x n` matrix or `b` is not of length `m`.
pub fn encrypt<R: Rng + ?Sized>(
    message: impl Into<i64>,
    pk: &PublicKey,
    params: &SecurityParameters,
    rng: &mut R,
) -> Result<Ciphertext, LweError> {
    let message = check_message(message.into())?;
    pk.check_dimensions(params)?;

    // r <- {0,1}^m
    let vec_r = sample_binary_vec(params.m(), rng);

    Ok(encrypt_blinded(message, pk, params, &vec_r))
}

/// Generates the encryption of `message` for the public key `pk` with the
/// provided blinding vector `vec_r` instead of a freshly sampled one.
///
/// This makes the encryption deterministic and is intended for testing
/// and reproducing ciphers.
///
/// # Errors and Failures
/// - Returns a [`LweError`] of type [`InvalidMessage`](LweError::InvalidMessage)
///   if `message` is neither `0` nor `1`.
/// - Returns a [`LweError`] of type [`InvalidKey`](LweError::InvalidKey)
///   if `pk` does not fit `params`, `vec_r` is not of length `m`,
///   or `vec_r` is not binary.
pub fn encrypt_with_blinding(
    message: impl Into<i64>,
    pk: &PublicKey,
    params: &SecurityParameters,
    vec_r: &[u64],
) -> Result<Ciphertext, LweError> {
    let message = check_message(message.into())?;
    pk.check_dimensions(params)?;
    if vec_r.len() != params.m() {
        return Err(LweError::InvalidKey(format!(
            "r has length {}, but length m = {} is required.",
            vec_r.len(),
            params.m()
        )));
    }
    if vec_r.iter().any(|&x| x > 1) {
        return Err(LweError::InvalidKey(String::from(
            "r must only contain entries in {0, 1}.",
        )));
    }

    Ok(encrypt_blinded(message, pk, params, vec_r))
}

fn check_message(message: i64) -> Result<u64, LweError> {
    match message {
        0 => Ok(0),
        1 => Ok(1),
        _ => Err(LweError::InvalidMessage(message)),
    }
}

/// Computes `(r^t * A, r^t * b + message * ⌊q/2⌋)` for checked inputs.
fn encrypt_blinded(
    message: u64,
    pk: &PublicKey,
    params: &SecurityParameters,
    vec_r: &[u64],
) -> Ciphertext {
    let q = params.q();

    // u = r^t * A
    let vec_u = q.vec_mat(vec_r, pk.mat_a(), params.n());
    // v = r^t * b + message * ⌊q/2⌋
    let v = q.add(q.dot(vec_r, pk.vec_b()), message * q.half());

    trace!(n = params.n(), m = params.m(), "encrypted bit");

    Ciphertext::new(vec_u, v)
}

#[cfg(test)]
mod test_encrypt {
    use super::{encrypt, encrypt_with_blinding};
    use crate::{
        construction::pk_encryption::lwe::{generate_with_params, PublicKey, SecurityParameters},
        error::LweError,
        sample::seed::rng_from_seed_phrase,
    };

    /// Public key for `A = [[1, 2], [3, 4], [5, 6]]`, `s = [10, 20]`,
    /// `e = [1, 0, 2]` over `q = 257`.
    fn small_instance() -> (PublicKey, SecurityParameters) {
        let pk = PublicKey::new(
            vec![vec![1, 2], vec![3, 4], vec![5, 6]],
            vec![51, 110, 172],
        );
        (pk, SecurityParameters::new(2, 257, Some(3)).unwrap())
    }

    /// Checks the cipher of both bits on a hand-computed instance.
    #[test]
    fn hand_computed() {
        let (pk, params) = small_instance();

        let cipher_0 = encrypt_with_blinding(0, &pk, &params, &[1, 0, 1]).unwrap();
        let cipher_1 = encrypt_with_blinding(1, &pk, &params, &[1, 0, 1]).unwrap();

        assert_eq!(&[6, 8], cipher_0.u());
        assert_eq!(223, cipher_0.v());
        assert_eq!(&[6, 8], cipher_1.u());
        // 223 + 128 = 351 = 94 mod 257
        assert_eq!(94, cipher_1.v());
    }

    /// Ensures that the all-zero blinding vector hides nothing but the message.
    #[test]
    fn zero_blinding() {
        let (pk, params) = small_instance();

        let cipher = encrypt_with_blinding(1u8, &pk, &params, &[0, 0, 0]).unwrap();

        assert_eq!(&[0, 0], cipher.u());
        assert_eq!(128, cipher.v());
    }

    /// Ensures that messages other than `0` and `1` are rejected.
    #[test]
    fn invalid_message() {
        let (pk, params) = small_instance();
        let mut rng = rng_from_seed_phrase("message");

        for message in [2, -1, i64::MAX, i64::MIN] {
            assert!(matches!(
                encrypt(message, &pk, &params, &mut rng),
                Err(LweError::InvalidMessage(m)) if m == message
            ));
        }
    }

    /// Ensures that a public key that does not fit the parameters is rejected.
    #[test]
    fn invalid_key() {
        let (pk, _) = small_instance();
        let params = SecurityParameters::new(2, 257, Some(4)).unwrap();
        let mut rng = rng_from_seed_phrase("key");

        assert!(matches!(
            encrypt(0, &pk, &params, &mut rng),
            Err(LweError::InvalidKey(_))
        ));
    }

    /// Ensures that malformed blinding vectors are rejected.
    #[test]
    fn invalid_blinding() {
        let (pk, params) = small_instance();

        assert!(matches!(
            encrypt_with_blinding(0, &pk, &params, &[1, 0]),
            Err(LweError::InvalidKey(_))
        ));
        assert!(matches!(
            encrypt_with_blinding(0, &pk, &params, &[1, 2, 0]),
            Err(LweError::InvalidKey(_))
        ));
    }

    /// Checks shape and range of ciphers and that two encryptions of the
    /// same bit differ.
    #[test]
    fn fresh_randomness() {
        let params = SecurityParameters::default();
        let mut rng = rng_from_seed_phrase("fresh");
        let (_, pk) = generate_with_params(&params, &mut rng);

        let cipher_0 = encrypt(1, &pk, &params, &mut rng).unwrap();
        let cipher_1 = encrypt(1, &pk, &params, &mut rng).unwrap();

        assert_eq!(params.n(), cipher_0.u().len());
        assert!(cipher_0.u().iter().all(|&x| x < 257));
        assert!(cipher_0.v() < 257);
        assert_ne!(cipher_0, cipher_1);
    }
}
