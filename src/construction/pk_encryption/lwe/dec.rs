// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the decryption of the [`Lwe`](super::Lwe) scheme.

use super::{Ciphertext, SecretKey};
use crate::{error::LweError, utils::modular::Modulus};
use tracing::trace;

/// Decrypts the provided `cipher` using the secret key `sk` by following these steps:
/// - d = v - u^t * s
/// - if d is closer to ⌊q/2⌋ than to 0, output 1. Otherwise, output 0.
///
/// Algebraically, `d = r^t * e + message * ⌊q/2⌋`. If the accumulated
/// noise `r^t * e` reaches the decryption margin `q/4`, the output may be the
/// wrong bit. This is not reported, see
/// [`SecurityParameters::check_correctness`](super::SecurityParameters::check_correctness).
///
/// Parameters:
/// - `cipher`: specifies the cipher `(u, v)`
/// - `sk`: specifies the secret key `sk = s`
/// - `q`: specifies the modulus
///
/// Returns the decrypted bit or an [`LweError`] if `u` and `s` differ in length.
///
/// # Examples
/// ```
/// use qfall_lwe::construction::pk_encryption::lwe::{decrypt, encrypt, generate_with_params, SecurityParameters};
/// use rand::thread_rng;
/// let params = SecurityParameters::default();
/// let (sk, pk) = generate_with_params(&params, &mut thread_rng());
/// let cipher = encrypt(1, &pk, &params, &mut thread_rng()).unwrap();
///
/// let m = decrypt(&cipher, &sk, &params.q()).unwrap();
///
/// assert_eq!(1, m);
/// ```
///
/// # Errors and Failures
/// - Returns a [`LweError`] of type [`InvalidKey`](LweError::InvalidKey)
///   if the length of `u` differs from the length of `s`.
pub fn decrypt(cipher: &Ciphertext, sk: &SecretKey, q: &Modulus) -> Result<u8, LweError> {
    if cipher.u().len() != sk.dimension() {
        return Err(LweError::InvalidKey(format!(
            "u has length {}, but the secret key has length {}.",
            cipher.u().len(),
            sk.dimension()
        )));
    }

    // d = v - u^t * s
    let d = q.sub(cipher.v(), q.dot(cipher.u(), sk.as_slice()));

    trace!(n = sk.dimension(), "decrypted cipher");

    Ok(decode(d, q))
}

/// Maps `d ∈ Z_q` to `0` if `d < q/4` or `d > 3q/4`, and to `1` if
/// `q/4 <= d <= 3q/4`. Both boundaries belong to the interval of `1`.
///
/// The comparisons are evaluated exactly as `4d < q` and `4d > 3q`.
///
/// # Examples
/// ```
/// use qfall_lwe::{construction::pk_encryption::lwe::decode, utils::modular::Modulus};
/// let q = Modulus::new(256).unwrap();
///
/// assert_eq!(0, decode(63, &q));
/// assert_eq!(1, decode(64, &q));
/// assert_eq!(1, decode(192, &q));
/// assert_eq!(0, decode(193, &q));
/// ```
pub fn decode(d: u64, q: &Modulus) -> u8 {
    let d = q.reduce(d as u128) as u128;
    let q = q.value() as u128;

    if 4 * d < q || 4 * d > 3 * q {
        0
    } else {
        1
    }
}
