// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of a single-bit public key
//! encryption scheme based on Learning With Errors.
//!
//! Key generation, encryption, and decryption are stateless functions over
//! their inputs and a randomness source provided by the caller.
//! [`Lwe`] bundles them for one fixed set of [`SecurityParameters`].
//!
//! The noise is sampled uniformly from `[0, error_magnitude]` instead of
//! a discrete Gaussian and the blinding vector is binary. Hence, every
//! cipher decrypts correctly if `4 * m * error_magnitude < q`. Otherwise,
//! decryption may silently output the wrong bit.
//!
//! The main references are listed in the following:
//! - \[1\] Regev, Oded (2009).
//! On lattices, learning with errors, random linear codes, and cryptography.
//! In: Journal of the ACM 6.
//! <https://dl.acm.org/doi/pdf/10.1145/1568318.1568324>
//! - \[2\] Peikert, Chris (2016).
//! A decade of lattice cryptography.
//! In: Theoretical Computer Science 10.4.
//! <https://web.eecs.umich.edu/~cpeikert/pubs/lattice-survey.pdf>

mod dec;
mod enc;
mod key_gen;
mod params;
mod types;

pub use dec::{decode, decrypt};
pub use enc::{encrypt, encrypt_with_blinding};
pub use key_gen::{generate, generate_with_params};
pub use params::{ParameterConfig, SecurityParameters, DEFAULT_ERROR_MAGNITUDE};
pub use types::{Ciphertext, PublicKey, SecretKey};

use super::PKEncryption;
use crate::error::LweError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// This struct manages the public parameters of an [`Lwe`]
/// public key encryption instance.
///
/// # Examples
/// ```
/// use qfall_lwe::construction::pk_encryption::{Lwe, PKEncryption};
/// use rand::thread_rng;
/// let mut rng = thread_rng();
/// // setup public parameters and key pair
/// let lwe = Lwe::default();
/// let (pk, sk) = lwe.gen(&mut rng);
///
/// // encrypt a bit
/// let msg = 0; // must be a bit, i.e. msg = 0 or 1
/// let cipher = lwe.enc(&pk, msg, &mut rng).unwrap();
///
/// // decrypt
/// let m = lwe.dec(&sk, &cipher).unwrap();
///
/// assert_eq!(msg, m);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lwe {
    params: SecurityParameters,
}

impl Lwe {
    /// Instantiates an [`Lwe`] PK encryption instance with the
    /// specified parameters and error magnitude `2`.
    ///
    /// **WARNING:** The given parameters are not checked for correctness.
    /// Use [`Lwe::check_correctness`] or [`Lwe::new_from_n`] for that.
    ///
    /// # Examples
    /// ```
    /// use qfall_lwe::construction::pk_encryption::Lwe;
    ///
    /// let lwe = Lwe::new(10, 257, Some(20)).unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError`] of type [`InvalidParameter`](LweError::InvalidParameter)
    ///   if `n < 1`, `q < 2`, or `m < n`.
    pub fn new(n: usize, q: u64, m: Option<usize>) -> Result<Self, LweError> {
        Ok(Self::from(SecurityParameters::new(n, q, m)?))
    }

    /// Generates an [`Lwe`] instance whose ciphers always decrypt correctly
    /// for the security parameter `n`.
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError`] of type [`InvalidParameter`](LweError::InvalidParameter)
    ///   if `n < 1`.
    pub fn new_from_n(n: usize) -> Result<Self, LweError> {
        Ok(Self::from(SecurityParameters::new_from_n(n)?))
    }

    /// Returns the public parameters of this instance.
    pub fn params(&self) -> &SecurityParameters {
        &self.params
    }

    /// Checks whether every cipher of this instance decrypts correctly,
    /// see [`SecurityParameters::check_correctness`].
    pub fn check_correctness(&self) -> Result<(), LweError> {
        self.params.check_correctness()
    }
}

impl From<SecurityParameters> for Lwe {
    fn from(params: SecurityParameters) -> Self {
        Self { params }
    }
}

impl PKEncryption for Lwe {
    type Cipher = Ciphertext;
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;

    /// Generates a (pk, sk) pair, see [`generate_with_params`].
    fn gen<R: Rng + ?Sized>(&self, rng: &mut R) -> (Self::PublicKey, Self::SecretKey) {
        let (sk, pk) = generate_with_params(&self.params, rng);
        (pk, sk)
    }

    /// Encrypts the bit `message`, see [`encrypt`].
    fn enc<R: Rng + ?Sized>(
        &self,
        pk: &Self::PublicKey,
        message: impl Into<i64>,
        rng: &mut R,
    ) -> Result<Self::Cipher, LweError> {
        encrypt(message, pk, &self.params, rng)
    }

    /// Decrypts `cipher`, see [`decrypt`].
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher) -> Result<u8, LweError> {
        decrypt(cipher, sk, &self.params.q())
    }
}
