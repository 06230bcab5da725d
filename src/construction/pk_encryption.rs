// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module provides the trait a struct should implement if it is an
//! instance of a public key encryption scheme. Furthermore, it contains
//! cryptographic schemes implementing the `PKEncryption` trait.
//!
//! The main references are listed in the following:
//! - \[1\] Regev, Oded (2009).
//! On lattices, learning with errors, random linear codes, and cryptography.
//! In: Journal of the ACM 6.
//! <https://dl.acm.org/doi/pdf/10.1145/1568318.1568324>

pub mod lwe;
pub use lwe::Lwe;

use crate::error::LweError;
use rand::Rng;

/// Public key encryption of single bits.
///
/// Randomness is drawn from the source passed to each call, so instances
/// and keys can be shared between threads as long as every thread owns
/// its randomness source.
pub trait PKEncryption {
    type PublicKey;
    type SecretKey;
    type Cipher;

    fn gen<R: Rng + ?Sized>(&self, rng: &mut R) -> (Self::PublicKey, Self::SecretKey);
    fn enc<R: Rng + ?Sized>(
        &self,
        pk: &Self::PublicKey,
        message: impl Into<i64>,
        rng: &mut R,
    ) -> Result<Self::Cipher, LweError>;
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher) -> Result<u8, LweError>;
}
