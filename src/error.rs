// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the error type [`LweError`] returned by every fallible
//! function of this crate.
//!
//! Note that an incorrect decryption caused by a noise realisation exceeding
//! the decryption margin is *not* an error. The decryptor silently outputs
//! the wrong bit in that case.

use thiserror::Error;

/// [`LweError`] defines the errors that can occur when instantiating
/// parameters, generating keys, encrypting, or decrypting.
///
/// Possible entries:
/// - `InvalidParameter`: `n`, `q`, `m`, or the error magnitude violate their domain
/// - `InvalidMessage`: the message to encrypt is neither `0` nor `1`
/// - `InvalidKey`: the dimensions of a key, cipher, or blinding vector do
///   not match the public parameters
/// - `Config`: a parameter configuration could not be parsed
///
/// # Examples
/// ```
/// use qfall_lwe::{construction::pk_encryption::lwe::generate, error::LweError};
/// use rand::thread_rng;
///
/// let res = generate(0, 257, None, &mut thread_rng());
///
/// assert!(matches!(res, Err(LweError::InvalidParameter(_))));
/// ```
#[derive(Error, Debug)]
pub enum LweError {
    /// Error that occurs if a public parameter violates its domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Error that occurs if a message is not a single bit.
    #[error("message {0} is not a bit, expected 0 or 1")]
    InvalidMessage(i64),
    /// Error that occurs if the dimensions of a key or cipher do not fit.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Error that occurs if a parameter configuration is malformed.
    #[error("malformed parameter configuration: {0}")]
    Config(#[from] serde_json::Error),
}
