// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the public parameters shared by key generation,
//! encryption and decryption of the [`Lwe`](super::Lwe) scheme.

use crate::{error::LweError, utils::modular::Modulus};
use serde::{Deserialize, Serialize};

/// The default largest value of an entry of the noise vector `e`.
pub const DEFAULT_ERROR_MAGNITUDE: u64 = 2;

/// This struct manages and stores the public parameters of an
/// [`Lwe`](super::Lwe) encryption instance.
///
/// Attributes:
/// - `n`: specifies the security parameter, i.e. the length of the secret
/// - `q`: specifies the modulus over which the encryption is computed
/// - `m`: specifies the number of rows of the public matrix `A`, `m >= n`
/// - `error_magnitude`: specifies the largest entry of the noise vector `e`,
///   whose entries are sampled uniformly from `[0, error_magnitude]`
///
/// Parameters can be read from a JSON configuration of the form
/// `{"n": 10, "q": 257, "m": 20, "error_magnitude": 2}`,
/// where `m` and `error_magnitude` are optional.
///
/// # Examples
/// ```
/// use qfall_lwe::construction::pk_encryption::lwe::SecurityParameters;
///
/// let params = SecurityParameters::new(10, 257, None).unwrap();
///
/// assert_eq!(20, params.m());
/// assert!(params.check_correctness().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ParameterConfig", into = "ParameterConfig")]
pub struct SecurityParameters {
    n: usize,
    q: Modulus,
    m: usize,
    error_magnitude: u64,
}

/// The shape of a parameter configuration before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterConfig {
    pub n: usize,
    pub q: u64,
    #[serde(default)]
    pub m: Option<usize>,
    #[serde(default)]
    pub error_magnitude: Option<u64>,
}

impl SecurityParameters {
    /// Instantiates a new set of [`SecurityParameters`] with
    /// `error_magnitude = 2`.
    ///
    /// **WARNING:** The parameters are not checked for correctness of the scheme.
    /// Use [`SecurityParameters::check_correctness`] for that or
    /// [`SecurityParameters::new_from_n`] to obtain correct parameters.
    ///
    /// Parameters:
    /// - `n`: specifies the length of the secret vector
    /// - `q`: specifies the modulus
    /// - `m`: specifies the number of rows of `A`, defaults to `2n`
    ///
    /// Returns [`SecurityParameters`] or an [`LweError`] if the
    /// parameters violate their domain.
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError`] of type [`InvalidParameter`](LweError::InvalidParameter)
    ///   if `n < 1`, `q < 2`, or `m < n`.
    pub fn new(n: usize, q: u64, m: Option<usize>) -> Result<Self, LweError> {
        if n < 1 {
            return Err(LweError::InvalidParameter(String::from(
                "n must be at least 1.",
            )));
        }
        let q = Modulus::new(q)?;
        let m = match m {
            Some(m) => m,
            None => n.checked_mul(2).ok_or_else(|| {
                LweError::InvalidParameter(format!("the default m = 2n overflows for n = {n}."))
            })?,
        };
        if m < n {
            return Err(LweError::InvalidParameter(format!(
                "m must be at least n, but m = {m} < n = {n}."
            )));
        }

        Ok(Self {
            n,
            q,
            m,
            error_magnitude: DEFAULT_ERROR_MAGNITUDE,
        })
    }

    /// Generates parameters for the security parameter `n` that satisfy
    /// [`SecurityParameters::check_correctness`], i.e. `m = 2n`,
    /// `error_magnitude = 2`, and the smallest `q` with `4 * m * 2 < q`.
    ///
    /// # Examples
    /// ```
    /// use qfall_lwe::construction::pk_encryption::lwe::SecurityParameters;
    ///
    /// let params = SecurityParameters::new_from_n(10).unwrap();
    ///
    /// assert_eq!(161, params.q().value());
    /// assert!(params.check_correctness().is_ok());
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError`] of type [`InvalidParameter`](LweError::InvalidParameter)
    ///   if `n < 1` or the resulting `q` does not fit into a [`u64`].
    pub fn new_from_n(n: usize) -> Result<Self, LweError> {
        let q = (n as u128)
            .checked_mul(8 * DEFAULT_ERROR_MAGNITUDE as u128)
            .and_then(|bound| u64::try_from(bound + 1).ok())
            .ok_or_else(|| {
                LweError::InvalidParameter(format!("no modulus fits into 64 bits for n = {n}."))
            })?;

        Self::new(n, q, None)
    }

    /// Reads and validates parameters from a JSON configuration.
    ///
    /// # Examples
    /// ```
    /// use qfall_lwe::construction::pk_encryption::lwe::SecurityParameters;
    ///
    /// let params = SecurityParameters::from_json(r#"{"n": 10, "q": 257}"#).unwrap();
    ///
    /// assert_eq!(SecurityParameters::default(), params);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError`] of type [`Config`](LweError::Config)
    ///   if `json` is not a valid configuration.
    /// - Returns a [`LweError`] of type [`InvalidParameter`](LweError::InvalidParameter)
    ///   if the configured values violate their domain.
    pub fn from_json(json: &str) -> Result<Self, LweError> {
        let config: ParameterConfig = serde_json::from_str(json)?;
        Self::try_from(config)
    }

    /// Replaces the largest entry of the noise vector `e` by `error_magnitude`.
    pub fn with_error_magnitude(mut self, error_magnitude: u64) -> Self {
        self.error_magnitude = error_magnitude;
        self
    }

    /// Returns the length `n` of the secret vector.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the modulus `q`.
    pub fn q(&self) -> Modulus {
        self.q
    }

    /// Returns the number `m` of rows of `A`.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Returns the largest entry of the noise vector `e`.
    pub fn error_magnitude(&self) -> u64 {
        self.error_magnitude
    }

    /// Returns the worst-case accumulated noise `r · e <= m * error_magnitude`
    /// of a cipher, as the blinding vector `r` is binary.
    pub fn max_noise(&self) -> u128 {
        (self.m as u128).saturating_mul(self.error_magnitude as u128)
    }

    /// Returns the decryption margin `q/4`. Ciphers whose accumulated noise
    /// stays below this value always decrypt correctly.
    pub fn decryption_margin(&self) -> f64 {
        self.q.value() as f64 / 4.0
    }

    /// Checks whether `4 * m * error_magnitude < q`, i.e. whether every
    /// cipher decrypts correctly regardless of the sampled noise.
    ///
    /// The decryptor never performs this check itself.
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError`] of type [`InvalidParameter`](LweError::InvalidParameter)
    ///   if the worst-case noise reaches the decryption margin.
    pub fn check_correctness(&self) -> Result<(), LweError> {
        let worst_case = self.max_noise().saturating_mul(4);
        if worst_case >= self.q.value() as u128 {
            return Err(LweError::InvalidParameter(format!(
                "Correctness is not guaranteed as 4 * m * error_magnitude = {} >= q = {}, \
                but 4 * m * error_magnitude < q is required.",
                worst_case, self.q
            )));
        }

        Ok(())
    }
}

impl Default for SecurityParameters {
    /// Initializes [`SecurityParameters`] with `n = 10`, `q = 257`, `m = 20`,
    /// and `error_magnitude = 2`. This parameter choice is far from secure,
    /// but every cipher decrypts correctly.
    fn default() -> Self {
        Self {
            n: 10,
            q: Modulus::new(257).expect("257 is a valid modulus"),
            m: 20,
            error_magnitude: DEFAULT_ERROR_MAGNITUDE,
        }
    }
}

impl TryFrom<ParameterConfig> for SecurityParameters {
    type Error = LweError;

    fn try_from(config: ParameterConfig) -> Result<Self, Self::Error> {
        let params = Self::new(config.n, config.q, config.m)?;
        Ok(match config.error_magnitude {
            Some(error_magnitude) => params.with_error_magnitude(error_magnitude),
            None => params,
        })
    }
}

impl From<SecurityParameters> for ParameterConfig {
    fn from(params: SecurityParameters) -> Self {
        Self {
            n: params.n,
            q: params.q.value(),
            m: Some(params.m),
            error_magnitude: Some(params.error_magnitude),
        }
    }
}
