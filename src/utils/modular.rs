// Copyright © 2023 Marvin Beckmann
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains [`Modulus`], the single place where arithmetic
//! over `Z_q` is performed.
//!
//! Every value returned by a function of this module is a canonical
//! representative in `[0, q)`. Intermediate results are held in [`u128`],
//! which fits any product of two [`u64`] values plus one further residue.

use crate::error::LweError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A modulus `q >= 2` together with the modular operations used by key
/// generation, encryption and decryption.
///
/// # Examples
/// ```
/// use qfall_lwe::utils::modular::Modulus;
///
/// let q = Modulus::new(257).unwrap();
///
/// assert_eq!(1, q.add(200, 58));
/// assert_eq!(250, q.sub(3, 10));
/// assert_eq!(128, q.half());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Modulus(u64);

impl Modulus {
    /// Instantiates a new [`Modulus`].
    ///
    /// Parameters:
    /// - `q`: specifies the modulus
    ///
    /// Returns a [`Modulus`] or an [`LweError`] if `q < 2`.
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError`] of type [`InvalidParameter`](LweError::InvalidParameter)
    ///   if `q < 2`.
    pub fn new(q: u64) -> Result<Self, LweError> {
        if q < 2 {
            return Err(LweError::InvalidParameter(format!(
                "the modulus q must be at least 2, but q = {q} was provided"
            )));
        }
        Ok(Self(q))
    }

    /// Returns the value `q` of this modulus.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns `⌊q/2⌋`, the encoding of the message bit `1`.
    pub fn half(&self) -> u64 {
        self.0 / 2
    }

    /// Reduces an arbitrary unsigned value into `[0, q)`.
    pub fn reduce(&self, value: u128) -> u64 {
        // the remainder is smaller than q, hence it fits into a u64
        (value % self.0 as u128) as u64
    }

    /// Reduces an arbitrary signed value into `[0, q)`.
    ///
    /// # Examples
    /// ```
    /// use qfall_lwe::utils::modular::Modulus;
    /// let q = Modulus::new(7).unwrap();
    ///
    /// assert_eq!(4, q.reduce_signed(-3));
    /// ```
    pub fn reduce_signed(&self, value: i128) -> u64 {
        value.rem_euclid(self.0 as i128) as u64
    }

    /// Computes `a + b mod q`.
    pub fn add(&self, a: u64, b: u64) -> u64 {
        self.reduce(a as u128 + b as u128)
    }

    /// Computes `a - b mod q` and returns its representative in `[0, q)`.
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let a = self.reduce(a as u128);
        let b = self.reduce(b as u128);
        if a >= b {
            a - b
        } else {
            // a < b < q, hence q - (b - a) is in (0, q)
            self.0 - (b - a)
        }
    }

    /// Computes `acc + a * b mod q`.
    ///
    /// `acc` is reduced first, so the sum stays below `2^128`.
    pub fn mul_add(&self, acc: u64, a: u64, b: u64) -> u64 {
        let acc = self.reduce(acc as u128) as u128;
        self.reduce(acc + a as u128 * b as u128)
    }

    /// Computes the inner product `lhs · rhs mod q`.
    ///
    /// Both slices are expected to be of equal length. Callers check
    /// dimensions before, so a mismatch is a bug inside this crate.
    pub fn dot(&self, lhs: &[u64], rhs: &[u64]) -> u64 {
        debug_assert_eq!(lhs.len(), rhs.len());
        lhs.iter()
            .zip(rhs)
            .fold(0, |acc, (&a, &b)| self.mul_add(acc, a, b))
    }

    /// Computes the matrix-vector product `A · x mod q` for a row-major `A`.
    ///
    /// # Examples
    /// ```
    /// use qfall_lwe::utils::modular::Modulus;
    /// let q = Modulus::new(5).unwrap();
    /// let mat_a = vec![vec![1, 2], vec![3, 4]];
    ///
    /// assert_eq!(vec![0, 1], q.mat_vec(&mat_a, &[1, 2]));
    /// ```
    pub fn mat_vec(&self, mat: &[Vec<u64>], vec: &[u64]) -> Vec<u64> {
        mat.iter().map(|row| self.dot(row, vec)).collect()
    }

    /// Computes the vector-matrix product `xᵀ · A mod q` for a row-major
    /// `A` with `num_columns` columns.
    ///
    /// # Examples
    /// ```
    /// use qfall_lwe::utils::modular::Modulus;
    /// let q = Modulus::new(5).unwrap();
    /// let mat_a = vec![vec![1, 2], vec![3, 4]];
    ///
    /// assert_eq!(vec![2, 0], q.vec_mat(&[1, 2], &mat_a, 2));
    /// ```
    pub fn vec_mat(&self, vec: &[u64], mat: &[Vec<u64>], num_columns: usize) -> Vec<u64> {
        debug_assert_eq!(vec.len(), mat.len());
        let mut out = vec![0; num_columns];
        for (&x, row) in vec.iter().zip(mat) {
            debug_assert_eq!(row.len(), num_columns);
            for (entry, &a) in out.iter_mut().zip(row) {
                *entry = self.mul_add(*entry, x, a);
            }
        }
        out
    }
}

impl TryFrom<u64> for Modulus {
    type Error = LweError;

    fn try_from(q: u64) -> Result<Self, Self::Error> {
        Self::new(q)
    }
}

impl From<Modulus> for u64 {
    fn from(q: Modulus) -> Self {
        q.0
    }
}

impl Display for Modulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test_modulus {
    use super::Modulus;

    /// Ensures that moduli smaller than 2 are rejected.
    #[test]
    fn invalid_modulus() {
        assert!(Modulus::new(0).is_err());
        assert!(Modulus::new(1).is_err());
        assert!(Modulus::new(2).is_ok());
    }

    /// Checks the canonical representatives of negative and large values.
    #[test]
    fn canonical_reduction() {
        let q = Modulus::new(257).unwrap();

        assert_eq!(0, q.reduce(257));
        assert_eq!(256, q.reduce_signed(-1));
        assert_eq!(0, q.reduce_signed(-257));
        assert_eq!(1, q.reduce(u64::MAX as u128 * 257 + 1));
    }

    /// Ensures that subtraction wraps into `[0, q)`.
    #[test]
    fn sub_wraps() {
        let q = Modulus::new(10).unwrap();

        assert_eq!(7, q.sub(2, 5));
        assert_eq!(0, q.sub(5, 5));
        assert_eq!(3, q.sub(15, 2));
    }

    /// Ensures that the largest possible modulus does not overflow.
    #[test]
    fn no_overflow_large_modulus() {
        let q = Modulus::new(u64::MAX).unwrap();
        let max = u64::MAX - 1;

        // (-1)^2 + (-1) = 0 mod q
        assert_eq!(0, q.mul_add(max, max, max));
        assert_eq!(max - 1, q.add(max, max));
    }

    /// Checks the products `A · x` and `xᵀ · A` on a non-square matrix.
    #[test]
    fn products_non_square() {
        let q = Modulus::new(11).unwrap();
        let mat_a = vec![vec![1, 2], vec![3, 4], vec![5, 6]];

        assert_eq!(vec![5, 0, 6], q.mat_vec(&mat_a, &[1, 2]));
        // [1, 0, 1] · A = [6, 8]
        assert_eq!(vec![6, 8], q.vec_mat(&[1, 0, 1], &mat_a, 2));
    }

    /// Ensures that moduli are (de-)serialized as plain integers and
    /// validated when deserialized.
    #[test]
    fn serde_plain_integer() {
        let q = Modulus::new(257).unwrap();

        assert_eq!("257", serde_json::to_string(&q).unwrap());
        assert_eq!(q, serde_json::from_str::<Modulus>("257").unwrap());
        assert!(serde_json::from_str::<Modulus>("1").is_err());
    }
}
