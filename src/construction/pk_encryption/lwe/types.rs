// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the keys and ciphers of the [`Lwe`](super::Lwe) scheme.
//! All of them are immutable once created.

use super::SecurityParameters;
use crate::error::LweError;

/// The secret vector `s` of length `n` with entries in `[0, q)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretKey {
    vec_s: Vec<u64>,
}

impl SecretKey {
    /// Wraps the secret vector `s`.
    pub fn new(vec_s: Vec<u64>) -> Self {
        Self { vec_s }
    }

    /// Returns the entries of `s`.
    pub fn as_slice(&self) -> &[u64] {
        &self.vec_s
    }

    /// Returns the length `n` of `s`.
    pub fn dimension(&self) -> usize {
        self.vec_s.len()
    }
}

/// The public key `(A, b)` with `A ∈ Z_q^{m x n}` stored row by row and
/// `b = A * s + e ∈ Z_q^m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    mat_a: Vec<Vec<u64>>,
    vec_b: Vec<u64>,
}

impl PublicKey {
    /// Wraps the matrix `A` (row-major) and the vector `b`.
    ///
    /// The dimensions are checked against the [`SecurityParameters`]
    /// when the key is used for encryption.
    pub fn new(mat_a: Vec<Vec<u64>>, vec_b: Vec<u64>) -> Self {
        Self { mat_a, vec_b }
    }

    /// Returns the rows of `A`.
    pub fn mat_a(&self) -> &[Vec<u64>] {
        &self.mat_a
    }

    /// Returns the entries of `b`.
    pub fn vec_b(&self) -> &[u64] {
        &self.vec_b
    }

    /// Checks whether `A` is an `m x n` matrix and `b` has length `m`.
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError`] of type [`InvalidKey`](LweError::InvalidKey)
    ///   if any dimension does not match `params`.
    pub fn check_dimensions(&self, params: &SecurityParameters) -> Result<(), LweError> {
        if self.mat_a.len() != params.m() {
            return Err(LweError::InvalidKey(format!(
                "A has {} rows, but m = {} rows are required.",
                self.mat_a.len(),
                params.m()
            )));
        }
        if let Some((i, row)) = self
            .mat_a
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != params.n())
        {
            return Err(LweError::InvalidKey(format!(
                "row {i} of A has {} entries, but n = {} entries are required.",
                row.len(),
                params.n()
            )));
        }
        if self.vec_b.len() != params.m() {
            return Err(LweError::InvalidKey(format!(
                "b has length {}, but length m = {} is required.",
                self.vec_b.len(),
                params.m()
            )));
        }

        Ok(())
    }
}

/// A cipher `(u, v)` with `u ∈ Z_q^n` and `v ∈ Z_q` encrypting a single bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    vec_u: Vec<u64>,
    v: u64,
}

impl Ciphertext {
    /// Wraps the vector `u` and the scalar `v`.
    pub fn new(vec_u: Vec<u64>, v: u64) -> Self {
        Self { vec_u, v }
    }

    /// Returns the entries of `u`.
    pub fn u(&self) -> &[u64] {
        &self.vec_u
    }

    /// Returns `v`.
    pub fn v(&self) -> u64 {
        self.v
    }
}

#[cfg(test)]
mod test_check_dimensions {
    use super::{PublicKey, SecurityParameters};
    use crate::error::LweError;

    fn params() -> SecurityParameters {
        SecurityParameters::new(2, 17, Some(3)).unwrap()
    }

    /// Ensures that a key of the correct shape is accepted.
    #[test]
    fn matching() {
        let pk = PublicKey::new(vec![vec![1, 2]; 3], vec![0; 3]);

        assert!(pk.check_dimensions(&params()).is_ok());
    }

    /// Ensures that too few rows, ragged rows and a short `b` are rejected.
    #[test]
    fn mismatching() {
        let too_few_rows = PublicKey::new(vec![vec![1, 2]; 2], vec![0; 3]);
        let ragged = PublicKey::new(vec![vec![1, 2], vec![1], vec![1, 2]], vec![0; 3]);
        let short_b = PublicKey::new(vec![vec![1, 2]; 3], vec![0; 2]);

        for pk in [too_few_rows, ragged, short_b] {
            assert!(matches!(
                pk.check_dimensions(&params()),
                Err(LweError::InvalidKey(_))
            ));
        }
    }
}
