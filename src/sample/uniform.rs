// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains functions to sample vectors and matrices whose
//! entries are chosen uniformly at random and independently from an interval.

use crate::utils::modular::Modulus;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Samples a vector of length `len` with entries uniform in `[0, q)`.
///
/// Parameters:
/// - `len`: specifies the length of the vector
/// - `q`: specifies the modulus, i.e. the exclusive upper bound of the entries
/// - `rng`: specifies the randomness source
///
/// # Examples
/// ```
/// use qfall_lwe::{sample::uniform::sample_uniform_vec, utils::modular::Modulus};
/// use rand::thread_rng;
///
/// let vec = sample_uniform_vec(10, &Modulus::new(257).unwrap(), &mut thread_rng());
///
/// assert!(vec.iter().all(|&x| x < 257));
/// ```
pub fn sample_uniform_vec<R: Rng + ?Sized>(len: usize, q: &Modulus, rng: &mut R) -> Vec<u64> {
    let distribution = Uniform::new(0, q.value());
    (0..len).map(|_| distribution.sample(rng)).collect()
}

/// Samples a row-major `num_rows × num_columns` matrix with entries uniform
/// in `[0, q)`.
pub fn sample_uniform_mat<R: Rng + ?Sized>(
    num_rows: usize,
    num_columns: usize,
    q: &Modulus,
    rng: &mut R,
) -> Vec<Vec<u64>> {
    (0..num_rows)
        .map(|_| sample_uniform_vec(num_columns, q, rng))
        .collect()
}

/// Samples a vector of length `len` with entries uniform in `{0, 1}`.
pub fn sample_binary_vec<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u64> {
    sample_bounded_vec(len, 1, rng)
}

/// Samples a vector of length `len` with entries uniform in the inclusive
/// interval `[0, bound]`.
///
/// Parameters:
/// - `len`: specifies the length of the vector
/// - `bound`: specifies the largest value that can be sampled
/// - `rng`: specifies the randomness source
///
/// # Examples
/// ```
/// use qfall_lwe::sample::uniform::sample_bounded_vec;
/// use rand::thread_rng;
///
/// let noise = sample_bounded_vec(20, 2, &mut thread_rng());
///
/// assert!(noise.iter().all(|&e| e <= 2));
/// ```
pub fn sample_bounded_vec<R: Rng + ?Sized>(len: usize, bound: u64, rng: &mut R) -> Vec<u64> {
    let distribution = Uniform::new_inclusive(0, bound);
    (0..len).map(|_| distribution.sample(rng)).collect()
}
