// Copyright © 2023 Phil Milewski
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains functions to instantiate reproducible randomness
//! sources, e.g. for tests or demonstration runs that should be replayable.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

/// Derives a [`ChaCha20Rng`] whose seed is the SHA-256 digest of `phrase`.
///
/// Equal phrases always yield generators with equal output streams.
///
/// # Examples
/// ```
/// use qfall_lwe::sample::seed::rng_from_seed_phrase;
/// use rand::Rng;
///
/// let mut rng_0 = rng_from_seed_phrase("lwe");
/// let mut rng_1 = rng_from_seed_phrase("lwe");
///
/// assert_eq!(rng_0.gen::<u64>(), rng_1.gen::<u64>());
/// ```
pub fn rng_from_seed_phrase(phrase: &str) -> ChaCha20Rng {
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&Sha256::digest(phrase.as_bytes()));
    ChaCha20Rng::from_seed(seed)
}

/// Instantiates a [`ChaCha20Rng`] seeded from the operating system.
pub fn rng_from_entropy() -> ChaCha20Rng {
    ChaCha20Rng::from_entropy()
}
