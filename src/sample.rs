// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains anything that should be samplable for the LWE
//! encryption scheme, i.e. uniform vectors and matrices over `Z_q`,
//! binary blinding vectors, and bounded noise vectors.
//!
//! Every sampling function draws from a randomness source provided by the
//! caller, so tests can inject seeded generators and concurrent callers
//! each own their generator.

pub mod seed;
pub mod uniform;
