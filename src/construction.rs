// Copyright © 2023 Niklas Siemer, Marvin Beckmann
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains cryptographic constructions.
//! A construction is build the same way:
//!
//! 1. A trait that combines the common feature, e.g.
//! [`public key encryption`](pk_encryption::PKEncryption).
//! 2. Explicit implementations of the trait, e.g.
//! [`Lwe`](pk_encryption::Lwe).

pub mod pk_encryption;
