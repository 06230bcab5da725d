// Copyright © 2023 Niklas Siemer
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This crate provides a reference implementation of single-bit public key
//! encryption based on Learning With Errors, together with the modular
//! arithmetic and sampling it builds on. It is meant for prototyping and
//! teaching, not for protecting data.
//!
//! Diagnostics are emitted as [`tracing`] events. No subscriber is installed
//! by this crate.

pub mod construction;
pub mod error;
pub mod sample;
pub mod utils;
