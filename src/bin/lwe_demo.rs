// Copyright © 2023 Sven Moog
//
// This file is part of qFALL-lwe.
//
// qFALL-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! lwe-demo: encrypts and decrypts single bits with the LWE scheme and
//! reports the observed success rate.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use qfall_lwe::construction::pk_encryption::{lwe::SecurityParameters, Lwe, PKEncryption};
use qfall_lwe::sample::seed::{rng_from_entropy, rng_from_seed_phrase};
use rand::Rng;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "lwe-demo")]
#[command(about = "Encrypt and decrypt single bits with LWE")]
#[command(version)]
struct Args {
    /// Length of the secret vector
    #[arg(long, default_value = "10")]
    n: usize,

    /// Modulus
    #[arg(long, default_value = "257")]
    q: u64,

    /// Number of rows of the public matrix (defaults to 2n)
    #[arg(long)]
    m: Option<usize>,

    /// Largest entry of the noise vector
    #[arg(long, default_value = "2")]
    error_magnitude: u64,

    /// JSON parameter file, overrides n, q, m and error-magnitude
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of random encrypt/decrypt cycles
    #[arg(long, default_value = "50")]
    trials: usize,

    /// Phrase to derive the randomness from, for reproducible runs
    #[arg(long)]
    seed: Option<String>,

    /// Log debug events of the library
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let params = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            SecurityParameters::from_json(&json)
                .wrap_err_with(|| format!("Invalid parameters in {}", path.display()))?
        }
        None => SecurityParameters::new(args.n, args.q, args.m)
            .wrap_err("Invalid parameters")?
            .with_error_magnitude(args.error_magnitude),
    };

    info!(
        "LWE parameters: n={}, q={}, m={}, error_magnitude={}",
        params.n(),
        params.q(),
        params.m(),
        params.error_magnitude()
    );
    info!(
        "Worst-case noise m * error_magnitude = {}, decryption margin q/4 = {:.2}",
        params.max_noise(),
        params.decryption_margin()
    );
    if let Err(e) = params.check_correctness() {
        warn!("{e}");
        warn!("Some decryptions may fail. Increase q or reduce m or error_magnitude.");
    }

    let mut rng = match &args.seed {
        Some(phrase) => rng_from_seed_phrase(phrase),
        None => rng_from_entropy(),
    };

    let lwe = Lwe::from(params);
    let (pk, sk) = lwe.gen(&mut rng);
    info!("Secret key s (first 5 entries): {:?}", first_entries(sk.as_slice()));
    info!("Public vector b (first 5 entries): {:?}", first_entries(pk.vec_b()));

    for msg in [0u8, 1] {
        let cipher = lwe.enc(&pk, msg, &mut rng)?;
        info!(
            "Encrypted {msg}: u (first 5 entries) = {:?}, v = {}",
            first_entries(cipher.u()),
            cipher.v()
        );
        let decrypted = lwe.dec(&sk, &cipher)?;
        info!("Decrypted {decrypted}, correct: {}", decrypted == msg);
    }

    let mut correct = 0;
    for _ in 0..args.trials {
        let msg: u8 = rng.gen_range(0..=1);
        let cipher = lwe.enc(&pk, msg, &mut rng)?;
        if lwe.dec(&sk, &cipher)? == msg {
            correct += 1;
        }
    }
    let rate = if args.trials == 0 {
        100.0
    } else {
        correct as f64 / args.trials as f64 * 100.0
    };
    info!("Success rate: {correct}/{} = {rate:.2}%", args.trials);
    if correct < args.trials {
        warn!("Some decryptions failed as the noise r^t * e reached q/4.");
    }

    Ok(())
}

fn first_entries(entries: &[u64]) -> &[u64] {
    &entries[..entries.len().min(5)]
}
