// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use snarkport_types::CurveId;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "snarkport", about = "Groth16 proofs in snarkjs JSON")]
struct Cli {
    /// Machine-readable output on stdout
    #[arg(long, global = true)]
    json: bool,
    /// JSON settings file; flags take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CircuitKind {
    /// x^3 + x + 5 == y, public y
    Cubic,
    /// x * y == z, public z
    Mul,
}

#[derive(Subcommand)]
enum Cmd {
    /// Set up and prove a demo circuit, then export snarkjs documents
    Prove {
        circuit: CircuitKind,
        /// bn128 or bls12381
        #[arg(long)]
        curve: Option<CurveId>,
        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Witness x
        #[arg(long, default_value_t = 3)]
        x: u64,
        /// Witness y (mul only)
        #[arg(long, default_value_t = 11)]
        y: u64,
        /// RNG seed for setup and proving; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decode proof.json, verification_key.json and public.json and verify them
    Check {
        #[arg(long)]
        proof: PathBuf,
        #[arg(long)]
        vk: PathBuf,
        #[arg(long)]
        public: PathBuf,
    },
    /// Compressed BLS12-381 proof for on-chain verifiers
    Compress {
        #[arg(long)]
        proof: PathBuf,
        #[arg(long)]
        public: PathBuf,
    },
    /// Detect a snarkjs document and summarize it
    Inspect {
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    let settings = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Cmd::Prove { circuit, curve, out, x, y, seed } => {
            let config = settings.export_config(curve);
            let out = out.or_else(|| settings.out_dir.clone()).unwrap_or_else(|| PathBuf::from("."));
            commands::prove::run(&config, circuit, &out, x, y, seed)?
        }
        Cmd::Check { proof, vk, public } => {
            commands::check::run(&settings.export_config(None), &proof, &vk, &public)?
        }
        Cmd::Compress { proof, public } => commands::compress::run(&proof, &public)?,
        Cmd::Inspect { file } => commands::inspect::run(&settings.export_config(None), &file)?,
    }
    Ok(())
}
