// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use codeguessr::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    codeguessr::run(Args::parse())
}
