mod classify;
mod manifest;
mod output;
mod query;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "bapi")]
#[command(about = "Terminal-first manifest builder and search for the Blender Python API reference")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a reference directory and write the manifest
    Build {
        /// Path to the Blender Python reference html directory
        #[arg(long)]
        doc_root: PathBuf,

        /// Output JSON path
        #[arg(long)]
        out: PathBuf,
    },
    /// Search a manifest for files, titles, and anchors
    Query {
        /// Path to a manifest written by `bapi build`
        #[arg(long)]
        manifest: PathBuf,

        /// Substring to search in ids/files/titles
        #[arg(long)]
        q: String,

        /// Maximum rows to print
        #[arg(long, default_value_t = 25)]
        limit: usize,

        /// When to color output
        #[arg(long, value_enum, default_value = "auto")]
        color: ColorArg,
    },
    /// Show statistics for an existing manifest
    Stats {
        /// Path to a manifest written by `bapi build`
        #[arg(long)]
        manifest: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { doc_root, out } => {
            let manifest = manifest::build::build_manifest_with_progress(&doc_root, false)?;
            manifest::write_manifest(&manifest, &out)?;
            println!("Wrote manifest: {}", out.display());
            println!("Scanned pages: {}", manifest.pages_scanned);
        }
        Commands::Query {
            manifest,
            q,
            limit,
            color,
        } => {
            let manifest = manifest::load_manifest(&manifest)?;
            let results = query::search(&manifest, &q, limit);
            output::print_results(&results, color.into())?;
        }
        Commands::Stats { manifest } => {
            manifest::stats::show_stats(&manifest)?;
        }
    }

    Ok(())
}
