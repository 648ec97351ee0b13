use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;

use commands::DemoKind;

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Planar hulls, triangle strips and slice-band meshes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a points file
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Triangle strips over a triangles file
    Strips {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Minimum-area bands between consecutive slices
    Band {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Only the pair starting at this slice (0 = top)
        #[arg(long)]
        pair: Option<usize>,
        /// The file lists the top slice first
        #[arg(long)]
        top_first: bool,
        /// Log the DP table of each pair
        #[arg(long)]
        table: bool,
    },
    /// Run one algorithm on generated input
    Demo {
        #[arg(long, value_enum)]
        kind: DemoKind,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 32)]
        size: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let res = run(cmd.action);
    if let Err(err) = &res {
        if let Some(strata::Error::Malformed(diags)) = err.downcast_ref::<strata::Error>() {
            for d in diags {
                eprintln!("{d}");
            }
        }
    }
    res
}

fn run(action: Action) -> Result<()> {
    match action {
        Action::Hull { input, out } => {
            tracing::info!(input = %input.display(), out = %out.display(), "hull");
            commands::hull(&input, &out).map(drop)
        }
        Action::Strips { input, out } => {
            tracing::info!(input = %input.display(), out = %out.display(), "strips");
            commands::strips(&input, &out).map(drop)
        }
        Action::Band {
            input,
            out,
            pair,
            top_first,
            table,
        } => {
            tracing::info!(input = %input.display(), out = %out.display(), ?pair, top_first, table, "band");
            commands::band(&input, &out, pair, top_first, table).map(drop)
        }
        Action::Demo {
            kind,
            seed,
            size,
            out,
        } => {
            tracing::info!(?kind, seed, size, out = %out.display(), "demo");
            commands::demo(kind, seed, size, &out)
        }
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&provenance::report_block())?);
            Ok(())
        }
    }
}
