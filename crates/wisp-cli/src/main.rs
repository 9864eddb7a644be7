//! Wisp CLI - command-line interface for the wisp particle engine

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{render, simulate};

#[derive(Parser)]
#[command(name = "wisp")]
#[command(about = "Steerable soft-particle effect engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an effect headless and print population stats
    Simulate {
        /// Path to effect file
        effect: String,

        /// Number of frames to run
        #[arg(long, default_value = "300")]
        frames: u64,

        /// Surface width in pixels
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Surface height in pixels
        #[arg(long, default_value = "720")]
        height: u32,

        /// Drive the pointer along a circle to steer the controllable system
        #[arg(long)]
        orbit: bool,

        /// Pace ticks to the 60Hz frame budget instead of free-running
        #[arg(long)]
        realtime: bool,

        /// Print a progress line every K frames (0 disables)
        #[arg(long, default_value = "60")]
        report_every: u64,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run an effect headless and write the final frame as a PNG
    Render {
        /// Path to effect file
        effect: String,

        /// Output image path
        #[arg(short, long, default_value = "wisp.png")]
        output: String,

        /// Number of frames to run before the capture
        #[arg(long, default_value = "300")]
        frames: u64,

        /// Image width in pixels
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "720")]
        height: u32,

        /// Drive the pointer along a circle to steer the controllable system
        #[arg(long)]
        orbit: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            effect,
            frames,
            width,
            height,
            orbit,
            realtime,
            report_every,
            format,
        } => simulate::run(simulate::SimulateArgs {
            effect,
            frames,
            width,
            height,
            orbit,
            realtime,
            report_every,
            format,
        }),
        Commands::Render {
            effect,
            output,
            frames,
            width,
            height,
            orbit,
        } => render::run(render::RenderArgs {
            effect,
            output,
            frames,
            width,
            height,
            orbit,
        }),
    }
}
