//! Headless simulation command with population reporting

use super::{build_stage, orbit_event};
use anyhow::{bail, Result};
use serde::Serialize;
use std::time::{Duration, Instant};
use wisp_render::SoftCanvas;

pub struct SimulateArgs {
    pub effect: String,
    pub frames: u64,
    pub width: u32,
    pub height: u32,
    pub orbit: bool,
    pub realtime: bool,
    pub report_every: u64,
    pub format: String,
}

#[derive(Serialize)]
struct SystemReport {
    name: String,
    population: usize,
}

#[derive(Serialize)]
struct SimulationReport {
    effect: String,
    frames: u64,
    elapsed_seconds: f64,
    total_population: usize,
    pointer: [f64; 2],
    systems: Vec<SystemReport>,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    if args.format != "text" && args.format != "json" {
        bail!(
            "unknown format '{}'; valid values: text, json",
            args.format
        );
    }

    let mut stage = build_stage(&args.effect, args.width, args.height)?;
    let mut canvas = SoftCanvas::new(args.width, args.height);

    let budget = Duration::from_secs_f64(1.0 / 60.0);
    for frame in 0..args.frames {
        let started = Instant::now();

        if args.orbit {
            let event = orbit_event(&stage, frame);
            stage.push_event(event);
        }
        stage.tick(&mut canvas);

        if args.format == "text"
            && args.report_every > 0
            && stage.frame() % args.report_every == 0
        {
            println!(
                "[stage] frame {:>6}  population {:>6}",
                stage.frame(),
                stage.total_population()
            );
        }

        if args.realtime {
            let used = started.elapsed();
            if used < budget {
                std::thread::sleep(budget - used);
            }
        }
    }

    let report = SimulationReport {
        effect: args.effect,
        frames: stage.frame(),
        elapsed_seconds: stage.elapsed(),
        total_population: stage.total_population(),
        pointer: stage.pointer().to_array(),
        systems: stage
            .systems()
            .map(|s| SystemReport {
                name: s.name().to_string(),
                population: s.population(),
            })
            .collect(),
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => println!(
            "[stage] done: {} frames, {} particle(s) live across {} system(s)",
            report.frames,
            report.total_population,
            report.systems.len()
        ),
    }

    Ok(())
}
