//! Headless effect-to-PNG render command

use super::{build_stage, orbit_event};
use anyhow::{Context, Result};
use wisp_render::SoftCanvas;

pub struct RenderArgs {
    pub effect: String,
    pub output: String,
    pub frames: u64,
    pub width: u32,
    pub height: u32,
    pub orbit: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let mut stage = build_stage(&args.effect, args.width, args.height)?;
    let mut canvas = SoftCanvas::new(args.width, args.height);

    if args.orbit {
        for frame in 0..args.frames {
            let event = orbit_event(&stage, frame);
            stage.push_event(event);
            stage.tick(&mut canvas);
        }
    } else {
        stage.run_frames(&mut canvas, args.frames, false);
    }

    canvas
        .to_image()
        .save(&args.output)
        .with_context(|| format!("failed to write '{}'", args.output))?;

    println!(
        "[render] wrote {} ({}x{}, {} frame(s), {} particle(s) live)",
        args.output,
        args.width,
        args.height,
        stage.frame(),
        stage.total_population()
    );

    Ok(())
}
