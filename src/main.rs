use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use camera_timeline::config::RigConfig;
use camera_timeline::{CameraRig, SceneClock, Shot, Viewport};
use clap::Parser;
use glam::Vec3;

/// Preview a camera rig: drive it frame by frame and print the camera cues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON file with the rig configuration (default: layered camera.ron + CAMERA_ env)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second to sample
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Seconds to run
    #[arg(long, default_value = "5")]
    seconds: f64,

    /// Time of the first frame in seconds
    #[arg(long, default_value = "0")]
    start: f64,

    /// Shot to switch to during the preview: sunset, map
    #[arg(long)]
    view: Option<String>,

    /// Time at which to switch to --view (default: first frame)
    #[arg(long)]
    switch_at: Option<f64>,

    /// Viewport width in pixels
    #[arg(long, default_value = "1280")]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value = "720")]
    height: f32,

    /// Pace frames against the wall clock instead of simulated time
    #[arg(long)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.fps == 0 {
        bail!("--fps must be greater than zero");
    }

    let config = match &args.config {
        Some(path) => RigConfig::from_file(path)?,
        None => RigConfig::load()?,
    };

    let view = args
        .view
        .as_deref()
        .map(str::parse::<Shot>)
        .transpose()
        .map_err(anyhow::Error::msg)
        .context("Invalid --view")?;

    let viewport = Viewport::new(args.width, args.height);
    let mut rig = config.build(viewport);

    log::info!(
        "Previewing {:.2}s at {} fps ({})",
        args.seconds,
        args.fps,
        if args.realtime { "realtime" } else { "simulated" }
    );

    if args.realtime {
        run_realtime(&mut rig, &args, view)
    } else {
        run_simulated(&mut rig, &args, view)
    }
}

fn run_simulated(rig: &mut CameraRig, args: &Args, mut view: Option<Shot>) -> anyhow::Result<()> {
    let frames = (args.seconds * args.fps as f64).ceil() as u64;
    let frame_time = 1.0 / args.fps as f64;

    for frame in 0..=frames {
        let now = args.start + frame as f64 * frame_time;
        switch_if_due(rig, args, &mut view, now)?;
        print_frame(now, rig.update(now));
    }
    Ok(())
}

fn run_realtime(rig: &mut CameraRig, args: &Args, mut view: Option<Shot>) -> anyhow::Result<()> {
    let clock = SceneClock::new();
    let frame_time = Duration::from_secs_f64(1.0 / args.fps as f64);

    loop {
        let now = args.start + clock.seconds();
        if now > args.start + args.seconds {
            break;
        }
        switch_if_due(rig, args, &mut view, now)?;
        print_frame(now, rig.update(now));
        thread::sleep(frame_time);
    }
    Ok(())
}

/// Simulate the UI button press once its time has come.
fn switch_if_due(rig: &mut CameraRig, args: &Args, view: &mut Option<Shot>, now: f64) -> anyhow::Result<()> {
    let due = args.switch_at.unwrap_or(args.start);
    if let Some(shot) = view.filter(|_| now >= due) {
        rig.view(shot).with_context(|| format!("Failed to switch to {} view", shot))?;
        *view = None;
    }
    Ok(())
}

fn print_frame(now: f64, frame: camera_timeline::RigFrame) {
    println!(
        "{:>9.3}  pos {}  look {}",
        now,
        format_point(frame.position),
        format_point(frame.look_at)
    );
}

fn format_point(point: Option<Vec3>) -> String {
    match point {
        Some(p) => format!("({:>8.4}, {:>8.4}, {:>8.4})", p.x, p.y, p.z),
        None => format!("{:^30}", "-"),
    }
}
