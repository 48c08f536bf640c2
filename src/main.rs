use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use clap::Parser;
use perching_boids::{
    Flock, FlockConfig, FrameRecorder, InputEvent, ScriptedInput, SimRng, Simulation,
};

mod resources;
mod systems;

use resources::*;
use systems::*;

#[derive(Parser, Debug)]
#[command(version, about = "Flocking simulation with perching boids")]
struct Cli {
    /// JSON file with flock parameters; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of boids.
    #[arg(long)]
    boids: Option<usize>,

    /// Seed for headings, perch timers and colours.
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window and print a JSON summary.
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Initial homing target in viewport coordinates.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    target: Option<Vec<i32>>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    dump_config: bool,
}

impl Cli {
    fn flock_config(&self) -> Result<FlockConfig> {
        let mut config = match &self.config {
            Some(path) => FlockConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => FlockConfig::default(),
        };
        if let Some(boids) = self.boids {
            config.boid_count = boids;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }

    fn target_click(&self) -> Result<Option<InputEvent>> {
        match self.target.as_deref() {
            None => Ok(None),
            Some(&[x, y]) => Ok(Some(InputEvent::LeftClick { x, y })),
            Some(other) => bail!("--target takes two values, got {}", other.len()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.flock_config()?;

    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut rng = SimRng::seeded(config.seed);
    let sim = Simulation::new(Flock::new(config.clone(), &mut rng)?);
    // A --target behaves like a click before the first frame.
    let initial_events: Vec<InputEvent> = cli.target_click()?.into_iter().collect();

    if cli.headless {
        run_headless(sim, initial_events, cli.frames)
    } else {
        run_windowed(sim, initial_events, &config)
    }
}

fn run_headless(mut sim: Simulation, initial_events: Vec<InputEvent>, frames: u64) -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut input = ScriptedInput::new(initial_events.into_iter().map(|e| (0, e)).collect());
    let mut renderer = FrameRecorder::new();
    let ran = sim.run(frames, &mut input, &mut renderer);
    log::info!("headless run finished after {ran} frames");

    println!("{}", serde_json::to_string_pretty(&sim.summary())?);
    Ok(())
}

fn run_windowed(
    sim: Simulation,
    initial_events: Vec<InputEvent>,
    config: &FlockConfig,
) -> Result<()> {
    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Flocking Simulation".into(),
                resolution: WindowResolution::new(config.width, config.height),
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..default()
            }),
            // Closing goes through the simulation's input handling.
            close_when_requested: false,
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(FlockSim(sim))
        .insert_resource(Viewport {
            width: config.width,
            height: config.height,
        })
        .insert_resource(DebugMode(false))
        .insert_resource(PendingInput(initial_events.into()))
        .init_resource::<FrameDraws>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                (collect_input, step_simulation, apply_poses).chain(),
                toggle_debug_mode,
                draw_debug_overlay.after(step_simulation),
            ),
        )
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("bevy app exited with code {code}"),
    }
}
