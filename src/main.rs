//! Headless driver for the showroom scene.
//!
//! Runs the simulation for a fixed number of frames without a renderer,
//! scripting a short pointer session against the first two cars so the log
//! shows the hover, selection, and door machinery working. Useful for
//! profiling and for eyeballing scene state without a graphics stack.

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use showroom::{CarDescriptor, Showroom, ShowroomConfig, load_descriptors};

#[derive(Parser, Debug)]
#[command(version, about = "Headless showroom scene driver")]
struct Cli {
    /// JSON file with the display-object descriptor list.
    /// Defaults to a built-in three-car lineup.
    #[arg(long)]
    cars: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Seed for the particle RNG; omit for an entropy seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the garage door opening.
    #[arg(long)]
    open_door: bool,
}

fn builtin_descriptors() -> Vec<CarDescriptor> {
    vec![
        CarDescriptor {
            id: "car1".into(),
            label: "To-Do App".into(),
            base_color: "#FF6B6B".into(),
        },
        CarDescriptor {
            id: "car2".into(),
            label: "E-Commerce Platform".into(),
            base_color: "#4ECDC4".into(),
        },
        CarDescriptor {
            id: "car3".into(),
            label: "Weather Dashboard".into(),
            base_color: "#45B7D1".into(),
        },
    ]
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let descriptors = match &cli.cars {
        Some(path) => match load_descriptors(path) {
            Ok(list) => list,
            Err(err) => {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => builtin_descriptors(),
    };
    info!("simulating {} display objects", descriptors.len());

    let mut showroom = match Showroom::new(ShowroomConfig::default(), &descriptors, cli.seed) {
        Ok(showroom) => showroom,
        Err(err) => {
            error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.open_door {
        showroom.set_door_open(true);
    }

    let dt = 1.0 / cli.fps.max(1.0);
    let first = descriptors.first().map(|d| d.id.clone());
    let second = descriptors.get(1).map(|d| d.id.clone());

    for frame in 0..cli.frames {
        // Scripted pointer session: hover the first car, click it, move to
        // the second, then leave the surface.
        match frame {
            30 => {
                if let Some(id) = &first {
                    showroom.pointer_enter(id);
                }
            }
            90 => {
                if let Some(id) = &first {
                    showroom.pointer_click(id);
                }
            }
            120 => {
                if let Some(id) = &first {
                    showroom.pointer_exit(id);
                }
                if let Some(id) = &second {
                    showroom.pointer_enter(id);
                }
            }
            180 => showroom.pointer_lost(),
            _ => {}
        }

        showroom.tick(dt);

        for id in showroom.take_selected() {
            info!("selected: {id}");
        }
        if frame % 60 == 59 {
            info!(
                "frame {frame}: elapsed {:.2}s, door height {:.3}",
                showroom.elapsed(),
                showroom.door_height()
            );
        }
    }

    info!("done after {} frames", cli.frames);
    ExitCode::SUCCESS
}
