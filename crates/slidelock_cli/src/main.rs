//! Slidelock CLI
//!
//! Validate control configs and replay drags against a headless control.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slidelock_core::{event_types, DrawCommand, Event, RecordingContext};
use slidelock_widget::{
    CallbackListener, MeasureSpec, SlideState, SlideUnlock, SlideUnlockConfig, ThumbContent,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Upper bound on simulated frames after release
const MAX_FRAMES: usize = 10_000;

#[derive(Parser)]
#[command(name = "slidelock")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Slide-to-unlock control driver", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a drag and report the outcome
    Simulate {
        /// Control config (TOML); a text thumb is used when omitted
        config: Option<PathBuf>,

        /// Control width (default 300)
        #[arg(long)]
        width: Option<f32>,

        /// Control height (default 60)
        #[arg(long)]
        height: Option<f32>,

        /// Pointer x at release, in control coordinates
        #[arg(long, default_value = "1000")]
        to: f32,

        /// Number of pointer moves between press and release
        #[arg(long, default_value = "10")]
        steps: u32,

        /// End the drag with a cancel instead of a release
        #[arg(long)]
        cancel: bool,

        /// Print the draw commands of the final frame
        #[arg(long)]
        draw: bool,

        /// Frame interval for the spring-back
        #[arg(long, default_value = "16")]
        frame_ms: f32,
    },

    /// Load and validate a control config
    Check {
        /// Control config (TOML)
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            config,
            width,
            height,
            to,
            steps,
            cancel,
            draw,
            frame_ms,
        } => cmd_simulate(SimulateArgs {
            config,
            width,
            height,
            to,
            steps,
            cancel,
            draw,
            frame_ms,
        }),

        Commands::Check { config } => cmd_check(&config),
    }
}

struct SimulateArgs {
    config: Option<PathBuf>,
    width: Option<f32>,
    height: Option<f32>,
    to: f32,
    steps: u32,
    cancel: bool,
    draw: bool,
    frame_ms: f32,
}

fn load_config(path: Option<&Path>) -> Result<SlideUnlockConfig> {
    match path {
        Some(path) => SlideUnlockConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(SlideUnlockConfig::new()
            .thumb_text(">")
            .hint_text("Slide to unlock")),
    }
}

fn spec(value: Option<f32>) -> MeasureSpec {
    value.map_or(MeasureSpec::Unspecified, MeasureSpec::Exactly)
}

fn cmd_simulate(args: SimulateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let outcome: Arc<Mutex<Option<bool>>> = Arc::new(Mutex::new(None));
    let sink = outcome.clone();
    let listener = CallbackListener::new()
        .on_result(move |unlocked| {
            if let Ok(mut slot) = sink.lock() {
                *slot = Some(unlocked);
            }
        })
        .on_progress(|progress| tracing::debug!(progress, "progress"));

    let mut control = SlideUnlock::new(config)?;
    control.set_listener(Box::new(listener));

    let size = control.measure(spec(args.width), spec(args.height));
    control.on_size_changed(size);
    info!("Control measured at {}x{}", size.width, size.height);

    let start = control.geometry().thumb_rect.center();
    let press = Event::pointer(event_types::POINTER_DOWN, start.x, start.y);
    if !control.handle_event(&press).is_handled() {
        anyhow::bail!("press at ({}, {}) missed the thumb", start.x, start.y);
    }

    let steps = args.steps.max(1);
    for i in 1..=steps {
        let x = start.x + (args.to - start.x) * i as f32 / steps as f32;
        control.handle_event(&Event::pointer(event_types::POINTER_MOVE, x, start.y));
        println!(
            "move {:>3}  x = {:>8.2}  left = {:>8.2}  progress = {:.3}",
            i,
            x,
            control.thumb_left(),
            control.progress()
        );
    }

    let end = if args.cancel {
        event_types::POINTER_CANCEL
    } else {
        event_types::POINTER_UP
    };
    control.handle_event(&Event::pointer(end, args.to, start.y));

    let mut frames = 0;
    while control.state() == SlideState::Springing && frames < MAX_FRAMES {
        control.tick(args.frame_ms);
        frames += 1;
    }
    if control.state() == SlideState::Springing {
        warn!("spring-back still running after {} frames", frames);
    } else if frames > 0 {
        info!("Spring-back settled after {} frames", frames);
    }

    let unlocked = outcome.lock().ok().and_then(|slot| *slot);
    match unlocked {
        Some(true) => println!("outcome: unlocked"),
        Some(false) => println!("outcome: rolled back"),
        None => println!("outcome: none"),
    }
    println!(
        "state: {:?}  left = {:.2}  progress = {:.3}",
        control.state(),
        control.thumb_left(),
        control.progress()
    );

    if args.draw {
        let mut ctx = RecordingContext::new();
        control.draw(&mut ctx)?;
        for command in ctx.commands() {
            print_command(command);
        }
    }

    Ok(())
}

fn print_command(command: &DrawCommand) {
    match command {
        DrawCommand::FillPath { path, .. } => {
            let bounds = path.bounds();
            println!(
                "fill   ({:.1}, {:.1}) {:.1}x{:.1}",
                bounds.x(),
                bounds.y(),
                bounds.width(),
                bounds.height()
            );
        }
        DrawCommand::Text {
            text, origin, style, ..
        } => {
            println!(
                "text   {:?} at ({:.1}, {:.1}) size {:.1}",
                text, origin.x, origin.y, style.size
            );
        }
        DrawCommand::Image { image, dest, .. } => {
            println!(
                "image  #{} ({:.1}, {:.1}) {:.1}x{:.1}",
                image.raw(),
                dest.x(),
                dest.y(),
                dest.width(),
                dest.height()
            );
        }
    }
}

fn cmd_check(path: &Path) -> Result<()> {
    info!("Checking {}", path.display());

    let config = SlideUnlockConfig::from_toml_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    // Construction decodes the icon as well as validating
    SlideUnlock::new(config.clone())?;

    match config.thumb_content {
        ThumbContent::Icon => info!("Thumb content: icon"),
        ThumbContent::Text => info!("Thumb content: text {:?}", config.thumb_text),
    }
    if config.shine_effect && config.hint_text.is_empty() {
        warn!("shine_effect is enabled but hint_text is empty");
    }

    info!("Config OK");
    Ok(())
}
