use clap::{Parser, Subcommand};
use cli::{
    CliError, HostAction, open_frame, overlay_caption, parse_key_script, render_overlay,
    render_region_mask, skip_frame,
};
use color_eyre::eyre::Result;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};
use tracking::{Frame, FrameReport, TrackerConfig, TrackingCommand, TrackingError, TrackingSession};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track the configured color through a sequence of frames
    Track {
        /// Frame images, processed in order
        #[arg(required = true)]
        frames: Vec<PathBuf>,
        /// Path to a TOML or JSON tracker configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Comma-separated keys, one per frame (q, w, s, - or esc)
        #[arg(short, long)]
        keys: Option<String>,
        /// Directory for overlay and region-mask images
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Write the default configuration to a .toml or .json file
    InitConfig {
        path: PathBuf,
    },
    /// Print the JSON schema of the tracking commands
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries the JSON reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Track { frames, config, keys, output_dir } => {
            track(frames, config.as_deref(), keys.as_deref(), output_dir.as_deref())?;
        }
        Commands::InitConfig { path } => {
            TrackerConfig::default().to_file(path)?;
            info!("Wrote default configuration to {}", path.display());
        }
        Commands::Schema => {
            for command in TrackingCommand::iter() {
                info!("{}: {}", command, command.description());
            }
            println!("{}", serde_json::to_string_pretty(&TrackingCommand::schema())?);
        }
    }

    Ok(())
}

fn track(
    frames: &[PathBuf],
    config_path: Option<&Path>,
    keys: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<(), CliError> {
    let config = match config_path {
        Some(path) => TrackerConfig::from_file(path)?,
        None => TrackerConfig::default(),
    };
    info!("Tracker config: {:?}", config);

    let mut session = TrackingSession::from_config(&config);
    let mut actions = match keys {
        Some(script) => parse_key_script(script)?,
        None => Vec::new(),
    }
    .into_iter();

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)?;
    }

    for path in frames {
        let command = match actions.next() {
            Some(HostAction::Quit) => {
                info!("Escape received, stopping before {}", path.display());
                break;
            }
            Some(HostAction::Command(command)) => command,
            None => TrackingCommand::NoOp,
        };

        // A frame that can't be read still carries its key
        let image = match open_frame(path) {
            Ok(image) => image,
            Err(e) => {
                skip_frame(&mut session, command, path, e);
                continue;
            }
        };
        let frame = match Frame::from_rgb_image(&image) {
            Ok(frame) => frame,
            Err(e) => {
                skip_frame(&mut session, command, path, e);
                continue;
            }
        };

        let report = match session.process_frame(&frame, command) {
            Ok(report) => report,
            Err(TrackingError::InvalidFrame(reason)) => {
                // process_frame applied the command before rejecting the frame
                warn!("Skipping {}: {}", path.display(), reason);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if report.detected() {
            info!(
                "{} -> {} (color {}, min area {})",
                path.display(),
                report.label,
                report.active_color_name,
                report.min_area
            );
        } else {
            info!("{}: no {} region above {}", path.display(), report.active_color_name, report.min_area);
        }
        println!("{}", serde_json::to_string(&report)?);

        if let Some(dir) = output_dir {
            save_visuals(dir, path, &image, &report)?;
        }
    }

    info!("✅ Tracking completed!");
    Ok(())
}

fn save_visuals(
    dir: &Path,
    frame_path: &Path,
    image: &image::RgbImage,
    report: &FrameReport,
) -> Result<(), CliError> {
    let stem = frame_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");

    let overlay_path = dir.join(format!("{}_overlay.png", stem));
    render_overlay(image, report).save(&overlay_path)?;
    info!("{}: {}", overlay_path.display(), overlay_caption(report).join(" | "));
    render_region_mask(image.width(), image.height(), &report.regions)
        .save(dir.join(format!("{}_mask.png", stem)))?;
    Ok(())
}
