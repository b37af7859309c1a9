// src/main.rs
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use serde::Serialize;
use tracing::{info, warn};

use garden_core::{approved_flowers, load_flowers, parse_flowers, validate_unique_ids, Viewport};
use garden_layout::{bloom_timing, GardenFrame, GridJitterLayout, LayoutConfig};

#[derive(Parser)]
#[command(name = "bloom-garden")]
#[command(about = "Compute the garden layout for a set of flowers")]
struct Args {
    /// JSON array of flower records. Reads stdin when omitted or "-".
    #[arg(value_name = "FILE")]
    flowers: Option<String>,

    /// Viewport width in pixels
    #[arg(long, default_value = "1280")]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value = "800")]
    height: f32,

    /// Flower footprint in pixels. Derived from the width when omitted.
    #[arg(long)]
    flower_size: Option<f32>,

    /// Lay out over the whole viewport instead of between header and footer
    #[arg(long)]
    raw: bool,

    /// Share of a grid cell a flower may wander across
    #[arg(long, default_value = "0.7")]
    jitter: f32,

    /// Top/left margin as a multiple of the flower size
    #[arg(long, default_value = "0.5")]
    padding: f32,

    /// Do not keep the bottom corners clear
    #[arg(long)]
    no_zones: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct PlacedFlower<'a> {
    id: &'a str,
    image_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    position: Vec2,
    rotation: f32,
    scale: f32,
    bloom_delay: f32,
    bloom_duration: f32,
}

#[derive(Serialize)]
struct GardenOutput<'a> {
    viewport: Viewport,
    flower_size: f32,
    flowers: Vec<PlacedFlower<'a>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let viewport = Viewport::new(args.width, args.height)
        .validate()
        .context("Viewport must have a positive, finite size")?;

    let records = match args.flowers.as_deref() {
        None | Some("-") => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read flowers from stdin")?;
            parse_flowers(&input).context("Failed to parse flowers from stdin")?
        }
        Some(path) => {
            if !Path::new(path).exists() {
                anyhow::bail!("Flower file not found: {}", path);
            }
            info!("Loading flowers: {}", path);
            load_flowers(path).with_context(|| format!("Failed to load flowers from {}", path))?
        }
    };

    let flowers = approved_flowers(&records);
    if flowers.len() < records.len() {
        info!("Skipping {} flowers awaiting review", records.len() - flowers.len());
    }
    validate_unique_ids(&flowers).context("Flower ids must be unique")?;

    let mut frame = if args.raw {
        GardenFrame::full(viewport, GardenFrame::from_viewport(viewport).flower_size)
    } else {
        GardenFrame::from_viewport(viewport)
    };
    if let Some(size) = args.flower_size {
        if !(size.is_finite() && size > 0.0) {
            anyhow::bail!("Flower size must be positive, got {}", size);
        }
        if size > viewport.width.min(viewport.height) {
            warn!("Flower size {} exceeds the viewport; flowers will pile up at the origin", size);
        }
        frame = frame.with_flower_size(size);
    }

    if !(0.0..=1.0).contains(&args.jitter) {
        anyhow::bail!("Jitter must be between 0 and 1, got {}", args.jitter);
    }
    if !(args.padding.is_finite() && args.padding >= 0.0) {
        anyhow::bail!("Padding must be non-negative, got {}", args.padding);
    }
    let mut config = LayoutConfig::new()
        .with_jitter_fraction(args.jitter)
        .with_padding_ratio(args.padding);
    if args.no_zones {
        config = config.without_zones();
    }

    let engine = GridJitterLayout::new().with_config(config).with_debug(args.debug);
    let placements = frame.place(&engine, &flowers);
    info!(
        "Placed {} flowers in {}x{} (flower size {:.1})",
        placements.len(),
        viewport.width,
        viewport.height,
        frame.flower_size
    );

    let by_id: std::collections::HashMap<&str, &garden_core::FlowerRecord> =
        flowers.iter().map(|f| (f.id.as_str(), f)).collect();
    let placed = placements
        .iter()
        .filter_map(|placement| {
            let flower = by_id.get(placement.flower_id.as_str())?;
            let timing = bloom_timing(&flower.id);
            Some(PlacedFlower {
                id: &flower.id,
                image_url: &flower.image_url,
                message: flower.message.as_deref(),
                position: placement.position,
                rotation: placement.rotation,
                scale: placement.scale,
                bloom_delay: timing.delay,
                bloom_duration: timing.duration,
            })
        })
        .collect();

    let output = GardenOutput {
        viewport,
        flower_size: frame.flower_size,
        flowers: placed,
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to serialize layout")?;
    println!("{}", json);

    Ok(())
}
