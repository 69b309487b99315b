//! Field control CLI
//!
//! Loads one frame of tracking rows from CSV, assembles the roster, runs
//! the field control engine over a regular grid, and writes the control
//! grid as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::{Deserialize, Serialize};

use fc_core::model_constants::{field, grid};
use fc_core::{
    assemble_roster, field_control, ControlGrid, EntityKind, FieldGrid, GridShape,
    ReferencePoint, TrackedEntity,
};

#[derive(Parser)]
#[command(name = "fc_cli")]
#[command(about = "Compute an attacking-team control grid from one tracking frame", long_about = None)]
struct Cli {
    /// Input tracking CSV (one row per tracked entity for a single frame)
    #[arg(long)]
    tracking: PathBuf,

    /// Output JSON file path
    #[arg(long)]
    out: PathBuf,

    /// Grid spacing in yards
    #[arg(long, default_value_t = grid::DEFAULT_GRANULARITY)]
    granularity: f64,

    /// Grid lower x bound (yards)
    #[arg(long, default_value_t = 0.0)]
    x_min: f64,

    /// Grid upper x bound (yards)
    #[arg(long, default_value_t = field::LENGTH_YD)]
    x_max: f64,

    /// Grid lower y bound (yards)
    #[arg(long, default_value_t = 0.0)]
    y_min: f64,

    /// Grid upper y bound (yards)
    #[arg(long, default_value_t = field::WIDTH_YD)]
    y_max: f64,
}

/// One tracking CSV row. The literal club `football` marks the ball row.
#[derive(Debug, Deserialize)]
struct TrackingRow {
    club: String,
    x: f64,
    y: f64,
    s: f64,
    dir_radians: f64,
    offense: bool,
}

impl From<&TrackingRow> for TrackedEntity {
    fn from(row: &TrackingRow) -> Self {
        TrackedEntity {
            kind: if row.club == "football" {
                EntityKind::Ball
            } else {
                EntityKind::Player
            },
            position: (row.x, row.y),
            speed: row.s,
            heading: row.dir_radians,
            is_attacking: row.offense,
        }
    }
}

/// Output document: the mirrored control grid plus provenance metadata.
#[derive(Serialize)]
struct GridDocument {
    /// Creation time (RFC3339)
    created_at: String,
    engine_version: &'static str,
    granularity: f64,
    shape: GridShape,
    /// Rows top to bottom (maximum y first), matching the engine's output
    /// orientation
    values: Vec<Vec<f64>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("🔨 Computing field control...");
    println!("   Tracking: {}", cli.tracking.display());
    println!("   Output:   {}", cli.out.display());

    let rows = read_tracking(&cli.tracking)?;
    println!("   Rows:     {}", rows.len());

    let entities: Vec<TrackedEntity> = rows.iter().map(TrackedEntity::from).collect();
    let roster = assemble_roster(&entities, ReferencePoint::Ball)
        .context("failed to assemble roster from tracking rows")?;

    let field_grid =
        FieldGrid::regular(cli.x_min, cli.x_max, cli.y_min, cli.y_max, cli.granularity)
            .context("failed to build the field grid")?;
    let shape = field_grid.shape();
    println!(
        "   Grid:     {}x{} ({} points, {:.2} yd spacing)",
        shape.width,
        shape.height,
        shape.len(),
        cli.granularity
    );

    let control =
        field_control(&roster, &field_grid).context("field control computation failed")?;

    write_document(&cli.out, &control, cli.granularity)?;

    println!("\n✅ Control grid written to {}", cli.out.display());
    Ok(())
}

fn read_tracking(path: &Path) -> Result<Vec<TrackingRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open tracking CSV: {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.context("malformed tracking row")?);
    }
    Ok(rows)
}

fn write_document(path: &Path, control: &ControlGrid, granularity: f64) -> Result<()> {
    let document = GridDocument {
        created_at: Utc::now().to_rfc3339(),
        engine_version: fc_core::VERSION,
        granularity,
        shape: control.shape(),
        values: control.rows().map(<[f64]>::to_vec).collect(),
    };
    let json = serde_json::to_string_pretty(&document)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
