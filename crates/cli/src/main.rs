use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dateline::bbox::GeoRect;
use dateline::table::{column_values, find_column, LAT_COLUMNS, LON_COLUMNS};
use dateline::{extract_rings, split_by_antimeridian, split_by_antimeridian_with};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "dateline")]
#[command(about = "Split lon/lat rings at the antimeridian")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Split every ring in a CSV/Parquet table and write the result
    Split {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Longitude column (default: first of x, lon, ln, longitude)
        #[arg(long, requires = "lat")]
        lon: Option<String>,
        /// Latitude column (default: first of y, lat, latitude)
        #[arg(long, requires = "lon")]
        lat: Option<String>,
    },
    /// Print wrap-aware bounding rectangles of every ring as JSON
    Bbox {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, requires = "lat")]
        lon: Option<String>,
        #[arg(long, requires = "lon")]
        lat: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Split {
            input,
            out,
            lon,
            lat,
        } => split(&input, &out, columns(lon, lat)),
        Action::Bbox { input, lon, lat } => {
            let report = bbox(&input, columns(lon, lat))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Action::Report => report(),
    }
}

fn columns(lon: Option<String>, lat: Option<String>) -> Option<(String, String)> {
    lon.zip(lat)
}

fn split(input: &Path, out: &Path, cols: Option<(String, String)>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), cols = ?cols, "split");
    let df = read_table(input)?;
    let mut result = match &cols {
        Some((lon, lat)) => split_by_antimeridian_with(&df, lon, lat),
        None => split_by_antimeridian(&df),
    }
    .with_context(|| format!("splitting {}", input.display()))?;
    tracing::info!(rows_in = df.height(), rows_out = result.height(), "split_done");

    write_table(&mut result, out)?;
    let payload = Payload::new(
        "split",
        serde_json::json!({
            "columns": cols,
            "rows_in": df.height(),
            "rows_out": result.height(),
        }),
    )
    .with_input(input);
    write_sidecar(out, &payload)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct RectJson {
    start_lon: f64,
    end_lon: f64,
    min_lat: f64,
    max_lat: f64,
    crosses_antimeridian: bool,
}

impl From<GeoRect> for RectJson {
    fn from(r: GeoRect) -> Self {
        Self {
            start_lon: r.start_lon,
            end_lon: r.end_lon,
            min_lat: r.min_lat,
            max_lat: r.max_lat,
            crosses_antimeridian: r.crosses_antimeridian(),
        }
    }
}

#[derive(Debug, Serialize)]
struct BboxReport {
    rings: Vec<RectJson>,
    union: Option<RectJson>,
    /// `union` cut at the antimeridian.
    pieces: Vec<RectJson>,
}

fn bbox(input: &Path, cols: Option<(String, String)>) -> Result<BboxReport> {
    tracing::info!(input = %input.display(), cols = ?cols, "bbox");
    let df = read_table(input)?;
    let (lon, lat) = match cols {
        Some(pair) => pair,
        None => match (find_column(&df, &LON_COLUMNS), find_column(&df, &LAT_COLUMNS)) {
            (Some(lon), Some(lat)) => (lon.to_string(), lat.to_string()),
            _ => bail!("{}: no longitude/latitude columns", input.display()),
        },
    };
    let xs = column_values(&df, &lon)?;
    let ys = column_values(&df, &lat)?;

    let mut rects = Vec::new();
    for ring in extract_rings(&xs, &ys)? {
        if let Some(r) = GeoRect::bounding(&ring?.points) {
            rects.push(r);
        }
    }
    let union = GeoRect::union(&rects);
    Ok(BboxReport {
        rings: rects.into_iter().map(RectJson::from).collect(),
        pieces: union
            .map(|u| u.split_by_antimeridian())
            .unwrap_or_default()
            .into_iter()
            .map(RectJson::from)
            .collect(),
        union: union.map(RectJson::from),
    })
}

fn report() -> Result<()> {
    let obj = provenance::document(&Payload::new("report", serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn is_parquet(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("parquet")
}

fn read_table(path: &Path) -> Result<DataFrame> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
    } else {
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()
    }
    .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_shape");
    Ok(df)
}

fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    Ok(())
}
