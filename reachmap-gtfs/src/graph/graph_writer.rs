use std::{
    collections::HashMap,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use serde::{Deserialize, Serialize};

use super::{distance_ops, FeedBundle, TravelTimeGraph};
use crate::feed::Stop;

/// file format used when writing a travel time graph
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GraphOutputFormat {
    /// gzipped CSV edge list, `edges.csv.gz`
    #[default]
    Csv,
    /// JSON adjacency mapping, `graph.json`
    Json,
}

impl GraphOutputFormat {
    pub fn filename(&self) -> &'static str {
        match self {
            GraphOutputFormat::Csv => "edges.csv.gz",
            GraphOutputFormat::Json => "graph.json",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GraphWriteError {
    #[error("failure writing to file {0}: {1}")]
    Io(String, std::io::Error),
    #[error("failure writing to file {0}: {1}")]
    Csv(String, csv::Error),
    #[error("failure writing to file {0}: {1}")]
    Json(String, serde_json::Error),
}

/// a row in the edges CSV file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeRow {
    pub src_stop_id: String,
    pub dst_stop_id: String,
    pub travel_seconds: u32,
    /// straight-line distance between the two stops, empty when either stop
    /// is missing from stops.txt.
    pub distance_meters: Option<f64>,
}

/// rows for every edge of the graph, in source stop then destination order.
pub fn edge_rows(graph: &TravelTimeGraph, stops: &HashMap<&str, &Stop>) -> Vec<EdgeRow> {
    graph
        .iter_edges()
        .map(|edge| {
            let src = stops.get(edge.src_stop_id.as_str());
            let dst = stops.get(edge.dst_stop_id.as_str());
            let distance_meters = match (src, dst) {
                (Some(s), Some(d)) => Some(distance_ops::haversine_meters(s.point(), d.point())),
                _ => None,
            };
            EdgeRow {
                src_stop_id: edge.src_stop_id.clone(),
                dst_stop_id: edge.dst_stop_id.clone(),
                travel_seconds: edge.travel_seconds,
                distance_meters,
            }
        })
        .collect()
}

/// serializes edge rows with a header row to any writer.
pub fn write_edge_rows<W: Write>(
    writer: &mut csv::Writer<W>,
    rows: &[EdgeRow],
) -> Result<(), csv::Error> {
    for row in rows.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// writes the graph of a bundle into `output_directory` in the requested
/// format. returns the written path, or None when the file already exists
/// and `overwrite` is false.
pub fn write_bundle(
    bundle: &FeedBundle,
    output_directory: &Path,
    format: &GraphOutputFormat,
    overwrite: bool,
) -> Result<Option<PathBuf>, GraphWriteError> {
    let filepath = output_directory.join(format.filename());
    let filename = filepath.to_string_lossy().to_string();
    if filepath.exists() && !overwrite {
        return Ok(None);
    }
    let file = File::create(&filepath).map_err(|e| GraphWriteError::Io(filename.clone(), e))?;
    match format {
        GraphOutputFormat::Csv => {
            let rows = edge_rows(&bundle.graph, &bundle.feed.stop_lookup());
            let mut writer = create_writer(file, QuoteStyle::Necessary);
            write_edge_rows(&mut writer, &rows)
                .map_err(|e| GraphWriteError::Csv(filename.clone(), e))?;
            let encoder = writer
                .into_inner()
                .map_err(|e| GraphWriteError::Io(filename.clone(), e.into_error()))?;
            encoder
                .finish()
                .map_err(|e| GraphWriteError::Io(filename.clone(), e))?;
        }
        GraphOutputFormat::Json => {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, bundle.graph.as_ref())
                .map_err(|e| GraphWriteError::Json(filename.clone(), e))?;
            writer
                .flush()
                .map_err(|e| GraphWriteError::Io(filename.clone(), e))?;
        }
    }
    log::info!("wrote {} edges to {filename}", bundle.graph.n_edges());
    Ok(Some(filepath))
}

/// helper function to build a gzipped csv writer over a file
fn create_writer(file: File, quote_style: QuoteStyle) -> csv::Writer<GzEncoder<File>> {
    let buffer = GzEncoder::new(file, Compression::default());
    csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(quote_style)
        .from_writer(buffer)
}
