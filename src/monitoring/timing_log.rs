use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::global_variables::{ENV_TIMING_LOG, TIMING_LOG_FILE};
use crate::shared_data::TimingRecord;

/// Aggregate view over a set of logged timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    pub count: usize,
    pub min_duration: f64,
    pub max_duration: f64,
    pub mean_duration: f64,
    /// Results pinned at the upper bound.
    pub saturated: usize,
    /// Results pinned at the lower bound.
    pub floored: usize,
}

/// Log path from `GREEN_TIMING_LOG`, falling back to the working directory.
pub fn timing_log_path() -> PathBuf {
    std::env::var(ENV_TIMING_LOG)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(TIMING_LOG_FILE))
}

// Appends one record, writing the header only when the file is new.
pub fn log_timing<P: AsRef<Path>>(path: P, record: &TimingRecord) -> Result<()> {
    let file_exists = path.as_ref().exists();
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path.as_ref())?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

pub fn read_timings<P: AsRef<Path>>(path: P) -> Result<Vec<TimingRecord>> {
    let file = File::open(path.as_ref())?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: TimingRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Returns `None` for an empty log.
pub fn summarize(
    records: &[TimingRecord],
    base_duration: f64,
    max_green_duration: f64,
) -> Option<TimingSummary> {
    if records.is_empty() {
        return None;
    }
    let durations = records.iter().map(|r| r.green_duration_seconds);
    let min_duration = durations.clone().fold(f64::INFINITY, f64::min);
    let max_duration = durations.clone().fold(f64::NEG_INFINITY, f64::max);
    let mean_duration = durations.clone().sum::<f64>() / records.len() as f64;
    let saturated = durations.clone().filter(|&d| d >= max_green_duration).count();
    let floored = durations.filter(|&d| d <= base_duration).count();

    Some(TimingSummary {
        count: records.len(),
        min_duration,
        max_duration,
        mean_duration,
        saturated,
        floored,
    })
}

pub fn show_timings<P: AsRef<Path>>(path: P) -> Result<()> {
    let records = read_timings(path)?;
    println!("Green Light Timings:");
    for record in &records {
        println!("{:?}", record);
    }
    Ok(())
}

pub fn print_summary(summary: Option<&TimingSummary>) {
    match summary {
        Some(s) => {
            println!("Report Summary:");
            println!("Timings: {} records", s.count);
            println!("Shortest green: {:.2}s", s.min_duration);
            println!("Longest green: {:.2}s", s.max_duration);
            println!("Mean green: {:.2}s", s.mean_duration);
            println!("At upper bound: {}", s.saturated);
            println!("At lower bound: {}", s.floored);
        }
        None => println!("No timing data available."),
    }
}

// Scatterplot of green duration against queue length.
pub fn plot_duration_vs_queue<P: AsRef<Path>>(
    records: &[TimingRecord],
    out_png: P,
) -> std::result::Result<(), Box<dyn Error>> {
    if records.is_empty() {
        println!("No timing data available.");
        return Ok(());
    }

    let max_queue = records.iter().map(|r| r.queue_length).max().unwrap_or(0).max(1);
    let max_duration = records
        .iter()
        .map(|r| r.green_duration_seconds)
        .fold(0.0, f64::max)
        .max(1.0);

    let backend = BitMapBackend::new(out_png.as_ref(), (800, 600));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Green Duration vs Queue Length", ("sans-serif", 20))
        .margin(40)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..max_queue, 0.0..max_duration * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Queue length (vehicles)")
        .y_desc("Green duration (s)")
        .draw()?;
    chart.draw_series(
        records
            .iter()
            .map(|r| Circle::new((r.queue_length, r.green_duration_seconds), 4, GREEN.filled())),
    )?;

    root.present()?;
    println!(
        "Duration scatterplot saved to {}",
        out_png.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_data::Observation;

    fn record(queue: i64, duration: f64) -> TimingRecord {
        let obs = Observation {
            queue_length: queue,
            car_count: queue,
            air_quality_index: 2,
            ..Default::default()
        };
        TimingRecord::new(1_735_387_200, &obs, duration)
    }

    #[test]
    fn appended_records_read_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timings.csv");

        log_timing(&path, &record(0, 15.0)).unwrap();
        log_timing(&path, &record(12, 27.5)).unwrap();
        log_timing(&path, &record(900, 120.0)).unwrap();

        let records = read_timings(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].queue_length, 12);
        assert_eq!(records[2].green_duration_seconds, 120.0);
    }

    #[test]
    fn summary_counts_clamped_results() {
        let records = vec![record(0, 15.0), record(12, 27.5), record(900, 120.0)];
        let s = summarize(&records, 15.0, 120.0).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!(s.min_duration, 15.0);
        assert_eq!(s.max_duration, 120.0);
        assert!((s.mean_duration - 162.5 / 3.0).abs() < 1e-9);
        assert_eq!(s.saturated, 1);
        assert_eq!(s.floored, 1);
    }

    #[test]
    fn empty_log_has_no_summary() {
        assert!(summarize(&[], 15.0, 120.0).is_none());
    }
}
