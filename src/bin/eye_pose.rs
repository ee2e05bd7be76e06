use eye_tracker::config::tracker::{self, TrackerConfig};
use eye_tracker::image::background::flatten_background;
use eye_tracker::image::io::{load_grayscale_image, save_rgb_image, write_json_file, GrayImageU8};
use eye_tracker::image::ImageU8;
use eye_tracker::overlay::draw_pose;
use eye_tracker::{FrameEstimator, FramePose, FrameReport};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = tracker::load_config(Path::new(&config_path))?;
    let estimator = FrameEstimator::new(config.tracker.clone());

    let mut frames: Vec<Result<GrayImageU8, String>> = config
        .inputs
        .par_iter()
        .map(|path| load_grayscale_image(path))
        .collect();
    if config.subtract_background {
        flatten_loaded(&mut frames);
    }

    let records: Vec<FrameRecord> = config
        .inputs
        .par_iter()
        .zip(frames.par_iter())
        .enumerate()
        .map(|(index, (path, frame))| process_frame(index, path, frame, &estimator, &config))
        .collect();

    let ok = records.iter().filter(|r| r.error.is_none()).count();
    let summary = BatchSummary {
        frames: records.len(),
        estimated: ok,
        records,
    };

    match &config.output.json_out {
        Some(path) => {
            write_json_file(path, &summary)?;
            println!(
                "Estimated {}/{} frames, results written to {}",
                summary.estimated,
                summary.frames,
                path.display()
            );
        }
        None => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Replaces every loaded frame by its background-flattened version. Frames
/// that cannot take part (wrong size, empty) get their own error.
fn flatten_loaded(frames: &mut [Result<GrayImageU8, String>]) {
    let loaded: Vec<usize> = (0..frames.len()).filter(|&i| frames[i].is_ok()).collect();
    let views: Vec<ImageU8<'_>> = frames
        .iter()
        .filter_map(|f| f.as_ref().ok().map(GrayImageU8::as_view))
        .collect();
    let flattened = flatten_background(&views);
    drop(views);
    for (i, result) in loaded.into_iter().zip(flattened) {
        frames[i] = result.map_err(|e| e.to_string());
    }
}

fn process_frame(
    index: usize,
    path: &Path,
    frame: &Result<GrayImageU8, String>,
    estimator: &FrameEstimator,
    config: &TrackerConfig,
) -> FrameRecord {
    let mut record = FrameRecord {
        index,
        input: path.display().to_string(),
        pose: None,
        report: None,
        error: None,
    };
    let gray = match frame {
        Ok(gray) => gray,
        Err(err) => {
            record.error = Some(err.clone());
            return record;
        }
    };

    let outcome = if config.output.diagnostics {
        estimator
            .process_with_diagnostics(gray.as_view())
            .map(|report| (report.pose, Some(report)))
    } else {
        estimator.process(gray.as_view()).map(|pose| (pose, None))
    };
    match outcome {
        Ok((pose, report)) => {
            if let Some(dir) = &config.output.overlay_dir {
                if let Err(err) = save_overlay(dir, index, gray, &pose, config) {
                    record.error = Some(err);
                }
            }
            record.pose = Some(pose);
            record.report = report;
        }
        Err(err) => {
            log::warn!("frame {index} ({}): {err}", path.display());
            record.error = Some(err.to_string());
        }
    }
    record
}

fn save_overlay(
    dir: &Path,
    index: usize,
    gray: &GrayImageU8,
    pose: &FramePose,
    config: &TrackerConfig,
) -> Result<(), String> {
    let frame = gray.as_view();
    // poses live in ROI coordinates, so draw on the same crop
    let view = match &config.tracker.roi {
        Some(roi) => frame.crop(roi).map_err(|e| e.to_string())?,
        None => frame,
    };
    let overlay = draw_pose(view, pose, &config.overlay);
    save_rgb_image(&overlay, &dir.join(format!("frame_{index:05}.png")))
}

fn usage() -> String {
    "Usage: eye_pose <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameRecord {
    index: usize,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pose: Option<FramePose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<FrameReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchSummary {
    frames: usize,
    estimated: usize,
    records: Vec<FrameRecord>,
}
