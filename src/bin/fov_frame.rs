use fov_detector::config::frame::load_config;
use fov_detector::detector::FovDetector;
use fov_detector::image::io::{load_frame, save_frame, write_json_file};
use fov_detector::overlay::{NullOverlay, OverlayText};
use fov_detector::types::FovResult;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let detector = FovDetector::new(config.params).map_err(|e| e.to_string())?;
    let mut frame = load_frame(&config.input)?;
    let result = detector
        .process_annotated(&mut frame, &mut NullOverlay)
        .map_err(|e| e.to_string())?;

    let text = OverlayText::from_result(&result);
    println!("{}", text.x_line);
    println!("{}", text.y_line);
    if !result.found {
        println!("no edges detected in {}", config.input.display());
    }

    let summary = MeasurementSummary {
        input: config.input.display().to_string(),
        width: frame.w,
        height: frame.h,
        result,
    };
    write_json_file(&config.output.result_json, &summary)?;
    println!(
        "Saved measurement summary to {}",
        config.output.result_json.display()
    );

    if let Some(path) = &config.output.processed_image {
        save_frame(&frame, path)?;
        println!("Saved processed frame to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: fov_frame <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MeasurementSummary {
    input: String,
    width: usize,
    height: usize,
    result: FovResult,
}
