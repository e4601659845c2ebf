use fov_detector::camera::{FrameSource, ReplaySource};
use fov_detector::config::session::load_config;
use fov_detector::detector::FovDetector;
use fov_detector::session::MeasurementSession;
use std::env;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut source = ReplaySource::new(config.camera.clone(), config.inputs);
    // Sessions own exactly one source, matched by configured identifier.
    if source.id() != config.camera {
        return Err(format!(
            "frame source '{}' does not match configured camera '{}'",
            source.id(),
            config.camera
        ));
    }

    let detector = FovDetector::new(config.params).map_err(|e| e.to_string())?;
    let mut session =
        MeasurementSession::new(detector, config.average_depth).map_err(|e| e.to_string())?;

    while source.remaining() > 0 {
        let mut frame = source.capture()?;
        let step = session.step(&mut frame, unix_timestamp()).map_err(|e| e.to_string())?;
        println!(
            "frame {:>4}: found={} smoothed x=({:.3}, {:.3}, {:.3}) y=({:.3}, {:.3}, {:.3})",
            session.log().len(),
            step.result.found,
            step.smoothed[0],
            step.smoothed[1],
            step.smoothed[2],
            step.smoothed[3],
            step.smoothed[4],
            step.smoothed[5],
        );
    }
    source.stop()?;

    if session.flush(&config.output_csv) {
        println!(
            "Saved {} rows to {}",
            session.log().len(),
            config.output_csv.display()
        );
    } else {
        return Err(format!(
            "could not write log to {}",
            config.output_csv.display()
        ));
    }

    Ok(())
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

fn usage() -> String {
    "Usage: fov_log <config.json>".to_string()
}
