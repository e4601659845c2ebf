use fov_detector::image::ImageF32;
use fov_detector::{FovDetector, FovParams};

fn main() {
    // Demo stub: runs the detector over a synthetic dark frame
    let mut frame = ImageF32::new(2048, 2048);

    let detector = match FovDetector::new(FovParams::default()) {
        Ok(det) => det,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    match detector.process(&mut frame) {
        Ok(res) => println!(
            "found={} x=({:.3}, {:.3}, {:.3}) latency_ms={:.3}",
            res.found, res.x.low, res.x.high, res.x.width, res.latency_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
