use fov_detector::image::ImageF32;

/// Generates a 2000x2000 bench-like frame: a bright horizontal band crossing
/// the x ROI rows and a bright vertical band crossing the y ROI columns,
/// each with half-intensity pixels at its extremes so the fractional
/// threshold band has something to latch onto.
///
/// Horizontal band: rows 1005..1025, full brightness at columns 951..=969,
/// half brightness at columns 950 and 970. Vertical band: columns
/// 1520..1540, full brightness at rows 941..=979, half at rows 940 and 980.
pub fn bench_frame() -> ImageF32 {
    let mut img = ImageF32::new(2000, 2000);

    for y in 1005..1025 {
        img.set(950, y, 128.0);
        for x in 951..970 {
            img.set(x, y, 255.0);
        }
        img.set(970, y, 128.0);
    }

    for x in 1520..1540 {
        img.set(x, 940, 128.0);
        for y in 941..980 {
            img.set(x, y, 255.0);
        }
        img.set(x, 980, 128.0);
    }

    img
}

/// Adds a mid-intensity artifact blob inside the x ROI rows, far to the
/// right of the real band. Unless masked by the ignore rectangle it drags
/// the x high edge towards column 1759.
pub fn add_artifact_blob(img: &mut ImageF32) {
    for y in 1005..1025 {
        for x in 1700..1760 {
            img.set(x, y, 100.0);
        }
    }
}
