use eye_tracker::contours::{extract_contours, SegmentationParams};
use eye_tracker::image::io::{load_grayscale_image, save_gray_image};
use eye_tracker::image::Roi;
use eye_tracker::overlay::draw_contours;
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
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 3 && args.len() != 7 {
        return Err(usage());
    }
    let threshold: u8 = args[1]
        .parse()
        .map_err(|e| format!("Invalid threshold {:?}: {e}", args[1]))?;
    let roi = if args.len() == 7 {
        let mut corners = [0usize; 4];
        for (slot, raw) in corners.iter_mut().zip(&args[3..]) {
            *slot = raw
                .parse()
                .map_err(|e| format!("Invalid ROI coordinate {raw:?}: {e}"))?;
        }
        Some(Roi::new((corners[0], corners[1]), (corners[2], corners[3])))
    } else {
        None
    };

    let gray = load_grayscale_image(Path::new(&args[0]))?;
    let frame = match &roi {
        Some(roi) => gray.as_view().crop(roi).map_err(|e| e.to_string())?,
        None => gray.as_view(),
    };

    let params = SegmentationParams::default().with_threshold(threshold);
    let contours = extract_contours(frame, &params).map_err(|e| e.to_string())?;
    let preview = draw_contours(frame, &contours, 255);

    let out = Path::new(&args[2]);
    save_gray_image(&preview, out)?;
    println!(
        "Threshold {threshold}: {} blobs outlined, preview written to {}",
        contours.len(),
        out.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: threshold_preview <input> <threshold> <output.png> [x1 y1 x2 y2]".to_string()
}
