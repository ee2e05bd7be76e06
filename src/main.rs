use eye_tracker::image::ImageU8;
use eye_tracker::{FrameEstimator, TrackerParams};

fn main() {
    env_logger::init();

    // Demo stub: paints a swim bladder and two eyes as dark discs on a bright
    // background and runs the estimator on it.
    let (w, h) = (160usize, 120usize);
    let mut gray = vec![220u8; w * h];
    for &(cx, cy, r) in &[(40.0, 60.0, 12.0), (100.0, 45.0, 8.0), (100.0, 75.0, 8.0)] {
        paint_disc(&mut gray, w, cx, cy, r);
    }
    let img = ImageU8::packed(w, h, &gray);

    let estimator = FrameEstimator::new(TrackerParams::with_threshold(128));
    match estimator.process(img) {
        Ok(pose) => println!(
            "heading={:.3} left=({:.1}, {:.1}) right=({:.1}, {:.1})",
            pose.heading,
            pose.left_eye.centre.x,
            pose.left_eye.centre.y,
            pose.right_eye.centre.x,
            pose.right_eye.centre.y
        ),
        Err(err) => println!("no pose: {err}"),
    }
}

fn paint_disc(buf: &mut [u8], w: usize, cx: f64, cy: f64, r: f64) {
    let h = buf.len() / w;
    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = (x as f64 - cx, y as f64 - cy);
            if dx * dx + dy * dy <= r * r {
                buf[y * w + x] = 20;
            }
        }
    }
}
