/// Bright background level of synthetic frames.
pub const BACKGROUND: u8 = 220;
/// Intensity of painted blobs (eyes and swim bladder image dark).
pub const BLOB: u8 = 20;

/// Row-major 8-bit frame filled with the background level.
pub fn blank_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![BACKGROUND; width * height]
}

/// Paints a filled ellipse with semi-axes `a` (along `phi`) and `b`.
///
/// `phi` follows the image counter-clockwise convention: positive angles turn
/// from +x towards the top of the frame.
pub fn paint_ellipse(
    img: &mut [u8],
    width: usize,
    centre: (f64, f64),
    a: f64,
    b: f64,
    phi: f64,
) {
    let height = img.len() / width;
    let (ux, uy) = (phi.cos(), -phi.sin());
    let (vx, vy) = (-uy, ux);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 - centre.0;
            let dy = y as f64 - centre.1;
            let along = dx * ux + dy * uy;
            let across = dx * vx + dy * vy;
            if (along / a).powi(2) + (across / b).powi(2) <= 1.0 {
                img[y * width + x] = BLOB;
            }
        }
    }
}

pub fn paint_disc(img: &mut [u8], width: usize, centre: (f64, f64), r: f64) {
    paint_ellipse(img, width, centre, r, r, 0.0);
}

/// Frame with a swim bladder disc and two eye ellipses sharing one
/// orientation.
pub fn fish_u8(
    width: usize,
    height: usize,
    swim_bladder: (f64, f64),
    eyes: [(f64, f64); 2],
    eye_phi: f64,
) -> Vec<u8> {
    let mut img = blank_u8(width, height);
    paint_disc(&mut img, width, swim_bladder, 12.0);
    for eye in eyes {
        paint_ellipse(&mut img, width, eye, 10.0, 5.0, eye_phi);
    }
    img
}
