//! Synthetic fixture builders shared by the integration tests, in the
//! style of `jupiter-core/tests/common/mod.rs`.
#![allow(dead_code)]

use scrollstitch::Frame;

/// A "tall" synthetic source: horizontal stripes one row tall, alternating
/// between two shades, the same period-2 pattern the unit tests use so a
/// pure vertical shift of an even row count reproduces identical content.
pub fn striped_source(height: u32, width: u32) -> Frame {
    let mut rgba = Vec::with_capacity((height * width * 4) as usize);
    for y in 0..height {
        let v = if y % 2 == 0 { 235u8 } else { 20u8 };
        for _ in 0..width {
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Frame::from_rgba(width, height, rgba).unwrap()
}

/// A source with a slow horizontal gradient baked in on top of the row
/// stripes, so ZNCC has genuine per-column texture (not perfectly uniform
/// columns) — closer to a real screenshot than pure horizontal bars.
pub fn textured_source(height: u32, width: u32) -> Frame {
    let mut rgba = Vec::with_capacity((height * width * 4) as usize);
    for y in 0..height {
        let base = if y % 2 == 0 { 200u8 } else { 40u8 };
        for x in 0..width {
            let wobble = ((x * 7 + y * 3) % 23) as i32 - 11;
            let v = (base as i32 + wobble).clamp(0, 255) as u8;
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Frame::from_rgba(width, height, rgba).unwrap()
}

/// Crop `[top, top + rows)` out of `source`, returning an owned frame of
/// height `rows`.
pub fn window(source: &Frame, top: u32, rows: u32) -> Frame {
    let w = source.width();
    let row_bytes = w as usize * 4;
    let start = top as usize * row_bytes;
    let end = start + rows as usize * row_bytes;
    Frame::from_rgba(w, rows, source.as_rgba()[start..end].to_vec()).unwrap()
}

/// Build a sequence of overlapping windows out of `source` at the given
/// top offsets, each `window_h` rows tall.
pub fn windows_at(source: &Frame, starts: &[u32], window_h: u32) -> Vec<Frame> {
    starts.iter().map(|&top| window(source, top, window_h)).collect()
}

/// Overwrite the first `header_rows` of `frame` with a flat shade that
/// depends on `tick`, simulating a dynamic ticker/clock in a fixed header
/// band that differs between otherwise-identical frames.
pub fn with_ticker_header(frame: &Frame, header_rows: u32, tick: u8) -> Frame {
    let w = frame.width();
    let h = frame.height();
    let row_bytes = w as usize * 4;
    let mut rgba = frame.as_rgba().to_vec();
    for y in 0..header_rows.min(h) {
        let start = y as usize * row_bytes;
        for px in (start..start + row_bytes).step_by(4) {
            rgba[px] = tick;
            rgba[px + 1] = tick;
            rgba[px + 2] = tick;
            rgba[px + 3] = 255;
        }
    }
    Frame::from_rgba(w, h, rgba).unwrap()
}

/// Overwrite the left `sidebar_frac` fraction of columns with a shade that
/// depends on `variant`, simulating a scrollbar/sidebar that changes
/// between frames independent of the scrolled content.
pub fn with_sidebar_noise(frame: &Frame, sidebar_frac: f64, variant: u8) -> Frame {
    let w = frame.width();
    let h = frame.height();
    let sidebar_w = ((w as f64) * sidebar_frac).round() as u32;
    let row_bytes = w as usize * 4;
    let mut rgba = frame.as_rgba().to_vec();
    for y in 0..h {
        let row_start = y as usize * row_bytes;
        for x in 0..sidebar_w {
            let px = row_start + x as usize * 4;
            let shade = variant.wrapping_add((x * 17 + y * 5) as u8);
            rgba[px] = shade;
            rgba[px + 1] = shade;
            rgba[px + 2] = shade;
            rgba[px + 3] = 255;
        }
    }
    Frame::from_rgba(w, h, rgba).unwrap()
}

/// Maximum per-channel L1 distance between two equal-size frames'
/// RGB bytes (alpha ignored), used for blend-band tolerance checks.
pub fn max_channel_distance(a: &Frame, b: &Frame) -> u8 {
    let mut max = 0u8;
    for y in 0..a.height().min(b.height()) {
        let ra = a.row(y);
        let rb = b.row(y);
        for px in (0..ra.len()).step_by(4) {
            for c in 0..3 {
                let d = (ra[px + c] as i32 - rb[px + c] as i32).unsigned_abs() as u8;
                if d > max {
                    max = d;
                }
            }
        }
    }
    max
}
