//! Thick polyline stroking on top of `imageproc`'s 1-px line segments.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

/// Strokes consecutive point pairs as line segments of the given width.
///
/// Width is built up from parallel 1-px segments offset along the
/// perpendicular of each segment, centered on the ideal line (biased
/// one pixel toward positive offsets for even widths). Segments that
/// leave the image bounds are clipped by the underlying line drawing.
pub fn stroke_polyline(image: &mut RgbImage, points: &[(f32, f32)], width: u32, color: Rgb<u8>) {
    for pair in points.windows(2) {
        stroke_segment(image, pair[0], pair[1], width, color);
    }
}

fn stroke_segment(
    image: &mut RgbImage,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: Rgb<u8>,
) {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let length = (dx * dx + dy * dy).sqrt();

    if length == 0.0 {
        draw_line_segment_mut(image, start, end, color);
        return;
    }

    // Unit perpendicular to the segment direction.
    let px = -dy / length;
    let py = dx / length;

    for i in 0..width.max(1) {
        let offset = (i as i32 - (width.max(1) as i32 - 1) / 2) as f32;
        let shifted_start = (start.0 + px * offset, start.1 + py * offset);
        let shifted_end = (end.0 + px * offset, end.1 + py * offset);
        draw_line_segment_mut(image, shifted_start, shifted_end, color);
    }
}
