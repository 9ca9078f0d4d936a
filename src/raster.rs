use crate::stroke::StrokeRef;
use egui::Pos2;
use image::{Rgba, RgbaImage};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rasterize a stroke sequence onto a white background.
///
/// Strokes are drawn in document order, each as round stamps along its
/// segments, so later strokes paint over earlier ones just like on screen.
pub fn rasterize(strokes: &[StrokeRef], width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

    for stroke in strokes {
        let color = stroke.color();
        let pixel = Rgba([color.r(), color.g(), color.b(), 255]);
        let radius = (stroke.width() / 2.0).max(0.5);
        let points = stroke.points();

        // A tap with no movement still leaves a dot
        if points.len() == 1 {
            stamp(&mut image, points[0], radius, pixel);
        }

        for pair in points.windows(2) {
            draw_segment(&mut image, pair[0], pair[1], radius, pixel);
        }
    }

    image
}

/// Stamp discs along the segment, spaced at half the radius so the line has
/// no gaps at any width.
fn draw_segment(image: &mut RgbaImage, from: Pos2, to: Pos2, radius: f32, pixel: Rgba<u8>) {
    let delta = to - from;
    let steps = (delta.length() / (radius * 0.5).max(0.5)).ceil().max(1.0) as u32;

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(image, from + delta * t, radius, pixel);
    }
}

fn stamp(image: &mut RgbaImage, center: Pos2, radius: f32, pixel: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let min_x = (center.x - radius).floor().max(0.0) as u32;
    let min_y = (center.y - radius).floor().max(0.0) as u32;
    let max_x = ((center.x + radius).ceil() as i64).clamp(0, width as i64 - 1) as u32;
    let max_y = ((center.y + radius).ceil() as i64).clamp(0, height as i64 - 1) as u32;
    let radius_sq = radius * radius;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            // Sample at the pixel center
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius_sq {
                image.put_pixel(x, y, pixel);
            }
        }
    }
}
