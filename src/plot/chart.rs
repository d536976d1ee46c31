use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};

use crate::plot::font::draw_text;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const MARGIN: u32 = 48;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([64, 64, 64]);
const LINE: Rgb<u8> = Rgb([32, 64, 224]);

/// Renders an `(epoch, value)` series as a PNG line chart.
///
/// The x axis spans the recorded epoch range, the y axis the value range;
/// both axes are drawn along the chart margins and `title` is rasterized
/// above the chart area.
pub fn plot_series(points: &[(usize, f64)], title: &str, path: &Path) -> ImageResult<()> {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    draw_axes(&mut img);
    draw_text(&mut img, title, MARGIN, MARGIN / 2 - 7, AXIS);

    if let Some(mapped) = map_to_pixels(points) {
        for pair in mapped.windows(2) {
            draw_line(&mut img, pair[0], pair[1], LINE);
        }
        if mapped.len() == 1 {
            let (px, py) = mapped[0];
            img.put_pixel(px, py, LINE);
        }
    }

    img.save(path)
}

fn draw_axes(img: &mut RgbImage) {
    let left = MARGIN;
    let right = WIDTH - MARGIN;
    let top = MARGIN;
    let bottom = HEIGHT - MARGIN;

    draw_line(img, (left, bottom), (right, bottom), AXIS);
    draw_line(img, (left, top), (left, bottom), AXIS);
}

/// Scales the series into the chart area. Returns `None` for an empty series.
fn map_to_pixels(points: &[(usize, f64)]) -> Option<Vec<(u32, u32)>> {
    let first = points.first()?;

    let (mut x_min, mut x_max) = (first.0 as f64, first.0 as f64);
    let (mut y_min, mut y_max) = (first.1, first.1);
    for &(epoch, value) in points {
        x_min = x_min.min(epoch as f64);
        x_max = x_max.max(epoch as f64);
        y_min = y_min.min(value);
        y_max = y_max.max(value);
    }
    let x_span = (x_max - x_min).max(1.0);
    let y_span = (y_max - y_min).max(f64::EPSILON);

    let chart_w = (WIDTH - 2 * MARGIN) as f64;
    let chart_h = (HEIGHT - 2 * MARGIN) as f64;

    Some(points.iter().map(|&(epoch, value)| {
        let fx = (epoch as f64 - x_min) / x_span;
        let fy = (value - y_min) / y_span;
        // NaN metric values collapse to the chart origin instead of
        // panicking; the numbers themselves stay unguarded in the core.
        let fx = if fx.is_finite() { fx.clamp(0.0, 1.0) } else { 0.0 };
        let fy = if fy.is_finite() { fy.clamp(0.0, 1.0) } else { 0.0 };
        let px = MARGIN + (fx * chart_w) as u32;
        let py = HEIGHT - MARGIN - (fy * chart_h) as u32;
        (px.min(WIDTH - 1), py.min(HEIGHT - 1))
    }).collect())
}

/// Plots a straight segment by stepping along its longer axis.
fn draw_line(img: &mut RgbImage, from: (u32, u32), to: (u32, u32), color: Rgb<u8>) {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (x1, y1) = (to.0 as f64, to.1 as f64);
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize + 1;

    for i in 0..steps {
        let t = i as f64 / (steps - 1).max(1) as f64;
        let px = (x0 + (x1 - x0) * t).round() as u32;
        let py = (y0 + (y1 - y0) * t).round() as u32;
        if px < WIDTH && py < HEIGHT {
            img.put_pixel(px, py, color);
        }
    }
}
