use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};

use crate::math::matrix::Matrix;
use crate::plot::font::draw_text;

/// Grid step in data units; matches the reference plots.
const GRID_STEP: f64 = 0.01;
/// Padding around the data range, in data units.
const PADDING: f64 = 0.5;

const CLASS_0_FILL: Rgb<u8> = Rgb([255, 214, 214]);
const CLASS_1_FILL: Rgb<u8> = Rgb([214, 222, 255]);
const CLASS_0_POINT: Rgb<u8> = Rgb([200, 24, 24]);
const CLASS_1_POINT: Rgb<u8> = Rgb([24, 48, 200]);
const ANNOTATION: Rgb<u8> = Rgb([16, 16, 16]);

/// Renders the decision surface of `predict` over the bounding box of the
/// 2-D sample set `x`, with the samples overlaid colored by true class and
/// `text` (batch number, accuracy, loss) rasterized in the top-left corner.
///
/// `predict` receives a matrix of grid points (one row per point) and
/// returns a class index per row; `infer` partially applied with the current
/// weights is the expected collaborator. One call is issued per grid row to
/// bound the size of any single prediction batch.
pub fn plot_decision_boundary<F>(
    x: &Matrix,
    labels: &[usize],
    predict: F,
    text: Option<&str>,
    path: &Path,
) -> ImageResult<()>
where
    F: Fn(&Matrix) -> Vec<usize>,
{
    assert_eq!(x.cols, 2, "decision boundary plots require 2-D inputs");
    assert_eq!(x.rows, labels.len(), "one label per sample row");

    let (x_min, x_max) = padded_range(x, 0);
    let (y_min, y_max) = padded_range(x, 1);

    let width = ((x_max - x_min) / GRID_STEP).ceil() as u32;
    let height = ((y_max - y_min) / GRID_STEP).ceil() as u32;

    let mut img = RgbImage::new(width, height);

    // Fill each pixel with the predicted class of its grid point. Image rows
    // run top-down while the data y axis runs bottom-up.
    for py in 0..height {
        let data_y = y_max - (py as f64 + 0.5) * GRID_STEP;
        let row_points: Vec<Vec<f64>> = (0..width)
            .map(|px| vec![x_min + (px as f64 + 0.5) * GRID_STEP, data_y])
            .collect();
        let classes = predict(&Matrix::from_data(row_points));

        for (px, &class) in classes.iter().enumerate() {
            let fill = if class == 0 { CLASS_0_FILL } else { CLASS_1_FILL };
            img.put_pixel(px as u32, py, fill);
        }
    }

    // Overlay the samples as 3x3 dots.
    for (row, &label) in x.data.iter().zip(labels.iter()) {
        let px = ((row[0] - x_min) / GRID_STEP) as i64;
        let py = ((y_max - row[1]) / GRID_STEP) as i64;
        let color = if label == 0 { CLASS_0_POINT } else { CLASS_1_POINT };

        for dy in -1..=1 {
            for dx in -1..=1 {
                let (qx, qy) = (px + dx, py + dy);
                if qx >= 0 && qy >= 0 && (qx as u32) < width && (qy as u32) < height {
                    img.put_pixel(qx as u32, qy as u32, color);
                }
            }
        }
    }

    if let Some(text) = text {
        draw_text(&mut img, text, 8, 8, ANNOTATION);
    }

    img.save(path)
}

/// Min and max of one feature column, padded outward.
fn padded_range(x: &Matrix, col: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in &x.data {
        min = min.min(row[col]);
        max = max.max(row[col]);
    }
    (min - PADDING, max + PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let x = Matrix::from_data(vec![vec![-1.0, 2.0], vec![3.0, -2.0]]);

        assert_eq!(padded_range(&x, 0), (-1.5, 3.5));
        assert_eq!(padded_range(&x, 1), (-2.5, 2.5));
    }

    #[test]
    fn test_boundary_plot_writes_an_image_covering_the_padded_range() {
        let dir = std::env::temp_dir().join("scratch_mlp_test_boundary");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("boundary.png");

        let x = Matrix::from_data(vec![
            vec![-1.0, -1.0],
            vec![1.0, 1.0],
            vec![-1.0, 1.0],
            vec![1.0, -1.0],
        ]);
        let labels = vec![0, 0, 1, 1];

        // Split on the sign of the first coordinate.
        let predict = |points: &Matrix| {
            points.data.iter()
                .map(|row| usize::from(row[0] > 0.0))
                .collect::<Vec<usize>>()
        };
        plot_decision_boundary(&x, &labels, predict, Some("BATCH #: 0"), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        // Range [-1.5, 1.5] at step 0.01 in both axes.
        assert_eq!((img.width(), img.height()), (300, 300));
        // Left half predicted class 0, right half class 1.
        assert_eq!(*img.get_pixel(10, 150), CLASS_0_FILL);
        assert_eq!(*img.get_pixel(290, 150), CLASS_1_FILL);
        // The annotation is rasterized: 'B' puts ink at the text origin.
        assert_eq!(*img.get_pixel(8, 8), ANNOTATION);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
