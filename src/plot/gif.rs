use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageResult, RgbaImage};
use log::warn;

use crate::plot::folders::PlotDirs;

/// Per-frame delay of the assembled animations.
const FRAME_DELAY_MS: u32 = 250;

/// Assembles every `image_<epoch>.png` in `input_dir` into an animated GIF.
///
/// Frames are ordered by the numeric suffix embedded in the file name, not
/// by file modification time, so re-running against existing frames gives a
/// stable animation.
pub fn make_gif(input_dir: &Path, output: &Path) -> ImageResult<()> {
    let frames = numbered_frames(input_dir)?;
    if frames.is_empty() {
        warn!("no frames in {}, skipping {}", input_dir.display(), output.display());
        return Ok(());
    }

    let mut encoder = new_encoder(output)?;
    for path in frames {
        let frame = image::open(&path)?.to_rgba8();
        encoder.encode_frame(to_frame(frame))?;
    }
    Ok(())
}

/// Stitches the accuracy, boundary, and loss frames of each reported epoch
/// side by side, saves the composites under `all/`, and assembles them into
/// one GIF.
pub fn make_all_gif(dirs: &PlotDirs, output: &Path) -> ImageResult<()> {
    let accuracy_frames = numbered_frames(&dirs.accuracy())?;
    if accuracy_frames.is_empty() {
        warn!("no frames under {}, skipping {}", dirs.root().display(), output.display());
        return Ok(());
    }

    let mut encoder = new_encoder(output)?;
    for (index, accuracy_path) in accuracy_frames.iter().enumerate() {
        let name = accuracy_path.file_name().unwrap_or_default();
        let panels = [
            image::open(accuracy_path)?.to_rgba8(),
            image::open(dirs.boundary().join(name))?.to_rgba8(),
            image::open(dirs.loss().join(name))?.to_rgba8(),
        ];

        let composite = stitch_horizontal(&panels);
        composite.save(dirs.all().join(format!("image_{index}.png")))?;
        encoder.encode_frame(to_frame(composite))?;
    }
    Ok(())
}

/// `image_<n>.png` files of a directory, sorted by `n`.
fn numbered_frames(dir: &Path) -> ImageResult<Vec<PathBuf>> {
    let mut frames: Vec<(u64, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if let Some(index) = frame_index(&path) {
            frames.push((index, path));
        }
    }
    frames.sort_by_key(|(index, _)| *index);
    Ok(frames.into_iter().map(|(_, path)| path).collect())
}

/// Parses the `<n>` of an `image_<n>.png` path; `None` for anything else.
fn frame_index(path: &Path) -> Option<u64> {
    if path.extension()? != "png" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix("image_")?.parse().ok()
}

fn new_encoder(output: &Path) -> ImageResult<GifEncoder<BufWriter<File>>> {
    let writer = BufWriter::new(File::create(output)?);
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    Ok(encoder)
}

fn to_frame(buffer: RgbaImage) -> Frame {
    Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1))
}

/// Concatenates images left to right on a white canvas tall enough for the
/// tallest panel.
fn stitch_horizontal(panels: &[RgbaImage]) -> RgbaImage {
    let width: u32 = panels.iter().map(|p| p.width()).sum();
    let height: u32 = panels.iter().map(|p| p.height()).max().unwrap_or(0);

    let mut canvas = RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
    let mut offset: i64 = 0;
    for panel in panels {
        image::imageops::overlay(&mut canvas, panel, offset, 0);
        offset += panel.width() as i64;
    }
    canvas
}
