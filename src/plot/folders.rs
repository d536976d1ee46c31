use std::io;
use std::path::{Path, PathBuf};

/// The three per-epoch frame series emitted during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Accuracy,
    Boundary,
    Loss,
}

/// Layout of the plot output tree.
///
/// ```text
/// <root>/accuracy/   accuracy curve frames
/// <root>/boundary/   decision boundary frames
/// <root>/loss/       loss curve frames
/// <root>/all/        stitched side-by-side composite frames
/// <root>/gif/        assembled animations
/// ```
///
/// Nothing here runs implicitly: the caller decides when (and whether) to
/// wipe previous output by calling `reset()`.
#[derive(Debug, Clone)]
pub struct PlotDirs {
    root: PathBuf,
}

impl PlotDirs {
    pub fn new(root: impl Into<PathBuf>) -> PlotDirs {
        PlotDirs { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn accuracy(&self) -> PathBuf {
        self.dir(PlotKind::Accuracy)
    }

    pub fn boundary(&self) -> PathBuf {
        self.dir(PlotKind::Boundary)
    }

    pub fn loss(&self) -> PathBuf {
        self.dir(PlotKind::Loss)
    }

    /// Directory holding one frame series.
    pub fn dir(&self, kind: PlotKind) -> PathBuf {
        let name = match kind {
            PlotKind::Accuracy => "accuracy",
            PlotKind::Boundary => "boundary",
            PlotKind::Loss => "loss",
        };
        self.root.join(name)
    }

    pub fn all(&self) -> PathBuf {
        self.root.join("all")
    }

    pub fn gif(&self) -> PathBuf {
        self.root.join("gif")
    }

    /// Removes any frames from a previous run and recreates the full tree.
    /// Explicit opt-in; never called as a side effect of anything else.
    pub fn reset(&self) -> io::Result<()> {
        for dir in [
            self.accuracy(),
            self.boundary(),
            self.loss(),
            self.all(),
            self.gif(),
        ] {
            if dir.exists() {
                std::fs::remove_dir_all(&dir)?;
            }
            std::fs::create_dir_all(&dir)?;
        }
        Ok(())
    }

    /// Frame path for one series/epoch pair, e.g. `loss/image_9999.png`.
    /// Keyed by `PlotKind` so a frame cannot land in the wrong series.
    pub fn frame(&self, kind: PlotKind, epoch: usize) -> PathBuf {
        self.dir(kind).join(format!("image_{epoch}.png"))
    }
}
