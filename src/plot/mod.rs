pub mod folders;
pub mod font;
pub mod chart;
pub mod boundary;
pub mod gif;

pub use folders::{PlotDirs, PlotKind};
pub use chart::plot_series;
pub use boundary::plot_decision_boundary;
pub use gif::{make_gif, make_all_gif};
