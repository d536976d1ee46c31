/// Trains the two-layer XOR network with the reference hyperparameters and
/// renders decision-boundary, loss, and accuracy frames every 10k epochs,
/// then stitches the frames into GIF animations under `plots/gif/`.
///
/// Run with:
///   cargo run --release
///
/// The only knob is `RUST_LOG` (defaults to `info`); everything else is
/// fixed to keep the run reproducible bit for bit.
use log::error;

use scratch_mlp::model::inference::{argmax, infer};
use scratch_mlp::plot::boundary::plot_decision_boundary;
use scratch_mlp::plot::chart::plot_series;
use scratch_mlp::plot::gif::{make_all_gif, make_gif};
use scratch_mlp::{load_xor_data, PlotDirs, PlotKind, TrainConfig, Trainer};

const SAMPLES: usize = 300;
const DATA_SEED: u64 = 0;
const WEIGHT_SEED: u64 = 2017;
const INPUT_DIM: usize = 2;
const HIDDEN_DIM: usize = 10;
const OUTPUT_DIM: usize = 2;

fn main() -> image::ImageResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dirs = PlotDirs::new("plots");
    dirs.reset()?;

    let (x, y) = load_xor_data(SAMPLES, DATA_SEED);
    let true_classes: Vec<usize> = y.data.iter().map(|row| argmax(row)).collect();

    let config = TrainConfig::default();
    let mut trainer = Trainer::new(INPUT_DIM, HIDDEN_DIM, OUTPUT_DIM, WEIGHT_SEED);

    trainer.run(&x, &y, &config, |trainer, stats| {
        let annotation = format!(
            "BATCH #: {}  ACCURACY: {:.2}  LOSS: {:.2}",
            stats.epoch, stats.accuracy, stats.loss
        );
        let result = plot_decision_boundary(
            &x,
            &true_classes,
            |grid| infer(&trainer.weights, grid),
            Some(annotation.as_str()),
            &dirs.frame(PlotKind::Boundary, stats.epoch),
        )
        .and_then(|_| {
            plot_series(
                &trainer.history.losses,
                "LOSS ESTIMATION",
                &dirs.frame(PlotKind::Loss, stats.epoch),
            )
        })
        .and_then(|_| {
            plot_series(
                &trainer.history.accuracies,
                "ACCURACY ESTIMATION",
                &dirs.frame(PlotKind::Accuracy, stats.epoch),
            )
        });

        // A failed frame should not kill a million-epoch run.
        if let Err(err) = result {
            error!("plotting epoch {} failed: {err}", stats.epoch);
        }
    });

    make_gif(&dirs.boundary(), &dirs.gif().join("boundary.gif"))?;
    make_gif(&dirs.loss(), &dirs.gif().join("loss.gif"))?;
    make_gif(&dirs.accuracy(), &dirs.gif().join("accuracy.gif"))?;
    make_all_gif(&dirs, &dirs.gif().join("all.gif"))?;

    Ok(())
}
