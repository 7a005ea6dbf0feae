use std::{error::Error, path::PathBuf};

use clap::Parser;
use log::info;
use ndarray::Ix2;

use pitch_roll::{
    constants::{
        DEFAULT_BINS_PER_SEMITONE, DEFAULT_OUTPUT_PATH, DEFAULT_SMOOTH_BINS, SWEEP_MAX_FREQ,
        SWEEP_MIN_FREQ, SWEEP_STEP,
    },
    conversion::freq_to_pitch_array,
    encoding::roll::{pitch_to_roll, pitch_to_roll_par},
    render::plot::plot_roll,
    sweep::{frequency_sweep, SweepConfig},
    RollConfig,
};

/// Encode a frequency sweep as a pitch roll and plot it
#[derive(Parser, Debug)]
#[command(name = "pitch-roll", version)]
struct Args {
    /// First sweep frequency in Hz
    #[arg(long, default_value_t = SWEEP_MIN_FREQ)]
    min_freq: f32,

    /// Sweep upper bound in Hz (excluded)
    #[arg(long, default_value_t = SWEEP_MAX_FREQ)]
    max_freq: f32,

    /// Sweep increment per frame in Hz
    #[arg(long, default_value_t = SWEEP_STEP)]
    step: f32,

    /// Roll bins per semitone
    #[arg(long, default_value_t = DEFAULT_BINS_PER_SEMITONE)]
    bins_per_semitone: usize,

    /// Kernel half-width in bins
    #[arg(long, default_value_t = DEFAULT_SMOOTH_BINS)]
    smooth_bins: f32,

    /// Output SVG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Encode rows on the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let sweep = SweepConfig {
        min_freq: args.min_freq,
        max_freq: args.max_freq,
        step: args.step,
    };
    let config = RollConfig::new(args.bins_per_semitone, args.smooth_bins)?;

    let freq = frequency_sweep(&sweep)?;
    info!("Sweeping {} frames from {} Hz in {} Hz steps", freq.len(), sweep.min_freq, sweep.step);

    let pitch = freq_to_pitch_array(&freq);
    let roll = if args.parallel {
        pitch_to_roll_par(&pitch, &config)?
    } else {
        pitch_to_roll(&pitch, &config)?
    };
    println!("{:?}", roll.shape());

    let roll = roll.into_dimensionality::<Ix2>()?;
    plot_roll(&args.output, freq.view(), roll.view())?;
    println!("Write out to {}", args.output.display());

    Ok(())
}
