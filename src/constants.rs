// Pitch scale
pub const N_SEMITONES: usize = 128;
pub const SEMITONES_PER_OCTAVE: f32 = 12.0;
pub const REFERENCE_FREQUENCY: f32 = 440.0;
pub const REFERENCE_PITCH: f32 = 60.0;

// Roll defaults
pub const DEFAULT_BINS_PER_SEMITONE: usize = 1;
pub const DEFAULT_SMOOTH_BINS: f32 = 1.0;

// Demo sweep
pub const SWEEP_MIN_FREQ: f32 = 200.0;
pub const SWEEP_MAX_FREQ: f32 = 3000.0;
pub const SWEEP_STEP: f32 = 20.0;
pub const DEFAULT_OUTPUT_PATH: &str = "out.svg";
