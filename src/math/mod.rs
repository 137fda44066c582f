pub mod examples;
pub mod mode;
pub mod normalize;
pub mod pitch;
pub mod sampler;
pub mod samples;

pub use mode::GraphMode;
pub use pitch::PitchSign;
pub use samples::{RawSamples, SampleSet};
