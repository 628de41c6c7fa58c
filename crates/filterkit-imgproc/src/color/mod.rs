mod matrix;
pub use matrix::*;

mod presets;
pub use presets::*;
