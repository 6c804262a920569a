mod generate;
mod options;
mod pool;
mod ranges;
mod rng;

pub use generate::{generate, generate_value, generate_with, is_int, Error};
pub use options::{CharRange, CharSetSpec, Options, BMP_MAX};
pub use pool::character_list;
pub use ranges::NamedSet;
pub use rng::{RandomSource, WyRandSource};
