use crate::{
    options::Options,
    pool::build_pool,
    rng::{RandomSource, WyRandSource},
};
use roaring::RoaringBitmap;
use serde_json::Value;
use std::slice;
use tracing::{debug, trace};

/// The errors `generate` may return. Both indicate caller mistakes in the
/// `length` argument; bad options never error, they only narrow the pool.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Non-integer length type")]
    NonIntegerLength,
    #[error("Length must be a positive integer")]
    NegativeLength,
}

/// Generates a random string of `length` characters drawn from the characters
/// `options` allows.
///
/// Every include entry with a minimum count contributes at least that many
/// characters from its own pool, so the result may be longer than `length`
/// when the minimums sum past it. An empty pool produces an empty string.
pub fn generate(length: i64, options: &Options) -> Result<String, Error> {
    generate_with(length, options, &mut WyRandSource::default())
}

/// As [`generate`], drawing all randomness from the given source.
pub fn generate_with(
    length: i64,
    options: &Options,
    rng: &mut dyn RandomSource,
) -> Result<String, Error> {
    if length < 0 {
        return Err(Error::NegativeLength);
    }
    let length = length as u64;

    // No password can be generated when no characters are eligible.
    let all = build_pool(&options.include, &options.exclude);
    if all.is_empty() {
        return Ok(String::new());
    }

    // Satisfy each minimum from that entry's own pool. Draws are independent
    // and with replacement, and an unsatisfiable minimum simply draws nothing.
    let mut content = Vec::new();
    for spec in options.include.iter().filter(|spec| spec.min > 0) {
        let subset = build_pool(slice::from_ref(spec), &options.exclude);
        trace!("Drawing {} required characters from a pool of {}", spec.min, subset.len());
        draw_into(&mut content, &subset, spec.min as u64, rng);
    }

    // Fill the remainder of the requested length from the full pool.
    let fill = length.saturating_sub(content.len() as u64);
    draw_into(&mut content, &all, fill, rng);

    shuffle(&mut content, rng);
    debug!("Generated {} characters", content.len());
    Ok(content.into_iter().collect())
}

/// Generates from JSON-shaped arguments, the way a host application hands
/// them over: `length` must be (convertible to) an integer, and `options` is
/// normalized leniently via [`Options::from_value`].
pub fn generate_value(length: &Value, options: &Value) -> Result<String, Error> {
    if !is_int(length) {
        return Err(Error::NonIntegerLength);
    }
    let length = length
        .as_i64()
        .or_else(|| length.as_f64().map(|f| f as i64))
        .unwrap_or(i64::MAX);
    generate(length, &Options::from_value(options))
}

/// Whether a JSON value holds an integer: a number whose truncation toward
/// zero reproduces it exactly. Numeric strings do not count.
pub fn is_int(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64()
                || n.is_u64()
                || n.as_f64().is_some_and(|f| f.is_finite() && f.trunc() == f)
        }
        _ => false,
    }
}

/// Appends `count` uniform draws (with replacement) from `pool`, or nothing
/// when the pool is empty.
fn draw_into(content: &mut Vec<char>, pool: &RoaringBitmap, count: u64, rng: &mut dyn RandomSource) {
    if pool.is_empty() {
        return;
    }
    for _ in 0..count {
        let index = rng.below(pool.len()) as u32;
        let cp = pool.select(index).expect("Index past end of pool");
        content.push(char::from_u32(cp).expect("Invalid char in pool"));
    }
}

/// Fisher-Yates shuffle over whole characters.
fn shuffle(content: &mut [char], rng: &mut dyn RandomSource) {
    for current in (1..content.len()).rev() {
        let swapped = rng.below(current as u64 + 1) as usize;
        content.swap(current, swapped);
    }
}
