use crate::{generate::is_int, ranges::NamedSet};
use serde_json::Value;

/// The last code point of the Basic Multilingual Plane. Characters beyond it
/// are unsupported and silently contribute nothing to any pool.
pub const BMP_MAX: u32 = 0xFFFF;

/// A single code point or an inclusive range of code points.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CharRange {
    pub start: u32,
    /// Inclusive end of the range. `None` means a single code point.
    pub end: Option<u32>,
}
impl CharRange {
    /// A range containing a single code point.
    pub const fn point(cp: u32) -> CharRange {
        CharRange { start: cp, end: None }
    }

    /// An inclusive range of code points.
    pub const fn span(start: u32, end: u32) -> CharRange {
        CharRange { start, end: Some(end) }
    }
}
impl From<char> for CharRange {
    fn from(ch: char) -> CharRange {
        CharRange::point(ch as u32)
    }
}
impl From<(char, char)> for CharRange {
    fn from((start, end): (char, char)) -> CharRange {
        CharRange::span(start as u32, end as u32)
    }
}

/// One include or exclude entry: a list of character ranges, plus (for include
/// entries) the minimum number of characters that must be drawn from it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CharSetSpec {
    pub chars: Vec<CharRange>,
    pub min: usize,
}
impl CharSetSpec {
    pub fn new() -> CharSetSpec {
        Default::default()
    }

    /// Adds a single character.
    pub fn point(&mut self, ch: char) -> &mut Self {
        self.chars.push(ch.into());
        self
    }

    /// Adds an inclusive character range.
    pub fn range(&mut self, start: char, end: char) -> &mut Self {
        self.chars.push((start, end).into());
        self
    }

    /// Adds an inclusive range of raw code points.
    pub fn codepoints(&mut self, start: u32, end: u32) -> &mut Self {
        self.chars.push(CharRange::span(start, end));
        self
    }

    /// Adds every range of a named set.
    pub fn named(&mut self, set: NamedSet) -> &mut Self {
        self.chars.extend_from_slice(set.ranges());
        self
    }

    /// Sets the minimum number of characters drawn from this entry. Only
    /// meaningful on include entries.
    pub fn min(&mut self, min: usize) -> &mut Self {
        self.min = min;
        self
    }
}

/// A generation configuration: which characters are eligible, which are
/// excluded, and any per-entry minimum counts.
///
/// [`Options::default`] allows the entire Basic Multilingual Plane, the
/// behavior of passing no options at all. [`Options::new`] starts from an
/// empty include list, which allows no characters until entries are added.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    pub include: Vec<CharSetSpec>,
    pub exclude: Vec<CharSetSpec>,
}
impl Default for Options {
    fn default() -> Options {
        Options {
            include: vec![CharSetSpec { chars: vec![CharRange::span(0, BMP_MAX)], min: 0 }],
            exclude: Vec::new(),
        }
    }
}
impl Options {
    pub fn new() -> Options {
        Options { include: Vec::new(), exclude: Vec::new() }
    }

    /// Adds an include entry.
    pub fn include(&mut self, spec: CharSetSpec) -> &mut Self {
        self.include.push(spec);
        self
    }

    /// Adds an exclude entry. `min` on exclude entries is ignored.
    pub fn exclude(&mut self, spec: CharSetSpec) -> &mut Self {
        self.exclude.push(spec);
        self
    }

    /// Normalizes raw JSON-shaped options into a canonical [`Options`].
    ///
    /// This never fails: unknown keys are ignored, non-array `include`/
    /// `exclude` values leave the defaults in place, and malformed entries are
    /// dropped. A present `include` array replaces the full-BMP default
    /// entirely, so an explicit empty list allows no characters at all.
    pub fn from_value(raw: &Value) -> Options {
        let mut opts = Options::default();
        let Some(obj) = raw.as_object() else { return opts };

        if let Some(Value::Array(entries)) = obj.get("include") {
            opts.include = entries.iter().filter_map(parse_spec).collect();
        }
        if let Some(Value::Array(entries)) = obj.get("exclude") {
            opts.exclude = entries.iter().filter_map(parse_spec).collect();
        }
        opts
    }
}

/// Parses one raw include/exclude entry, or `None` if it is malformed.
fn parse_spec(entry: &Value) -> Option<CharSetSpec> {
    let obj = entry.as_object()?;
    let ranges = obj.get("chars")?.as_array()?;

    let mut spec = CharSetSpec::new();
    for range in ranges {
        // Each range is itself an array; the first element is the start (or a
        // named set), the optional second element is the inclusive end.
        let Some(range) = range.as_array() else { continue };
        let Some(start) = range.first() else { continue };

        if let Some(set) = start.as_str().and_then(NamedSet::from_name) {
            spec.named(set);
            continue;
        }
        let Some(start) = parse_endpoint(start) else { continue };
        match range.get(1).and_then(parse_endpoint) {
            Some(end) => spec.chars.push(CharRange::span(start, end)),
            None => spec.chars.push(CharRange::point(start)),
        }
    }

    if let Some(min) = obj.get("min") {
        // Honored only when a strictly positive whole number, by the same
        // truncation round-trip `is_int` applies to lengths, so `3.0` counts.
        if is_int(min) {
            if let Some(min) = min.as_f64().filter(|&min| min > 0.0) {
                spec.min = min as usize;
            }
        }
    }
    Some(spec)
}

/// A number is used as a code point directly; a string contributes its first
/// character's code point.
fn parse_endpoint(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.chars().next().map(|ch| ch as u32),
        _ => None,
    }
}
