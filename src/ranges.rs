use crate::options::CharRange;

/// A named shorthand for a fixed set of character ranges.
///
/// These may be used in place of a range in an include or exclude spec, either
/// through [`CharSetSpec::named`](crate::CharSetSpec::named) or as a bare string
/// (e.g. `"alpha_lower"`) in raw options.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NamedSet {
    Alpha,
    AlphaLower,
    AlphaUpper,
    Numeric,
    AlphaNumeric,
    AlphaNumericLower,
    AlphaNumericUpper,
    Symbols,
}

const ALPHA_LOWER: &[CharRange] = &[CharRange::span(0x61, 0x7A)];
const ALPHA_UPPER: &[CharRange] = &[CharRange::span(0x41, 0x5A)];
const NUMERIC: &[CharRange] = &[CharRange::span(0x30, 0x39)];
const ALPHA: &[CharRange] = &[CharRange::span(0x61, 0x7A), CharRange::span(0x41, 0x5A)];
const ALPHA_NUMERIC: &[CharRange] = &[
    CharRange::span(0x61, 0x7A),
    CharRange::span(0x41, 0x5A),
    CharRange::span(0x30, 0x39),
];
const ALPHA_NUMERIC_LOWER: &[CharRange] =
    &[CharRange::span(0x61, 0x7A), CharRange::span(0x30, 0x39)];
const ALPHA_NUMERIC_UPPER: &[CharRange] =
    &[CharRange::span(0x41, 0x5A), CharRange::span(0x30, 0x39)];

// The printable ASCII punctuation blocks between the alphanumeric runs.
const SYMBOLS: &[CharRange] = &[
    CharRange::span(0x21, 0x2F),
    CharRange::span(0x3A, 0x40),
    CharRange::span(0x5B, 0x60),
    CharRange::span(0x7B, 0x7E),
];

impl NamedSet {
    /// Looks up a named set by its alias string.
    pub fn from_name(name: &str) -> Option<NamedSet> {
        match name {
            "alpha" => Some(NamedSet::Alpha),
            "alpha_lower" => Some(NamedSet::AlphaLower),
            "alpha_upper" => Some(NamedSet::AlphaUpper),
            "numeric" => Some(NamedSet::Numeric),
            "alpha_numeric" => Some(NamedSet::AlphaNumeric),
            "alpha_numeric_lower" => Some(NamedSet::AlphaNumericLower),
            "alpha_numeric_upper" => Some(NamedSet::AlphaNumericUpper),
            "symbols" => Some(NamedSet::Symbols),
            _ => None,
        }
    }

    /// The ranges this set expands to.
    pub fn ranges(self) -> &'static [CharRange] {
        match self {
            NamedSet::Alpha => ALPHA,
            NamedSet::AlphaLower => ALPHA_LOWER,
            NamedSet::AlphaUpper => ALPHA_UPPER,
            NamedSet::Numeric => NUMERIC,
            NamedSet::AlphaNumeric => ALPHA_NUMERIC,
            NamedSet::AlphaNumericLower => ALPHA_NUMERIC_LOWER,
            NamedSet::AlphaNumericUpper => ALPHA_NUMERIC_UPPER,
            NamedSet::Symbols => SYMBOLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_count(set: NamedSet) -> u64 {
        set.ranges()
            .iter()
            .map(|r| u64::from(r.end.unwrap_or(r.start) - r.start + 1))
            .sum()
    }

    #[test]
    fn alias_lookup() {
        assert_eq!(NamedSet::from_name("alpha_lower"), Some(NamedSet::AlphaLower));
        assert_eq!(NamedSet::from_name("symbols"), Some(NamedSet::Symbols));
        assert_eq!(NamedSet::from_name("Alpha"), None);
        assert_eq!(NamedSet::from_name(""), None);
    }

    #[test]
    fn expansion_sizes() {
        assert_eq!(point_count(NamedSet::Alpha), 52);
        assert_eq!(point_count(NamedSet::AlphaLower), 26);
        assert_eq!(point_count(NamedSet::AlphaUpper), 26);
        assert_eq!(point_count(NamedSet::Numeric), 10);
        assert_eq!(point_count(NamedSet::AlphaNumeric), 62);
        assert_eq!(point_count(NamedSet::AlphaNumericLower), 36);
        assert_eq!(point_count(NamedSet::AlphaNumericUpper), 36);
        assert_eq!(point_count(NamedSet::Symbols), 32);
    }

    #[test]
    fn symbols_cover_ascii_punctuation() {
        let expected: Vec<u32> = (0x21..=0x7E)
            .filter(|cp| !(0x30..=0x39).contains(cp))
            .filter(|cp| !(0x41..=0x5A).contains(cp))
            .filter(|cp| !(0x61..=0x7A).contains(cp))
            .collect();
        let mut actual = Vec::new();
        for range in NamedSet::Symbols.ranges() {
            for cp in range.start..=range.end.unwrap_or(range.start) {
                actual.push(cp);
            }
        }
        assert_eq!(actual, expected);
    }
}
