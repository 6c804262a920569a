use crate::options::{CharSetSpec, Options, BMP_MAX};
use roaring::RoaringBitmap;
use tracing::debug;

/// Builds the pool of eligible code points: the union of every include range,
/// minus the union of every exclude range.
///
/// Endpoints beyond the BMP contribute no points rather than erroring, and the
/// UTF-16 surrogate block is never eligible since a Rust `String` cannot hold
/// lone surrogates. Exclusion runs only after every include range has been
/// accumulated, so overlapping includes cannot resurrect an excluded point.
pub fn build_pool(include: &[CharSetSpec], exclude: &[CharSetSpec]) -> RoaringBitmap {
    let mut pool = RoaringBitmap::new();
    for spec in include {
        for range in &spec.chars {
            let end = range.end.unwrap_or(range.start).min(BMP_MAX);
            if range.start <= end {
                pool.insert_range(range.start..=end);
            }
        }
    }
    for spec in exclude {
        for range in &spec.chars {
            let end = range.end.unwrap_or(range.start);
            if range.start <= end {
                pool.remove_range(range.start..=end);
            }
        }
    }
    pool.remove_range(0xD800..=0xDFFF);

    debug!("Built pool of {} codepoints", pool.len());
    pool
}

/// Returns the full set of code points a given configuration may generate.
pub fn character_list(options: &Options) -> RoaringBitmap {
    build_pool(&options.include, &options.exclude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CharRange;

    fn spec(chars: Vec<CharRange>) -> CharSetSpec {
        CharSetSpec { chars, min: 0 }
    }

    #[test]
    fn union_of_overlapping_ranges_deduplicates() {
        let pool = build_pool(
            &[
                spec(vec![CharRange::span(0x41, 0x48)]),
                spec(vec![CharRange::span(0x45, 0x4A), CharRange::point(0x41)]),
            ],
            &[],
        );
        assert_eq!(pool.len(), 10);
        assert_eq!(pool.min(), Some(0x41));
        assert_eq!(pool.max(), Some(0x4A));
    }

    #[test]
    fn exclude_takes_precedence() {
        let pool = build_pool(
            &[spec(vec![CharRange::span(0x30, 0x39)])],
            &[spec(vec![CharRange::point(0x34)])],
        );
        assert_eq!(pool.len(), 9);
        assert!(!pool.contains(0x34));
    }

    #[test]
    fn excluding_absent_points_is_a_noop() {
        let pool = build_pool(
            &[spec(vec![CharRange::span(0x61, 0x64)])],
            &[spec(vec![CharRange::span(0x30, 0x39)])],
        );
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn alphanumeric_scenario() {
        // A-Z plus 0-8 is 26 + 9 = 35 characters; 9 stays out.
        let pool = build_pool(
            &[spec(vec![CharRange::span(0x41, 0x5A), CharRange::span(0x30, 0x38)])],
            &[spec(vec![])],
        );
        assert_eq!(pool.len(), 35);
        for cp in [0x41, 0x42, 0x43, 0x4D, 0x5A, 0x30, 0x35, 0x38] {
            assert!(pool.contains(cp));
        }
        assert!(!pool.contains(0x39));
    }

    #[test]
    fn astral_endpoints_are_clamped() {
        let pool = build_pool(&[spec(vec![CharRange::span(0xFFFE, 0x10010)])], &[]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.max(), Some(0xFFFF));

        let pool = build_pool(&[spec(vec![CharRange::point(0x1F600)])], &[]);
        assert!(pool.is_empty());
    }

    #[test]
    fn surrogates_are_never_eligible() {
        let pool = build_pool(&[spec(vec![CharRange::span(0, 0xFFFF)])], &[]);
        assert_eq!(pool.len(), 0x10000 - 0x800);
        assert!(!pool.contains(0xD800));
        assert!(!pool.contains(0xDFFF));
        assert!(pool.contains(0xD7FF));
        assert!(pool.contains(0xE000));
    }

    #[test]
    fn inverted_range_adds_nothing() {
        let pool = build_pool(&[spec(vec![CharRange::span(0x50, 0x40)])], &[]);
        assert!(pool.is_empty());
    }

    #[test]
    fn character_list_is_deterministic() {
        let mut opts = Options::new();
        let mut inc = CharSetSpec::new();
        inc.range('a', 'z').range('0', '9');
        let mut exc = CharSetSpec::new();
        exc.point('q');
        opts.include(inc).exclude(exc);

        let first = character_list(&opts);
        let second = character_list(&opts);
        assert_eq!(first, second);
        assert_eq!(first.len(), 35);
        assert!(!first.contains('q' as u32));
    }
}
