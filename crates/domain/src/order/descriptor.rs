//! Parser for order descriptors such as `BC:2,BA:1,B:2`.

use crate::catalog::DonutKind;
use crate::error::ShopError;

use super::DonutCounts;

pub(super) fn parse(descriptor: &str) -> Result<DonutCounts, ShopError> {
    let mut segments: Vec<&str> = descriptor.split(',').collect();
    // A trailing comma is tolerated; empty segments elsewhere are not.
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    let mut counts = DonutCounts::new();
    let mut order_size: u64 = 0;
    for segment in segments {
        let (kind, count) = parse_segment(segment)?;
        // Bounding the order size also bounds every per-kind count.
        order_size = order_size
            .checked_add(count)
            .ok_or_else(|| ShopError::malformed(segment, "count is out of range"))?;
        counts.add_occurrences(kind, count);
    }
    Ok(counts)
}

fn parse_segment(segment: &str) -> Result<(DonutKind, u64), ShopError> {
    if segment.is_empty() {
        return Err(ShopError::malformed(segment, "empty segment"));
    }

    let mut parts = segment.split(':');
    let (Some(code), Some(count), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ShopError::malformed(segment, "expected CODE:COUNT"));
    };
    if code.is_empty() {
        return Err(ShopError::malformed(segment, "missing donut code"));
    }

    let kind = DonutKind::from_code(code)?;
    let count = parse_count(segment, count)?;
    Ok((kind, count))
}

fn parse_count(segment: &str, count: &str) -> Result<u64, ShopError> {
    if let Some(digits) = count.strip_prefix('-')
        && is_decimal(digits)
    {
        return Err(ShopError::malformed(segment, "count must not be negative"));
    }
    if !is_decimal(count) {
        return Err(ShopError::malformed(segment, "count is not a decimal number"));
    }
    count
        .parse()
        .map_err(|_| ShopError::malformed(segment, "count is out of range"))
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_reason(descriptor: &str) -> &'static str {
        match parse(descriptor) {
            Err(ShopError::MalformedOrder { reason, .. }) => reason,
            other => panic!("expected malformed order, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_counts() {
        let counts = parse("BC:2,BA:1,B:2").unwrap();
        assert_eq!(counts.occurrences_of(DonutKind::BostonCream), 2);
        assert_eq!(counts.occurrences_of(DonutKind::BavarianCream), 1);
        assert_eq!(counts.occurrences_of(DonutKind::Blueberry), 2);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_repeated_codes_accumulate() {
        let counts = parse("G:1,BC:2,G:4").unwrap();
        assert_eq!(counts.occurrences_of(DonutKind::Glazed), 5);
        assert_eq!(counts.total(), 7);
    }

    #[test]
    fn test_trailing_commas_are_ignored() {
        assert_eq!(parse("BC:1,").unwrap().total(), 1);
        assert_eq!(parse("BC:1,,").unwrap().total(), 1);
    }

    #[test]
    fn test_empty_descriptor_is_an_empty_order() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_zero_count_is_accepted() {
        let counts = parse("BC:0,G:1").unwrap();
        assert_eq!(counts.occurrences_of(DonutKind::BostonCream), 0);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_internal_empty_segment_is_malformed() {
        assert_eq!(malformed_reason("BC:1,,G:2"), "empty segment");
        assert_eq!(malformed_reason(",BC:1"), "empty segment");
    }

    #[test]
    fn test_bad_shapes_are_malformed() {
        assert_eq!(malformed_reason("BC"), "expected CODE:COUNT");
        assert_eq!(malformed_reason("BC:1:2"), "expected CODE:COUNT");
        assert_eq!(malformed_reason(":3"), "missing donut code");
    }

    #[test]
    fn test_bad_counts_are_malformed() {
        assert_eq!(malformed_reason("BC:-1"), "count must not be negative");
        assert_eq!(malformed_reason("BC:two"), "count is not a decimal number");
        assert_eq!(malformed_reason("BC:"), "count is not a decimal number");
        assert_eq!(malformed_reason("BC:+3"), "count is not a decimal number");
        assert_eq!(
            malformed_reason("BC:99999999999999999999999"),
            "count is out of range"
        );
    }

    #[test]
    fn test_combined_counts_out_of_range_are_malformed() {
        assert_eq!(
            malformed_reason("BC:18446744073709551615,G:2"),
            "count is out of range"
        );
        assert_eq!(
            malformed_reason("G:18446744073709551615,G:5"),
            "count is out of range"
        );
        assert_eq!(
            parse("BC:18446744073709551614,G:1").unwrap().total(),
            u64::MAX
        );
    }

    #[test]
    fn test_unknown_code_is_reported_before_count() {
        assert_eq!(
            parse("XX:-1"),
            Err(ShopError::UnknownCode {
                code: "XX".to_string()
            })
        );
    }
}
