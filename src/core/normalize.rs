//! Normalization of display-formatted numbers (`"$123.45M"`, `"-$2.5K"`, `"1.2B"`).

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serializer;
use std::str::FromStr;

fn magnitude(suffix: char) -> Option<Decimal> {
    match suffix {
        'K' => Some(Decimal::from(1_000u64)),
        'M' => Some(Decimal::from(1_000_000u64)),
        'B' => Some(Decimal::from(1_000_000_000u64)),
        _ => None,
    }
}

/// Converts an abbreviated, currency-formatted string into a signed number.
///
/// Every character other than ASCII digits, `.` and `-` is dropped before parsing,
/// then the value is scaled if the *original* input ends in `K`, `M` or `B`
/// (case-sensitive). Absent, empty or unparseable input yields zero, so noise
/// such as `"N/A"` normalizes to `0` rather than signaling an error.
///
/// The same silent zero covers magnitudes beyond [`Decimal`]'s 28-digit range,
/// either in the digits themselves (`"99999999999999999999999999999B"`) or
/// after scaling (`"100000000000000000000B"`). No fund figure comes close.
///
/// ```
/// use etf_snapshot::core::normalize::parse_abbreviated_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_abbreviated_number(Some("$123.45M")), Decimal::from(123_450_000));
/// assert_eq!(parse_abbreviated_number(Some("-$2.5K")), Decimal::from(-2_500));
/// assert_eq!(parse_abbreviated_number(None), Decimal::ZERO);
/// ```
#[must_use]
pub fn parse_abbreviated_number(input: Option<&str>) -> Decimal {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return Decimal::ZERO;
    };

    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let Ok(value) = Decimal::from_str(&digits) else {
        return Decimal::ZERO;
    };

    raw.chars()
        .next_back()
        .and_then(magnitude)
        .map_or(value, |m| value.checked_mul(m).unwrap_or(Decimal::ZERO))
        .normalize()
}

/// Serializes an amount as a JSON integer when it has no fractional part
/// (`123450000`), and as a float otherwise (`87.51`).
pub(crate) fn serialize_number<S: Serializer>(
    value: &Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let value = value.normalize();
    match value.to_i64() {
        Some(whole) if value.scale() == 0 => serializer.serialize_i64(whole),
        _ => rust_decimal::serde::float::serialize(&value, serializer),
    }
}
