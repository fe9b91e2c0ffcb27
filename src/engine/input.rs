use tracing::warn;

use crate::error::{Result, SoapError};
use crate::models::{OilQuantities, OilType, MAX_OIL_GRAMS};
use crate::reference::parse_oil;

/// Permissive grams parser for live form input.
///
/// Reads the longest leading decimal number and ignores whatever follows, so
/// `"200g"` is 200 and `"12.5 grams"` is 12.5. Text with no leading number,
/// or a number that overflows, reads as 0. Negative values are clamped to 0
/// and values above [`MAX_OIL_GRAMS`] to that cap.
pub fn parse_quantity(raw: &str) -> f64 {
    let value = match numeric_prefix(raw.trim()).parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return 0.0,
    };
    if value < 0.0 {
        warn!(value, "negative oil quantity clamped to 0");
        return 0.0;
    }
    if value > MAX_OIL_GRAMS {
        warn!(value, cap = MAX_OIL_GRAMS, "oil quantity clamped to cap");
        return MAX_OIL_GRAMS;
    }
    value
}

/// Leading `[+-]digits[.digits][e[+-]digits]` of `text`, or `""`.
///
/// The exponent is only taken when at least one digit follows it.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    &text[..end]
}

/// Copy of `current` with `oil` set from raw text input.
pub fn update_oil(current: &OilQuantities, oil: OilType, raw_value: &str) -> OilQuantities {
    let mut updated = *current;
    updated.set_clamped(oil, parse_quantity(raw_value));
    updated
}

/// Apply a `NAME=GRAMS` entry from the command line.
///
/// The oil name must be known; the grams text goes through [`update_oil`].
pub fn apply_oil_entry(current: &OilQuantities, entry: &str) -> Result<OilQuantities> {
    let (name, raw) = entry.split_once('=').ok_or_else(|| {
        SoapError::InvalidInput(format!("expected NAME=GRAMS, got '{}'", entry))
    })?;
    let oil = parse_oil(name)?;
    Ok(update_oil(current, oil, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("200"), 200.0);
        assert_eq!(parse_quantity(" 12.5 "), 12.5);
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity("-40"), 0.0);
        assert_eq!(parse_quantity("NaN"), 0.0);
        assert_eq!(parse_quantity("inf"), 0.0);
        assert_eq!(parse_quantity("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_quantity_reads_leading_number() {
        assert_eq!(parse_quantity("200g"), 200.0);
        assert_eq!(parse_quantity("12.5 grams"), 12.5);
        assert_eq!(parse_quantity(".5"), 0.5);
        assert_eq!(parse_quantity("5."), 5.0);
        assert_eq!(parse_quantity("+75oz"), 75.0);
        assert_eq!(parse_quantity("2e2g"), 200.0);
        assert_eq!(parse_quantity("3e"), 3.0);
        assert_eq!(parse_quantity("3e+x"), 3.0);
        assert_eq!(parse_quantity("-3x"), 0.0);
        assert_eq!(parse_quantity("g200"), 0.0);
        assert_eq!(parse_quantity("."), 0.0);
        assert_eq!(parse_quantity("-"), 0.0);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("1.25kg"), "1.25");
        assert_eq!(numeric_prefix("-0.5e-1 x"), "-0.5e-1");
        assert_eq!(numeric_prefix("7E3"), "7E3");
        assert_eq!(numeric_prefix("1e"), "1");
        assert_eq!(numeric_prefix("abc"), "");
        assert_eq!(numeric_prefix("+."), "");
        assert_eq!(numeric_prefix(""), "");
    }

    #[test]
    fn test_parse_quantity_caps_huge_values() {
        assert_eq!(parse_quantity("1e308"), MAX_OIL_GRAMS);
        assert_eq!(parse_quantity("5e9 grams"), MAX_OIL_GRAMS);
        // overflows to infinity
        assert_eq!(parse_quantity("1e400"), 0.0);
    }

    #[test]
    fn test_update_oil_huge_input_keeps_results_finite() {
        let mut oils = OilQuantities::zeroed();
        for oil in OilType::ALL {
            oils = update_oil(&oils, oil, "1e308");
        }
        assert_eq!(oils.get(OilType::Coconut), MAX_OIL_GRAMS);

        let result = crate::engine::compute_formulation(&oils);
        assert!(result.lye.is_finite());
        assert!(result.water.is_finite());
        assert!(result.total_oils.is_finite());
        assert_eq!(result.total_oils, 8.0 * MAX_OIL_GRAMS);
    }

    #[test]
    fn test_update_oil_leaves_input_untouched() {
        let current = OilQuantities::zeroed().with(OilType::Olive, 100.0).unwrap();
        let updated = update_oil(&current, OilType::Coconut, "50");

        assert_eq!(current.get(OilType::Coconut), 0.0);
        assert_eq!(updated.get(OilType::Coconut), 50.0);
        assert_eq!(updated.get(OilType::Olive), 100.0);
    }

    #[test]
    fn test_update_oil_clearing_field_zeroes_it() {
        let current = OilQuantities::zeroed().with(OilType::Neem, 80.0).unwrap();
        assert_eq!(update_oil(&current, OilType::Neem, "").get(OilType::Neem), 0.0);
        assert_eq!(update_oil(&current, OilType::Neem, "abc").get(OilType::Neem), 0.0);
    }

    #[test]
    fn test_apply_oil_entry() {
        let q = apply_oil_entry(&OilQuantities::zeroed(), "Olive=200").unwrap();
        let q = apply_oil_entry(&q, "coconut=").unwrap();
        assert_eq!(q.get(OilType::Olive), 200.0);
        assert_eq!(q.get(OilType::Coconut), 0.0);

        let q = apply_oil_entry(&q, "olive=200g").unwrap();
        assert_eq!(q.get(OilType::Olive), 200.0);
        let q = apply_oil_entry(&q, "shea= 12.5 grams").unwrap();
        assert_eq!(q.get(OilType::Shea), 12.5);
    }

    #[test]
    fn test_apply_oil_entry_errors() {
        assert!(matches!(
            apply_oil_entry(&OilQuantities::zeroed(), "olive"),
            Err(SoapError::InvalidInput(_))
        ));
        assert!(matches!(
            apply_oil_entry(&OilQuantities::zeroed(), "cocnut=50"),
            Err(SoapError::UnknownOil { hint: Some(_), .. })
        ));
    }
}
