use strsim::jaro_winkler;

use crate::error::{Result, SoapError};
use crate::models::OilType;

/// Minimum Jaro-Winkler similarity for an oil name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// SAP value for an oil: grams of NaOH needed to saponify one gram of it.
pub const fn get_sap_value(oil: OilType) -> f64 {
    match oil {
        OilType::Olive => 0.134,
        OilType::Coconut => 0.191,
        OilType::Almond => 0.136,
        OilType::Palm => 0.141,
        OilType::Avocado => 0.133,
        OilType::Shea => 0.128,
        OilType::Sesame => 0.133,
        OilType::Neem => 0.139,
    }
}

/// SAP value for an open string key.
///
/// Unknown keys are an error, never a default value.
pub fn sap_value_for(key: &str) -> Result<f64> {
    parse_oil(key).map(get_sap_value)
}

/// Resolve an oil name, suggesting the closest match when it is unknown.
pub fn parse_oil(key: &str) -> Result<OilType> {
    key.parse::<OilType>().map_err(|_| SoapError::UnknownOil {
        name: key.trim().to_string(),
        hint: suggest_oil(key).map(|oil| oil.key().to_string()),
    })
}

/// All oils in display order.
pub fn list_oil_types() -> &'static [OilType] {
    &OilType::ALL
}

/// Closest oil to a misspelled name, if any is similar enough.
pub fn suggest_oil(input: &str) -> Option<OilType> {
    let input = input.trim().to_lowercase();
    OilType::ALL
        .into_iter()
        .map(|oil| (oil, jaro_winkler(oil.key(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(oil, _)| oil)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sap_value_in_range() {
        for oil in OilType::ALL {
            let sap = get_sap_value(oil);
            assert!(sap > 0.0 && sap < 1.0, "{} SAP out of range: {}", oil, sap);
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(get_sap_value(OilType::Olive), 0.134);
        assert_eq!(get_sap_value(OilType::Coconut), 0.191);
        assert_eq!(get_sap_value(OilType::Neem), 0.139);
        assert_eq!(sap_value_for("Shea").unwrap(), 0.128);
        assert_eq!(sap_value_for(" sesame ").unwrap(), 0.133);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = sap_value_for("olvie").unwrap_err();
        match err {
            SoapError::UnknownOil { name, hint } => {
                assert_eq!(name, "olvie");
                assert_eq!(hint.as_deref(), Some("olive"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_list_order_is_stable() {
        assert_eq!(list_oil_types(), list_oil_types());
        assert_eq!(list_oil_types()[0], OilType::Olive);
        assert_eq!(list_oil_types()[7], OilType::Neem);
    }

    #[test]
    fn test_no_suggestion_for_garbage() {
        assert_eq!(suggest_oil("xyzzy"), None);
    }
}
