//! Keyword fallback categorization.
//!
//! Deterministic last resort when the remote classifier is unavailable or
//! inconclusive. The keyword sets overlap, so the category test order is part
//! of the contract, not an implementation detail: Food & Dining, Shopping,
//! Entertainment, Transportation, then the default. A merchant naming both a
//! food and a shopping keyword is Food & Dining.

/// Pair returned when no keyword set matches.
pub const DEFAULT_PAIR: (&str, &str) = ("Shopping", "General");

const FOOD: &[&str] = &[
    "restaurant", "food", "cafe", "pizza", "burger", "swiggy", "zomato", "dominos", "mcd", "kfc",
];
const FOOD_DELIVERY: &[&str] = &["swiggy", "zomato", "delivery"];

const SHOPPING: &[&str] = &[
    "amazon", "flipkart", "myntra", "reliance", "retail", "store", "mall",
];

const ENTERTAINMENT: &[&str] = &["netflix", "prime", "hotstar", "cinema", "movie", "theatre"];

const TRANSPORT: &[&str] = &["petrol", "fuel", "gas", "uber", "ola", "metro", "bus"];
const TRANSPORT_FUEL: &[&str] = &["petrol", "fuel", "gas"];

fn matches_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Categorize a merchant by keyword, in the fixed priority order.
pub fn categorize(merchant: &str) -> (String, String) {
    let merchant = merchant.to_lowercase();

    if matches_any(&merchant, FOOD) {
        if matches_any(&merchant, FOOD_DELIVERY) {
            return ("Food & Dining".to_string(), "Fast Food".to_string());
        }
        return ("Food & Dining".to_string(), "Restaurants".to_string());
    }

    if matches_any(&merchant, SHOPPING) {
        return ("Shopping".to_string(), "General".to_string());
    }

    if matches_any(&merchant, ENTERTAINMENT) {
        if merchant.contains("netflix") {
            return ("Entertainment".to_string(), "Netflix".to_string());
        }
        if merchant.contains("prime") {
            return ("Entertainment".to_string(), "Amazon Prime".to_string());
        }
        return ("Entertainment".to_string(), "Movies".to_string());
    }

    if matches_any(&merchant, TRANSPORT) {
        if matches_any(&merchant, TRANSPORT_FUEL) {
            return ("Transportation".to_string(), "Fuel".to_string());
        }
        return ("Transportation".to_string(), "Taxi/Ride Share".to_string());
    }

    (DEFAULT_PAIR.0.to_string(), DEFAULT_PAIR.1.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_valid_pair;

    fn pair(merchant: &str) -> (String, String) {
        categorize(merchant)
    }

    #[test]
    fn test_delivery_narrowing() {
        assert_eq!(pair("SWIGGY"), ("Food & Dining".into(), "Fast Food".into()));
        assert_eq!(pair("ZOMATO LTD"), ("Food & Dining".into(), "Fast Food".into()));
    }

    #[test]
    fn test_restaurant_default_subcategory() {
        assert_eq!(
            pair("TAJ RESTAURANT"),
            ("Food & Dining".into(), "Restaurants".into())
        );
    }

    #[test]
    fn test_food_outranks_shopping() {
        // Contains both a food keyword and a shopping keyword; the category
        // priority order decides.
        assert_eq!(
            pair("AMAZON FRESH RESTAURANT"),
            ("Food & Dining".into(), "Restaurants".into())
        );
    }

    #[test]
    fn test_shopping_keywords() {
        assert_eq!(pair("RELIANCE RETAIL LTD"), ("Shopping".into(), "General".into()));
        assert_eq!(pair("FLIPKART PAYMENTS"), ("Shopping".into(), "General".into()));
    }

    #[test]
    fn test_entertainment_narrowing() {
        assert_eq!(pair("NETFLIX.COM"), ("Entertainment".into(), "Netflix".into()));
        assert_eq!(pair("PRIME VIDEO"), ("Entertainment".into(), "Amazon Prime".into()));
        assert_eq!(pair("PVR CINEMA"), ("Entertainment".into(), "Movies".into()));
        // "AMAZON PRIME" hits the shopping keyword first; priority order wins.
        assert_eq!(pair("AMAZON PRIME"), ("Shopping".into(), "General".into()));
    }

    #[test]
    fn test_transport_narrowing() {
        assert_eq!(pair("INDIAN OIL PETROL PUMP"), ("Transportation".into(), "Fuel".into()));
        assert_eq!(pair("UBER TRIP"), ("Transportation".into(), "Taxi/Ride Share".into()));
        assert_eq!(pair("OLA CABS"), ("Transportation".into(), "Taxi/Ride Share".into()));
    }

    #[test]
    fn test_unmatched_merchant_gets_default() {
        assert_eq!(pair("XYZ TRADERS"), ("Shopping".into(), "General".into()));
        assert_eq!(pair(""), ("Shopping".into(), "General".into()));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(pair("swiggy instamart"), pair("SWIGGY INSTAMART"));
    }

    #[test]
    fn test_every_outcome_is_in_taxonomy() {
        let merchants = [
            "SWIGGY", "TAJ RESTAURANT", "AMAZON", "NETFLIX", "PRIME VIDEO", "PVR CINEMA",
            "PETROL PUMP", "UBER", "METRO RAIL", "SOMETHING ELSE",
        ];
        for merchant in merchants {
            let (category, subcategory) = pair(merchant);
            assert!(
                is_valid_pair(&category, &subcategory),
                "{merchant} produced ({category}, {subcategory})"
            );
        }
    }
}
