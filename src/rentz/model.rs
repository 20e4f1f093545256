use serde::{Deserialize, Serialize};

/// A rental listing. Immutable once built; pipeline operations copy,
/// they never mutate a record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub image: String,
    pub title: String,
    pub price: u32,
    pub location: Location,
    // (phone, email), order-significant
    pub contact: (i64, String),
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub first_line: String,
    pub city: String,
    pub code: PostalCode,
    pub country: String,
}

/// Postal codes come in both numeric and alphanumeric forms ("SW4 5XW").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostalCode {
    Number(u32),
    Text(String),
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostalCode::Number(n) => write!(f, "{}", n),
            PostalCode::Text(t) => write!(f, "{}", t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub stars: u8,
    pub loyalty: LoyaltyTier,
    // Display text only ("DD-MM-YYYY"), never parsed or compared as a date
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoyaltyTier {
    Gold,
    Silver,
    Bronze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    Admin,
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub permission: Permission,
    pub is_returning: bool,
    pub age: u8,
    pub stayed_at: Vec<String>,
}

/// Footer-style local conditions: city, wall-clock display text, °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalInfo {
    pub city: String,
    pub time: String,
    pub temperature: i32,
}

/// The featured listing shown above the catalog. Plain value data,
/// no behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedProperty {
    pub image: String,
    pub title: String,
    pub reviews: Vec<Review>,
}

/// Catalog ordering choices. Parsed leniently at the input boundary:
/// anything that is not one of the four keys means "leave the order
/// alone", so callers go through `s.parse().ok()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub const KEYS: [&'static str; 4] = ["price-asc", "price-desc", "name-asc", "name-desc"];
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        };
        write!(f, "{}", key)
    }
}

impl std::str::FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(SortOption::PriceAsc),
            "price-desc" => Ok(SortOption::PriceDesc),
            "name-asc" => Ok(SortOption::NameAsc),
            "name-desc" => Ok(SortOption::NameDesc),
            other => Err(format!("Unknown sort option: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_option_parses_all_keys() {
        for key in SortOption::KEYS {
            let opt: SortOption = key.parse().unwrap();
            assert_eq!(opt.to_string(), key);
        }
    }

    #[test]
    fn sort_option_rejects_unknown_keys() {
        assert!("price".parse::<SortOption>().is_err());
        assert!("".parse::<SortOption>().is_err());
        assert!("PRICE-ASC".parse::<SortOption>().is_err());
    }

    #[test]
    fn postal_code_displays_both_forms() {
        assert_eq!(PostalCode::Number(45632).to_string(), "45632");
        assert_eq!(PostalCode::Text("SW4 5XW".into()).to_string(), "SW4 5XW");
    }

    #[test]
    fn postal_code_serializes_untagged() {
        let num = serde_json::to_string(&PostalCode::Number(343903)).unwrap();
        assert_eq!(num, "343903");
        let text = serde_json::to_string(&PostalCode::Text("SW4 5XW".into())).unwrap();
        assert_eq!(text, "\"SW4 5XW\"");
    }
}
