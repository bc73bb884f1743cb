use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Solar,
    Battery,
    Inverter,
    Accessories,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Solar => write!(f, "solar"),
            ProductCategory::Battery => write!(f, "battery"),
            ProductCategory::Inverter => write!(f, "inverter"),
            ProductCategory::Accessories => write!(f, "accessories"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solar" => Ok(ProductCategory::Solar),
            "battery" => Ok(ProductCategory::Battery),
            "inverter" => Ok(ProductCategory::Inverter),
            "accessories" => Ok(ProductCategory::Accessories),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_category_strings() {
        for category in [
            ProductCategory::Solar,
            ProductCategory::Battery,
            ProductCategory::Inverter,
            ProductCategory::Accessories,
        ] {
            assert_eq!(category.to_string().parse::<ProductCategory>(), Ok(category));
        }
    }

    #[test]
    fn should_reject_unknown_category() {
        assert!("windmill".parse::<ProductCategory>().is_err());
    }
}
