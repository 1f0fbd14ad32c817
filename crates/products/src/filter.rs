use agribase_filter::{Criterion, FilterSet};

use crate::Product;

pub const PRODUCTS_NOUN: &str = "products";

/// Inputs of the product filter bar.
///
/// `category` is matched as a substring of the product's category so that a
/// short option value ("seed") still matches "Seeds & Seedlings".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: String,
    pub search: String,
}

impl ProductFilter {
    pub fn criteria(&self) -> FilterSet<Product> {
        FilterSet::new()
            .with(Criterion::contains("category", &[Product::category], &self.category))
            .with(Criterion::contains("search", &[Product::name], &self.search))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PriceRange;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Hybrid Maize Seed", "Seeds", PriceRange::new(1500, 2500)),
            Product::new("Tomato Seedlings", "Seeds", PriceRange::new(300, 500)),
            Product::new("NPK Fertilizer", "Fertilizers", PriceRange::new(2500, 4000)),
            Product::new("Maize Sheller", "Equipment", PriceRange::new(90000, 120000)),
        ]
    }

    fn visible(filter: &ProductFilter) -> Vec<String> {
        let products = catalog();
        let outcome = filter.criteria().apply(&products);
        products
            .iter()
            .zip(outcome.visible)
            .filter(|(_, v)| *v)
            .map(|(p, _)| p.name().to_string())
            .collect()
    }

    #[test]
    fn empty_filter_shows_catalog() {
        assert_eq!(visible(&ProductFilter::default()).len(), 4);
    }

    #[test]
    fn category_and_search_combine() {
        let filter = ProductFilter {
            category: "seeds".into(),
            search: "MAIZE".into(),
        };
        assert_eq!(visible(&filter), vec!["Hybrid Maize Seed"]);
    }

    #[test]
    fn category_is_substring_match() {
        let filter = ProductFilter {
            category: "fert".into(),
            search: String::new(),
        };
        assert_eq!(visible(&filter), vec!["NPK Fertilizer"]);
    }

    #[test]
    fn search_only_looks_at_name() {
        let filter = ProductFilter {
            category: String::new(),
            search: "equipment".into(),
        };
        assert!(visible(&filter).is_empty());
    }
}
