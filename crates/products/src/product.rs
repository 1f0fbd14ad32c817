use serde::{Deserialize, Serialize};

use agribase_core::{Entity, ProductId, ValueObject};

/// Price bounds in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl ValueObject for PriceRange {}

/// Render an amount in minor units as major units with two decimals.
pub fn format_minor(amount: u64) -> String {
    format!("{}.{:02}", amount / 100, amount % 100)
}

impl core::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", format_minor(self.min), format_minor(self.max))
    }
}

/// A product row in the catalog table (and its card in grid view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    id: ProductId,
    name: String,
    category: String,
    price: PriceRange,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: PriceRange) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            category: category.into(),
            price,
            description: String::new(),
            image: None,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, data_url: impl Into<String>) -> Self {
        self.image = Some(data_url.into());
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> PriceRange {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
