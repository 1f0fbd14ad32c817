//! Add/edit product form rules.

use serde::Serialize;
use thiserror::Error;

use agribase_core::ProductId;

use crate::PriceRange;

const REQUIRED: &str = "This field is required";
const INVALID_PRICE: &str = "Enter a valid price";
const MAX_BELOW_MIN: &str = "Max price must be greater than min price";

/// Inputs of the product form that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Name,
    PriceMin,
    PriceMax,
    Description,
}

impl ProductField {
    pub fn input_id(&self) -> &'static str {
        match self {
            ProductField::Name => "edit-product-name",
            ProductField::PriceMin => "edit-product-price-min",
            ProductField::PriceMax => "edit-product-price-max",
            ProductField::Description => "edit-product-description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: ProductField,
    pub message: &'static str,
}

/// Every problem found in one submit, at most one per field.
#[derive(Debug, Error, Clone, PartialEq, Eq, Default, Serialize)]
#[error("product form has {} invalid field(s)", .errors.len())]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    fn set(&mut self, field: ProductField, message: &'static str) {
        self.errors.retain(|e| e.field != field);
        self.errors.push(FieldError { field, message });
    }

    pub fn for_field(&self, field: ProductField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Raw form contents as typed by the admin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Set when editing an existing product.
    pub product_id: Option<ProductId>,
    pub name: String,
    pub category: String,
    pub price_min: String,
    pub price_max: String,
    pub description: String,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    pub product_id: Option<ProductId>,
    pub name: String,
    pub category: String,
    pub price: PriceRange,
    pub description: String,
}

/// What a successful submit did, from the admin's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Added { name: String },
    Updated { name: String },
}

impl FormOutcome {
    pub fn message(&self) -> String {
        match self {
            FormOutcome::Added { name } => format!("Product \"{name}\" has been added successfully."),
            FormOutcome::Updated { name } => {
                format!("Product \"{name}\" has been updated successfully.")
            }
        }
    }
}

/// Parse a price typed in major units ("12.50") into minor units.
///
/// Prices are non-negative: negative and non-finite input is rejected.
pub fn parse_price(raw: &str) -> Option<u64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let cents = (value * 100.0).round();
    if cents > u64::MAX as f64 {
        return None;
    }
    Some(cents as u64)
}

impl ProductForm {
    pub fn new_product() -> Self {
        Self::default()
    }

    pub fn editing(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            ..Self::default()
        }
    }

    fn raw(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::PriceMin => &self.price_min,
            ProductField::PriceMax => &self.price_max,
            ProductField::Description => &self.description,
        }
    }

    pub fn validate(&self) -> Result<ValidProduct, FormErrors> {
        let mut errors = FormErrors::default();

        for field in [
            ProductField::Name,
            ProductField::PriceMin,
            ProductField::PriceMax,
            ProductField::Description,
        ] {
            if self.raw(field).trim().is_empty() {
                errors.set(field, REQUIRED);
            }
        }

        let min = self.price(ProductField::PriceMin, &mut errors);
        let max = self.price(ProductField::PriceMax, &mut errors);

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                errors.set(ProductField::PriceMax, MAX_BELOW_MIN);
            }
        }

        match (min, max) {
            (Some(min), Some(max)) if errors.is_empty() => Ok(ValidProduct {
                product_id: self.product_id,
                name: self.name.clone(),
                category: self.category.clone(),
                price: PriceRange::new(min, max),
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }

    fn price(&self, field: ProductField, errors: &mut FormErrors) -> Option<u64> {
        let raw = self.raw(field);
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse_price(raw);
        if parsed.is_none() {
            errors.set(field, INVALID_PRICE);
        }
        parsed
    }
}

impl ValidProduct {
    pub fn outcome(&self) -> FormOutcome {
        let name = self.name.clone();
        match self.product_id {
            Some(_) => FormOutcome::Updated { name },
            None => FormOutcome::Added { name },
        }
    }
}
