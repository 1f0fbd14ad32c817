//! Products domain module.
//!
//! Product records, the product list filter, the table/grid view preference,
//! the add/edit form rules and bulk actions. All of it is plain in-memory
//! logic; persisting anything is the caller's business.

pub mod bulk;
pub mod filter;
pub mod form;
pub mod image;
pub mod product;
pub mod view_mode;

pub use bulk::{BulkAction, BulkActionError, BulkRequest, BulkSelection};
pub use filter::{ProductFilter, PRODUCTS_NOUN};
pub use form::{
    parse_price, FieldError, FormErrors, FormOutcome, ProductField, ProductForm, ValidProduct,
};
pub use image::{ImagePreview, ImageUpload};
pub use product::{format_minor, PriceRange, Product};
pub use view_mode::{ViewMode, ViewModeParseError, VIEW_MODE_KEY};
