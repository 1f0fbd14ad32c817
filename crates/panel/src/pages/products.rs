use serde::Serialize;

use agribase_auth::{AccessError, AdminSession, KeyValueStore};
use agribase_core::{DomainError, DomainResult, ProductId};
use agribase_filter::{Listing, ResultsSummary};
use agribase_products::{
    format_minor, BulkAction, BulkActionError, BulkRequest, BulkSelection, FormErrors,
    FormOutcome, ImagePreview, ImageUpload, Product, ProductFilter, ProductForm, ViewMode,
    PRODUCTS_NOUN,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRowView {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub checked: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: String,
    pub image: Option<String>,
    pub hidden: bool,
}

/// The products page: table/grid listing, filters, bulk actions, edit modal.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    listing: Listing<Product>,
    filter: ProductFilter,
    view_mode: ViewMode,
    selection: BulkSelection,
    preview: ImagePreview,
    modal_open: bool,
    form_errors: Option<FormErrors>,
}

impl ProductsPage {
    /// Open the page, restoring the saved view preference when there is one.
    pub fn open(
        session: &AdminSession,
        products: Vec<Product>,
        store: &impl KeyValueStore,
        default_mode: ViewMode,
    ) -> Result<Self, AccessError> {
        session.require_logged_in()?;
        let view_mode = ViewMode::load(store).unwrap_or(default_mode);
        Ok(Self {
            listing: Listing::new(products),
            filter: ProductFilter::default(),
            view_mode,
            selection: BulkSelection::new(),
            preview: ImagePreview::default(),
            modal_open: false,
            form_errors: None,
        })
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch between table and grid and remember the choice.
    pub fn set_view_mode(&mut self, mode: ViewMode, store: &mut impl KeyValueStore) {
        self.view_mode = mode;
        mode.save(store);
        tracing::info!(view_mode = %mode, "product view mode changed");
    }

    pub fn filter_mut(&mut self) -> &mut ProductFilter {
        &mut self.filter
    }

    pub fn apply_filters(&mut self) -> ResultsSummary {
        self.listing.apply(&self.filter.criteria(), PRODUCTS_NOUN)
    }

    /// Key typed in the search box; Enter applies the filters.
    pub fn search_key(&mut self, key: &str) -> Option<ResultsSummary> {
        (key == "Enter").then(|| self.apply_filters())
    }

    pub fn summary(&self) -> Option<ResultsSummary> {
        self.listing.summary()
    }

    pub fn listing(&self) -> &Listing<Product> {
        &self.listing
    }

    pub fn select_all(&mut self, checked: bool) {
        let ids: Vec<ProductId> = self.listing.records().iter().map(Product::id_typed).collect();
        self.selection.select_all(ids, checked);
    }

    pub fn set_checked(&mut self, id: ProductId, checked: bool) -> DomainResult<()> {
        self.index_of(id)?;
        self.selection.set(id, checked);
        Ok(())
    }

    pub fn selection(&self) -> &BulkSelection {
        &self.selection
    }

    /// State of the header checkbox for the rows currently loaded.
    pub fn all_checked(&self) -> bool {
        let ids: Vec<ProductId> = self.listing.records().iter().map(Product::id_typed).collect();
        self.selection.all_checked(&ids)
    }

    /// Run the bulk-action flow.
    ///
    /// Guard failures are alerted and returned. `Ok(None)` means the admin
    /// declined the confirmation.
    pub fn apply_bulk_action(
        &mut self,
        action: &str,
        dialogs: &mut impl crate::Dialogs,
    ) -> Result<Option<BulkRequest>, BulkActionError> {
        let request = match self.selection.prepare(BulkAction::parse(action)) {
            Ok(request) => request,
            Err(err) => {
                dialogs.alert(&err.to_string());
                return Err(err);
            }
        };

        if !dialogs.confirm(&request.confirm_prompt()) {
            return Ok(None);
        }

        tracing::info!(action = %request.action, count = request.count(), "bulk action applied");
        dialogs.alert(&request.applied_message());
        Ok(Some(request))
    }

    /// Open the product modal, pre-filled when editing.
    pub fn open_editor(&mut self, product_id: Option<ProductId>) -> DomainResult<ProductForm> {
        let form = match product_id {
            None => {
                self.preview = ImagePreview::default();
                ProductForm::new_product()
            }
            Some(id) => {
                let product = &self.listing.records()[self.index_of(id)?];
                self.preview = ImagePreview::new(product.image().map(str::to_string));
                ProductForm {
                    product_id: Some(id),
                    name: product.name().to_string(),
                    category: product.category().to_string(),
                    price_min: format_minor(product.price().min),
                    price_max: format_minor(product.price().max),
                    description: product.description().to_string(),
                }
            }
        };
        self.modal_open = true;
        self.form_errors = None;
        Ok(form)
    }

    pub fn pick_image(&mut self, files: &[ImageUpload]) {
        self.preview.update(files);
    }

    pub fn preview(&self) -> &ImagePreview {
        &self.preview
    }

    /// Submit the modal form. Errors replace those of the previous submit.
    pub fn submit(
        &mut self,
        form: &ProductForm,
        dialogs: &mut impl crate::Dialogs,
    ) -> Result<FormOutcome, FormErrors> {
        match form.validate() {
            Ok(valid) => {
                self.form_errors = None;
                let outcome = valid.outcome();
                dialogs.alert(&outcome.message());
                self.modal_open = false;
                tracing::info!(name = %valid.name, "product form submitted");
                Ok(outcome)
            }
            Err(errors) => {
                self.form_errors = Some(errors.clone());
                Err(errors)
            }
        }
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn form_errors(&self) -> Option<&FormErrors> {
        self.form_errors.as_ref()
    }

    pub fn table_rows(&self) -> Vec<ProductRowView> {
        self.listing
            .rows()
            .map(|(product, visible)| ProductRowView {
                id: product.id_typed(),
                name: product.name().to_string(),
                category: product.category().to_string(),
                price: product.price().to_string(),
                checked: self.selection.is_checked(&product.id_typed()),
                hidden: !visible,
            })
            .collect()
    }

    pub fn grid_cards(&self) -> Vec<ProductCardView> {
        self.listing
            .rows()
            .map(|(product, visible)| ProductCardView {
                id: product.id_typed(),
                title: product.name().to_string(),
                category: product.category().to_string(),
                price: product.price().to_string(),
                image: product.image().map(str::to_string),
                hidden: !visible,
            })
            .collect()
    }

    fn index_of(&self, id: ProductId) -> DomainResult<usize> {
        self.listing
            .position(|p| p.id_typed() == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }
}
