use storefront_products::ProductRegistry;

/// State shared by all handlers.
///
/// One instance per router; the registry inside is the only holder of
/// product records.
#[derive(Debug, Default)]
pub struct AppServices {
    pub products: ProductRegistry,
}

pub fn build_services() -> AppServices {
    AppServices {
        products: ProductRegistry::new(),
    }
}
