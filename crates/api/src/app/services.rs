//! Store wiring shared by all handlers.

use gazetteer_store::{CountryStore, RgbaStore};

/// The per-resource stores, built once and handed to handlers via
/// `Extension<Arc<AppServices>>`.
///
/// The two stores are independent; nothing ever locks both at once.
#[derive(Debug, Default)]
pub struct AppServices {
    countries: CountryStore,
    rgba: RgbaStore,
}

pub fn build_services() -> AppServices {
    AppServices::default()
}

impl AppServices {
    pub fn countries(&self) -> &CountryStore {
        &self.countries
    }

    pub fn rgba(&self) -> &RgbaStore {
        &self.rgba
    }
}
