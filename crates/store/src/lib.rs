//! `gazetteer-store` — lock-guarded in-memory state.
//!
//! One store type per resource: a keyed map for countries and a single slot
//! for the rgba color. Both follow the same pattern: private data behind a
//! `std::sync::RwLock`, copy-on-read, and no reference to stored state ever
//! escaping the lock. Critical sections are tiny, synchronous map/slot
//! operations; nothing is held across an `.await`.

pub mod country_store;
pub mod rgba_store;

pub use country_store::CountryStore;
pub use rgba_store::RgbaStore;
