//! Single-slot store for the shared rgba color.

use std::sync::RwLock;

use gazetteer_core::Rgba;

/// Holds the one `Rgba` value the service serves.
///
/// The singleton is a dedicated slot rather than a map keyed by a constant.
/// `None` means "never set"; readers observe the zero color in that case
/// without writing it back, so reads stay side-effect-free.
#[derive(Debug, Default)]
pub struct RgbaStore {
    slot: RwLock<Option<Rgba>>,
}

impl RgbaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current color, or the zero color if none was ever stored.
    pub fn get(&self) -> Rgba {
        match self.slot.read() {
            Ok(slot) => (*slot).unwrap_or_default(),
            Err(_) => Rgba::default(),
        }
    }

    /// Unconditionally overwrites the stored color and returns it.
    ///
    /// No field validation: any component values are accepted.
    pub fn put(&self, color: Rgba) -> Rgba {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(color);
        }
        color
    }
}
