//! Update-type flags attached to queued objects.

use bitflags::bitflags;

bitflags! {
    /// What a queued object list changes in its manager.
    ///
    /// `RESET` replaces the stored objects outright. The narrower flags patch
    /// the matching fields of objects the manager already holds, which keeps
    /// render-side resources (texture bindings, buffers) alive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UpdateTypes: u8 {
        /// Replace every stored object.
        const RESET = 1 << 0;
        /// Copy positions (locations, vertices) into existing objects.
        const UPDATE_POSITIONS = 1 << 1;
        /// Copy image handles and billboard basis into existing objects.
        const UPDATE_IMAGES = 1 << 2;
    }
}
