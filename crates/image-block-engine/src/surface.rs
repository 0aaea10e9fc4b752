use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

/// Identity of one block instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The input surface a drag is tracked on.
///
/// While a block is tracked, pointer moves and releases anywhere on the
/// surface are routed to it, and native text selection and image dragging
/// are suppressed. Suppression is requested per block and stays on until
/// every block that asked for it has released it.
pub trait InputSurface {
    fn track_pointer(&self, block: BlockId);
    fn untrack_pointer(&self, block: BlockId);
    fn suppress_native_drag(&self, block: BlockId, suppressed: bool);
}

/// Surface for hosts that route pointer events to the block themselves
pub struct DetachedSurface;

impl InputSurface for DetachedSurface {
    fn track_pointer(&self, _block: BlockId) {}
    fn untrack_pointer(&self, _block: BlockId) {}
    fn suppress_native_drag(&self, _block: BlockId, _suppressed: bool) {}
}

/// Pointer tracking held for the duration of one drag.
///
/// Acquiring subscribes the block on the surface; dropping undoes both the
/// subscription and the native-drag suppression.
pub struct PointerCapture {
    surface: Rc<dyn InputSurface>,
    block: BlockId,
}

impl PointerCapture {
    pub fn acquire(surface: Rc<dyn InputSurface>, block: BlockId) -> Self {
        surface.track_pointer(block);
        surface.suppress_native_drag(block, true);
        log::debug!("Pointer captured for block {block}");
        Self { surface, block }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.surface.untrack_pointer(self.block);
        self.surface.suppress_native_drag(self.block, false);
        log::debug!("Pointer released for block {}", self.block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::RecordingSurface;

    #[test]
    fn test_capture_released_on_drop() {
        let surface = Rc::new(RecordingSurface::default());
        let block = BlockId::new();

        let capture = PointerCapture::acquire(surface.clone(), block);
        assert_eq!(surface.tracked(), vec![block]);
        assert!(surface.is_suppressed());

        drop(capture);
        assert!(surface.tracked().is_empty());
        assert!(!surface.is_suppressed());
    }

    #[test]
    fn test_interleaved_captures_keep_suppression() {
        let surface = Rc::new(RecordingSurface::default());
        let first = BlockId::new();
        let second = BlockId::new();

        let first_capture = PointerCapture::acquire(surface.clone(), first);
        let second_capture = PointerCapture::acquire(surface.clone(), second);

        drop(first_capture);
        assert_eq!(surface.tracked(), vec![second]);
        assert!(surface.is_suppressed());

        drop(second_capture);
        assert!(!surface.is_suppressed());
    }

    #[test]
    fn test_block_ids_are_unique() {
        assert_ne!(BlockId::new(), BlockId::new());
    }
}
