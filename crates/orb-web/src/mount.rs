use std::cell::Cell;
use std::rc::Rc;

/// Shared "still mounted" flag checked by the frame loop before re-arming.
///
/// Cloned into closures; `unmount` reports whether this call performed the
/// transition so listener removal runs exactly once no matter how many times
/// teardown is invoked.
#[derive(Clone, Debug)]
pub struct MountFlag(Rc<Cell<bool>>);

impl Default for MountFlag {
    fn default() -> Self {
        Self::mounted()
    }
}

impl MountFlag {
    pub fn mounted() -> Self {
        MountFlag(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    /// Flip to unmounted. Returns true only on the call that actually flipped.
    pub fn unmount(&self) -> bool {
        self.0.replace(false)
    }
}
