//! Controls shared between an input thread and the update loop

use std::sync::{Arc, Mutex, MutexGuard};

use rustnd_core::ControlInputs;

/// Cloneable handle to one [`ControlInputs`] value
///
/// Writers change fields under the lock with [`update`](Self::update); the
/// update loop takes a whole copy with [`snapshot`](Self::snapshot) once per
/// tick, so it never sees a half-written state.
#[derive(Clone, Debug, Default)]
pub struct SharedControls {
    inner: Arc<Mutex<ControlInputs>>,
}

impl SharedControls {
    pub fn new(controls: ControlInputs) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controls)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControlInputs> {
        // A panicked writer cannot leave a Copy value half-written
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current controls
    pub fn snapshot(&self) -> ControlInputs {
        *self.lock()
    }

    /// Replace the controls wholesale
    pub fn store(&self, controls: ControlInputs) {
        *self.lock() = controls;
    }

    /// Modify the controls in place under the lock
    pub fn update<F: FnOnce(&mut ControlInputs)>(&self, f: F) {
        f(&mut *self.lock());
    }
}
