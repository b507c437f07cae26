//! Register space shared between threads.

use std::sync::Arc;

use hartcore_xlen::Xlen;
use parking_lot::{Mutex, MutexGuard};

use crate::{AccessDenied, CsrConfig, CsrDescriptor, CsrNumber, PrivilegeMode, RegisterSpace};

/// A [`RegisterSpace`] behind one lock.
///
/// Clones share the same registers. Every access takes the lock, so a
/// read-modify-write through [`update`](Self::update) is atomic with respect
/// to other clones.
#[derive(Clone, Debug)]
pub struct SharedRegisterSpace<X: Xlen> {
    inner: Arc<Mutex<RegisterSpace<X>>>,
}

impl<X: Xlen> SharedRegisterSpace<X> {
    #[must_use]
    pub fn new(space: RegisterSpace<X>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(space)),
        }
    }

    #[must_use]
    pub fn from_config(config: &CsrConfig) -> Self {
        Self::new(RegisterSpace::new(config))
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<CsrDescriptor<X>> {
        self.inner.lock().find_by_name(name)
    }

    #[must_use]
    pub fn find_by_number(&self, number: CsrNumber) -> Option<CsrDescriptor<X>> {
        self.inner.lock().find_by_number(number)
    }

    /// See [`RegisterSpace::read`].
    ///
    /// # Errors
    ///
    /// As [`RegisterSpace::read`].
    pub fn read(&self, number: CsrNumber, mode: PrivilegeMode) -> Result<X::Reg, AccessDenied> {
        self.inner.lock().read(number, mode)
    }

    /// See [`RegisterSpace::write`].
    ///
    /// # Errors
    ///
    /// As [`RegisterSpace::write`].
    pub fn write(
        &self,
        number: CsrNumber,
        mode: PrivilegeMode,
        value: X::Reg,
    ) -> Result<(), AccessDenied> {
        self.inner.lock().write(number, mode, value)
    }

    /// See [`RegisterSpace::update`]. `f` runs with the lock held.
    ///
    /// # Errors
    ///
    /// As [`RegisterSpace::update`].
    pub fn update(
        &self,
        number: CsrNumber,
        mode: PrivilegeMode,
        f: impl FnOnce(X::Reg) -> X::Reg,
    ) -> Result<X::Reg, AccessDenied> {
        self.inner.lock().update(number, mode, f)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Hold the lock across several accesses.
    pub fn lock(&self) -> MutexGuard<'_, RegisterSpace<X>> {
        self.inner.lock()
    }
}

impl<X: Xlen> From<RegisterSpace<X>> for SharedRegisterSpace<X> {
    fn from(space: RegisterSpace<X>) -> Self {
        Self::new(space)
    }
}
