use crate::error::Result;
use std::path::Path;

/// Read-only access to template resources.
///
/// Paths are relative to the provider's root. Implementations never let a
/// path resolve outside that root.
pub trait Provider {
    /// Returns the raw bytes of the resource at `path`.
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - Resource contents, `Error::FileNotFound` if it does not
    ///   exist, `Error::PermissionDenied` if it cannot be read
    fn get(&self, path: &Path) -> Result<Vec<u8>>;

    /// Whether a readable file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

impl<P: Provider + ?Sized> Provider for Box<P> {
    fn get(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).get(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<P: Provider + ?Sized> Provider for &P {
    fn get(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).get(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
