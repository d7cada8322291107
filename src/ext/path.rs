use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Extension trait for Path to join paths without leaving a root directory
pub trait PathExt {
    /// Joins `relative` onto `self` without ever leaving `self`.
    ///
    /// Root and prefix components of `relative` are dropped, so an absolute
    /// path is treated as relative to `self`. `.` is ignored and `..` pops
    /// the last joined component; popping past `self` is an error.
    ///
    /// # Examples
    /// ```
    /// use projector::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let root = Path::new("/srv/templates");
    /// assert_eq!(
    ///     root.join_confined("go/./hello/../main.go").unwrap(),
    ///     Path::new("/srv/templates/go/main.go")
    /// );
    /// assert!(root.join_confined("../etc/passwd").is_err());
    /// ```
    fn join_confined<P: AsRef<Path>>(&self, relative: P) -> Result<PathBuf>;
}

impl PathExt for Path {
    fn join_confined<P: AsRef<Path>>(&self, relative: P) -> Result<PathBuf> {
        let relative = relative.as_ref();
        let mut parts: Vec<&std::ffi::OsStr> = Vec::new();

        for component in relative.components() {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
                Component::ParentDir => {
                    if parts.pop().is_none() {
                        return Err(Error::PathEscapesRoot {
                            path: relative.to_path_buf(),
                            root: self.to_path_buf(),
                        });
                    }
                }
                Component::Normal(part) => parts.push(part),
            }
        }

        let mut joined = self.to_path_buf();
        joined.extend(parts);
        Ok(joined)
    }
}
