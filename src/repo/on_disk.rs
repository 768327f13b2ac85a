use std::path::Path;

use super::location::Location;
use super::{guard, layout, Error, Result};

/// Policy for what `init` does when the target already contains an
/// initialized repository.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OnExisting {
    /// Return [`Error::AlreadyInitialized`] rather than touch the
    /// existing layout.
    Fail,

    /// Return a handle to the existing layout as-is, with no writes and
    /// no verification beyond the structural presence check.
    Reuse,
}

/// Options for [`OnDisk::init`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitOptions {
    /// Create a bare repository (metadata only, no working tree).
    pub bare: bool,

    /// What to do when the target is already initialized.
    pub on_existing: OnExisting,
}

impl Default for InitOptions {
    fn default() -> Self {
        InitOptions {
            bare: false,
            on_existing: OnExisting::Fail,
        }
    }
}

/// A repository that stores content on the local file system, bound to a
/// resolved location whose metadata layout has been verified or created.
///
/// This is a lightweight descriptor, not a lock: concurrent handles to the
/// same location are legal, but initialization itself is not reentrant
/// (see the module documentation).
#[derive(Clone, Debug)]
pub struct OnDisk {
    location: Location,
}

impl OnDisk {
    /// Create a new, empty repository on the local file system and return
    /// a handle to it.
    ///
    /// The path may be relative (resolved against the current working
    /// directory) or absolute, and need not exist yet. Behavior on an
    /// already-initialized target is selected by
    /// [`InitOptions::on_existing`].
    ///
    /// No retries are performed: on [`Error::InitializationFailed`] the
    /// caller decides whether to retry after resolving the cause, keeping
    /// in mind that cleanup of a failed attempt is best-effort.
    pub fn init<P: AsRef<Path>>(path: P, options: InitOptions) -> Result<Self> {
        let location = Location::resolve(path, options.bare)?;

        if guard::already_initialized(&location) {
            return match options.on_existing {
                OnExisting::Fail => {
                    Err(Error::AlreadyInitialized(location.git_dir().to_path_buf()))
                }
                OnExisting::Reuse => Ok(OnDisk { location }),
            };
        }

        layout::build(&location)?;

        Ok(OnDisk { location })
    }

    /// Open an existing repository on the local file system.
    ///
    /// The same structural check that marks initialization complete must
    /// hold here; otherwise returns [`Error::NoRepository`]. Use `init` to
    /// create a repository that doesn't exist yet.
    pub fn open<P: AsRef<Path>>(path: P, bare: bool) -> Result<Self> {
        let location = Location::resolve(path, bare)?;

        if !guard::already_initialized(&location) {
            return Err(Error::NoRepository(location.git_dir().to_path_buf()));
        }

        Ok(OnDisk { location })
    }

    /// Return the resolved location this handle is bound to.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Return the working-tree root, or `None` for a bare repository.
    pub fn work_dir(&self) -> Option<&Path> {
        self.location.work_dir()
    }

    /// Return the path to the metadata directory.
    pub fn git_dir(&self) -> &Path {
        self.location.git_dir()
    }

    /// Report whether this is a bare repository.
    pub fn is_bare(&self) -> bool {
        self.location.is_bare()
    }
}
