use std::{
    env,
    path::{Path, PathBuf},
};

// RAII guard that points the process's current working directory at some
// other path for the duration of a test, then restores the previous
// working directory on drop.
//
// The working directory is process-global state, so any test using this
// guard must be marked #[serial].
//
// Test-only code: panics instead of returning Results.
pub(crate) struct TempCwd {
    old_path: PathBuf,
}

impl TempCwd {
    pub fn new<P: AsRef<Path>>(path: P) -> TempCwd {
        let old_path = env::current_dir().unwrap();
        env::set_current_dir(path).unwrap();

        TempCwd { old_path }
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        env::set_current_dir(&self.old_path).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::TempCwd;

    #[test]
    #[serial]
    fn restores_previous_cwd() {
        let old_path = env::current_dir().unwrap();
        let tempdir = tempfile::tempdir().unwrap();

        {
            let _tcwd = TempCwd::new(tempdir.path());
            // Can't assert_eq! against tempdir.path() here: macOS rewrites
            // the path with a /private prefix.
            assert_ne!(env::current_dir().unwrap(), old_path);
        }

        assert_eq!(env::current_dir().unwrap(), old_path);
    }
}
