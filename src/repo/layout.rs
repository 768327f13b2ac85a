use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::location::Location;
use super::{Error, Result};

/// Name of the configuration file inside the metadata directory. Its
/// presence is what marks a layout as initialized.
pub(crate) const CONFIG_FILE: &str = "config";

/// Name of the symbolic-ref file pointing at the current branch.
pub(crate) const HEAD_FILE: &str = "HEAD";

const HEAD_TXT: &str = "ref: refs/heads/master\n";

const DESCRIPTION_TXT: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

const EXCLUDE_TXT: &str = "# Lines that start with '#' are comments.\n# For a project mostly in C, the following would be a good set of\n# exclude patterns (uncomment them if you want to use them):\n# *.[oa]\n# *~\n";

/// Create the full repository skeleton at a clean location.
///
/// Creation order matters: the metadata root first, then the interior
/// structure (object store, refs hierarchy), then HEAD, then the config
/// file last. A partially-built layout is therefore never observable as
/// "initialized" (see `guard::already_initialized`).
///
/// If any step fails partway, the paths this call created are removed on
/// a best-effort basis before the error is reported. The failure that
/// interrupted creation (disk full, for example) may interrupt cleanup
/// too, so callers must treat a failed initialization as possibly leaving
/// residue under the target.
pub(crate) fn build(location: &Location) -> Result<()> {
    let mut builder = Builder {
        location,
        created: Vec::new(),
    };

    match builder.build() {
        Ok(()) => Ok(()),
        Err(source) => {
            builder.cleanup();
            Err(Error::InitializationFailed {
                path: location.git_dir().to_path_buf(),
                source,
            })
        }
    }
}

struct Builder<'a> {
    location: &'a Location,
    created: Vec<PathBuf>,
}

impl<'a> Builder<'a> {
    fn build(&mut self) -> io::Result<()> {
        let git_dir = self.location.git_dir().to_path_buf();

        self.create_dir(&git_dir)?;

        self.create_dir(&git_dir.join("objects/info"))?;
        self.create_dir(&git_dir.join("objects/pack"))?;
        self.create_dir(&git_dir.join("refs/heads"))?;
        self.create_dir(&git_dir.join("refs/tags"))?;

        self.create_dir(&git_dir.join("hooks"))?;
        // NOTE: Intentionally not including the sample hook files.

        self.create_dir(&git_dir.join("info"))?;
        self.write_file(&git_dir.join("info/exclude"), EXCLUDE_TXT)?;

        self.write_file(&git_dir.join("description"), DESCRIPTION_TXT)?;
        self.write_file(&git_dir.join(HEAD_FILE), HEAD_TXT)?;

        // The config file goes last: it is the "initialized" marker.
        self.write_file(&git_dir.join(CONFIG_FILE), &config_txt(self.location.is_bare()))
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        let top = first_missing(path);
        fs::create_dir_all(path)?;
        if let Some(top) = top {
            self.created.push(top);
        }
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if !path.exists() {
            self.created.push(path.to_path_buf());
        }
        fs::write(path, contents)
    }

    // Remove whatever this call managed to create, in reverse creation
    // order. Errors are ignored; nothing that existed before the call is
    // ever touched.
    fn cleanup(&mut self) {
        for path in self.created.drain(..).rev() {
            if path.is_dir() {
                fs::remove_dir_all(&path).unwrap_or(());
            } else {
                fs::remove_file(&path).unwrap_or(());
            }
        }
    }
}

// Topmost ancestor of `path` (possibly `path` itself) that does not exist
// yet. Removing it undoes everything `create_dir_all(path)` would create.
fn first_missing(path: &Path) -> Option<PathBuf> {
    let mut missing = None;
    let mut current = Some(path);

    while let Some(p) = current {
        if p.exists() {
            break;
        }
        missing = Some(p.to_path_buf());
        current = p.parent();
    }

    missing
}

fn config_txt(bare: bool) -> String {
    if bare {
        "[core]\n\trepositoryformatversion = 0\n\tfilemode = true\n\tbare = true\n".to_string()
    } else {
        "[core]\n\trepositoryformatversion = 0\n\tfilemode = true\n\tbare = false\n\tlogallrefupdates = true\n"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn assert_skeleton(git_dir: &Path) {
        assert!(git_dir.join("objects/info").is_dir());
        assert!(git_dir.join("objects/pack").is_dir());
        assert!(git_dir.join("refs/heads").is_dir());
        assert!(git_dir.join("refs/tags").is_dir());
        assert!(git_dir.join("hooks").is_dir());
        assert!(git_dir.join("info/exclude").is_file());
        assert!(git_dir.join("description").is_file());
        assert!(git_dir.join(HEAD_FILE).is_file());
        assert!(git_dir.join(CONFIG_FILE).is_file());
    }

    #[test]
    fn full_skeleton_non_bare() {
        let tempdir = tempfile::tempdir().unwrap();
        let location = Location::resolve(tempdir.path().join("repo"), false).unwrap();

        build(&location).unwrap();

        let git_dir = location.git_dir();
        assert_eq!(git_dir, tempdir.path().join("repo/.git").as_path());
        assert_skeleton(git_dir);

        let head = fs::read_to_string(git_dir.join(HEAD_FILE)).unwrap();
        assert_eq!(head, "ref: refs/heads/master\n");

        let config = fs::read_to_string(git_dir.join(CONFIG_FILE)).unwrap();
        assert!(config.contains("repositoryformatversion = 0"));
        assert!(config.contains("bare = false"));
    }

    #[test]
    fn full_skeleton_bare() {
        let tempdir = tempfile::tempdir().unwrap();
        let location = Location::resolve(tempdir.path().join("repo.git"), true).unwrap();

        build(&location).unwrap();

        let git_dir = location.git_dir();
        assert_eq!(git_dir, location.root());
        assert!(!git_dir.join(".git").exists());
        assert_skeleton(git_dir);

        let config = fs::read_to_string(git_dir.join(CONFIG_FILE)).unwrap();
        assert!(config.contains("bare = true"));
    }

    #[test]
    fn objects_dir_is_empty() {
        let tempdir = tempfile::tempdir().unwrap();
        let location = Location::resolve(tempdir.path().join("repo"), false).unwrap();

        build(&location).unwrap();

        let objects_dir = location.git_dir().join("objects");
        assert_eq!(
            fs::read_dir(objects_dir)
                .unwrap()
                .filter(|x| !x.as_ref().unwrap().path().is_dir())
                .count(),
            0
        );
    }

    #[test]
    fn creates_missing_parents() {
        let tempdir = tempfile::tempdir().unwrap();
        let location = Location::resolve(tempdir.path().join("a/b/repo"), false).unwrap();

        build(&location).unwrap();
        assert_skeleton(location.git_dir());
    }

    #[test]
    fn failure_removes_what_this_call_created() {
        let tempdir = tempfile::tempdir().unwrap();
        let root = tempdir.path().join("repo.git");
        fs::create_dir_all(&root).unwrap();

        // A file squatting where the refs hierarchy must go makes the
        // build fail after the object store was already created.
        let squatter = root.join("refs");
        fs::write(&squatter, "in the way").unwrap();

        let location = Location::resolve(&root, true).unwrap();
        let err = build(&location).unwrap_err();
        if let Error::InitializationFailed { path, .. } = err {
            assert_eq!(path, root);
        } else {
            panic!("wrong error: {:?}", err);
        }

        // Pre-existing entries survive; the partial skeleton (the object
        // store directories) was removed again.
        assert!(squatter.is_file());
        assert!(!root.join("objects").exists());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 1);
    }

    #[test]
    fn failure_before_any_creation_leaves_target_untouched() {
        let tempdir = tempfile::tempdir().unwrap();
        let root = tempdir.path().join("repo");
        fs::create_dir_all(&root).unwrap();

        // The metadata root itself is blocked by a file.
        fs::write(root.join(".git"), "in the way").unwrap();

        let location = Location::resolve(&root, false).unwrap();
        build(&location).unwrap_err();

        assert!(root.join(".git").is_file());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 1);
    }

    #[test]
    fn first_missing_finds_topmost_absent_ancestor() {
        let tempdir = tempfile::tempdir().unwrap();
        let existing = tempdir.path();

        let target = existing.join("a/b/c");
        assert_eq!(first_missing(&target), Some(existing.join("a")));

        assert_eq!(first_missing(existing), None);
    }
}
