use super::layout;
use super::location::Location;

/// Report whether a repository metadata structure already exists at the
/// given location.
///
/// The check is structural, not a mere non-emptiness test: the metadata
/// directory must exist and contain the configuration file. The config
/// file is written last during layout building, so its presence is the
/// definitive "initialized" signal and this predicate agrees with the
/// builder's postcondition.
///
/// Read-only; never touches the filesystem beyond inspection.
pub(crate) fn already_initialized(location: &Location) -> bool {
    let git_dir = location.git_dir();
    git_dir.is_dir() && git_dir.join(layout::CONFIG_FILE).is_file()
}
