// Items in this module are only used in test code.

mod temp_cwd;

pub(crate) use temp_cwd::TempCwd;
