//! Command-line front end for the repository-initialization library.
//!
//! Argument parsing and process exit codes live here; everything of
//! substance happens in [`crate::repo`].

use std::error::Error;
use std::io::{self, Write};

use clap::{crate_version, App, AppSettings, ArgMatches};

mod init;

pub(crate) fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("rsrepo")
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .subcommand(init::subcommand())
}

pub(crate) type Result = std::result::Result<(), Box<dyn Error>>;

pub(crate) struct Cli<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdout: &'a mut dyn Write,
}

impl<'a> Cli<'a> {
    pub fn run(&mut self) -> Result {
        let matches = self.arg_matches.clone();
        // ^^ Ugh. Need an independent copy of matches so we can still pass
        // the Cli struct through to subcommand imps.

        match matches.subcommand() {
            ("init", Some(init_matches)) => init::run(self, &init_matches),
            _ => unreachable!(),
            // unreachable: Should have exited out with appropriate help or
            // error message if no subcommand was given.
        }
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(itr: I) -> std::result::Result<Vec<u8>, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut stdout = Vec::new();

        Cli {
            arg_matches: app().get_matches_from_safe(itr)?,
            stdout: &mut stdout,
        }
        .run()?;

        Ok(stdout)
    }
}

impl<'a> Write for Cli<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

/// Entry point for the `rsrepo` binary.
///
/// Kept as small as possible; the subcommand implementations are reached
/// through `Cli::run` so they stay testable without spawning a process.
pub fn main() {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut cli = Cli {
        arg_matches: app().get_matches(),
        stdout: &mut stdout,
    };

    let r = cli.run();

    cli.flush().unwrap_or(());
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}
