use std::io::Write;
use std::path::Path;

use super::{Cli, Result};

use crate::repo::{InitOptions, OnDisk, OnExisting};

use clap::{App, Arg, ArgMatches, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty repository")
        .arg(
            Arg::with_name("directory")
                .required(true)
                .help("The directory to create"),
        )
        .arg(
            Arg::with_name("bare")
                .long("bare")
                .help("Create a bare repository (metadata only, no working tree)"),
        )
        .arg(
            Arg::with_name("reuse")
                .long("reuse")
                .help("Succeed without touching an already-initialized repository"),
        )
}

pub(crate) fn run(cli: &mut Cli, init_matches: &ArgMatches) -> Result {
    let dir = init_matches.value_of("directory").unwrap();
    let path = Path::new(dir);

    let options = InitOptions {
        bare: init_matches.is_present("bare"),
        on_existing: if init_matches.is_present("reuse") {
            OnExisting::Reuse
        } else {
            OnExisting::Fail
        },
    };

    let existed = OnDisk::open(path, options.bare).is_ok();
    let repo = OnDisk::init(path, options)?;

    if existed {
        writeln!(
            cli,
            "Reinitialized existing repository in {}",
            repo.git_dir().display()
        )?;
    } else {
        writeln!(
            cli,
            "Initialized empty repository in {}",
            repo.git_dir().display()
        )?;
    }

    Ok(())
}
