#![deny(warnings)]

fn main() {
    rsrepo::cli::main();
}
