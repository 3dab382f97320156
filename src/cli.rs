use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Regenerate the `foto` URL of every member listed in `./src/data/members.json`
/// from its `nim`.
///
/// The data file is resolved against the current working directory, the command
/// takes no argument and runs the update as soon as it is invoked.
pub(crate) struct Cli {}
