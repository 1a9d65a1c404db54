use clap::Parser;

/// The tool takes no options; parsing still runs so that `--help` and
/// `--version` work and unrecognized arguments are rejected before output.
#[derive(Parser, Debug)]
#[command(version, about = "Print the CI build-matrix feature combinations as a JSON array.", long_about = None)]
pub struct Cli {}
