pub mod scan;

use clap::Parser;

/// The command line surface.
///
/// The scan itself takes no tuning: the advertising window is a fixed
/// internal constant, and a bare invocation performs the full run. Flags
/// only trim decoration or the final pause.
#[derive(Parser)]
#[command(name = "blemap")]
#[command(about = "A terminal Bluetooth LE advertiser scanner.")]
#[command(version)]
pub struct CommandLine {
    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Reduce decorative output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Exit without waiting for a keypress
    #[arg(long)]
    pub no_input: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
