mod commands;
mod terminal;

use blemap_common::config::Config;
use blemap_common::{error, warn};
use commands::{CommandLine, scan};
use terminal::{banner, input, logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        no_input: commands.no_input,
    };

    banner::print(&cfg);
    print::header("starting bluetooth scan", cfg.quiet);

    let outcome = tokio::select! {
        result = scan::scan(&cfg) => result,
        _ = tokio::signal::ctrl_c() => {
            println!();
            warn!("Scan stopped by user.");
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!("An unexpected error occurred: {e:#}");
    }

    input::pause_for_exit(&cfg);
    Ok(())
}
