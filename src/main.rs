use std::io;
use std::path::PathBuf;

use clap::Parser;

use retheme::rewrite::rewrite_tree;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "retheme")]
#[command(version = VERSION)]
#[command(about = "Rewrite legacy gold theme tokens to the olive accent palette")]
struct Cli {
    /// Root directory of the frontend tree to rewrite
    #[arg(default_value = "frontend")]
    root: PathBuf,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Per-file failures are reported inline and do not affect the exit code;
    // only a failed traversal (e.g. missing root) is fatal.
    match rewrite_tree(&cli.root, &mut io::stdout()) {
        Ok(_) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            std::process::ExitCode::FAILURE
        }
    }
}
