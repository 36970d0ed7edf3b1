//! chainview CLI — inspect pipeline configuration.
//!
//! Usage:
//! ```bash
//! chainview info
//! chainview version
//! ```

use std::env;
use std::process;

use chainview_core::messages::MSG_TYPES;
use chainview_projection::account_message::PROJECTION_ID;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "info" => cmd_info(),
        "version" | "--version" | "-V" => {
            println!("chainview {}", env!("CARGO_PKG_VERSION"));
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("chainview {}", env!("CARGO_PKG_VERSION"));
    println!("Event-sourced chain indexing pipeline\n");
    println!("USAGE:");
    println!("    chainview <COMMAND>\n");
    println!("COMMANDS:");
    println!("    info     Show ChainView pipeline info");
    println!("    version  Print version");
    println!("    help     Print this help");
}

fn cmd_info() {
    println!("ChainView v{}", env!("CARGO_PKG_VERSION"));
    println!("  Supported message kinds: {}", MSG_TYPES.len());
    println!("  Projections: {PROJECTION_ID}");
    println!("  Storage backend: PostgreSQL (memory store for tests)");
    println!("  Unknown message policy: abort (default) | skip");
}
