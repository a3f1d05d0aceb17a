use clap::Parser;
use iac_decoder::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("IAC Decoder - Fleet-Code Surface Analysis Bulletins");
    println!("===================================================");
    println!();
    println!("Decode ASXX21/FSXX21 EGRR bulletins into pressure centres, fronts");
    println!("and isobars with decimal-degree positions.");
    println!();
    println!("USAGE:");
    println!("    iac-decoder <COMMAND> [OPTIONS] <PATH>...");
    println!();
    println!("COMMANDS:");
    println!("    decode      Decode bulletins and print JSON or a summary");
    println!("    validate    Check bulletin headers and preambles");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a bulletin to pretty-printed JSON:");
    println!("    iac-decoder decode --pretty bulletin.txt");
    println!();
    println!("    # Summarise a directory of bulletins received on a given day:");
    println!("    iac-decoder decode --format summary --reference-date 2024-03-16 bulletins/");
    println!();
    println!("    # Read a bulletin from standard input:");
    println!("    cat bulletin.txt | iac-decoder decode -");
    println!();
    println!("    # Check a batch of bulletins:");
    println!("    iac-decoder validate bulletins/");
    println!();
    println!("For detailed help on any command, use:");
    println!("    iac-decoder <COMMAND> --help");
}
