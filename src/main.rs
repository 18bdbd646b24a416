//! Casework CLI
//!
//! Usage:
//!   casework [OPTIONS] [FILE]
//!
//! Options:
//!   -n, --denominator <N>  Fraction precision for cut-sheet dimensions
//!   -d, --debug            Print a placement trace to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use casework::job::Job;
use casework::layout::DEFAULT_DENOMINATOR;
use casework::report::render_opening;
use casework::standards::{EntityRef, StandardsResolver};
use casework::{plan_opening, LayoutConfig};

#[derive(Parser)]
#[command(name = "casework")]
#[command(about = "Construction-standards resolution and opening layout for custom casework")]
struct Cli {
    /// Job file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Fraction precision for cut-sheet dimensions (power of two)
    #[arg(short = 'n', long, default_value_t = DEFAULT_DENOMINATOR)]
    denominator: u32,

    /// Print a placement trace to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let data = match Job::from_str(&source).and_then(Job::build) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = LayoutConfig::default().with_trace(cli.debug);
    let mut resolver = StandardsResolver::new(&data.catalog, &data.snapshot);

    for (cabinet_id, openings) in &data.cabinets {
        let template = resolver.resolve(EntityRef::Cabinet(Some(*cabinet_id)));
        println!(
            "cabinet {}: standards '{}' v{}",
            cabinet_id, template.name, template.version
        );
        for (i, opening) in openings.iter().enumerate() {
            let label = format!("opening {}", i + 1);
            match plan_opening(&mut resolver, Some(*cabinet_id), opening, &config) {
                Ok(layout) => print!("{}", render_opening(&label, opening, &layout, cli.denominator)),
                Err(e) => {
                    eprintln!("Error: cabinet {} {}: {}", cabinet_id, label, e);
                    std::process::exit(1);
                }
            }
        }
        println!();
    }
}

fn print_intro() {
    println!(
        r#"Casework - construction-standards resolution and opening layout

USAGE:
    casework [OPTIONS] [FILE]
    cat job.toml | casework

OPTIONS:
    -n, --denominator  Fraction precision for cut-sheet dimensions (default 16)
    -d, --debug        Print a placement trace to stderr
    -h, --help         Print help

QUICK START:
    A job file lists stored templates, the project/room/cabinet rows, and
    the openings to lay out:

        [[templates]]
        id = 1
        name = "shaker"
        default = true

        [[cabinets]]
        id = 100

        [[cabinets.openings]]
        height = 20.0
        width = 18.0

        [[cabinets.openings.drawers]]
        front_height = 6.0
        sort_order = 0

    casework prints a cut sheet per cabinet with fractional positions."#
    );
}
