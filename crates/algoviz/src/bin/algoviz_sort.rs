//! `algoviz-sort`: animate one sorting run in the terminal.
//!
//! Usage:
//!   algoviz-sort [--config FILE] [--algo NAME] [--size N] [--speed N] [--seed N] [--json] [--no-delay]
//!
//! Prints one line per step, pausing between steps according to the speed.
//! Set `RUST_LOG=debug` for engine logging on stderr.

use std::io::{self, Write};

use algoviz::cli::{format_step, parse_sort_args, run_header, run_summary, step_json, SORT_USAGE};
use algoviz::{Controller, Error};
use algoviz_sorting::Fuzzer;

fn run() -> Result<(), Error> {
    let args = parse_sort_args(std::env::args().skip(1))?;
    if args.help {
        println!("{SORT_USAGE}");
        return Ok(());
    }
    let config = args.resolve()?;
    let mut fuzzer = match config.sort.seed {
        Some(seed) => Fuzzer::from_u64(seed),
        None => Fuzzer::new(None),
    };
    let mut controller = Controller::from_config(&config.sort, &mut fuzzer)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        writeln!(out, "{}", run_header(&controller))?;
    }
    controller.start()?;
    while let Some(step) = controller.tick() {
        let line = if args.json {
            step_json(&controller, &step)?
        } else {
            format_step(&controller, &step)
        };
        writeln!(out, "{line}")?;
        if !args.no_delay {
            out.flush()?;
            std::thread::sleep(controller.delay());
        }
    }
    if !args.json {
        writeln!(out, "{}", run_summary(&controller))?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        if matches!(e, Error::InvalidInput(_)) {
            eprintln!("{SORT_USAGE}");
        }
        std::process::exit(1);
    }
}
