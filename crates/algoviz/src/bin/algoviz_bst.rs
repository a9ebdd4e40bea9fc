//! `algoviz-bst`: interactive binary search tree shell.
//!
//! Usage:
//!   algoviz-bst [--config FILE] [--empty]
//!
//! Commands are read from stdin one per line (`help` lists them). Rejected
//! operations print an error and leave the tree unchanged.

use std::io::{self, BufRead, Write};

use algoviz::cli::{execute, parse_bst_command, render_tree, BstCommand};
use algoviz::{BstSession, Config, Error};

fn run() -> Result<(), Error> {
    let mut config = Config::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| Error::InvalidInput("--config needs a value".to_string()))?;
                config = Config::load(path)?;
            }
            "--empty" => config.bst.sample = false,
            other => return Err(Error::InvalidInput(format!("unknown argument {other:?}"))),
        }
    }

    let mut session = BstSession::with_sample(&config.bst);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render_tree(&session))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = match parse_bst_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        if cmd == BstCommand::Quit {
            break;
        }
        match execute(&mut session, cmd) {
            Ok(text) => writeln!(out, "{text}")?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
