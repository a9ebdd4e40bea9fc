//! Command-line front ends.
//!
//! Provides the core logic used by the binary entry points:
//! - `algoviz-sort`: animate one sorting run in the terminal
//! - `algoviz-bst` : interactive BST shell reading commands from stdin

use std::path::PathBuf;

use algoviz_sorting::{Algorithm, RunStats, Step};
use serde::Serialize;

use crate::config::{parse_size, parse_speed, Config};
use crate::controller::{Controller, DisplayState};
use crate::error::{Error, Result};
use crate::session::{BstSession, NodeHighlight};

// ── algoviz-sort ──────────────────────────────────────────────────────────

pub const SORT_USAGE: &str = "\
usage: algoviz-sort [--config FILE] [--algo NAME] [--size N] [--speed N]
                    [--seed N] [--json] [--no-delay]

  --algo      bubble | selection | insertion | merge | quick
  --size      array length, 1..=200
  --speed     playback speed, 1 (slow) ..= 100 (fast)
  --seed      seed for a reproducible array
  --json      print one JSON object per step
  --no-delay  do not pause between steps";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortArgs {
    pub config: Option<PathBuf>,
    pub algorithm: Option<Algorithm>,
    pub size: Option<usize>,
    pub speed: Option<u32>,
    pub seed: Option<u64>,
    pub json: bool,
    pub no_delay: bool,
    pub help: bool,
}

/// Parses `algoviz-sort` arguments (without the program name).
pub fn parse_sort_args<I>(args: I) -> Result<SortArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut out = SortArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| Error::InvalidInput(format!("{name} needs a value")))
        };
        match arg.as_str() {
            "--config" => out.config = Some(PathBuf::from(value("--config")?)),
            "--algo" => out.algorithm = Some(value("--algo")?.parse()?),
            "--size" => out.size = Some(parse_size(&value("--size")?)?),
            "--speed" => out.speed = Some(parse_speed(&value("--speed")?)?),
            "--seed" => {
                let raw = value("--seed")?;
                let seed = raw.parse::<u64>().map_err(|_| {
                    Error::InvalidInput(format!("seed must be an integer, got {raw:?}"))
                })?;
                out.seed = Some(seed);
            }
            "--json" => out.json = true,
            "--no-delay" => out.no_delay = true,
            "-h" | "--help" => out.help = true,
            other => return Err(Error::InvalidInput(format!("unknown argument {other:?}"))),
        }
    }
    Ok(out)
}

impl SortArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(algorithm) = self.algorithm {
            config.sort.algorithm = algorithm;
        }
        if let Some(size) = self.size {
            config.sort.size = size;
        }
        if let Some(speed) = self.speed {
            config.sort.speed = speed;
        }
        if self.seed.is_some() {
            config.sort.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Renders the array with per-element state markers:
/// `<v>` comparing, `*v*` swapping, `v'` sorted.
pub fn render_array(array: &[i64], display: &[DisplayState]) -> String {
    array
        .iter()
        .zip(display)
        .map(|(v, state)| match state {
            DisplayState::Normal => v.to_string(),
            DisplayState::Comparing => format!("<{v}>"),
            DisplayState::Swapping => format!("*{v}*"),
            DisplayState::Sorted => format!("{v}'"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn describe_step(step: &Step<i64>) -> String {
    match step {
        Step::Compare { i, j } => format!("compare {i} {j}"),
        Step::Swap { i, j } => format!("swap {i} {j}"),
        Step::Overwrite { index, value } => format!("write {index} = {value}"),
        Step::MarkSorted { index } => format!("sorted {index}"),
    }
}

/// One line of text output for a step that was just applied.
pub fn format_step(controller: &Controller<i64>, step: &Step<i64>) -> String {
    let stats = controller.stats();
    format!(
        "{:<14} [{}]  comparisons={} swaps={}",
        describe_step(step),
        render_array(controller.array(), controller.display()),
        stats.comparisons,
        stats.swaps
    )
}

#[derive(Serialize)]
struct StepFrame<'a> {
    step: &'a Step<i64>,
    array: &'a [i64],
    display: &'a [DisplayState],
    stats: RunStats,
}

/// One JSON line for a step that was just applied.
pub fn step_json(controller: &Controller<i64>, step: &Step<i64>) -> Result<String> {
    let frame = StepFrame {
        step,
        array: controller.array(),
        display: controller.display(),
        stats: controller.stats(),
    };
    Ok(serde_json::to_string(&frame)?)
}

/// Header printed before a run.
pub fn run_header(controller: &Controller<i64>) -> String {
    let c = controller.complexity();
    format!(
        "{} sort, {} elements\nbest {}  average {}  worst {}  space {}",
        controller.algorithm().name(),
        controller.array().len(),
        c.best,
        c.average,
        c.worst,
        c.space
    )
}

/// Status line printed after a run.
pub fn run_summary(controller: &Controller<i64>) -> String {
    let stats = controller.stats();
    format!(
        "{:?}: {} comparisons, {} swaps",
        controller.status(),
        stats.comparisons,
        stats.swaps
    )
}

// ── algoviz-bst ───────────────────────────────────────────────────────────

pub const BST_HELP: &str = "\
commands:
  insert N     add N to the tree
  delete N     remove N from the tree
  search N     walk from the root towards N
  clear        remove every node
  print        draw the tree
  stats        node count, height, min, max
  traversals   in-order, pre-order, post-order
  help         show this text
  quit         leave";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BstCommand {
    Insert(String),
    Delete(String),
    Search(String),
    Clear,
    Print,
    Stats,
    Traversals,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_bst_command(line: &str) -> Result<Option<BstCommand>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.collect::<Vec<_>>().join(" ");
    let needs_arg = |cmd: fn(String) -> BstCommand| {
        if arg.is_empty() {
            Err(Error::InvalidInput(format!("{verb} needs a value")))
        } else {
            Ok(cmd(arg.clone()))
        }
    };
    let cmd = match verb.to_ascii_lowercase().as_str() {
        "insert" | "i" => needs_arg(BstCommand::Insert)?,
        "delete" | "d" => needs_arg(BstCommand::Delete)?,
        "search" | "s" => needs_arg(BstCommand::Search)?,
        "clear" => BstCommand::Clear,
        "print" | "p" => BstCommand::Print,
        "stats" => BstCommand::Stats,
        "traversals" | "t" => BstCommand::Traversals,
        "help" | "?" => BstCommand::Help,
        "quit" | "exit" | "q" => BstCommand::Quit,
        other => return Err(Error::InvalidInput(format!("unknown command {other:?}"))),
    };
    Ok(Some(cmd))
}

fn join_path(values: &[i64]) -> String {
    if values.is_empty() {
        return "—".to_string();
    }
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Draws the tree, bracketing the searched path (`[v]`) and target (`{v}`).
pub fn render_tree(session: &BstSession) -> String {
    let mut out = session.render();
    let mut marked: Vec<String> = Vec::new();
    for p in session.layout() {
        match session.highlight(p.value) {
            NodeHighlight::Normal => {}
            NodeHighlight::Path => marked.push(format!("[{}]", p.value)),
            NodeHighlight::Found => marked.push(format!("{{{}}}", p.value)),
        }
    }
    if !marked.is_empty() {
        out.push_str("\nhighlight: ");
        out.push_str(&marked.join(" "));
    }
    out
}

/// Runs one command and returns the text to show.
pub fn execute(session: &mut BstSession, cmd: BstCommand) -> Result<String> {
    Ok(match cmd {
        BstCommand::Insert(raw) => {
            let value = session.parse_value(&raw)?;
            session.insert(value)?;
            format!("inserted {value}")
        }
        BstCommand::Delete(raw) => {
            let value = session.parse_value(&raw)?;
            session.delete(value)?;
            format!("deleted {value}")
        }
        BstCommand::Search(raw) => {
            let value = session.parse_value(&raw)?;
            let res = session.search(value)?;
            let verdict = if res.found { "found" } else { "not found" };
            format!("{value} {verdict} | path: {}", join_path(&res.path))
        }
        BstCommand::Clear => {
            session.clear();
            "tree cleared".to_string()
        }
        BstCommand::Print => render_tree(session),
        BstCommand::Stats => {
            let s = session.stats();
            let show = |v: Option<i64>| v.map_or_else(|| "—".to_string(), |v| v.to_string());
            format!(
                "count {}  height {}  min {}  max {}",
                s.count,
                s.height.max(0),
                show(s.min),
                show(s.max)
            )
        }
        BstCommand::Traversals => {
            let t = session.traversals();
            format!(
                "in-order:   {}\npre-order:  {}\npost-order: {}",
                join_path(&t.inorder),
                join_path(&t.preorder),
                join_path(&t.postorder)
            )
        }
        BstCommand::Help => BST_HELP.to_string(),
        BstCommand::Quit => String::new(),
    })
}
