// src/cli.rs
use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

use crate::config::{ClientOptions, consts};
use crate::csv::Delim;
use crate::model::Race;
use crate::progress::Progress;
use crate::scrape::LiveOdds;

#[derive(Debug, Parser)]
#[command(name = "liveodds", version, about = "Live horse-racing odds from oddschecker")]
pub struct Cli {
    /// Site root every request is resolved against
    #[arg(long, global = true, env = "LIVEODDS_BASE_URL", default_value = consts::BASE_URL)]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, global = true, default_value = consts::USER_AGENT)]
    pub user_agent: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Meetings racing today
    Courses,
    /// Race times listed today
    Races {
        #[arg(short, long)]
        course: Option<String>,
    },
    /// One race by time, optionally pinned to a meeting
    Race {
        time: String,
        #[arg(short, long)]
        course: Option<String>,
        #[command(flatten)]
        out: Output,
    },
    /// Every race at one meeting
    Course {
        name: String,
        #[command(flatten)]
        out: Output,
    },
    /// Every race listed today
    All {
        /// Pages fetched in parallel (1 = sequential)
        #[arg(short, long, default_value_t = 1)]
        workers: usize,
        #[command(flatten)]
        out: Output,
    },
}

#[derive(Debug, Args, Clone, Copy)]
#[group(multiple = false)]
pub struct Output {
    /// Print JSON instead of summaries
    #[arg(long)]
    pub json: bool,
    /// Print odds tables as CSV
    #[arg(long)]
    pub csv: bool,
    /// Print odds tables as TSV
    #[arg(long)]
    pub tsv: bool,
}

/// Progress sink for batch loads: a line per race on stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, race: &crate::model::RaceKey) {
        self.done += 1;
        eprintln!("[{}/{}] {race}", self.done, self.total);
    }

    fn item_failed(&mut self, race: &crate::model::RaceKey) {
        self.done += 1;
        eprintln!("[{}/{}] {race} (failed)", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    crate::log::init("liveodds=info");
    let cli = Cli::parse();

    let opts = ClientOptions::default()
        .with_base_url(cli.base_url)
        .with_user_agent(cli.user_agent);
    let odds = LiveOdds::with_options(opts)?;

    let stdout = io::stdout();
    let mut w = stdout.lock();

    match cli.cmd {
        Command::Courses => {
            for c in odds.list_courses() {
                writeln!(w, "{c}")?;
            }
        }
        Command::Races { course } => {
            for t in odds.list_races(course.as_deref()) {
                writeln!(w, "{t}")?;
            }
        }
        Command::Race { time, course, out } => {
            let race = match course.as_deref() {
                Some(c) => odds.race_at(c, &time),
                None => odds.race(&time),
            };
            let race = race.ok_or_else(|| eyre!("no race at {time}"))?;
            print_races(&mut w, [&race], out)?;
        }
        Command::Course { name, out } => {
            let races = odds.course(&name);
            if races.is_empty() {
                return Err(eyre!("no races loaded for {name:?}"));
            }
            print_races(&mut w, races.values(), out)?;
        }
        Command::All { workers, out } => {
            let races = if workers > 1 {
                odds.all_concurrent(workers)
            } else {
                let mut progress = StderrProgress { total: 0, done: 0 };
                odds.all_with_progress(Some(&mut progress))
            };
            print_races(&mut w, races.values(), out)?;
        }
    }

    Ok(())
}

fn print_races<'a, W: Write>(
    w: &mut W,
    races: impl IntoIterator<Item = &'a Race>,
    out: Output,
) -> Result<()> {
    for race in races {
        if out.json {
            writeln!(w, "{}", race.to_json()?)?;
        } else if out.csv || out.tsv {
            let delim = if out.tsv { Delim::Tsv } else { Delim::Csv };
            writeln!(w, "# {}", race.key())?;
            write!(w, "{}", race.odds_table_string(delim))?;
        } else {
            writeln!(w, "{race}")?;
            for r in race.runners() {
                writeln!(w, "{r}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_race_with_course_and_format() {
        let cli = Cli::try_parse_from(["liveodds", "race", "14:30", "--course", "ascot", "--tsv"]).unwrap();
        match cli.cmd {
            Command::Race { time, course, out } => {
                assert_eq!(time, "14:30");
                assert_eq!(course.as_deref(), Some("ascot"));
                assert!(out.tsv && !out.csv && !out.json);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn output_flags_are_exclusive() {
        assert!(Cli::try_parse_from(["liveodds", "all", "--json", "--csv"]).is_err());
    }

    #[test]
    fn global_base_url_after_subcommand() {
        let cli = Cli::try_parse_from(["liveodds", "courses", "--base-url", "http://localhost:8080"]).unwrap();
        assert_eq!(cli.base_url, "http://localhost:8080");
        assert_eq!(cli.user_agent, consts::USER_AGENT);
    }
}
