//! Line-oriented filter session.
//!
//! Each input line is one control change (`region Europe`, `year 2022`,
//! `top 5`, `country add Chile`, ...). Every accepted change triggers one
//! recomputation pass.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};

use speed_model::{FilterState, RegionFilter, Year, parse_top_n};
use speed_views::{Recomputer, ViewSink};

pub const SESSION_HELP: &str = "\
commands:
  region <name|all>        select a region
  year <YYYY>              select a year (2017-2024)
  top <N>                  number of entries in the top speeds view
  country add <name>       add a country to the trend view
  country remove <name>    remove a country from the trend view
  country clear            clear the trend selection
  show                     render the current views again
  help                     show this help
  quit                     end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Region(RegionFilter),
    Year(Year),
    Top(usize),
    AddCountry(String),
    RemoveCountry(String),
    ClearCountries,
    Show,
    Help,
    Quit,
}

/// What the session loop should do after applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Recompute,
    Unchanged,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = split_word(line);
        let command = match verb.to_ascii_lowercase().as_str() {
            "region" => Self::Region(RegionFilter::parse(rest)),
            "year" => Self::Year(rest.parse()?),
            "top" => Self::Top(parse_top_n(rest)?),
            "country" => {
                let (action, name) = split_word(rest);
                match action.to_ascii_lowercase().as_str() {
                    "add" if !name.is_empty() => Self::AddCountry(name.to_string()),
                    "remove" if !name.is_empty() => Self::RemoveCountry(name.to_string()),
                    "clear" => Self::ClearCountries,
                    _ => bail!("usage: country add|remove <name> or country clear"),
                }
            }
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(anyhow!("unknown command '{other}' (try 'help')")),
        };
        Ok(Some(command))
    }

    /// Applies the command to `filters`.
    pub fn apply(self, filters: &mut FilterState) -> Outcome {
        let changed = match self {
            Self::Region(region) => replace(&mut filters.region, region),
            Self::Year(year) => replace(&mut filters.year, Some(year)),
            Self::Top(n) => replace(&mut filters.top_n, Some(n)),
            Self::AddCountry(name) => filters.select_country(name),
            Self::RemoveCountry(name) => filters.deselect_country(&name),
            Self::ClearCountries => {
                let had_any = !filters.countries.is_empty();
                filters.clear_countries();
                had_any
            }
            Self::Show => true,
            Self::Help => return Outcome::Help,
            Self::Quit => return Outcome::Quit,
        };
        if changed {
            Outcome::Recompute
        } else {
            Outcome::Unchanged
        }
    }
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Runs a session until `quit` or end of input.
///
/// Renders once for the initial filters, then once per accepted change.
/// Rejected lines are reported on `feedback` and ignored. Returns the
/// final filter state.
pub fn run_session<R, S, W>(
    input: R,
    recomputer: &mut Recomputer<S>,
    mut filters: FilterState,
    feedback: &mut W,
) -> Result<FilterState>
where
    R: BufRead,
    S: ViewSink<Error = anyhow::Error>,
    W: Write,
{
    recomputer.on_filters_changed(&filters)?;

    for line in input.lines() {
        let line = line.context("read session input")?;
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(feedback, "error: {error}").context("write feedback")?;
                continue;
            }
        };
        if let SessionCommand::AddCountry(name) = &command
            && recomputer.dataset().by_country(name).is_none()
        {
            tracing::warn!(country = %name, "Selected country is not in the dataset");
        }
        match command.apply(&mut filters) {
            Outcome::Recompute => recomputer.on_filters_changed(&filters)?,
            Outcome::Unchanged => {}
            Outcome::Help => writeln!(feedback, "{SESSION_HELP}").context("write feedback")?,
            Outcome::Quit => break,
        }
    }
    Ok(filters)
}
