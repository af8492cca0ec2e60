use std::{fs, io, path::PathBuf, str::FromStr};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use grantdb_core::{entities::*, gateways::GrantGateway};

use crate::{
    app::{Notice, Session},
    render,
};

const HELP: &str = "\
Commands:
  tag <name>             select or deselect a tag
  find [text]            search names and descriptions (empty to reset)
  sort name|tag-count    change the order of the grants
  search                 fetch all grants with one of the selected tags
  clear                  clear all filters and reload all grants
  add <name> | <text>    add a single grant
  import <file>          add grants from a JSON file
  show                   show the current view
  dismiss                dismiss the current message
  help                   show this help
  quit                   leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tag(String),
    Find(String),
    Sort(SortKey),
    Search,
    Clear,
    Add { name: String, description: String },
    Import(PathBuf),
    Show,
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid sort order '{0}'. Use 'name' or 'tag-count'.")]
    InvalidSortKey(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (cmd, arg) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let arg = arg.trim();
        let cmd = match cmd.to_lowercase().as_str() {
            "tag" => {
                if arg.is_empty() {
                    return Err(ParseCommandError::Usage("tag <name>"));
                }
                Self::Tag(arg.to_string())
            }
            "find" => Self::Find(arg.to_string()),
            "sort" => {
                let key = arg
                    .parse()
                    .map_err(|_| ParseCommandError::InvalidSortKey(arg.to_string()))?;
                Self::Sort(key)
            }
            "search" => Self::Search,
            "clear" => Self::Clear,
            "add" => {
                let (name, description) = arg.split_once('|').unwrap_or((arg, ""));
                Self::Add {
                    name: name.trim().to_string(),
                    description: description.trim().to_string(),
                }
            }
            "import" => {
                if arg.is_empty() {
                    return Err(ParseCommandError::Usage("import <file>"));
                }
                Self::Import(arg.into())
            }
            "show" | "ls" => Self::Show,
            "dismiss" => Self::Dismiss,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(cmd.to_string())),
        };
        Ok(cmd)
    }
}

fn write_notice<W: io::Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    match notice {
        Notice::Success(msg) => writeln!(out, "{msg}"),
        Notice::Failure(msg) => writeln!(out, "Error: {msg}"),
    }
}

fn write_view<G, W>(out: &mut W, session: &Session<G>) -> io::Result<()>
where
    G: GrantGateway,
    W: io::Write,
{
    let view = session.view();
    write!(out, "{}", render::catalog_view(&view, session.filter(), session.catalog().origin()))
}

/// Process commands line by line until the input ends or `quit` is entered.
pub async fn run<G, R, W>(session: &mut Session<G>, input: R, out: &mut W) -> anyhow::Result<()>
where
    G: GrantGateway,
    R: AsyncBufRead + Unpin,
    W: io::Write,
{
    writeln!(out, "{}", render::tag_preview(&session.tag_preview()))?;
    writeln!(out, "{}", render::summary(&session.view(), session.catalog().origin()))?;
    if let Some(notice) = session.take_fresh_notice() {
        write_notice(out, notice)?;
    }
    writeln!(out, "Type 'help' for a list of commands.")?;
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        log::debug!("{cmd:?}");
        match cmd {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Show => {
                if let Some(notice) = session.notice() {
                    write_notice(out, notice)?;
                }
                write_view(out, session)?;
                continue;
            }
            Command::Dismiss => {
                session.dismiss_notice();
            }
            Command::Tag(tag) => {
                let selected = session.toggle_tag(&tag);
                writeln!(
                    out,
                    "{} tag '{tag}'",
                    if selected { "Selected" } else { "Deselected" }
                )?;
            }
            Command::Find(term) => {
                session.set_search_term(&term);
            }
            Command::Sort(sort_key) => {
                session.set_sort_key(sort_key);
            }
            Command::Search => {
                if session.filter().selected_tags.is_empty() {
                    writeln!(out, "No tags selected")?;
                }
                // Failures are kept as notice.
                let _ = session.search_selected().await;
            }
            Command::Clear => {
                let _ = session.clear_all().await;
            }
            Command::Add { name, description } => {
                let _ = session.add(NewGrant::new(name, description)).await;
            }
            Command::Import(path) => match fs::read_to_string(&path) {
                Ok(json) => {
                    let _ = session.import(&json).await;
                }
                Err(err) => {
                    writeln!(out, "Unable to read {}: {err}", path.display())?;
                    continue;
                }
            },
        }
        if let Some(notice) = session.take_fresh_notice() {
            write_notice(out, notice)?;
        }
        writeln!(out, "{}", render::summary(&session.view(), session.catalog().origin()))?;
    }
    Ok(())
}
