//! Control command grammar

use std::fmt;
use ui9_config::Placement;
use ui9_theme::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Ping,
    Reload,
    Apply,
    SetPreset(Style),
    Panel(Placement),
}

/// Why a command line was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The verb needs an argument and got none
    Missing(&'static str),
    /// The argument is not one of the accepted values
    BadValue(&'static str),
    Unknown,
}

impl Command {
    /// Parse `verb [arg]`. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Command, Rejection> {
        let line = line.trim();
        let (verb, arg) = match line.split_once([' ', '\t']) {
            Some((verb, arg)) => (verb, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };

        match verb {
            "ping" => Ok(Command::Ping),
            "reload" => Ok(Command::Reload),
            "apply" => Ok(Command::Apply),
            "setpreset" => {
                let arg = arg.ok_or(Rejection::Missing("setpreset"))?;
                Style::parse(arg)
                    .map(Command::SetPreset)
                    .ok_or(Rejection::BadValue("setpreset"))
            }
            "panel" => {
                let arg = arg.ok_or(Rejection::Missing("panel"))?;
                Placement::parse(arg)
                    .map(Command::Panel)
                    .ok_or(Rejection::BadValue("panel"))
            }
            _ => Err(Rejection::Unknown),
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Command::Ping => "ping",
            Command::Reload => "reload",
            Command::Apply => "apply",
            Command::SetPreset(_) => "setpreset",
            Command::Panel(_) => "panel",
        }
    }
}

/// The success reply, e.g. `ok setpreset dark`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetPreset(style) => write!(f, "ok setpreset {style}"),
            Command::Panel(placement) => write!(f, "ok panel {placement}"),
            other => write!(f, "ok {}", other.verb()),
        }
    }
}

/// The failure reply, e.g. `err panel badvalue`.
impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Missing(verb) => write!(f, "err {verb} missing"),
            Rejection::BadValue(verb) => write!(f, "err {verb} badvalue"),
            Rejection::Unknown => f.write_str("err unknown"),
        }
    }
}
