// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text command grammar for the terminal front-end.
//!
//! ```text
//! select <id> | clear | close | hover <id> | unhover
//! mode [beginner|advanced] | layer <relay|parachain|dapp|l0|l1|l2> [on|off]
//! tour start|end|next|prev|goto <n> | about [close] | show | help | quit
//! ```

use explorer_core::{ExplorerError, Layer, UiEvent, ViewMode};
use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed an event into the reducer.
    Event(UiEvent),
    /// Redraw the current frame.
    Show,
    /// Print the grammar.
    Help,
    /// Leave the shell.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line.
    #[error("empty command")]
    Empty,
    /// First word is not a known verb.
    #[error("unknown command: {0} (try `help`)")]
    UnknownVerb(String),
    /// A required argument is missing.
    #[error("`{verb}` needs {what}")]
    MissingArg {
        /// Verb being parsed.
        verb: &'static str,
        /// Description of the missing argument.
        what: &'static str,
    },
    /// An argument could not be interpreted.
    #[error("`{verb}`: unexpected argument {arg:?}")]
    BadArg {
        /// Verb being parsed.
        verb: &'static str,
        /// Offending token.
        arg: String,
    },
    /// Bad layer or mode tag.
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
}

/// Grammar summary printed by `help`.
pub const HELP: &str = "\
select <id>         show a node in the detail panel
clear | close       clear the selection
hover <id>|unhover  pointer affordance
mode [beginner|advanced]
layer <relay|parachain|dapp> [on|off]
tour start|end|next|prev|goto <n>   (n is 1-based)
about [close]       About dialog
show                redraw
quit";

fn on_off(verb: &'static str, word: &str) -> Result<bool, ParseError> {
    match word.to_ascii_lowercase().as_str() {
        "on" | "show" | "true" => Ok(true),
        "off" | "hide" | "false" => Ok(false),
        _ => Err(ParseError::BadArg {
            verb,
            arg: word.to_owned(),
        }),
    }
}

/// Parse a single line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(ParseError::Empty)?;
    let arg = words.next();
    let extra = words.next();

    let cmd = match (verb.to_ascii_lowercase().as_str(), arg) {
        ("select", Some(id)) => Command::Event(UiEvent::SelectNode(Some(id.to_owned()))),
        ("select", None) => {
            return Err(ParseError::MissingArg {
                verb: "select",
                what: "a node id",
            })
        }
        ("clear" | "close", None) => Command::Event(UiEvent::ClosePanel),
        ("hover", Some(id)) => Command::Event(UiEvent::HoverNode(Some(id.to_owned()))),
        ("hover", None) => {
            return Err(ParseError::MissingArg {
                verb: "hover",
                what: "a node id",
            })
        }
        ("unhover", None) => Command::Event(UiEvent::HoverNode(None)),
        ("mode", None) => Command::Event(UiEvent::ToggleViewMode),
        ("mode", Some(mode)) => Command::Event(UiEvent::SetViewMode(mode.parse::<ViewMode>()?)),
        ("layer", None) => {
            return Err(ParseError::MissingArg {
                verb: "layer",
                what: "a layer (relay|parachain|dapp)",
            })
        }
        ("layer", Some(tag)) => {
            let layer = tag.parse::<Layer>()?;
            return match extra {
                None => Ok(Command::Event(UiEvent::ToggleLayer(layer))),
                Some(flag) => {
                    let visible = on_off("layer", flag)?;
                    match words.next() {
                        None => Ok(Command::Event(UiEvent::SetLayerVisible(layer, visible))),
                        Some(more) => Err(ParseError::BadArg {
                            verb: "layer",
                            arg: more.to_owned(),
                        }),
                    }
                }
            };
        }
        ("tour", Some(sub)) if sub.eq_ignore_ascii_case("goto") => {
            let n = extra.ok_or(ParseError::MissingArg {
                verb: "tour",
                what: "a step number",
            })?;
            let step: usize = n.parse().map_err(|_| ParseError::BadArg {
                verb: "tour",
                arg: n.to_owned(),
            })?;
            let index = step.checked_sub(1).ok_or(ParseError::BadArg {
                verb: "tour",
                arg: n.to_owned(),
            })?;
            return Ok(Command::Event(UiEvent::GotoTourStep(index)));
        }
        ("tour", Some(sub)) => match sub.to_ascii_lowercase().as_str() {
            "start" => Command::Event(UiEvent::StartTour),
            "end" | "exit" => Command::Event(UiEvent::EndTour),
            "next" | "finish" => Command::Event(UiEvent::AdvanceTour),
            "prev" | "back" => Command::Event(UiEvent::RetreatTour),
            _ => {
                return Err(ParseError::BadArg {
                    verb: "tour",
                    arg: sub.to_owned(),
                })
            }
        },
        ("tour", None) => {
            return Err(ParseError::MissingArg {
                verb: "tour",
                what: "start|end|next|prev|goto <n>",
            })
        }
        ("about", None) => Command::Event(UiEvent::OpenAbout),
        ("about", Some("close")) => Command::Event(UiEvent::CloseAbout),
        ("show", None) => Command::Show,
        ("help" | "?", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        (
            "clear" | "close" | "unhover" | "about" | "show" | "help" | "?" | "quit" | "exit",
            Some(arg),
        ) => {
            return Err(ParseError::BadArg {
                verb: "command",
                arg: arg.to_owned(),
            })
        }
        (other, _) => return Err(ParseError::UnknownVerb(other.to_owned())),
    };

    match extra {
        None => Ok(cmd),
        Some(arg) => Err(ParseError::BadArg {
            verb: "command",
            arg: arg.to_owned(),
        }),
    }
}
