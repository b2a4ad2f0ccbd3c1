use balance_blocks::{BlockId, Side};
use balance_session::Level;
use crate::error::Error;
use std::str::FromStr;

/// Text printed by the `help` command.
pub const HELP: &str = "\
commands:
  new [1|2|3]            generate a new equation, optionally switching level
  eq <equation>          type your own equation, e.g. `eq 2x + 3 = \\frac{x}{2}`
  move <block> [side]    move a block to `left` or `right` (default: the other side)
  show                   print the equation and its blocks
  hint                   point at a block worth moving
  level <1|2|3>          switch level and generate a new equation
  score                  print the score
  help                   print this message
  quit                   leave";

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    New(Option<Level>),
    Equation(String),
    Move {
        block: BlockId,

        /// [`None`] moves the block to the other side.
        to: Option<Side>,
    },
    Show,
    Hint,
    Level(Level),
    Score,
    Help,
    Quit,
}

fn parse_level(arg: &str) -> Result<Level, Error> {
    let n = arg.parse::<u8>().map_err(Error::LevelNumber)?;
    Ok(Level::try_from(n)?)
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (name, rest) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "new" | "n" if rest.is_empty() => Ok(Self::New(None)),
            "new" | "n" => Ok(Self::New(Some(parse_level(rest)?))),
            "eq" | "equation" if rest.is_empty() => Err(Error::Usage("eq <equation>")),
            "eq" | "equation" => Ok(Self::Equation(rest.to_string())),
            "move" | "m" => {
                let mut args = rest.split_whitespace();
                let block = args
                    .next()
                    .ok_or(Error::Usage("move <block> [left|right]"))?
                    .parse::<BlockId>()
                    .map_err(Error::Block)?;
                let to = args.next().map(str::parse::<Side>).transpose().map_err(Error::Side)?;
                if args.next().is_some() {
                    return Err(Error::Usage("move <block> [left|right]"));
                }
                Ok(Self::Move { block, to })
            },
            "show" | "s" => Ok(Self::Show),
            "hint" => Ok(Self::Hint),
            "level" if rest.is_empty() => Err(Error::Usage("level <1|2|3>")),
            "level" => Ok(Self::Level(parse_level(rest)?)),
            "score" => Ok(Self::Score),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}
