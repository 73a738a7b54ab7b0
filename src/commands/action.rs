//! Parsing of typed player commands

use std::path::PathBuf;
use std::str::FromStr;

/// One command typed at the play prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select(usize),
    Place { x: usize, y: usize },
    Commit,
    Reset,
    Pass,
    Shuffle,
    Scores,
    Save(Option<PathBuf>),
    New,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = String;

    /// Parse a command line such as `place 7 7` or `s 3`
    ///
    /// Keywords are case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use scrabble_session::commands::Action;
    ///
    /// assert_eq!("place 7 8".parse::<Action>(), Ok(Action::Place { x: 7, y: 8 }));
    /// assert_eq!("PLAY".parse::<Action>(), Ok(Action::Commit));
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Err("type a command ('help' lists them)".to_string());
        };
        let args: Vec<&str> = parts.collect();

        let number = |arg: &str| {
            arg.parse::<usize>()
                .map_err(|_| format!("'{arg}' is not a number"))
        };
        let expect_args = |n: usize| {
            if args.len() == n {
                Ok(())
            } else {
                Err(format!("'{keyword}' takes {n} argument(s), got {}", args.len()))
            }
        };

        match keyword.to_lowercase().as_str() {
            "select" | "s" => {
                expect_args(1)?;
                Ok(Self::Select(number(args[0])?))
            }
            "place" | "p" => {
                expect_args(2)?;
                Ok(Self::Place {
                    x: number(args[0])?,
                    y: number(args[1])?,
                })
            }
            "play" | "commit" | "c" => expect_args(0).map(|()| Self::Commit),
            "reset" | "abandon" | "r" => expect_args(0).map(|()| Self::Reset),
            "pass" => expect_args(0).map(|()| Self::Pass),
            "shuffle" => expect_args(0).map(|()| Self::Shuffle),
            "scores" => expect_args(0).map(|()| Self::Scores),
            "save" => match args.as_slice() {
                [] => Ok(Self::Save(None)),
                [path] => Ok(Self::Save(Some(PathBuf::from(path)))),
                _ => Err("'save' takes at most one path".to_string()),
            },
            "new" | "n" => expect_args(0).map(|()| Self::New),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}
