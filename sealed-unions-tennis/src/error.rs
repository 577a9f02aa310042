use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    Player(String),
    PlayerPoints(String),
    Score(String),
}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Player(string) => write!(formatter, "invalid player: {:?}", string),
            Self::PlayerPoints(string) => write!(formatter, "invalid player points: {:?}", string),
            Self::Score(string) => write!(formatter, "invalid score: {:?}", string),
        }
    }
}

impl Error for ParseError {}
