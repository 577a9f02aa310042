use crate::{error::ParseError, player::Player, player_points::PlayerPoints, score::Score};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static PLAYER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Player (\d+)$").unwrap());
static POINTS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Points\{(\d+), (\d+)\}$").unwrap());
static PLAYER_SCORE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(Adv|Win) P(\d+)$").unwrap());

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        PLAYER_REGEX
            .captures(string)
            .and_then(|captures| parse_player_number(&captures[1]))
            .ok_or_else(|| ParseError::Player(string.into()))
    }
}

impl FromStr for PlayerPoints {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(match string {
            "0" => Self::zero(),
            "15" => Self::fifteen(),
            "30" => Self::thirty(),
            "40" => Self::forty(),
            _ => return Err(ParseError::PlayerPoints(string.into())),
        })
    }
}

impl FromStr for Score {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string == "Deuce" {
            Ok(Self::deuce())
        } else if let Some(captures) = POINTS_REGEX.captures(string) {
            Ok(Self::points(captures[1].parse()?, captures[2].parse()?))
        } else if let Some(captures) = PLAYER_SCORE_REGEX.captures(string) {
            let player = parse_player_number(&captures[2])
                .ok_or_else(|| ParseError::Score(string.into()))?;

            Ok(if &captures[1] == "Adv" {
                Self::advantage(player)
            } else {
                Self::game(player)
            })
        } else {
            Err(ParseError::Score(string.into()))
        }
    }
}

fn parse_player_number(number: &str) -> Option<Player> {
    match number {
        "1" => Some(Player::one()),
        "2" => Some(Player::two()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::reachable_scores;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_player() {
        assert_eq!("Player 1".parse::<Player>(), Ok(Player::one()));
        assert_eq!("Player 2".parse::<Player>(), Ok(Player::two()));
    }

    #[test]
    fn fail_to_parse_player() {
        assert_eq!(
            "Player 3".parse::<Player>(),
            Err(ParseError::Player("Player 3".into()))
        );
        assert_eq!(
            "player 1".parse::<Player>(),
            Err(ParseError::Player("player 1".into()))
        );
    }

    #[test]
    fn parse_player_points() {
        assert_eq!("30".parse::<PlayerPoints>(), Ok(PlayerPoints::thirty()));
    }

    #[test]
    fn fail_to_parse_player_points() {
        assert_eq!(
            "20".parse::<PlayerPoints>(),
            Err(ParseError::PlayerPoints("20".into()))
        );
    }

    #[test]
    fn parse_scores() {
        assert_eq!(
            "Points{40, 15}".parse::<Score>(),
            Ok(Score::points(PlayerPoints::forty(), PlayerPoints::fifteen()))
        );
        assert_eq!(
            "Adv P2".parse::<Score>(),
            Ok(Score::advantage(Player::two()))
        );
        assert_eq!("Deuce".parse::<Score>(), Ok(Score::deuce()));
        assert_eq!("Win P1".parse::<Score>(), Ok(Score::game(Player::one())));
    }

    #[test]
    fn fail_to_parse_score_with_invalid_points() {
        assert_eq!(
            "Points{40, 7}".parse::<Score>(),
            Err(ParseError::PlayerPoints("7".into()))
        );
    }

    #[test]
    fn fail_to_parse_score_with_invalid_player() {
        assert_eq!(
            "Win P3".parse::<Score>(),
            Err(ParseError::Score("Win P3".into()))
        );
    }

    #[test]
    fn fail_to_parse_unknown_score() {
        assert_eq!(
            "Love".parse::<Score>(),
            Err(ParseError::Score("Love".into()))
        );
    }

    #[test]
    fn parse_formatted_scores() {
        for score in reachable_scores(Score::start()) {
            assert_eq!(score.to_string().parse::<Score>(), Ok(score));
        }
    }

    #[test]
    fn display_error() {
        assert_eq!(
            ParseError::Score("Love".into()).to_string(),
            r#"invalid score: "Love""#
        );
    }
}
