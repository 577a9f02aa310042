use sealed_unions::{Union2, Union2Factory};
use std::fmt::{self, Display, Formatter};

const FACTORY: Union2Factory<PlayerOne, PlayerTwo> = Union2Factory::new();

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PlayerOne;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PlayerTwo;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Player(Union2<PlayerOne, PlayerTwo>);

impl Player {
    pub fn one() -> Self {
        Self(FACTORY.first(PlayerOne))
    }

    pub fn two() -> Self {
        Self(FACTORY.second(PlayerTwo))
    }

    pub fn union(&self) -> &Union2<PlayerOne, PlayerTwo> {
        &self.0
    }
}

impl Display for Player {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0.join(|_| "Player 1", |_| "Player 2"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare() {
        assert_eq!(Player::one(), Player::one());
        assert_ne!(Player::one(), Player::two());
    }

    #[test]
    fn display() {
        assert_eq!(Player::one().to_string(), "Player 1");
        assert_eq!(Player::two().to_string(), "Player 2");
    }
}
