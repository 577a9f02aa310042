use crate::{player::Player, player_points::PlayerPoints};
use sealed_unions::{Union4, Union4Factory};
use std::fmt::{self, Display, Formatter};

const FACTORY: Union4Factory<Points, Advantage, Deuce, Game> = Union4Factory::new();

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Points {
    player_one: PlayerPoints,
    player_two: PlayerPoints,
}

impl Points {
    pub fn new(player_one: PlayerPoints, player_two: PlayerPoints) -> Self {
        Self {
            player_one,
            player_two,
        }
    }

    pub fn player_one(&self) -> PlayerPoints {
        self.player_one
    }

    pub fn player_two(&self) -> PlayerPoints {
        self.player_two
    }
}

impl Display for Points {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "Points{{{}, {}}}",
            self.player_one, self.player_two
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Advantage(Player);

impl Advantage {
    pub fn new(player: Player) -> Self {
        Self(player)
    }

    pub fn player(&self) -> Player {
        self.0
    }
}

impl Display for Advantage {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{}",
            self.0.union().join(|_| "Adv P1", |_| "Adv P2")
        )
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Deuce;

impl Display for Deuce {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "Deuce")
    }
}

/// A game won by a player.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Game(Player);

impl Game {
    pub fn new(player: Player) -> Self {
        Self(player)
    }

    pub fn player(&self) -> Player {
        self.0
    }
}

impl Display for Game {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{}",
            self.0.union().join(|_| "Win P1", |_| "Win P2")
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Score(Union4<Points, Advantage, Deuce, Game>);

impl Score {
    /// Returns a score at the beginning of a game.
    pub fn start() -> Self {
        Self::points(PlayerPoints::zero(), PlayerPoints::zero())
    }

    pub fn points(player_one: PlayerPoints, player_two: PlayerPoints) -> Self {
        Self(FACTORY.first(Points::new(player_one, player_two)))
    }

    pub fn advantage(player: Player) -> Self {
        Self(FACTORY.second(Advantage::new(player)))
    }

    pub fn deuce() -> Self {
        Self(FACTORY.third(Deuce))
    }

    pub fn game(player: Player) -> Self {
        Self(FACTORY.fourth(Game::new(player)))
    }

    pub fn union(&self) -> &Union4<Points, Advantage, Deuce, Game> {
        &self.0
    }
}

impl Display for Score {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
