use sealed_unions::{Union4, Union4Factory};
use std::fmt::{self, Display, Formatter};

const FACTORY: Union4Factory<Zero, Fifteen, Thirty, Forty> = Union4Factory::new();

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Zero;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Fifteen;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Thirty;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Forty;

/// Points of a player in a game before deuce.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PlayerPoints(Union4<Zero, Fifteen, Thirty, Forty>);

impl PlayerPoints {
    pub fn zero() -> Self {
        Self(FACTORY.first(Zero))
    }

    pub fn fifteen() -> Self {
        Self(FACTORY.second(Fifteen))
    }

    pub fn thirty() -> Self {
        Self(FACTORY.third(Thirty))
    }

    pub fn forty() -> Self {
        Self(FACTORY.fourth(Forty))
    }

    pub fn union(&self) -> &Union4<Zero, Fifteen, Thirty, Forty> {
        &self.0
    }

    pub fn is_forty(&self) -> bool {
        self.0.is_fourth()
    }
}

impl Display for PlayerPoints {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{}",
            self.0.join(|_| "0", |_| "15", |_| "30", |_| "40")
        )
    }
}
