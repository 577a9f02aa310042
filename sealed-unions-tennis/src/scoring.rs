use crate::{
    player::Player,
    player_points::PlayerPoints,
    score::{Advantage, Points, Score},
};

/// Returns a score after a player wins a point.
pub fn score_point(score: &Score, player: &Player) -> Score {
    score.union().join(
        |points| score_in_points(points, player),
        |advantage| score_in_advantage(advantage, player),
        |_| Score::advantage(*player),
        |_| start_game(player),
    )
}

/// Returns a final score after players win points in order.
pub fn score_points(score: Score, players: impl IntoIterator<Item = Player>) -> Score {
    players
        .into_iter()
        .fold(score, |score, player| score_point(&score, &player))
}

/// Returns every intermediate score after players win points in order.
pub fn score_history(score: Score, players: impl IntoIterator<Item = Player>) -> Vec<Score> {
    players
        .into_iter()
        .scan(score, |score, player| {
            *score = score_point(score, &player);
            Some(*score)
        })
        .collect()
}

fn score_in_points(points: &Points, player: &Player) -> Score {
    player.union().join(
        |_| {
            advance(
                points.player_one(),
                points.player_two(),
                Player::one(),
                |player_one| Score::points(player_one, points.player_two()),
            )
        },
        |_| {
            advance(
                points.player_two(),
                points.player_one(),
                Player::two(),
                |player_two| Score::points(points.player_one(), player_two),
            )
        },
    )
}

fn advance(
    scorer: PlayerPoints,
    opponent: PlayerPoints,
    player: Player,
    points: impl Fn(PlayerPoints) -> Score,
) -> Score {
    scorer.union().join(
        |_| points(PlayerPoints::fifteen()),
        |_| points(PlayerPoints::thirty()),
        |_| {
            if opponent.is_forty() {
                Score::deuce()
            } else {
                points(PlayerPoints::forty())
            }
        },
        |_| Score::game(player),
    )
}

fn score_in_advantage(advantage: &Advantage, player: &Player) -> Score {
    advantage.player().union().join(
        |_| {
            player
                .union()
                .join(|_| Score::game(Player::one()), |_| Score::deuce())
        },
        |_| {
            player
                .union()
                .join(|_| Score::deuce(), |_| Score::game(Player::two()))
        },
    )
}

fn start_game(player: &Player) -> Score {
    player.union().join(
        |_| Score::points(PlayerPoints::fifteen(), PlayerPoints::zero()),
        |_| Score::points(PlayerPoints::zero(), PlayerPoints::fifteen()),
    )
}
