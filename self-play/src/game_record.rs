use engine::Player;
use serde::{Deserialize, Serialize};

/// The moves of one finished episode in order of play.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameRecord<A> {
    starting_player: Player,
    actions: Vec<A>,
    winner: Player,
}

impl<A> GameRecord<A> {
    pub fn new(starting_player: Player, actions: Vec<A>, winner: Player) -> Self {
        Self {
            starting_player,
            actions,
            winner,
        }
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    pub fn winner(&self) -> Player {
        self.winner
    }

    pub fn into_inner(self) -> (Vec<A>, Player) {
        (self.actions, self.winner)
    }
}
