use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::error::GameError;

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    side: Side,
    name: String,
}

impl Player {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Holds at most two players; the first registered is player 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub const CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next player and return the side it was seated on.
    pub fn register(&mut self, name: impl Into<String>) -> Result<Side, GameError> {
        let side = match self.players.len() {
            0 => Side::One,
            1 => Side::Two,
            _ => return Err(GameError::PlayerCapacityExceeded),
        };
        let name = name.into();
        tracing::debug!(player = side.id(), %name, "registered player");
        self.players.push(Player { side, name });
        Ok(side)
    }

    pub fn get(&self, side: Side) -> Option<&Player> {
        self.players.iter().find(|p| p.side == side)
    }

    /// Look up a player by identifier (1 or 2).
    pub fn by_id(&self, id: i64) -> Result<&Player, GameError> {
        let side = Side::from_id(id)?;
        self.get(side).ok_or(GameError::PlayerNotRegistered(side))
    }

    pub fn name(&self, side: Side) -> Option<&str> {
        self.get(side).map(Player::name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
