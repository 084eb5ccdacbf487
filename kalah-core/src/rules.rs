use serde::{Deserialize, Serialize};

use crate::game::{Game, MoveResolver};
use crate::turns::TurnOrder;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Alternate turns (bonus turns excepted) and refuse empty pits
    pub enforce_turns: bool,
}

impl RuleConfig {
    /// Free-for-all rules: anyone may move, empty pits sow nothing.
    pub fn permissive() -> Self {
        RuleConfig {
            enforce_turns: false,
        }
    }

    pub fn alternating() -> Self {
        RuleConfig {
            enforce_turns: true,
        }
    }

    pub fn resolver(&self, game: Game) -> Box<dyn MoveResolver> {
        if self.enforce_turns {
            Box::new(TurnOrder::new(game))
        } else {
            Box::new(game)
        }
    }
}
