//! Game screens.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStateDefinition {
    #[default]
    Loading,
    Intro,
    Narration,
    Map,
    Location,
    Dialogue,
    Collection,
    House,
}

impl GameStateDefinition {
    pub const ALL: [GameStateDefinition; 8] = [
        GameStateDefinition::Loading,
        GameStateDefinition::Intro,
        GameStateDefinition::Narration,
        GameStateDefinition::Map,
        GameStateDefinition::Location,
        GameStateDefinition::Dialogue,
        GameStateDefinition::Collection,
        GameStateDefinition::House,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStateDefinition::Loading => "LOADING",
            GameStateDefinition::Intro => "INTRO",
            GameStateDefinition::Narration => "NARRATION",
            GameStateDefinition::Map => "MAP",
            GameStateDefinition::Location => "LOCATION",
            GameStateDefinition::Dialogue => "DIALOGUE",
            GameStateDefinition::Collection => "COLLECTION",
            GameStateDefinition::House => "HOUSE",
        }
    }
}

impl fmt::Display for GameStateDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the current screen. Nothing moves between screens yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    current: GameStateDefinition,
}

impl GameState {
    pub fn new(current: GameStateDefinition) -> Self {
        Self { current }
    }

    pub fn current(&self) -> GameStateDefinition {
        self.current
    }

    pub fn init(&self) {
        tracing::info!(state = %self.current, "Game state initialised");
    }
}
