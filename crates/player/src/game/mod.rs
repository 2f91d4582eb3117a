//! Game shell.
//!
//! Only the skeleton exists so far: a fixed list of screens, the state holder,
//! the root element binding, and the catalog the editor produced.

mod state;
mod ui;
mod world;

pub use state::{GameState, GameStateDefinition};
pub use ui::{Ui, UiError, DEFAULT_ROOT_ID};
pub use world::World;

use crate::ports::outbound::{DocumentPort, ElementPort};

/// The game as a whole. Starts on the loading screen.
pub struct Game<E: ElementPort> {
    state: GameState,
    world: World,
    ui: Ui<E>,
}

impl<E: ElementPort> Game<E> {
    /// Bind to the document's `#app` element.
    pub fn new<D>(document: &D, world: World) -> Result<Self, UiError>
    where
        D: DocumentPort<Element = E>,
    {
        Ok(Self {
            state: GameState::new(GameStateDefinition::Loading),
            world,
            ui: Ui::new(document, DEFAULT_ROOT_ID)?,
        })
    }

    pub fn init(&self) {
        tracing::info!(
            artifacts = self.world.artifacts().len(),
            possibilities = self.world.possibilities().len(),
            "Game initialised"
        );
        self.state.init();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn ui(&self) -> &Ui<E> {
        &self.ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::headless::HeadlessDocument;

    #[test]
    fn game_starts_loading_on_the_app_root() {
        let document = HeadlessDocument::with_root("app");
        let game = Game::new(&document, World::default()).expect("root exists");
        game.init();

        assert_eq!(game.state().current(), GameStateDefinition::Loading);
        assert_eq!(game.ui().root().id(), "app");
        assert_eq!(game.ui().root().style("height"), Some("100vh"));
    }

    #[test]
    fn game_without_root_fails() {
        let document = HeadlessDocument::with_root("main");
        let result = Game::new(&document, World::default());

        assert!(matches!(result, Err(UiError::RootNotFound(id)) if id == "app"));
    }
}
