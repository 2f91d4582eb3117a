//! Zbierka Player - loads the editor catalog and boots the game shell.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zbierka_player::game::DEFAULT_ROOT_ID;
use zbierka_player::infrastructure::clock::SystemClock;
use zbierka_player::infrastructure::headless::HeadlessDocument;
use zbierka_player::infrastructure::http_client::ApiAdapter;
use zbierka_player::{EditorService, EditorViewModel, Game, World};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zbierka_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Zbierka Player");

    let api = Arc::new(ApiAdapter::from_env());
    tracing::info!(base_url = %api.base_url(), "Using editor backend");

    let mut editor = EditorViewModel::new(EditorService::new(api), Arc::new(SystemClock::new()));
    editor.load().await;

    let state = editor.state();
    tracing::info!(
        artifacts = state.artifacts.len(),
        possibilities = state.possibilities.len(),
        "Catalog loaded"
    );

    let document = HeadlessDocument::with_root(DEFAULT_ROOT_ID);
    let game = Game::new(&document, World::from_editor(state))?;
    game.init();

    Ok(())
}
