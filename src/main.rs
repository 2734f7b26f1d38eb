use anyhow::Result;
use tracing::{debug, info};

use gambit_rules::GameState;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("gambit starting");

    let game = GameState::new();
    game.validate()?;
    debug!("\n{}", game.pretty());
    info!(
        player = %game.current_player(),
        status = %game.status(),
        legal_moves = game.legal_moves().len(),
        "game ready"
    );
    Ok(())
}
