use anyhow::Result;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;

#[tokio::main]
async fn main() -> Result<()> {
    // The game is fixed at the reference 16x16 board; there are no flags
    let mut human_mode = HumanMode::new(GameConfig::default());
    human_mode.run().await?;

    Ok(())
}
