use clap::Subcommand;
use dialoguer::Confirm;
use luckydraw_core::{DrawStore, GameConfig, LuckyDrawError, Result, Storage};

#[derive(Subcommand)]
pub enum DrawCommands {
    /// Show the configured winning number
    Show,
    /// Set the winning number every spin is compared against
    Set {
        /// Winning number
        number: i64,
    },
    /// Remove the winning number (spins fail until a new one is set)
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_draw_command(
    cmd: DrawCommands,
    storage: &Storage,
    game: &GameConfig,
) -> Result<()> {
    let store = DrawStore::new(storage);

    match cmd {
        DrawCommands::Show => match store.load().await? {
            Some(config) if game.is_valid_number(config.winning_number) => {
                println!("Winning number: {}", config.winning_number);
            }
            Some(config) => {
                println!(
                    "Winning number: {} (outside 1-{}, spins will fail)",
                    config.winning_number, game.max_number
                );
            }
            None => {
                println!("No winning number set.");
                println!("Set one with: luckydraw draw set <number>");
            }
        },

        DrawCommands::Set { number } => {
            if !game.is_valid_number(number) {
                return Err(LuckyDrawError::config(format!(
                    "Winning number must be between 1 and {}",
                    game.max_number
                )));
            }

            store.set_winning_number(number).await?;
            println!("Winning number set to {}.", number);
        }

        DrawCommands::Clear { yes } => {
            if !yes {
                let confirm = Confirm::new()
                    .with_prompt("Clear the winning number? Spins will fail until a new one is set.")
                    .default(false)
                    .interact()?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            if store.clear().await? {
                println!("Winning number cleared.");
            } else {
                println!("No winning number was set.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luckydraw_core::DrawConfig;

    #[tokio::test]
    async fn test_set_checks_board_range() {
        let storage = Storage::in_memory().await.unwrap();
        let game = GameConfig::default();

        let err = handle_draw_command(DrawCommands::Set { number: 13 }, &storage, &game)
            .await
            .unwrap_err();
        assert!(matches!(err, LuckyDrawError::Config(_)));
        assert_eq!(DrawStore::new(&storage).load().await.unwrap(), None);

        handle_draw_command(DrawCommands::Set { number: 12 }, &storage, &game)
            .await
            .unwrap();
        assert_eq!(
            DrawStore::new(&storage).load().await.unwrap(),
            Some(DrawConfig { winning_number: 12 })
        );

        handle_draw_command(DrawCommands::Clear { yes: true }, &storage, &game)
            .await
            .unwrap();
        assert_eq!(DrawStore::new(&storage).load().await.unwrap(), None);
    }
}
