use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use luckydraw_core::types::{fits_amount_scale, AMOUNT_SCALE};
use luckydraw_core::{Decimal, EntryStatus, Ledger, LuckyDrawError, Result};

#[derive(Subcommand)]
pub enum WalletCommands {
    /// Show the approved wallet balance
    Balance,
    /// Credit the wallet
    Deposit {
        /// Amount to credit
        amount: Decimal,
        /// Record the deposit as pending (not spendable)
        #[arg(short, long)]
        pending: bool,
    },
    /// Append an offsetting correction entry (may be negative)
    Adjust {
        /// Signed amount, e.g. -25.00
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,
    },
    /// Show every ledger entry
    History,
}

fn check_scale(amount: Decimal) -> Result<()> {
    if !fits_amount_scale(amount) {
        return Err(LuckyDrawError::config(format!(
            "Amount cannot have more than {} decimal places",
            AMOUNT_SCALE
        )));
    }
    Ok(())
}

pub async fn handle_wallet_command(cmd: WalletCommands, ledger: &Ledger) -> Result<()> {
    match cmd {
        WalletCommands::Balance => {
            let balance = ledger.get_balance().await?;
            println!("Wallet balance: {}", balance);
        }

        WalletCommands::Deposit { amount, pending } => {
            if amount <= Decimal::ZERO {
                return Err(LuckyDrawError::config("Deposit amount must be greater than 0"));
            }
            check_scale(amount)?;

            let status = if pending {
                EntryStatus::Pending
            } else {
                EntryStatus::Approved
            };
            let entry = ledger.append_entry(amount, status).await?;

            println!("Deposited {} ({})", entry.amount, entry.status);
            println!("  Entry ID: {}", entry.id);
            println!("  Balance: {}", ledger.get_balance().await?);
        }

        WalletCommands::Adjust { amount } => {
            if amount.is_zero() {
                return Err(LuckyDrawError::config("Adjustment amount cannot be 0"));
            }
            check_scale(amount)?;

            let entry = ledger.append_entry(amount, EntryStatus::Approved).await?;

            println!("Recorded adjustment of {}", entry.amount);
            println!("  Entry ID: {}", entry.id);
            println!("  Balance: {}", ledger.get_balance().await?);
        }

        WalletCommands::History => {
            let entries = ledger.entries().await?;

            if entries.is_empty() {
                println!("No ledger entries found.");
                println!("Fund the wallet with: luckydraw wallet deposit <amount>");
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["ID", "Amount", "Status", "Created"]);

            for entry in &entries {
                table.add_row(vec![
                    entry.id.to_string()[..8].to_string(), // truncated for display
                    entry.amount.to_string(),
                    entry.status.to_string(),
                    entry.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                ]);
            }

            println!("{}", table);
            println!("Balance: {}", ledger.get_balance().await?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luckydraw_core::Storage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_deposits_and_adjustments() {
        let ledger = Ledger::new(Arc::new(Storage::in_memory().await.unwrap()));

        handle_wallet_command(
            WalletCommands::Deposit {
                amount: Decimal::from(1000),
                pending: false,
            },
            &ledger,
        )
        .await
        .unwrap();
        handle_wallet_command(
            WalletCommands::Deposit {
                amount: Decimal::from(200),
                pending: true,
            },
            &ledger,
        )
        .await
        .unwrap();
        handle_wallet_command(
            WalletCommands::Adjust {
                amount: Decimal::new(-2500, 2),
            },
            &ledger,
        )
        .await
        .unwrap();

        assert_eq!(ledger.entries().await.unwrap().len(), 3);
        assert_eq!(ledger.get_balance().await.unwrap(), Decimal::from(975));
    }

    #[tokio::test]
    async fn test_non_positive_deposit_is_rejected() {
        let ledger = Ledger::new(Arc::new(Storage::in_memory().await.unwrap()));

        for amount in [Decimal::ZERO, Decimal::from(-5)] {
            let err = handle_wallet_command(
                WalletCommands::Deposit {
                    amount,
                    pending: false,
                },
                &ledger,
            )
            .await
            .unwrap_err();
            assert!(matches!(err, LuckyDrawError::Config(_)));
        }
        assert!(ledger.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sub_cent_amounts_are_rejected() {
        let ledger = Ledger::new(Arc::new(Storage::in_memory().await.unwrap()));

        let commands = [
            WalletCommands::Deposit {
                amount: Decimal::new(4, 3),
                pending: false,
            },
            WalletCommands::Adjust {
                amount: Decimal::new(-10005, 3),
            },
        ];
        for cmd in commands {
            let err = handle_wallet_command(cmd, &ledger).await.unwrap_err();
            assert!(matches!(err, LuckyDrawError::Config(_)));
        }
        assert!(ledger.entries().await.unwrap().is_empty());
    }
}
