use luckydraw_core::{open_storage, Decimal, DrawStore, EntryStatus, Ledger};
use tempfile::tempdir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create temp dir
    let temp_dir = tempdir()?;
    println!("Using temporary directory: {:?}", temp_dir.path());

    let storage = open_storage(temp_dir.path()).await?;
    let ledger = Ledger::new(storage.clone());

    println!("Funding wallet...");
    ledger
        .append_entry(Decimal::from(1000), EntryStatus::Approved)
        .await?;
    ledger
        .append_entry(Decimal::from(250), EntryStatus::Pending)
        .await?;

    // Pending entries never count toward the balance
    println!("Balance: {}", ledger.get_balance().await?);

    DrawStore::new(&storage).set_winning_number(7).await?;
    println!("Winning number: {:?}", DrawStore::new(&storage).load().await?);

    println!("Ledger history:");
    for entry in ledger.entries().await? {
        println!("  {} {:>10} {}", entry.id, entry.amount, entry.status);
    }

    Ok(())
}
