//! Sample data command

use crate::clock::Clock;
use crate::config::settings::Settings;
use crate::error::TallyResult;
use crate::services::generate_sample_data;
use crate::storage::Storage;

/// Replace the ledger with generated sample records
pub fn handle_sample_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
) -> TallyResult<()> {
    let mut ledger = storage.ledger.load()?;
    ledger.replace_all(generate_sample_data(clock.today()))?;
    storage.ledger.save(&ledger)?;

    let symbol = settings.currency_symbol.as_str();
    let totals = ledger.totals();

    println!("Sample data generated:");
    println!("- {} income entries", ledger.incomes().count());
    println!("- {} expense entries", ledger.expenses().count());
    println!("- Total Income: {}", totals.income.format_with_symbol(symbol));
    println!("- Total Expenses: {}", totals.expenses.format_with_symbol(symbol));
    println!("- Current Balance: {}", totals.balance().format_with_symbol(symbol));

    Ok(())
}
