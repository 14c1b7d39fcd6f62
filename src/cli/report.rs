//! Summary and chart commands

use crate::clock::Clock;
use crate::config::settings::Settings;
use crate::display::{format_chart, format_summary};
use crate::error::TallyResult;
use crate::models::PeriodType;
use crate::reports::{category_breakdown, get_chart_data, window_label};
use crate::storage::Storage;

/// Print ledger totals and spending by category
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let ledger = storage.ledger.load()?;
    let breakdown = category_breakdown(ledger.all());

    print!(
        "{}",
        format_summary(&ledger.totals(), &breakdown, &settings.currency_symbol)
    );
    Ok(())
}

/// Print the income vs expense chart for one window
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    period: Option<PeriodType>,
    offset: u32,
) -> TallyResult<()> {
    let ledger = storage.ledger.load()?;
    let period = period.unwrap_or(settings.default_chart_period);
    let today = clock.today();

    let chart = get_chart_data(ledger.all(), period, offset, today)?;
    let label = window_label(period, offset, today)?;

    print!(
        "{}",
        format_chart(&chart, period, &label, &settings.currency_symbol)
    );
    Ok(())
}
