//! Chart and summary display
//!
//! Renders the income vs expense chart as paired text bars, plus the totals
//! and category breakdown shown by `tally summary`.

use crate::models::PeriodType;
use crate::reports::{CategorySpending, ChartData};
use crate::services::Totals;

use super::report::{format_bar, format_percentage, separator};

const BAR_WIDTH: usize = 30;

/// Format a chart with its window label
pub fn format_chart(chart: &ChartData, period: PeriodType, window: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Income vs Expenses ({}) {}\n",
        period.adjective(),
        window
    ));
    output.push_str(&separator(60));
    output.push('\n');

    if chart.is_empty() {
        output.push_str("No data available for the selected period\n");
        return output;
    }

    let label_width = chart
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = chart.max_value().as_f64();

    for bucket in chart.iter() {
        output.push_str(&format!(
            "{:<width$}  + {} {}\n",
            bucket.label,
            format_bar(bucket.income.as_f64(), max, BAR_WIDTH),
            bucket.income.format_with_symbol(symbol),
            width = label_width
        ));
        output.push_str(&format!(
            "{:<width$}  - {} {}\n",
            "",
            format_bar(bucket.expenses.as_f64(), max, BAR_WIDTH),
            bucket.expenses.format_with_symbol(symbol),
            width = label_width
        ));
    }

    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "Income: {}  Expenses: {}\n",
        chart.total_income().format_with_symbol(symbol),
        chart.total_expenses().format_with_symbol(symbol)
    ));

    output
}

/// Format ledger totals and the spending breakdown
pub fn format_summary(totals: &Totals, breakdown: &[CategorySpending], symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Income:    {:>12}\n",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses:  {:>12}\n",
        totals.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:         {:>12}\n",
        totals.balance().format_with_symbol(symbol)
    ));

    if breakdown.is_empty() {
        return output;
    }

    output.push('\n');
    output.push_str(&format!(
        "{:<16} {:>12} {:>6} {:>7}\n",
        "Category", "Amount", "Count", "%"
    ));
    output.push_str(&separator(44));
    output.push('\n');

    for row in breakdown {
        output.push_str(&format!(
            "{:<16} {:>12} {:>6} {:>7}\n",
            row.category.name(),
            row.total.format_with_symbol(symbol),
            row.count,
            format_percentage(row.percentage)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money, Transaction};
    use crate::reports::{category_breakdown, get_chart_data, window_label};
    use chrono::NaiveDate;

    #[test]
    fn test_format_chart() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let records = vec![Transaction::income(
            Money::from_cents(10_000),
            "Gift",
            today.and_hms_opt(9, 0, 0).unwrap(),
        )];
        let chart = get_chart_data(&records, PeriodType::Day, 0, today).unwrap();
        let label = window_label(PeriodType::Day, 0, today).unwrap();

        let output = format_chart(&chart, PeriodType::Day, &label, "£");
        assert!(output.starts_with("Income vs Expenses (Daily) 03/08 - 03/14/2025"));
        assert!(output.contains("03/14  + ██████████████████████████████ £100.00"));
        assert!(output.contains("Income: £100.00  Expenses: £0.00"));
    }

    #[test]
    fn test_format_empty_chart() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let chart = get_chart_data(&[], PeriodType::Week, 0, today).unwrap();
        let output = format_chart(&chart, PeriodType::Week, "", "£");
        assert!(output.contains("No data available"));
    }

    #[test]
    fn test_format_summary() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let records = vec![
            Transaction::income(Money::from_cents(100_000), "Salary", ts),
            Transaction::expense(Money::from_cents(25_000), "Rent", ExpenseCategory::Housing, ts),
        ];
        let totals = Totals::from_records(&records).unwrap();

        let output = format_summary(&totals, &category_breakdown(&records), "£");
        assert!(output.contains("Balance:"));
        assert!(output.contains("£750.00"));
        assert!(output.contains("Housing"));
        assert!(output.contains("100%"));
    }
}
