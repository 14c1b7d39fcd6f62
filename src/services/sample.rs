//! Sample ledger data
//!
//! Three months of plausible records ending today: a salary on the 1st of
//! each month, the odd freelance payment, and 20 to 25 categorised expenses.
//! Output depends only on `today`, so repeated runs on the same day agree.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::{months_before, ExpenseCategory, Money, Transaction};

const MONTHS: u32 = 3;
const SALARY: Money = Money::from_cents(270_000);

/// Small deterministic sequence, seeded per month
struct Sequence(u64);

impl Sequence {
    fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1))
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    /// Uniform-ish value in `low..=high`
    fn between(&mut self, low: u32, high: u32) -> u32 {
        low + (self.next() % u64::from(high - low + 1)) as u32
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next() % items.len() as u64) as usize]
    }
}

/// Typical whole-pound amounts for each category
fn base_amounts(category: ExpenseCategory) -> &'static [i64] {
    match category {
        ExpenseCategory::Food => &[15, 25, 35, 45, 8, 12, 20, 30, 18, 22],
        ExpenseCategory::Transportation => &[45, 60, 25, 30, 15, 20, 85, 95],
        ExpenseCategory::Housing => &[800, 120, 150, 80, 95],
        ExpenseCategory::Entertainment => &[25, 35, 15, 45, 20, 30, 40, 18],
        ExpenseCategory::Healthcare => &[85, 120, 45, 65, 200, 150],
        ExpenseCategory::Other => &[20, 35, 50, 15, 25, 40, 30],
    }
}

fn descriptions(category: ExpenseCategory) -> &'static [&'static str] {
    match category {
        ExpenseCategory::Food => &[
            "Groceries",
            "Restaurant",
            "Coffee",
            "Lunch",
            "Dinner",
            "Snacks",
            "Takeaway",
        ],
        ExpenseCategory::Transportation => &[
            "Gas",
            "Bus fare",
            "Taxi",
            "Parking",
            "Car maintenance",
            "Train ticket",
        ],
        ExpenseCategory::Housing => &[
            "Rent",
            "Utilities",
            "Internet",
            "Phone",
            "Home supplies",
            "Repairs",
        ],
        ExpenseCategory::Entertainment => {
            &["Movie", "Concert", "Games", "Books", "Streaming", "Sports"]
        }
        ExpenseCategory::Healthcare => &["Pharmacy", "Doctor visit", "Dentist", "Gym", "Vitamins"],
        ExpenseCategory::Other => &[
            "Clothing",
            "Gifts",
            "Personal care",
            "Electronics",
            "Miscellaneous",
        ],
    }
}

fn stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

/// Generate sample records for the current month and the two before it
///
/// Records are sorted by timestamp and none is dated after `today`.
pub fn generate_sample_data(today: NaiveDate) -> Vec<Transaction> {
    let mut records = Vec::new();

    for back in (0..MONTHS).rev() {
        let (year, month) = months_before(today.year(), today.month(), back);
        let max_day = if back == 0 { today.day().min(28) } else { 28 };
        let mut seq = Sequence::new(year as u64 * 12 + u64::from(month));

        if let Some(ts) = stamp(year, month, 1, 9, 0) {
            records.push(Transaction::income(SALARY, "Monthly Salary", ts));
        }

        // Roughly three months in ten bring freelance work
        if seq.between(0, 9) < 3 {
            let day = seq.between(5, 25).min(max_day);
            let hour = seq.between(10, 16);
            let minute = seq.between(0, 59);
            let amount = Money::from_units(i64::from(seq.between(200, 800)), 0);
            if let Some(ts) = stamp(year, month, day, hour, minute) {
                records.push(Transaction::income(amount, "Freelance Work", ts));
            }
        }

        let count = seq.between(20, 25);
        for _ in 0..count {
            let day = seq.between(1, max_day);
            let hour = seq.between(8, 22);
            let minute = seq.between(0, 59);

            let category = *seq.pick(&ExpenseCategory::ALL);
            let base = *seq.pick(base_amounts(category));
            // Variation between 80% and 130% of the base amount
            let percent = i64::from(seq.between(80, 130));
            let amount = Money::from_cents(base * percent);
            let description = *seq.pick(descriptions(category));

            if let Some(ts) = stamp(year, month, day, hour, minute) {
                records.push(Transaction::expense(amount, description, category, ts));
            }
        }
    }

    records.sort_by_key(|t| t.timestamp);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_salaries_on_the_first() {
        let records = generate_sample_data(date(2025, 2, 10));

        let salaries: Vec<NaiveDate> = records
            .iter()
            .filter(|t| t.description == "Monthly Salary")
            .map(|t| t.date())
            .collect();

        assert_eq!(
            salaries,
            vec![date(2024, 12, 1), date(2025, 1, 1), date(2025, 2, 1)]
        );
    }

    #[test]
    fn test_expense_counts_and_validity() {
        let records = generate_sample_data(date(2025, 5, 20));

        for back in 0..3 {
            let (year, month) = months_before(2025, 5, back);
            let count = records
                .iter()
                .filter(|t| t.is_expense())
                .filter(|t| t.date().year() == year && t.date().month() == month)
                .count();
            assert!((20..=25).contains(&count), "{} expenses in {}-{}", count, year, month);
        }

        assert!(records.iter().all(|t| t.validate().is_ok()));
    }

    #[test]
    fn test_never_after_today() {
        let today = date(2025, 7, 3);
        let records = generate_sample_data(today);
        assert!(records.iter().all(|t| t.date() <= today));
    }

    #[test]
    fn test_sorted_and_deterministic() {
        let today = date(2025, 9, 15);
        let first = generate_sample_data(today);
        let second = generate_sample_data(today);

        assert!(first.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        let amounts = |records: &[Transaction]| -> Vec<(NaiveDateTime, Money)> {
            records.iter().map(|t| (t.timestamp, t.amount)).collect()
        };
        assert_eq!(amounts(&first), amounts(&second));
    }
}
