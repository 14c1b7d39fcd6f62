//! Income vs expense chart data
//!
//! Buckets ledger records into a window of consecutive periods: seven days,
//! four Monday-aligned weeks, or six calendar months. `offset` pages back
//! through history one whole window at a time; 0 is the window containing
//! today.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::{TallyError, TallyResult};
use crate::models::{months_before, Money, PeriodType, Transaction, TransactionKind};

/// One bucket of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBucket {
    /// First day of the bucket, also its key
    pub start: NaiveDate,
    /// Last day of the bucket (inclusive)
    pub end: NaiveDate,
    /// Axis label ("03/14", "Week 03/10", "Mar")
    pub label: String,
    pub income: Money,
    pub expenses: Money,
}

impl ChartBucket {
    fn empty(start: NaiveDate, end: NaiveDate, label: String) -> Self {
        Self {
            start,
            end,
            label,
            income: Money::zero(),
            expenses: Money::zero(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Income minus expenses for the bucket
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Chart buckets in chronological order, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub period: PeriodType,
    pub buckets: Vec<ChartBucket>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartBucket> {
        self.buckets.iter()
    }

    /// Bucket with the given start date
    pub fn get(&self, start: NaiveDate) -> Option<&ChartBucket> {
        self.buckets.iter().find(|b| b.start == start)
    }

    /// Bucket with the given label
    pub fn by_label(&self, label: &str) -> Option<&ChartBucket> {
        self.buckets.iter().find(|b| b.label == label)
    }

    pub fn total_income(&self) -> Money {
        self.buckets.iter().map(|b| b.income).sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.buckets.iter().map(|b| b.expenses).sum()
    }

    /// Largest single income or expense value, used to scale bars
    pub fn max_value(&self) -> Money {
        self.buckets
            .iter()
            .map(|b| b.income.max(b.expenses))
            .max()
            .unwrap_or_default()
    }
}

/// Monday of the week containing `date`
fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(next_year, next_month)?.pred_opt()
}

fn offset_out_of_range(period: PeriodType, offset: u32) -> TallyError {
    TallyError::Validation(format!(
        "Offset {} pages back past the earliest supported date for {} charts",
        offset,
        period.adjective().to_lowercase()
    ))
}

/// Empty buckets for the window, oldest first
fn window_buckets(period: PeriodType, offset: u32, today: NaiveDate) -> Option<Vec<ChartBucket>> {
    let offset = u64::from(offset);

    match period {
        PeriodType::Day => {
            let last = today.checked_sub_days(Days::new(offset * 7))?;
            (0..7u64)
                .rev()
                .map(|back| {
                    let day = last.checked_sub_days(Days::new(back))?;
                    Some(ChartBucket::empty(day, day, day.format("%m/%d").to_string()))
                })
                .collect()
        }
        PeriodType::Week => {
            let anchor = week_start(today)?.checked_sub_days(Days::new(offset * 28))?;
            (0..4u64)
                .rev()
                .map(|back| {
                    let start = anchor.checked_sub_days(Days::new(back * 7))?;
                    let end = start.checked_add_days(Days::new(6))?;
                    Some(ChartBucket::empty(
                        start,
                        end,
                        format!("Week {}", start.format("%m/%d")),
                    ))
                })
                .collect()
        }
        PeriodType::Month => {
            let newest = u32::try_from(offset).ok()?.checked_mul(6)?;
            (0..6u32)
                .rev()
                .map(|back| {
                    let (year, month) =
                        months_before(today.year(), today.month(), newest.checked_add(back)?);
                    let start = first_of_month(year, month)?;
                    let end = last_of_month(year, month)?;
                    Some(ChartBucket::empty(
                        start,
                        end,
                        start.format("%b").to_string(),
                    ))
                })
                .collect()
        }
    }
}

/// Aggregate records into the chart window
///
/// Returns an empty chart when there are no records at all. Otherwise every
/// bucket of the window is present, zero when nothing falls inside it.
///
/// # Errors
///
/// Returns a validation error when `offset` pages back past the earliest
/// date chrono can represent.
pub fn get_chart_data(
    records: &[Transaction],
    period: PeriodType,
    offset: u32,
    today: NaiveDate,
) -> TallyResult<ChartData> {
    if records.is_empty() {
        return Ok(ChartData {
            period,
            buckets: Vec::new(),
        });
    }

    let mut buckets =
        window_buckets(period, offset, today).ok_or_else(|| offset_out_of_range(period, offset))?;

    for txn in records {
        let date = txn.date();
        if let Some(bucket) = buckets.iter_mut().find(|b| b.contains(date)) {
            match txn.kind {
                TransactionKind::Income => bucket.income += txn.amount,
                TransactionKind::Expense => bucket.expenses += txn.amount,
            }
        }
    }

    Ok(ChartData { period, buckets })
}

/// Inclusive date span covered by the window
pub fn window_range(
    period: PeriodType,
    offset: u32,
    today: NaiveDate,
) -> TallyResult<(NaiveDate, NaiveDate)> {
    let buckets =
        window_buckets(period, offset, today).ok_or_else(|| offset_out_of_range(period, offset))?;
    match (buckets.first(), buckets.last()) {
        (Some(first), Some(last)) => Ok((first.start, last.end)),
        _ => Err(offset_out_of_range(period, offset)),
    }
}

/// Human readable description of the window
///
/// Days and weeks read "02/24 - 03/02/2025"; months read "Jan - Jun 2025",
/// or "Nov 2024 - Apr 2025" when the window spans two years.
pub fn window_label(period: PeriodType, offset: u32, today: NaiveDate) -> TallyResult<String> {
    let (start, end) = window_range(period, offset, today)?;

    Ok(match period {
        PeriodType::Day | PeriodType::Week => {
            format!("{} - {}", start.format("%m/%d"), end.format("%m/%d/%Y"))
        }
        PeriodType::Month if start.year() == end.year() => {
            format!("{} - {} {}", start.format("%b"), end.format("%b"), end.year())
        }
        PeriodType::Month => format!("{} - {}", start.format("%b %Y"), end.format("%b %Y")),
    })
}
