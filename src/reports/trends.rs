//! Spending Trends
//!
//! Buckets expenses into calendar months over a date range. Every month in
//! the range gets a bucket, so a range with no spending still produces a
//! full series of zero buckets.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::models::{Expense, Money, Month};

/// Spending within one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub month: Month,
    /// Display label, e.g. "Jun 2024"
    pub label: String,
    pub total_amount: Money,
    pub transaction_count: usize,
}

impl MonthlyBucket {
    fn empty(month: Month) -> Self {
        Self {
            month,
            label: month.label(),
            total_amount: Money::zero(),
            transaction_count: 0,
        }
    }

    /// Average transaction amount, zero for an empty bucket
    pub fn average_amount(&self) -> Money {
        self.total_amount.div_round(self.transaction_count)
    }
}

/// A chronological series of monthly buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingTrend {
    pub buckets: Vec<MonthlyBucket>,
    pub total_amount: Money,
    pub transaction_count: usize,
}

impl SpendingTrend {
    /// Bucket `expenses` by month over `[start, end]`
    ///
    /// Both dates are truncated to their month, so the first and last buckets
    /// always cover whole months. Expenses outside those months are ignored.
    pub fn generate<'a, I>(expenses: I, start: NaiveDate, end: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        Self::for_months(expenses, Month::of(start), Month::of(end))
    }

    /// Bucket `expenses` over the months `first` through `last` inclusive
    pub fn for_months<'a, I>(expenses: I, first: Month, last: Month) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let span = first.span_to(&last);
        let mut buckets = Vec::with_capacity(span);
        let mut month = first;
        for _ in 0..span {
            buckets.push(MonthlyBucket::empty(month));
            month = month.next();
        }

        let mut total_amount = Money::zero();
        let mut transaction_count = 0;
        if span > 0 {
            for expense in expenses {
                let offset = first.span_to(&Month::of(expense.date));
                // offset is 1-based; 0 means before `first`
                if offset == 0 || offset > span {
                    continue;
                }
                let bucket = &mut buckets[offset - 1];
                bucket.total_amount += expense.amount;
                bucket.transaction_count += 1;
                total_amount += expense.amount;
                transaction_count += 1;
            }
        }

        debug!(
            buckets = buckets.len(),
            transactions = transaction_count,
            "bucketed spending by month"
        );

        Self {
            buckets,
            total_amount,
            transaction_count,
        }
    }

    /// Bucket `expenses` over a preset range ending with `today`'s month
    pub fn for_range<'a, I>(expenses: I, range: TimeRange, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let (first, last) = range.resolve(today);
        Self::for_months(expenses, first, last)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The bucket with the largest total; the earliest month wins ties
    pub fn highest_month(&self) -> Option<&MonthlyBucket> {
        let mut highest: Option<&MonthlyBucket> = None;
        for bucket in &self.buckets {
            match highest {
                Some(best) if bucket.total_amount <= best.total_amount => {}
                _ => highest = Some(bucket),
            }
        }
        highest
    }

    /// Total divided by the number of months, zero for an empty series
    pub fn monthly_average(&self) -> Money {
        self.total_amount.div_round(self.buckets.len())
    }

    /// Format the trend for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        match (self.buckets.first(), self.buckets.last()) {
            (Some(first), Some(last)) => {
                output.push_str(&format!(
                    "Spending Trends: {} - {}\n",
                    first.label, last.label
                ));
            }
            _ => {
                output.push_str("Spending Trends\n");
            }
        }
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.buckets.is_empty() {
            output.push_str("No months in range.\n");
            return output;
        }

        let max_total = self
            .highest_month()
            .map(|b| b.total_amount.as_decimal())
            .unwrap_or(0.0);

        output.push_str(&format!(
            "{:<10} {:>12} {:>6}  {}\n",
            "Month", "Spent", "Count", "Trend"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for bucket in &self.buckets {
            output.push_str(&format!(
                "{:<10} {:>12} {:>6}  {}\n",
                bucket.label,
                bucket.total_amount.format_with_symbol(symbol),
                bucket.transaction_count,
                crate::display::format_bar(bucket.total_amount.as_decimal(), max_total, 20)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total: {}  Monthly average: {}\n",
            self.total_amount.format_with_symbol(symbol),
            self.monthly_average().format_with_symbol(symbol)
        ));
        if let Some(highest) = self.highest_month() {
            output.push_str(&format!(
                "Highest month: {} ({})\n",
                highest.label,
                highest.total_amount.format_with_symbol(symbol)
            ));
        }

        output
    }
}

/// Preset trend windows ending with the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    ThreeMonths,
    #[default]
    SixMonths,
    OneYear,
}

impl TimeRange {
    pub fn months(&self) -> u32 {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    /// Pick the preset covering `months`, if there is one
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            3 => Some(Self::ThreeMonths),
            6 => Some(Self::SixMonths),
            12 => Some(Self::OneYear),
            _ => None,
        }
    }

    /// First and last month of the range when `today` falls in the last month
    pub fn resolve(&self, today: NaiveDate) -> (Month, Month) {
        let last = Month::of(today);
        (last.minus(self.months() - 1), last)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreeMonths => write!(f, "3m"),
            Self::SixMonths => write!(f, "6m"),
            Self::OneYear => write!(f, "1y"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "3m" | "3" => Ok(Self::ThreeMonths),
            "6m" | "6" => Ok(Self::SixMonths),
            "1y" | "12m" | "12" => Ok(Self::OneYear),
            other => Err(format!(
                "Invalid time range '{}'. Use 3m, 6m or 1y",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, date, expense};

    fn month(year: i32, m: u32) -> Month {
        Month::new(year, m).unwrap()
    }

    #[test]
    fn test_six_month_range_without_expenses() {
        let none: Vec<Expense> = Vec::new();
        let trend = SpendingTrend::generate(&none, date(2024, 1, 20), date(2024, 6, 2));

        assert_eq!(trend.buckets.len(), 6);
        let months: Vec<Month> = trend.buckets.iter().map(|b| b.month).collect();
        assert_eq!(
            months,
            (1..=6).map(|m| month(2024, m)).collect::<Vec<_>>()
        );
        assert!(trend.buckets.iter().all(|b| b.total_amount.is_zero()));
        assert_eq!(trend.monthly_average(), Money::zero());
        // All zero: the first month is the highest
        assert_eq!(trend.highest_month().unwrap().month, month(2024, 1));
    }

    #[test]
    fn test_leap_february_boundaries() {
        let expenses = vec![
            expense("1", 1000, "Jan end", "1", date(2024, 1, 31)),
            expense("2", 2000, "Leap day", "1", date(2024, 2, 29)),
            expense("3", 3000, "March first", "1", date(2024, 3, 1)),
        ];
        let trend = SpendingTrend::generate(&expenses, date(2024, 1, 1), date(2024, 3, 31));

        let totals: Vec<i64> = trend.buckets.iter().map(|b| b.total_amount.cents()).collect();
        assert_eq!(totals, vec![1000, 2000, 3000]);
        assert_eq!(trend.buckets[1].label, "Feb 2024");
    }

    #[test]
    fn test_year_rollover() {
        let expenses = vec![
            expense("1", 5000, "December", "1", date(2023, 12, 31)),
            expense("2", 7000, "January", "1", date(2024, 1, 1)),
        ];
        let trend = SpendingTrend::generate(&expenses, date(2023, 11, 5), date(2024, 2, 10));

        let labels: Vec<&str> = trend.buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Nov 2023", "Dec 2023", "Jan 2024", "Feb 2024"]);
        assert_eq!(trend.buckets[1].total_amount, Money::from_cents(5000));
        assert_eq!(trend.buckets[2].total_amount, Money::from_cents(7000));
        assert_eq!(trend.highest_month().unwrap().label, "Jan 2024");
    }

    #[test]
    fn test_expenses_outside_range_are_ignored() {
        let expenses = vec![
            expense("1", 1000, "Before", "1", date(2024, 2, 29)),
            expense("2", 2000, "Inside", "1", date(2024, 3, 15)),
            expense("3", 4000, "After", "1", date(2024, 5, 1)),
        ];
        let trend = SpendingTrend::generate(&expenses, date(2024, 3, 1), date(2024, 4, 30));
        assert_eq!(trend.total_amount, Money::from_cents(2000));
        assert_eq!(trend.transaction_count, 1);
        assert_eq!(trend.monthly_average(), Money::from_cents(1000));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let expenses = fixtures::expenses();
        let trend = SpendingTrend::generate(&expenses, date(2024, 7, 1), date(2024, 6, 30));
        assert!(trend.is_empty());
        assert!(trend.highest_month().is_none());
        assert_eq!(trend.total_amount, Money::zero());
        assert_eq!(trend.monthly_average(), Money::zero());
    }

    #[test]
    fn test_highest_month_tie_goes_to_earliest() {
        let expenses = vec![
            expense("1", 3000, "April", "1", date(2024, 4, 10)),
            expense("2", 3000, "May", "1", date(2024, 5, 10)),
            expense("3", 1000, "June", "1", date(2024, 6, 10)),
        ];
        let trend = SpendingTrend::generate(&expenses, date(2024, 4, 1), date(2024, 6, 1));
        assert_eq!(trend.highest_month().unwrap().month, month(2024, 4));
    }

    #[test]
    fn test_bucket_average() {
        let expenses = fixtures::expenses();
        let trend = SpendingTrend::generate(&expenses, date(2024, 5, 1), date(2024, 6, 1));
        assert_eq!(trend.buckets[0].average_amount(), Money::zero());
        assert_eq!(trend.buckets[1].transaction_count, 10);
        assert_eq!(trend.buckets[1].average_amount(), Money::from_cents(6790));
    }

    #[test]
    fn test_time_range_resolve() {
        let today = date(2024, 2, 14);
        assert_eq!(
            TimeRange::ThreeMonths.resolve(today),
            (month(2023, 12), month(2024, 2))
        );
        assert_eq!(
            TimeRange::OneYear.resolve(today),
            (month(2023, 3), month(2024, 2))
        );

        let none: Vec<Expense> = Vec::new();
        let trend = SpendingTrend::for_range(&none, TimeRange::SixMonths, today);
        assert_eq!(trend.buckets.len(), 6);
        assert_eq!(trend.buckets[0].month, month(2023, 9));
    }

    #[test]
    fn test_time_range_parse() {
        assert_eq!("3m".parse::<TimeRange>(), Ok(TimeRange::ThreeMonths));
        assert_eq!("1Y".parse::<TimeRange>(), Ok(TimeRange::OneYear));
        assert!("2w".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::from_months(6), Some(TimeRange::SixMonths));
        assert_eq!(TimeRange::from_months(4), None);
    }

    #[test]
    fn test_terminal_format() {
        let expenses = fixtures::expenses();
        let trend = SpendingTrend::generate(&expenses, date(2024, 5, 1), date(2024, 6, 30));
        let output = trend.format_terminal("$");
        assert!(output.contains("Spending Trends: May 2024 - Jun 2024"));
        assert!(output.contains("Highest month: Jun 2024 ($678.99)"));
    }
}
