use std::{collections::BTreeMap, fmt};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    domain::SaleEvent,
    errors::{Result, ShopError},
};

/// Week-of-year bucket. Weeks start on Sunday and week 1 is the (possibly
/// partial) week containing 1 January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let offset = NaiveDate::from_ymd_opt(date.year(), 1, 1)
            .map(|jan1| jan1.weekday().num_days_from_sunday())
            .unwrap_or(0);
        Self {
            year: date.year(),
            week: (date.ordinal0() + offset) / 7 + 1,
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Per-granularity totals, oldest bucket first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesReport {
    pub daily: Vec<(NaiveDate, Decimal)>,
    pub weekly: Vec<(WeekKey, Decimal)>,
    pub monthly: Vec<(MonthKey, Decimal)>,
}

impl SalesReport {
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }
}

struct NextTotals {
    day: Decimal,
    week: Decimal,
    month: Decimal,
    overall: Decimal,
}

/// Running sales totals for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    by_day: BTreeMap<NaiveDate, Decimal>,
    by_week: BTreeMap<WeekKey, Decimal>,
    by_month: BTreeMap<MonthKey, Decimal>,
    total: Decimal,
    sales: usize,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails without touching any total when `event` would overflow one of them.
    pub fn check_sale(&self, event: &SaleEvent) -> Result<()> {
        self.next_totals(event).map(|_| ())
    }

    pub fn record_sale(&mut self, event: &SaleEvent) -> Result<()> {
        let totals = self.next_totals(event)?;
        let date = event.date();
        self.by_day.insert(date, totals.day);
        self.by_week.insert(WeekKey::of(date), totals.week);
        self.by_month.insert(MonthKey::of(date), totals.month);
        self.total = totals.overall;
        self.sales += 1;
        debug!(%date, amount = %event.amount, "sale recorded");
        Ok(())
    }

    fn next_totals(&self, event: &SaleEvent) -> Result<NextTotals> {
        let date = event.date();
        let add = |current: Decimal| {
            current.checked_add(event.amount).ok_or_else(|| {
                ShopError::Validation(format!(
                    "a sale of {} would overflow the sales totals",
                    event.amount
                ))
            })
        };
        Ok(NextTotals {
            day: add(self.day_total(date))?,
            week: add(self.week_total(WeekKey::of(date)))?,
            month: add(self.month_total(MonthKey::of(date)))?,
            overall: add(self.total)?,
        })
    }

    pub fn report(&self) -> SalesReport {
        SalesReport {
            daily: self.by_day.iter().map(|(k, v)| (*k, *v)).collect(),
            weekly: self.by_week.iter().map(|(k, v)| (*k, *v)).collect(),
            monthly: self.by_month.iter().map(|(k, v)| (*k, *v)).collect(),
        }
    }

    pub fn day_total(&self, date: NaiveDate) -> Decimal {
        self.by_day.get(&date).copied().unwrap_or_default()
    }

    pub fn week_total(&self, key: WeekKey) -> Decimal {
        self.by_week.get(&key).copied().unwrap_or_default()
    }

    pub fn month_total(&self, key: MonthKey) -> Decimal {
        self.by_month.get(&key).copied().unwrap_or_default()
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn sale_count(&self) -> usize {
        self.sales
    }
}
