use jiff::civil::Date;

use crate::{error::Error, util::epoch};

pub(crate) const DAYS_PER_WEEK: i64 = 7;
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// A unit of calendar time that a [`Duration`](crate::Duration) is made of.
///
/// Each unit knows how to count how many of itself fit between two dates and
/// how to add some number of itself to a date. Days and months are the
/// primitives: a week is always 7 days and a year is always 12 months, so
/// `Week` and `Year` delegate to `Day` and `Month` respectively.
///
/// The variants are ordered from biggest to smallest, which is also the order
/// in which units are rendered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Unit {
    Year,
    Month,
    Week,
    Day,
}

impl Unit {
    /// Returns the number of whole units from `start` to `end`.
    ///
    /// When `end` precedes `start`, the count is negative.
    ///
    /// Partial units are floored toward negative infinity, in
    /// the same way that [`Duration::normalize`](crate::Duration::normalize)
    /// splits days and months. That is, going back a single day from `start`
    /// counts as `-1` weeks.
    pub(crate) fn count(self, start: Date, end: Date) -> i64 {
        match self {
            Unit::Year => {
                Unit::Month.count(start, end).div_euclid(MONTHS_PER_YEAR)
            }
            Unit::Month => count_months(start, end),
            Unit::Week => {
                Unit::Day.count(start, end).div_euclid(DAYS_PER_WEEK)
            }
            Unit::Day => {
                i64::from(epoch::to_epoch_day(end))
                    - i64::from(epoch::to_epoch_day(start))
            }
        }
    }

    /// Adds `n` of this unit to the given date. `n` may be negative.
    ///
    /// When adding months or years results in a day that doesn't exist in
    /// the target month, the day is clamped to the last day of that month.
    /// For example, `2012-01-31` plus one month is `2012-02-29`.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is outside of Jiff's supported
    /// range of dates.
    pub(crate) fn add_to(self, date: Date, n: i64) -> Result<Date, Error> {
        match self {
            Unit::Year => {
                let months = n
                    .checked_mul(MONTHS_PER_YEAR)
                    .ok_or_else(|| Error::slim_range("months"))?;
                Unit::Month.add_to(date, months)
            }
            Unit::Month => add_months(date, n),
            Unit::Week => {
                let days = n
                    .checked_mul(DAYS_PER_WEEK)
                    .ok_or_else(|| Error::slim_range("days"))?;
                Unit::Day.add_to(date, days)
            }
            Unit::Day => add_days(date, n),
        }
    }

    /// A human readable singular description of this unit of time.
    pub(crate) fn singular(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
        }
    }

    /// A human readable plural description of this unit of time.
    pub(crate) fn plural(self) -> &'static str {
        match self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
        }
    }

    /// Returns the description of this unit that agrees with a quantity of
    /// `n`. Only a magnitude of exactly `1` is singular.
    pub(crate) fn label(self, n: i64) -> &'static str {
        if n.unsigned_abs() == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

/// A big unit paired with the small unit it is a fixed multiple of.
///
/// A duration has two independent axes: years and months, and weeks and
/// days. Units on different axes can't be converted into one another without
/// a reference date.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Axis {
    big: Unit,
    small: Unit,
    ratio: i64,
}

impl Axis {
    pub(crate) const MONTHS: Axis =
        Axis { big: Unit::Year, small: Unit::Month, ratio: MONTHS_PER_YEAR };
    pub(crate) const DAYS: Axis =
        Axis { big: Unit::Week, small: Unit::Day, ratio: DAYS_PER_WEEK };

    /// Splits the period from `start` to `end` into whole big and small
    /// units, using only the units that are wanted.
    ///
    /// When the small unit is wanted, the period is counted in small units
    /// and then divided into big units (if wanted) with floor division.
    /// Otherwise, only big units are counted. Whatever doesn't fit into a
    /// whole unit is left over.
    ///
    /// This returns `(big, small, reached)`, where `reached` is `start` moved
    /// forward by the units counted. The leftover is the period from
    /// `reached` to `end`.
    pub(crate) fn split(
        self,
        start: Date,
        end: Date,
        want_big: bool,
        want_small: bool,
    ) -> Result<(i64, i64, Date), Error> {
        if want_small {
            let n = self.small.count(start, end);
            let reached = self.small.add_to(start, n)?;
            if want_big {
                let (big, small) =
                    (n.div_euclid(self.ratio), n.rem_euclid(self.ratio));
                Ok((big, small, reached))
            } else {
                Ok((0, n, reached))
            }
        } else if want_big {
            let n = self.big.count(start, end);
            let reached = self.big.add_to(start, n)?;
            Ok((n, 0, reached))
        } else {
            Ok((0, 0, start))
        }
    }
}

/// Counts whole months from `start` to `end`.
///
/// A month is only complete once `end` reaches the same day of the month as
/// `start`, or once `end` is the last day of its month. The latter makes,
/// e.g., `2012-01-31` to `2012-02-29` exactly one month, since February
/// has no 31st day to reach.
fn count_months(start: Date, end: Date) -> i64 {
    let start_months =
        MONTHS_PER_YEAR * i64::from(start.year()) + i64::from(start.month());
    let end_months =
        MONTHS_PER_YEAR * i64::from(end.year()) + i64::from(end.month());
    let months = end_months - start_months;
    if end.day() >= start.day() || end.day() == end.days_in_month() {
        months
    } else {
        months - 1
    }
}

fn add_months(date: Date, months: i64) -> Result<Date, Error> {
    let index = (MONTHS_PER_YEAR * i64::from(date.year())
        + i64::from(date.month())
        - 1)
    .checked_add(months)
    .ok_or_else(|| Error::slim_range("months"))?;
    let (min, max) = (Date::MIN.year(), Date::MAX.year());
    let year = index.div_euclid(MONTHS_PER_YEAR);
    let year = i16::try_from(year)
        .ok()
        .filter(|year| (min..=max).contains(year))
        .ok_or_else(|| Error::range("year", year, min, max))?;
    // OK because `rem_euclid` is always in `0..12`.
    let month = (index.rem_euclid(MONTHS_PER_YEAR) + 1) as i8;
    let last = Date::new(year, month, 1)?.days_in_month();
    Ok(Date::new(year, month, date.day().min(last))?)
}

fn add_days(date: Date, days: i64) -> Result<Date, Error> {
    let epoch_day = i64::from(epoch::to_epoch_day(date))
        .checked_add(days)
        .ok_or_else(|| Error::slim_range("days"))?;
    let epoch_day = i32::try_from(epoch_day).map_err(|_| {
        Error::range(
            "days since 1970-01-01",
            epoch_day,
            epoch::MIN_EPOCH_DAY,
            epoch::MAX_EPOCH_DAY,
        )
    })?;
    epoch::from_epoch_day(epoch_day)
}
