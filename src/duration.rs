use core::cmp::Ordering;

use jiff::civil::Date;

use crate::{
    error::{duration::Error as E, Error, ErrorContext},
    unit::{Axis, Unit, DAYS_PER_WEEK, MONTHS_PER_YEAR},
};

/// The number of fractions of a day used to measure average lengths.
const FRACTIONS_PER_DAY: i128 = 1_600;
/// The average length of a Gregorian month, in `1 / FRACTIONS_PER_DAY` days.
const FRACTIONS_PER_MONTH: i128 = 48_699;

/// A span of calendar time made of years, months, weeks and days.
///
/// A `Duration` is a plain value: each of its four units is an independent
/// signed integer. Units may be negative, zero or larger than one would
/// normally expect (a duration of `14 months` is fine and distinct from
/// `1 year, 2 months`). Two durations are equal only when all four of their
/// units are equal. Use [`Duration::normalize`] to put a duration into a
/// canonical form.
///
/// A duration has no length of its own. Months and years only become a
/// concrete number of days once they are applied to a date with
/// [`Duration::add_to`], and adding months to a date clamps the day of the
/// month when the target month is too short.
///
/// # Creating a duration
///
/// Durations are most conveniently built with the [`ToDuration`] trait,
/// which is implemented for the signed integer types:
///
/// ```
/// use jiff_calendar::{Duration, ToDuration};
///
/// let duration = 1.year().months(2).weeks(3).days(4);
/// assert_eq!(duration.get_years(), 1);
/// assert_eq!(duration.get_months(), 2);
/// assert_eq!(duration.to_string(), "1 year, 2 months, 3 weeks, 4 days");
///
/// // Or, more explicitly:
/// assert_eq!(
///     duration,
///     Duration::new().years(1).months(2).weeks(3).days(4),
/// );
/// ```
///
/// There are also constants for each single unit, such as
/// [`Duration::MONTH`], and for [`Duration::ZERO`].
///
/// # Applying a duration to a date
///
/// ```
/// use jiff::civil::date;
/// use jiff_calendar::ToDuration;
///
/// let start = date(2011, 9, 11);
/// assert_eq!(
///     1.year().months(2).weeks(3).days(4).add_to(start)?,
///     date(2012, 12, 6),
/// );
/// // Adding a month to January 31 clamps to the end of February.
/// assert_eq!(1.month().add_to(date(2012, 1, 31))?, date(2012, 2, 29));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Measuring the time between two dates
///
/// [`Duration::for_period`] decomposes the time between two dates into the
/// units of a prototype duration, and [`Duration::count`] returns how many
/// times a duration fits between two dates:
///
/// ```
/// use jiff::civil::date;
/// use jiff_calendar::{Duration, ToDuration};
///
/// let (start, end) = (date(2011, 9, 11), date(2012, 12, 6));
/// let prototype = 1.month().days(1);
/// assert_eq!(
///     Duration::for_period(start, end, prototype)?,
///     14.months().days(25),
/// );
/// assert_eq!(1.week().count(start, end)?, 64);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Comparisons
///
/// A `Duration` implements `Eq` and `Hash`, but not `Ord`. Whether
/// `1 month` is longer than `30 days` depends on the date it is applied to.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    #[cfg_attr(feature = "serde", serde(rename = "year", default))]
    years: i64,
    #[cfg_attr(feature = "serde", serde(rename = "month", default))]
    months: i64,
    #[cfg_attr(feature = "serde", serde(rename = "week", default))]
    weeks: i64,
    #[cfg_attr(feature = "serde", serde(rename = "day", default))]
    days: i64,
}

impl Duration {
    /// A duration with every unit set to zero.
    ///
    /// This renders as an empty string.
    pub const ZERO: Duration =
        Duration { years: 0, months: 0, weeks: 0, days: 0 };

    /// A duration of exactly one year.
    pub const YEAR: Duration =
        Duration { years: 1, months: 0, weeks: 0, days: 0 };

    /// A duration of exactly one month.
    pub const MONTH: Duration =
        Duration { years: 0, months: 1, weeks: 0, days: 0 };

    /// A duration of exactly one week.
    pub const WEEK: Duration =
        Duration { years: 0, months: 0, weeks: 1, days: 0 };

    /// A duration of exactly one day.
    pub const DAY: Duration =
        Duration { years: 0, months: 0, weeks: 0, days: 1 };

    /// Creates a new duration with every unit set to zero.
    ///
    /// This is equivalent to [`Duration::ZERO`] and `Duration::default()`.
    /// Set units with [`Duration::years`] and friends, or use [`ToDuration`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::Duration;
    ///
    /// let duration = Duration::new().months(6).days(-3);
    /// assert_eq!(duration.to_string(), "6 months, -3 days");
    /// ```
    #[inline]
    pub const fn new() -> Duration {
        Duration::ZERO
    }

    /// Set the number of years on this duration.
    ///
    /// Any integer is accepted, including negative values.
    #[inline]
    pub fn years<I: Into<i64>>(self, years: I) -> Duration {
        Duration { years: years.into(), ..self }
    }

    /// Set the number of months on this duration.
    ///
    /// Any integer is accepted, including negative values.
    #[inline]
    pub fn months<I: Into<i64>>(self, months: I) -> Duration {
        Duration { months: months.into(), ..self }
    }

    /// Set the number of weeks on this duration.
    ///
    /// Any integer is accepted, including negative values.
    #[inline]
    pub fn weeks<I: Into<i64>>(self, weeks: I) -> Duration {
        Duration { weeks: weeks.into(), ..self }
    }

    /// Set the number of days on this duration.
    ///
    /// Any integer is accepted, including negative values.
    #[inline]
    pub fn days<I: Into<i64>>(self, days: I) -> Duration {
        Duration { days: days.into(), ..self }
    }

    /// Returns the number of years in this duration.
    #[inline]
    pub fn get_years(&self) -> i64 {
        self.years
    }

    /// Returns the number of months in this duration.
    #[inline]
    pub fn get_months(&self) -> i64 {
        self.months
    }

    /// Returns the number of weeks in this duration.
    #[inline]
    pub fn get_weeks(&self) -> i64 {
        self.weeks
    }

    /// Returns the number of days in this duration.
    #[inline]
    pub fn get_days(&self) -> i64 {
        self.days
    }

    /// Returns true when every unit in this duration is zero.
    ///
    /// Note that a duration like `1 year, -12 months` is not zero, even
    /// though adding it to any date returns the same date.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    /// Returns a builder for replacing some of the units of this duration.
    ///
    /// Units that aren't set on the builder keep their current value.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::ToDuration;
    ///
    /// let duration = 1.year().months(2).weeks(3).days(4);
    /// assert_eq!(
    ///     duration.with().year(4).day(1).build(),
    ///     4.years().months(2).weeks(3).days(1),
    /// );
    /// assert_eq!(duration.with().build(), duration);
    /// ```
    #[inline]
    pub fn with(self) -> DurationWith {
        DurationWith::new(self)
    }

    /// Returns this duration in canonical form.
    ///
    /// Months are carried into years so that `0 <= months < 12`, and days
    /// are carried into weeks so that `0 <= days < 7`. Carrying uses floor
    /// division, so `-1 month` normalizes to `-1 year, 11 months`.
    ///
    /// Months and days are never converted into one another, since the
    /// number of days in a month depends on the date it starts from. So
    /// `1 month, 47 days` normalizes to `1 month, 6 weeks, 5 days`.
    ///
    /// Normalizing a duration that is already normalized returns an equal
    /// duration. The number of years (or weeks) saturates at the bounds of
    /// `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{Duration, ToDuration};
    ///
    /// assert_eq!(12.months().normalize(), Duration::YEAR);
    /// assert_eq!(2.weeks().days(8).normalize(), 3.weeks().days(1));
    /// assert_eq!((-1).month().normalize(), (-1).year().months(11));
    /// ```
    #[inline]
    pub fn normalize(self) -> Duration {
        Duration {
            years: self
                .years
                .saturating_add(self.months.div_euclid(MONTHS_PER_YEAR)),
            months: self.months.rem_euclid(MONTHS_PER_YEAR),
            weeks: self
                .weeks
                .saturating_add(self.days.div_euclid(DAYS_PER_WEEK)),
            days: self.days.rem_euclid(DAYS_PER_WEEK),
        }
    }

    /// Adds a duration, optionally scaled by an integer, to this one.
    ///
    /// Each unit is added independently: the result has
    /// `self.years + rhs.years * k` years, and likewise for every other
    /// unit. No normalization is done.
    ///
    /// The argument may be given as:
    ///
    /// * A `Duration`, which adds it once.
    /// * A `(Duration, i64)`, which adds the duration the given number of
    /// times. The multiple may be zero or negative.
    ///
    /// # Errors
    ///
    /// This returns an error when any unit overflows an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{Duration, ToDuration};
    ///
    /// let sum = Duration::YEAR.checked_add(Duration::MONTH)?;
    /// assert_eq!(sum, 1.year().months(1));
    ///
    /// let d = 1.year().months(2).weeks(3).days(4);
    /// let e = 8.years().months(6).weeks(4).days(2);
    /// assert_eq!(d.checked_add((e, 3))?, 25.years().months(20).weeks(15).days(10));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_add<A: Into<DurationArithmetic>>(
        &self,
        options: A,
    ) -> Result<Duration, Error> {
        let options: DurationArithmetic = options.into();
        options.checked_add(*self)
    }

    /// Subtracts a duration, optionally scaled by an integer, from this one.
    ///
    /// This accepts the same arguments as [`Duration::checked_add`].
    ///
    /// # Errors
    ///
    /// This returns an error when any unit overflows an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::ToDuration;
    ///
    /// let d = 1.year().days(4);
    /// assert_eq!(d.checked_sub(2.days())?, 1.year().days(2));
    /// assert_eq!(d.checked_sub((2.days(), 3))?, 1.year().days(-2));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_sub<A: Into<DurationArithmetic>>(
        &self,
        options: A,
    ) -> Result<Duration, Error> {
        let mut options: DurationArithmetic = options.into();
        options.duration = options.duration.checked_neg()?;
        options.checked_add(*self)
    }

    /// Multiplies each unit in this duration by the given integer.
    ///
    /// # Errors
    ///
    /// This returns an error when any unit overflows an `i64`.
    #[inline]
    pub fn checked_mul(&self, rhs: i64) -> Result<Duration, Error> {
        let mul = |what: &'static str, n: i64| {
            n.checked_mul(rhs).ok_or_else(|| Error::slim_range(what))
        };
        Ok(Duration {
            years: mul("years", self.years)?,
            months: mul("months", self.months)?,
            weeks: mul("weeks", self.weeks)?,
            days: mul("days", self.days)?,
        })
    }

    /// Negates each unit in this duration.
    ///
    /// # Errors
    ///
    /// This returns an error when any unit is `i64::MIN`.
    #[inline]
    pub fn checked_neg(&self) -> Result<Duration, Error> {
        let neg = |what: &'static str, n: i64| {
            n.checked_neg().ok_or_else(|| Error::slim_range(what))
        };
        Ok(Duration {
            years: neg("years", self.years)?,
            months: neg("months", self.months)?,
            weeks: neg("weeks", self.weeks)?,
            days: neg("days", self.days)?,
        })
    }

    /// Adds this duration, optionally scaled by an integer, to a date.
    ///
    /// Years and months are added first, as a single number of months. If
    /// the day of the month doesn't exist in the resulting month, it is
    /// clamped to the last day of that month. Weeks and days are added
    /// second, as a single number of days.
    ///
    /// The argument may be given as:
    ///
    /// * A [`jiff::civil::Date`], which adds this duration once.
    /// * A `(Date, i64)`, which adds this duration the given number of times.
    /// This is not the same as adding it once, over and over again, since
    /// clamping only happens once. The multiple may be zero or negative.
    ///
    /// # Errors
    ///
    /// This returns an error when the resulting date is outside the range
    /// supported by Jiff, or when scaling the duration overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_calendar::ToDuration;
    ///
    /// let d = 1.year().months(2);
    /// assert_eq!(d.add_to(date(2012, 2, 29))?, date(2013, 4, 29));
    ///
    /// // Adding a month three times clamps only once.
    /// let start = date(2012, 1, 31);
    /// assert_eq!(1.month().add_to((start, 3))?, date(2012, 4, 30));
    /// assert_eq!(1.month().add_to((start, -2))?, date(2011, 11, 30));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn add_to<A: Into<DateArithmetic>>(
        &self,
        options: A,
    ) -> Result<Date, Error> {
        let options: DateArithmetic = options.into();
        options.add_to(*self).context(E::FailedAddTo)
    }

    /// Decomposes the time from `start` to `end` into the units that are
    /// present in `prototype`.
    ///
    /// Only whether each unit of `prototype` is non-zero matters. The
    /// years and months are computed first. If months are wanted, the
    /// period is counted in whole months and then (if years are wanted too)
    /// split into years and months. Otherwise, if only years are wanted,
    /// the period is counted in whole years. Weeks and days are then
    /// computed in the same way, starting from the date reached by the
    /// years and months.
    ///
    /// When `prototype` has both months and days, adding the returned
    /// duration to `start` always gives back `end`. Otherwise, whatever
    /// doesn't fit into a whole unit is dropped.
    ///
    /// When `end` precedes `start`, partial units are floored, so the
    /// result may mix negative and positive units.
    ///
    /// # Errors
    ///
    /// This returns an error when an intermediate date is outside the range
    /// supported by Jiff. Since partial units are floored, this can only
    /// happen when `end` precedes `start` and is close to [`Date::MIN`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_calendar::{Duration, ToDuration};
    ///
    /// let (start, end) = (date(2011, 9, 11), date(2012, 12, 6));
    /// assert_eq!(
    ///     Duration::for_period(start, end, 1.year().months(1).weeks(1).days(1))?,
    ///     1.year().months(2).weeks(3).days(4),
    /// );
    /// assert_eq!(
    ///     Duration::for_period(start, end, 1.year().weeks(1))?,
    ///     1.year().weeks(12),
    /// );
    ///
    /// // January 31 to the end of February is a whole month.
    /// assert_eq!(
    ///     Duration::for_period(
    ///         date(2012, 1, 31),
    ///         date(2012, 2, 29),
    ///         1.month().days(1),
    ///     )?,
    ///     Duration::MONTH,
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn for_period(
        start: Date,
        end: Date,
        prototype: Duration,
    ) -> Result<Duration, Error> {
        Duration::for_period_imp(start, end, prototype)
            .context(E::FailedForPeriod)
    }

    fn for_period_imp(
        start: Date,
        end: Date,
        prototype: Duration,
    ) -> Result<Duration, Error> {
        let (years, months, reached) = Axis::MONTHS.split(
            start,
            end,
            prototype.years != 0,
            prototype.months != 0,
        )?;
        let (weeks, days, _) = Axis::DAYS.split(
            reached,
            end,
            prototype.weeks != 0,
            prototype.days != 0,
        )?;
        let duration = Duration { years, months, weeks, days };
        trace!(
            "decomposed {start} to {end} into '{duration}' \
             (months stopped at {reached})",
        );
        Ok(duration)
    }

    /// Returns how many times this duration fits between `start` and `end`.
    ///
    /// More precisely, this returns the largest integer `k` such that
    /// adding this duration `k` times to `start` (as with
    /// `self.add_to((start, k))`) doesn't go past `end`. When `end`
    /// precedes `start`, `k` is negative.
    ///
    /// When this duration points backwards in time (e.g., `-1 week`), the
    /// comparison flips: this returns the largest `k` such that
    /// `self.add_to((start, k))` isn't before `end`. In both cases, the date
    /// reached doesn't go past `end` in the direction this duration moves.
    ///
    /// A candidate date outside the range supported by Jiff is considered
    /// to be past `end` in the direction this duration moves. The search
    /// for `k` starts from an estimate based on the average length of this
    /// duration and takes a number of steps logarithmic in the distance
    /// between that estimate and `k`, so it finishes quickly even for
    /// durations whose months and days nearly cancel out.
    ///
    /// # Errors
    ///
    /// This returns an error when this duration has no length. That is,
    /// when its years and months cancel out and its weeks and days cancel
    /// out (as with [`Duration::ZERO`]), or when its months and days cancel
    /// out on average (as with `400 years, -146097 days` or
    /// `1600 months, -48699 days`). Such durations don't move through time,
    /// so asking how many of them fit between two dates has no answer. Use
    /// [`Error::is_invalid_parameter`] to detect this case.
    ///
    /// This also returns a range error when adding this duration `k` times
    /// would produce a date outside the range supported by Jiff. This can
    /// only happen when the months and days of this duration point in
    /// opposite directions, so that the dates it can reach all stay on the
    /// wrong side of `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_calendar::{Duration, ToDuration};
    ///
    /// let d = 1.year().weeks(1);
    /// assert_eq!(d.count(date(1971, 11, 27), date(2011, 8, 27))?, 39);
    /// assert_eq!(d.count(date(1971, 11, 27), date(2011, 8, 26))?, 38);
    ///
    /// assert!(Duration::ZERO.count(date(2024, 1, 1), date(2025, 1, 1)).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn count(&self, start: Date, end: Date) -> Result<i64, Error> {
        self.count_imp(start, end).context(E::FailedCount)
    }

    fn count_imp(&self, start: Date, end: Date) -> Result<i64, Error> {
        let length = self.average_length();
        if length == 0 {
            return Err(E::CountZeroLength.into());
        }
        if length < 0 {
            // Adding `self` `k` times is adding `-self` `-k` times. So we
            // want the smallest count of `-self` that reaches `end`.
            let forward = self.checked_neg()?;
            let mut count = forward.count_imp(start, end)?;
            if forward.position(start, count, end) == Ordering::Less {
                count = count
                    .checked_add(1)
                    .ok_or_else(|| Error::slim_range("occurrences"))?;
                DateArithmetic::from((start, count)).add_to(forward)?;
            }
            return count
                .checked_neg()
                .ok_or_else(|| Error::slim_range("occurrences"));
        }

        let period = Unit::Day.count(start, end);
        let estimate = (i128::from(period) * FRACTIONS_PER_DAY)
            .div_euclid(length)
            .clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        // OK because of the clamp above.
        let estimate = estimate as i64;
        trace!(
            "estimated {estimate} occurrences of '{duration}' in {period} \
             days from {start} to {end}",
            duration = self,
        );
        let count = self.bracket(start, estimate, end);
        // The count found may still be unreachable, e.g., when every
        // reachable date is after `end`.
        DateArithmetic::from((start, count)).add_to(*self)?;
        trace!("counted {count} occurrences of '{duration}'", duration = self);
        Ok(count)
    }

    /// Returns a count `k` such that `start + k * self` is not after `end`
    /// but `start + (k + 1) * self` is, starting the search at `estimate`.
    ///
    /// This gallops away from `estimate` in doubling steps until `end` is
    /// bracketed and then bisects. So the number of dates computed is
    /// logarithmic in the distance between `estimate` and the answer, even
    /// when the estimate is far outside the range of reachable dates.
    fn bracket(&self, start: Date, estimate: i64, end: Date) -> i64 {
        let beyond = |count| {
            self.position(start, count, end) == Ordering::Greater
        };
        let (mut lo, mut hi);
        let mut step: i64 = 1;
        if beyond(estimate) {
            hi = estimate;
            loop {
                lo = estimate.saturating_sub(step);
                if !beyond(lo) {
                    break;
                }
                hi = lo;
                step = step.saturating_mul(2);
            }
        } else {
            lo = estimate;
            loop {
                hi = estimate.saturating_add(step);
                if beyond(hi) {
                    break;
                }
                lo = hi;
                step = step.saturating_mul(2);
            }
        }
        // Invariant: `lo < hi`, `lo` is not beyond `end` and `hi` is.
        while hi.abs_diff(lo) > 1 {
            // OK because half the distance always fits in an `i64`.
            let mid = lo + (hi.abs_diff(lo) / 2) as i64;
            if beyond(mid) {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        lo
    }

    /// Compares `start + count * self` with `end`.
    ///
    /// A date that can't be computed is beyond `end` in the direction of
    /// `count`. This assumes that `self` moves forward in time. In
    /// particular, `i64::MAX` occurrences of a duration with a length are
    /// always beyond `end` and `i64::MIN` occurrences never are.
    fn position(&self, start: Date, count: i64, end: Date) -> Ordering {
        match DateArithmetic::from((start, count)).add_to(*self) {
            Ok(date) => date.cmp(&end),
            Err(_) if count > 0 => Ordering::Greater,
            Err(_) => Ordering::Less,
        }
    }

    /// Returns an iterator of the dates reached by adding this duration to
    /// `start` zero or more times.
    ///
    /// The `n`th date yielded is `self.add_to((start, n))`, starting with
    /// `n = 0`. So the first date is always `start`, and month clamping
    /// never accumulates. The iterator is exhausted once a date would be
    /// outside the range supported by Jiff.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::{date, Date};
    /// use jiff_calendar::ToDuration;
    ///
    /// let dates: Vec<Date> =
    ///     1.month().series(date(2012, 1, 31)).take(4).collect();
    /// assert_eq!(dates, vec![
    ///     date(2012, 1, 31),
    ///     date(2012, 2, 29),
    ///     date(2012, 3, 31),
    ///     date(2012, 4, 30),
    /// ]);
    /// ```
    #[inline]
    pub fn series(self, start: Date) -> DurationSeries {
        DurationSeries { start, period: self, step: 0 }
    }

    /// Returns the average length of this duration in units of
    /// `1 / FRACTIONS_PER_DAY` days.
    ///
    /// A Gregorian year is 365.2425 days on average, which makes an average
    /// month exactly `48_699 / 1_600` days. Working in these units keeps the
    /// length exact, so a duration whose months and days cancel out on
    /// average has a length of exactly zero.
    pub(crate) fn average_length(&self) -> i128 {
        self.total_months() * FRACTIONS_PER_MONTH
            + self.total_days() * FRACTIONS_PER_DAY
    }

    /// Returns the total number of months in the years and months of this
    /// duration.
    fn total_months(&self) -> i128 {
        i128::from(self.years) * i128::from(MONTHS_PER_YEAR)
            + i128::from(self.months)
    }

    /// Returns the total number of days in the weeks and days of this
    /// duration.
    fn total_days(&self) -> i128 {
        i128::from(self.weeks) * i128::from(DAYS_PER_WEEK)
            + i128::from(self.days)
    }

    /// Returns each unit in this duration, biggest first.
    fn units(&self) -> [(Unit, i64); 4] {
        [
            (Unit::Year, self.years),
            (Unit::Month, self.months),
            (Unit::Week, self.weeks),
            (Unit::Day, self.days),
        ]
    }
}

/// Renders the non-zero units of this duration, biggest first.
///
/// A duration with no non-zero units renders as the empty string.
///
/// # Example
///
/// ```
/// use jiff_calendar::{Duration, ToDuration};
///
/// let d = 1.year().months(1).weeks(1).days(1);
/// assert_eq!(d.to_string(), "1 year, 1 month, 1 week, 1 day");
/// assert_eq!(2.days().to_string(), "2 days");
/// assert_eq!(Duration::ZERO.to_string(), "");
/// ```
impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut first = true;
        for (unit, n) in self.units() {
            if n == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{n} {}", unit.label(n))?;
        }
        Ok(())
    }
}

/// Renders the non-zero units of this duration as struct fields.
///
/// # Example
///
/// ```
/// use jiff_calendar::{Duration, ToDuration};
///
/// assert_eq!(
///     format!("{:?}", 2.years().days(5)),
///     "Duration { year: 2, day: 5 }",
/// );
/// assert_eq!(format!("{:?}", Duration::ZERO), "Duration");
/// ```
impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut dbg = f.debug_struct("Duration");
        for (unit, n) in self.units() {
            if n != 0 {
                dbg.field(unit.singular(), &n);
            }
        }
        dbg.finish()
    }
}

/// Adds two durations unit by unit.
///
/// This panics on overflow. For checked arithmetic, use
/// [`Duration::checked_add`].
impl core::ops::Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("adding `Duration`s overflowed")
    }
}

/// Subtracts two durations unit by unit.
///
/// This panics on overflow. For checked arithmetic, use
/// [`Duration::checked_sub`].
impl core::ops::Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs).expect("subtracting `Duration`s overflowed")
    }
}

/// Negates each unit in this duration.
///
/// This panics when a unit is `i64::MIN`. For checked arithmetic, use
/// [`Duration::checked_neg`].
impl core::ops::Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        self.checked_neg().expect("negating `Duration` overflowed")
    }
}

/// This multiplies each unit in a duration by an integer.
///
/// This panics on overflow. For checked arithmetic, use
/// [`Duration::checked_mul`].
impl core::ops::Mul<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: i64) -> Duration {
        self.checked_mul(rhs)
            .expect("multiplying `Duration` by a scalar overflowed")
    }
}

/// This multiplies each unit in a duration by an integer.
///
/// This panics on overflow. For checked arithmetic, use
/// [`Duration::checked_mul`].
impl core::ops::Mul<Duration> for i64 {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: Duration) -> Duration {
        rhs.checked_mul(self)
            .expect("multiplying `Duration` by a scalar overflowed")
    }
}

/// A builder for replacing some of the units of a [`Duration`].
///
/// This is created by [`Duration::with`].
#[derive(Clone, Copy, Debug)]
pub struct DurationWith {
    original: Duration,
    years: Option<i64>,
    months: Option<i64>,
    weeks: Option<i64>,
    days: Option<i64>,
}

impl DurationWith {
    #[inline]
    fn new(original: Duration) -> DurationWith {
        DurationWith {
            original,
            years: None,
            months: None,
            weeks: None,
            days: None,
        }
    }

    /// Builds the duration, using the original value for any unit that
    /// wasn't set.
    #[inline]
    pub fn build(self) -> Duration {
        let original = self.original;
        Duration {
            years: self.years.unwrap_or(original.years),
            months: self.months.unwrap_or(original.months),
            weeks: self.weeks.unwrap_or(original.weeks),
            days: self.days.unwrap_or(original.days),
        }
    }

    /// Set the number of years on the built duration.
    #[inline]
    pub fn year(self, years: i64) -> DurationWith {
        DurationWith { years: Some(years), ..self }
    }

    /// Set the number of months on the built duration.
    #[inline]
    pub fn month(self, months: i64) -> DurationWith {
        DurationWith { months: Some(months), ..self }
    }

    /// Set the number of weeks on the built duration.
    #[inline]
    pub fn week(self, weeks: i64) -> DurationWith {
        DurationWith { weeks: Some(weeks), ..self }
    }

    /// Set the number of days on the built duration.
    #[inline]
    pub fn day(self, days: i64) -> DurationWith {
        DurationWith { days: Some(days), ..self }
    }
}

/// Options for [`Duration::checked_add`] and [`Duration::checked_sub`].
///
/// This is constructed with its `From` trait implementations:
///
/// * `From<Duration> for DurationArithmetic` adds (or subtracts) the given
/// duration once.
/// * `From<(Duration, i64)> for DurationArithmetic` adds (or subtracts)
/// the given duration the given number of times.
#[derive(Clone, Copy, Debug)]
pub struct DurationArithmetic {
    duration: Duration,
    multiple: i64,
}

impl DurationArithmetic {
    fn checked_add(self, lhs: Duration) -> Result<Duration, Error> {
        let DurationArithmetic { duration: rhs, multiple } = self;
        let add = |what: &'static str, lhs: i64, rhs: i64| {
            rhs.checked_mul(multiple)
                .and_then(|rhs| lhs.checked_add(rhs))
                .ok_or_else(|| Error::slim_range(what))
        };
        Ok(Duration {
            years: add("years", lhs.years, rhs.years)?,
            months: add("months", lhs.months, rhs.months)?,
            weeks: add("weeks", lhs.weeks, rhs.weeks)?,
            days: add("days", lhs.days, rhs.days)?,
        })
    }
}

impl From<Duration> for DurationArithmetic {
    #[inline]
    fn from(duration: Duration) -> DurationArithmetic {
        DurationArithmetic { duration, multiple: 1 }
    }
}

impl From<(Duration, i64)> for DurationArithmetic {
    #[inline]
    fn from((duration, multiple): (Duration, i64)) -> DurationArithmetic {
        DurationArithmetic { duration, multiple }
    }
}

/// Options for [`Duration::add_to`].
///
/// This is constructed with its `From` trait implementations:
///
/// * `From<Date> for DateArithmetic` adds a duration to the given date once.
/// * `From<(Date, i64)> for DateArithmetic` adds a duration to the given
/// date the given number of times.
#[derive(Clone, Copy, Debug)]
pub struct DateArithmetic {
    date: Date,
    multiple: i64,
}

impl DateArithmetic {
    fn add_to(self, duration: Duration) -> Result<Date, Error> {
        let mut date = self.date;
        let months = scale("months", duration.total_months(), self.multiple)?;
        if months != 0 {
            date = Unit::Month.add_to(date, months)?;
        }
        let days = scale("days", duration.total_days(), self.multiple)?;
        if days != 0 {
            date = Unit::Day.add_to(date, days)?;
        }
        Ok(date)
    }
}

impl From<Date> for DateArithmetic {
    #[inline]
    fn from(date: Date) -> DateArithmetic {
        DateArithmetic { date, multiple: 1 }
    }
}

impl From<(Date, i64)> for DateArithmetic {
    #[inline]
    fn from((date, multiple): (Date, i64)) -> DateArithmetic {
        DateArithmetic { date, multiple }
    }
}

/// An iterator over periodic dates.
///
/// This iterator is created by [`Duration::series`].
///
/// It is exhausted when the next date would be outside the range supported
/// by Jiff.
#[derive(Clone, Debug)]
pub struct DurationSeries {
    start: Date,
    period: Duration,
    step: i64,
}

impl Iterator for DurationSeries {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let date = self.period.add_to((self.start, self.step)).ok()?;
        self.step = self.step.checked_add(1)?;
        Some(date)
    }
}

/// A trait for creating a [`Duration`] from an integer.
///
/// This is implemented for `i8`, `i16`, `i32` and `i64`. Since the methods
/// return a `Duration`, they can be chained with the `Duration` setters.
///
/// # Example
///
/// ```
/// use jiff_calendar::{Duration, ToDuration};
///
/// assert_eq!(1.year(), Duration::YEAR);
/// assert_eq!(
///     5.years().months(2).days(15),
///     Duration::new().years(5).months(2).days(15),
/// );
/// ```
pub trait ToDuration: Sized {
    /// Create a new duration from this integer in units of years.
    fn years(self) -> Duration;

    /// Create a new duration from this integer in units of months.
    fn months(self) -> Duration;

    /// Create a new duration from this integer in units of weeks.
    fn weeks(self) -> Duration;

    /// Create a new duration from this integer in units of days.
    fn days(self) -> Duration;

    /// Equivalent to `years()`, but reads better for singular units.
    #[inline]
    fn year(self) -> Duration {
        self.years()
    }

    /// Equivalent to `months()`, but reads better for singular units.
    #[inline]
    fn month(self) -> Duration {
        self.months()
    }

    /// Equivalent to `weeks()`, but reads better for singular units.
    #[inline]
    fn week(self) -> Duration {
        self.weeks()
    }

    /// Equivalent to `days()`, but reads better for singular units.
    #[inline]
    fn day(self) -> Duration {
        self.days()
    }
}

macro_rules! impl_to_duration {
    ($ty:ty) => {
        impl ToDuration for $ty {
            #[inline]
            fn years(self) -> Duration {
                Duration::new().years(self)
            }
            #[inline]
            fn months(self) -> Duration {
                Duration::new().months(self)
            }
            #[inline]
            fn weeks(self) -> Duration {
                Duration::new().weeks(self)
            }
            #[inline]
            fn days(self) -> Duration {
                Duration::new().days(self)
            }
        }
    };
}

impl_to_duration!(i8);
impl_to_duration!(i16);
impl_to_duration!(i32);
impl_to_duration!(i64);

/// Multiplies a total number of months or days by `multiple`, returning an
/// error if the product doesn't fit in an `i64`.
fn scale(
    what: &'static str,
    total: i128,
    multiple: i64,
) -> Result<i64, Error> {
    total
        .checked_mul(i128::from(multiple))
        .and_then(|n| i64::try_from(n).ok())
        .ok_or_else(|| Error::slim_range(what))
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        use quickcheck::Arbitrary;

        Duration {
            years: i64::from(i8::arbitrary(g)),
            months: i64::from(i8::arbitrary(g)),
            weeks: i64::from(i8::arbitrary(g)),
            days: i64::from(i16::arbitrary(g)) % 1_000,
        }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new(
            (self.years, self.months, self.weeks, self.days).shrink().map(
                |(years, months, weeks, days)| Duration {
                    years,
                    months,
                    weeks,
                    days,
                },
            ),
        )
    }
}
