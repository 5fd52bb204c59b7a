/*!
Conversions between civil dates and day ordinals.

A day ordinal here is the number of days since the Unix epoch, 1970-01-01.
Day arithmetic in this crate is done on ordinals, which is cheaper than going
through `jiff::Span` and makes the difference between two dates a plain
subtraction.

These routines work on primitive integers and implicitly assume that their
inputs are valid (i.e., within Jiff's minimum and maximum ranges). The
`Date` wrappers at the bottom are where ranges get checked.
*/

use jiff::civil::Date;

use crate::error::Error;

/// The ordinal of `-9999-01-01`, Jiff's minimum date.
pub(crate) const MIN_EPOCH_DAY: i32 = to_epoch_day_ymd(-9999, 1, 1);
/// The ordinal of `9999-12-31`, Jiff's maximum date.
pub(crate) const MAX_EPOCH_DAY: i32 = to_epoch_day_ymd(9999, 12, 31);

/// Converts a Gregorian date to days since the Unix epoch.
///
/// This is Neri-Schneider. There's no branching or divisions.
///
/// Ref: https://github.com/cassioneri/eaf/blob/684d3cc32d14eee371d0abe4f683d6d6a49ed5c1/algorithms/neri_schneider.hpp#L83
#[inline(always)]
#[allow(non_upper_case_globals, non_snake_case)] // to mimic source
const fn to_epoch_day_ymd(year: i16, month: i8, day: i8) -> i32 {
    const s: u32 = 82;
    const K: u32 = 719468 + 146097 * s;
    const L: u32 = 400 * s;

    let year = year as u32;
    let month = month as u32;
    let day = day as u32;

    let J = month <= 2;
    let Y = year.wrapping_add(L).wrapping_sub(J as u32);
    let M = if J { month + 12 } else { month };
    let D = day - 1;
    let C = Y / 100;

    let y_star = 1461 * Y / 4 - C + C / 4;
    let m_star = (979 * M - 2919) / 32;
    let N = y_star + m_star + D;

    N.wrapping_sub(K) as i32
}

/// Converts days since the Unix epoch to a Gregorian year, month and day.
///
/// This is Neri-Schneider. There's no branching or divisions.
///
/// Ref: <https://github.com/cassioneri/eaf/blob/684d3cc32d14eee371d0abe4f683d6d6a49ed5c1/algorithms/neri_schneider.hpp#L40C3-L40C34>
#[inline(always)]
#[allow(non_upper_case_globals, non_snake_case)] // to mimic source
const fn from_epoch_day_ymd(epoch_day: i32) -> (i16, i8, i8) {
    const s: u32 = 82;
    const K: u32 = 719468 + 146097 * s;
    const L: u32 = 400 * s;

    let N = (epoch_day as u32).wrapping_add(K);

    let N_1 = 4 * N + 3;
    let C = N_1 / 146097;
    let N_C = (N_1 % 146097) / 4;

    let N_2 = 4 * N_C + 3;
    let P_2 = 2939745 * (N_2 as u64);
    let Z = (P_2 / 4294967296) as u32;
    let N_Y = (P_2 % 4294967296) as u32 / 2939745 / 4;
    let Y = 100 * C + Z;

    let N_3 = 2141 * N_Y + 197913;
    let M = N_3 / 65536;
    let D = (N_3 % 65536) / 2141;

    let J = N_Y >= 306;
    let year = Y.wrapping_sub(L).wrapping_add(J as u32) as i16;
    let month = (if J { M - 12 } else { M }) as i8;
    let day = (D + 1) as i8;
    (year, month, day)
}

/// Returns the number of days between the Unix epoch and the given date.
///
/// This is negative for dates before 1970-01-01.
#[inline]
pub(crate) fn to_epoch_day(date: Date) -> i32 {
    to_epoch_day_ymd(date.year(), date.month(), date.day())
}

/// Returns the date corresponding to the given number of days since the Unix
/// epoch.
///
/// This returns an error when the resulting date would be outside of Jiff's
/// supported range.
#[inline]
pub(crate) fn from_epoch_day(epoch_day: i32) -> Result<Date, Error> {
    if !(MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&epoch_day) {
        return Err(Error::range(
            "days since 1970-01-01",
            epoch_day,
            MIN_EPOCH_DAY,
            MAX_EPOCH_DAY,
        ));
    }
    let (year, month, day) = from_epoch_day_ymd(epoch_day);
    Ok(Date::new(year, month, day)?)
}
