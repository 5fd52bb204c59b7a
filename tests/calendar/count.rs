use jiff::civil::{date, Date};
use jiff_calendar::{Duration, ToDuration};

use crate::{init_logging, Result};

#[test]
fn fortnightly_paydays() -> Result {
    init_logging();

    let start = date(2024, 1, 5);
    assert_eq!(2.weeks().count(start, date(2024, 12, 31))?, 25);
    assert_eq!(2.weeks().count(start, date(2024, 1, 18))?, 0);
    assert_eq!(2.weeks().count(start, date(2024, 1, 19))?, 1);

    Ok(())
}

#[test]
fn quarters_from_end_of_month() -> Result {
    init_logging();

    let start = date(2023, 1, 31);
    let quarter = 3.months();
    // April 30, July 31 and October 31. January 31 is one day too far.
    assert_eq!(quarter.count(start, date(2023, 12, 31))?, 3);
    assert_eq!(quarter.count(start, date(2024, 1, 30))?, 3);
    assert_eq!(quarter.count(start, date(2024, 1, 31))?, 4);
    assert_eq!(quarter.count(start, date(2023, 10, 30))?, 2);
    // February 28 is the last day of February, so it's a whole month.
    assert_eq!(1.month().count(start, date(2023, 2, 28))?, 1);

    Ok(())
}

#[test]
fn year_and_week() -> Result {
    init_logging();

    let d = 1.year().weeks(1);
    let start = date(1971, 11, 27);
    assert_eq!(d.count(start, date(2011, 8, 27))?, 39);
    assert_eq!(d.count(start, date(2011, 8, 26))?, 38);
    assert_eq!(d.add_to((start, 39))?, date(2011, 8, 27));

    Ok(())
}

#[test]
fn end_before_start() -> Result {
    init_logging();

    let start = date(2024, 1, 31);
    let end = date(2024, 1, 1);
    // The count is floored, so the date reached is never after `end`.
    assert_eq!(1.week().count(start, end)?, -5);
    assert_eq!(1.week().add_to((start, -5))?, date(2023, 12, 27));
    assert_eq!(1.month().count(start, end)?, -1);
    assert_eq!(1.year().count(start, end)?, -1);
    assert_eq!(1.day().count(start, end)?, -30);

    Ok(())
}

#[test]
fn backwards_duration() -> Result {
    init_logging();

    let start = date(2024, 12, 31);
    let end = date(2024, 1, 5);
    let d = (-2).weeks();
    // The last fortnight reached before going past `end` is January 16.
    assert_eq!(d.count(start, end)?, 25);
    assert_eq!(d.add_to((start, 25))?, date(2024, 1, 16));
    assert_eq!(d.add_to((start, 26))?, date(2024, 1, 2));

    Ok(())
}

#[test]
fn mixed_signs() -> Result {
    init_logging();

    // Each step moves forward by roughly 30 days.
    let d = 2.months().days(-31);
    let start = date(2024, 1, 1);
    let end = date(2025, 1, 1);
    let k = d.count(start, end)?;
    assert!(d.add_to((start, k))? <= end);
    assert!(d.add_to((start, k + 1))? > end);

    // Each step moves forward by a week less than a year.
    let d = 1.year().weeks(-1);
    let k = d.count(start, end)?;
    assert_eq!(k, 1);
    assert_eq!(d.add_to((start, k))?, date(2024, 12, 25));
    assert!(d.add_to((start, k))? <= end);
    assert!(d.add_to((start, k + 1))? > end);

    Ok(())
}

/// Runs `count` on another thread, failing if it takes too long.
fn count_within_deadline(
    d: Duration,
    start: Date,
    end: Date,
) -> std::result::Result<i64, jiff_calendar::Error> {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || tx.send(d.count(start, end)));
    rx.recv_timeout(std::time::Duration::from_secs(10))
        .expect("counting should finish quickly")
}

#[test]
fn months_and_days_nearly_cancel() -> Result {
    init_logging();

    // Exactly zero on average.
    let d = 1_600.months().days(-48_699);
    let err = count_within_deadline(d, date(2000, 1, 1), date(2001, 1, 1))
        .unwrap_err();
    assert!(err.is_invalid_parameter(), "{err}");

    // A 1,600th of a day on average.
    let d = 499.months().days(-15_188);
    let k = count_within_deadline(d, Date::MIN, Date::MAX)?;
    assert_eq!(k, 192);
    assert!(d.add_to((Date::MIN, k))? <= Date::MAX);
    assert!(d.add_to((Date::MIN, k + 1)).is_err());

    let k = count_within_deadline(d, date(2000, 1, 1), date(2001, 1, 1))?;
    assert_eq!(k, 192);

    Ok(())
}

#[test]
fn zero_length_is_an_error() {
    init_logging();

    let (start, end) = (date(2024, 1, 1), date(2025, 1, 1));
    for d in [
        Duration::ZERO,
        1.year().months(-12),
        1.week().days(-7),
        400.years().days(-146_097),
        1_600.months().days(-48_699),
    ] {
        let err = d.count(start, end).unwrap_err();
        assert!(err.is_invalid_parameter(), "{d:?}: {err}");
    }
}

#[test]
fn range_limits() -> Result {
    init_logging();

    assert_eq!(1.day().count(Date::MIN, Date::MAX)?, 7_304_483);
    assert_eq!(1.day().count(Date::MAX, Date::MIN)?, -7_304_483);
    assert_eq!(1.year().count(Date::MIN, Date::MAX)?, 19_998);
    assert_eq!(10_000.years().count(Date::MIN, Date::MAX)?, 1);
    assert_eq!(20_000.years().count(Date::MIN, Date::MAX)?, 0);

    Ok(())
}
