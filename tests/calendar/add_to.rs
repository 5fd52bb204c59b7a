use jiff::civil::{date, Date};
use jiff_calendar::{Duration, ToDuration};

use crate::Result;

#[test]
fn monthly_from_end_of_month() -> Result {
    let start = date(2023, 1, 31);
    let expected = [
        date(2023, 1, 31),
        date(2023, 2, 28),
        date(2023, 3, 31),
        date(2023, 4, 30),
        date(2023, 5, 31),
        date(2023, 6, 30),
        date(2023, 7, 31),
        date(2023, 8, 31),
        date(2023, 9, 30),
        date(2023, 10, 31),
        date(2023, 11, 30),
        date(2023, 12, 31),
        date(2024, 1, 31),
    ];
    for (k, &want) in (0..).zip(expected.iter()) {
        assert_eq!(Duration::MONTH.add_to((start, k))?, want, "k={k}");
    }
    // Adding one month at a time makes the clamping stick.
    let mut current = start;
    for _ in 0..12 {
        current = Duration::MONTH.add_to(current)?;
    }
    assert_eq!(current, date(2024, 1, 28));

    Ok(())
}

#[test]
fn leap_day_anniversaries() -> Result {
    let start = date(2020, 2, 29);
    assert_eq!(1.year().add_to(start)?, date(2021, 2, 28));
    assert_eq!(1.year().add_to((start, 3))?, date(2023, 2, 28));
    assert_eq!(1.year().add_to((start, 4))?, date(2024, 2, 29));
    assert_eq!(1.year().add_to((start, -4))?, date(2016, 2, 29));
    assert_eq!(20.years().add_to((start, 4))?, date(2100, 2, 28));
    assert_eq!(400.years().add_to(start)?, date(2420, 2, 29));

    Ok(())
}

#[test]
fn months_are_added_before_days() -> Result {
    let start = date(2024, 1, 30);
    // January 30 + 1 month = February 29, then + 1 day = March 1.
    assert_eq!(1.month().days(1).add_to(start)?, date(2024, 3, 1));
    // Adding the day first would have clamped to February 29.
    let via_days = 1.day().add_to(start)?;
    assert_eq!(1.month().add_to(via_days)?, date(2024, 2, 29));

    let d = (-1).month().days(-1);
    assert_eq!(d.add_to(date(2024, 3, 31))?, date(2024, 2, 28));

    Ok(())
}

#[test]
fn years_and_months_combine() -> Result {
    // 1 year and 14 months is the same as 26 months, not 2 years and 2
    // months applied separately.
    let start = date(2023, 11, 30);
    let d = 1.year().months(14);
    assert_eq!(d.add_to(start)?, date(2026, 1, 30));
    assert_eq!(d.add_to(start)?, 26.months().add_to(start)?);
    assert_eq!(d.normalize().add_to(start)?, d.add_to(start)?);

    Ok(())
}

#[test]
fn weeks_and_days_combine() -> Result {
    let start = date(1999, 12, 25);
    assert_eq!(1.week().add_to(start)?, date(2000, 1, 1));
    assert_eq!(1.week().days(-7).add_to(start)?, start);
    assert_eq!(52.weeks().days(1).add_to(start)?, date(2000, 12, 24));
    assert_eq!(2.weeks().add_to((start, -1))?, date(1999, 12, 11));

    Ok(())
}

#[test]
fn range_limits() -> Result {
    assert_eq!(1.day().add_to(date(9999, 12, 30))?, Date::MAX);
    assert_eq!((-1).day().add_to(date(-9999, 1, 2))?, Date::MIN);
    assert_eq!(2.months().add_to(date(9999, 10, 31))?, Date::MAX);

    let err = 1.day().add_to(Date::MAX).unwrap_err();
    assert!(err.is_range(), "{err}");
    let err = 1.month().add_to(date(9999, 12, 1)).unwrap_err();
    assert!(err.is_range(), "{err}");
    let err = Duration::YEAR.add_to((Date::MIN, -1)).unwrap_err();
    assert!(err.is_range(), "{err}");
    let err = i64::MAX.weeks().add_to(Date::MIN).unwrap_err();
    assert!(err.is_range(), "{err}");

    Ok(())
}

#[test]
fn series_of_paydays() {
    let paydays: Vec<Date> =
        2.weeks().series(date(2024, 12, 6)).take(4).collect();
    assert_eq!(
        paydays,
        vec![
            date(2024, 12, 6),
            date(2024, 12, 20),
            date(2025, 1, 3),
            date(2025, 1, 17),
        ],
    );

    let quarters: Vec<Date> = 3
        .months()
        .series(date(2024, 11, 30))
        .take_while(|&d| d <= date(2025, 12, 31))
        .collect();
    assert_eq!(
        quarters,
        vec![
            date(2024, 11, 30),
            date(2025, 2, 28),
            date(2025, 5, 30),
            date(2025, 8, 30),
            date(2025, 11, 30),
        ],
    );
}

#[test]
fn series_ends_at_range_limit() {
    let last = 1.year().series(date(9990, 7, 4)).last();
    assert_eq!(last, Some(date(9999, 7, 4)));
    assert_eq!(1.day().series(Date::MAX).count(), 1);
}
