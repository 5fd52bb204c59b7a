use jiff::civil::{date, Date};
use jiff_calendar::{Duration, ToDuration};

use crate::{init_logging, Result};

#[test]
fn age() -> Result {
    init_logging();

    let (born, today) = (date(1990, 8, 15), date(2024, 3, 10));
    let age = Duration::for_period(born, today, 1.year().months(1).days(1))?;
    assert_eq!(age, 33.years().months(6).days(24));
    assert_eq!(age.to_string(), "33 years, 6 months, 24 days");

    let prototype = 1.year().months(1).weeks(1).days(1);
    let age = Duration::for_period(born, today, prototype)?;
    assert_eq!(age, 33.years().months(6).weeks(3).days(3));

    let age = Duration::for_period(born, today, Duration::YEAR)?;
    assert_eq!(age, 33.years());

    Ok(())
}

#[test]
fn axes_are_independent() -> Result {
    init_logging();

    let (start, end) = (date(1990, 8, 15), date(2024, 3, 10));
    // Years are counted first, then days from 2023-08-15.
    let got = Duration::for_period(start, end, 1.year().days(1))?;
    assert_eq!(got, 33.years().days(208));

    let got = Duration::for_period(start, end, 1.month().weeks(1))?;
    assert_eq!(got, 402.months().weeks(3));

    Ok(())
}

#[test]
fn weeks_only() -> Result {
    init_logging();

    let (start, end) = (date(2024, 1, 5), date(2024, 12, 31));
    assert_eq!(
        Duration::for_period(start, end, Duration::WEEK)?,
        51.weeks(),
    );
    assert_eq!(
        Duration::for_period(start, end, 1.week().days(1))?,
        51.weeks().days(4),
    );
    assert_eq!(
        Duration::for_period(start, end, Duration::DAY)?,
        361.days(),
    );

    Ok(())
}

#[test]
fn end_before_start() -> Result {
    init_logging();

    let (start, end) = (date(2024, 3, 10), date(1990, 8, 15));
    let got = Duration::for_period(start, end, 1.year().months(1).days(1))?;
    assert_eq!(got, (-34).years().months(5).days(5));
    assert_eq!(got.add_to(start)?, end);

    Ok(())
}

#[test]
fn same_date_is_zero() -> Result {
    let d = date(2024, 2, 29);
    let prototype = 1.year().months(1).weeks(1).days(1);
    assert_eq!(Duration::for_period(d, d, prototype)?, Duration::ZERO);
    assert_eq!(Duration::for_period(d, d, Duration::ZERO)?, Duration::ZERO);

    Ok(())
}

#[test]
fn roundtrip_through_add_to() -> Result {
    init_logging();

    // Backwards periods are floored, so they can overshoot `end`. Starting
    // the list at `Date::MIN` would make that overshoot fail.
    let dates = [
        date(-9999, 1, 31),
        date(-1, 2, 28),
        date(1971, 11, 27),
        date(2011, 8, 27),
        date(2012, 1, 31),
        date(2012, 2, 29),
        date(2013, 2, 28),
        date(2013, 3, 31),
        Date::MAX,
    ];
    let prototypes = [
        1.year().months(1).weeks(1).days(1),
        1.month().days(1),
        1.year().months(1).days(1),
        1.month().weeks(1).days(1),
    ];
    for &start in dates.iter() {
        for &end in dates.iter() {
            for &prototype in prototypes.iter() {
                let d = Duration::for_period(start, end, prototype)?;
                assert_eq!(
                    d.add_to(start)?,
                    end,
                    "{start} to {end} with {prototype:?} gave {d:?}",
                );
            }
        }
    }

    Ok(())
}
