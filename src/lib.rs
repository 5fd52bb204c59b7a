/*!
Calendar durations in years, months, weeks and days for [Jiff] dates.

This crate provides a [`Duration`] type: a span of calendar time made of four
independent units. A duration can be added to a [`jiff::civil::Date`] any
number of times, the time between two dates can be decomposed into the units
of a duration, and one can ask how many times a duration fits between two
dates.

Unlike [`jiff::Span`], a `Duration` is deliberately small. It has no time
units, no time zones and no rounding. Adding months to a date clamps the day
of the month to the last day of the resulting month, and months are always
added before days.

[Jiff]: https://docs.rs/jiff

# Example

```
use jiff::civil::date;
use jiff_calendar::{Duration, ToDuration};

// Adding a duration to a date.
let d = 1.year().months(2).weeks(3).days(4);
assert_eq!(d.add_to(date(2011, 9, 11))?, date(2012, 12, 6));
assert_eq!(d.to_string(), "1 year, 2 months, 3 weeks, 4 days");

// Decomposing the time between two dates into the units of a prototype.
let prototype = Duration::MONTH.days(1);
assert_eq!(
    Duration::for_period(date(2012, 1, 31), date(2012, 2, 29), prototype)?,
    Duration::MONTH,
);

// Counting how many times a duration fits between two dates.
let d = 1.year().weeks(1);
assert_eq!(d.count(date(1971, 11, 27), date(2011, 8, 27))?, 39);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Normalization

A duration keeps whatever units it was given. [`Duration::normalize`] carries
months into years and days into weeks, but never converts between months and
days, since the length of a month depends on the date it starts from:

```
use jiff_calendar::{Duration, ToDuration};

assert_eq!((6.months() + 6.months()).normalize(), Duration::YEAR);
assert_eq!(1.month().days(47).normalize(), 1.month().weeks(6).days(5));
```

# Crate features

* **std** (enabled by default) - When enabled, this crate's [`Error`] type
implements `std::error::Error` and Jiff's `std` feature is enabled.
* **logging** - When enabled, the `log` crate is used to emit trace messages
while counting and decomposing periods. This is useful for debugging.
* **serde** - When enabled, [`Duration`] implements `Serialize` and
`Deserialize` as a map with the keys `year`, `month`, `week` and `day`.
Missing keys default to zero.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors are the only thing that allocate.
extern crate alloc;

pub use crate::{
    duration::{
        DateArithmetic, Duration, DurationArithmetic, DurationSeries,
        DurationWith, ToDuration,
    },
    error::Error,
};

#[macro_use]
mod logging;

mod duration;
mod error;
mod unit;
mod util;
