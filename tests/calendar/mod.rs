mod add_to;
mod count;
mod for_period;
#[cfg(feature = "serde")]
mod serialize;
