mod calendar;

/// A type alias we use for tests.
///
/// Nearly every routine under test returns a `Result`, so `?` reads better
/// than a wall of `unwrap()` calls.
type Result = std::result::Result<(), jiff_calendar::Error>;

/// Initializes a logger so that `trace` messages show up in failing tests
/// when the `logging` feature is enabled.
///
/// This is a no-op after the first call.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
