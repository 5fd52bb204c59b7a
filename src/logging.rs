/// Expands the given tokens only when the `logging` feature is enabled.
///
/// When it isn't, every log call site compiles down to nothing, including the
/// evaluation of its format arguments.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}
