use alloc::sync::Arc;

pub(crate) mod duration;

/// An error that can occur in this crate.
///
/// There are three broad categories of errors:
///
/// * A date produced by an operation falls outside of the range supported by
/// [`jiff::civil::Date`], or an integer computed from a [`Duration`]'s fields
/// overflows. See [`Error::is_range`].
/// * A [`Duration`] with no length (like [`Duration::ZERO`]) was asked how
/// many times it fits between two dates. See [`Error::is_invalid_parameter`].
/// * An error reported by Jiff itself.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type currently provides
/// very limited introspection capabilities.
///
/// # Design
///
/// Like Jiff, this crate uses a single error type for every fallible
/// operation. An error may carry a cause, and the `Display` impl renders the
/// whole chain, starting with the highest level context and ending with the
/// root cause. The alternate `Debug` impl (`{:#?}`) shows the structured
/// chain.
///
/// [`Duration`]: crate::Duration
/// [`Duration::ZERO`]: crate::Duration::ZERO
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make clones cheap and to keep an `Error` one
    /// word in size. Nearly every routine in this crate returns a
    /// `Result<T, Error>`.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error originated as a result of a value being
    /// out of its supported range.
    ///
    /// This includes dates outside of Jiff's supported range of
    /// `-9999-01-01..=9999-12-31` and overflow of the integers derived from
    /// a duration's fields.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_calendar::ToDuration;
    ///
    /// let err = 1.year().add_to(date(9999, 6, 1)).unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::ErrorKind::*;
        matches!(*self.root().kind(), Range(_) | SlimRange(_))
    }

    /// Returns true when this error originated as a result of a parameter
    /// that can never produce a meaningful answer.
    ///
    /// Currently, this only occurs when asking how many times a duration
    /// with no length fits between two dates.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_calendar::Duration;
    ///
    /// let err = Duration::ZERO
    ///     .count(date(2024, 1, 1), date(2025, 1, 1))
    ///     .unwrap_err();
    /// assert!(err.is_invalid_parameter());
    /// ```
    pub fn is_invalid_parameter(&self) -> bool {
        use self::{duration::Error as DurationError, ErrorKind::*};
        matches!(*self.root().kind(), Duration(DurationError::CountZeroLength))
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "year")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    /// Creates a new error indicating that a value overflowed.
    ///
    /// This is similar to `Error::range`, but the error message doesn't
    /// include the illegal value or the allowed range. This is used when
    /// the value itself couldn't be computed.
    #[inline(never)]
    #[cold]
    pub(crate) fn slim_range(what: &'static str) -> Error {
        Error::from(ErrorKind::SlimRange(SlimRangeError::new(what)))
    }

    /// Contextualizes this error by making it the cause of `consequent`.
    #[inline(never)]
    #[cold]
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        let mut err = consequent.into_error();
        // OK because we just created this error, so the Arc has one
        // reference. Any other case is a bug in this crate.
        let inner = Arc::get_mut(&mut err.inner)
            .expect("consequent error must be freshly created");
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut next = Some(self);
        core::iter::from_fn(move || {
            let err = next?;
            next = err.inner.cause.as_ref();
            Some(err)
        })
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.kind() {
            ErrorKind::Jiff(ref err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Duration(self::duration::Error),
    Jiff(jiff::Error),
    Range(RangeError),
    SlimRange(SlimRangeError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Duration(ref err) => core::fmt::Display::fmt(err, f),
            Jiff(ref err) => core::fmt::Display::fmt(err, f),
            Range(ref err) => core::fmt::Display::fmt(err, f),
            SlimRange(ref err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

impl From<jiff::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: jiff::Error) -> Error {
        ErrorKind::Jiff(err).into()
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError { what, given: given.into(), min: min.into(), max: max.into() }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A slim error that occurs when a computed value overflows.
///
/// Unlike `RangeError`, this only includes a static description of the
/// value that overflowed.
#[derive(Debug)]
struct SlimRangeError {
    what: &'static str,
}

impl SlimRangeError {
    fn new(what: &'static str) -> SlimRangeError {
        SlimRangeError { what }
    }
}

impl core::fmt::Display for SlimRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let SlimRangeError { what } = *self;
        write!(f, "number of {what} overflowed")
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists to make `Error::context` work without needing public `From`
/// impls for the internal error enums.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize a `Result<T, Error>` without needing
/// to call `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E: IntoError> ErrorContext<T> for Result<T, E> {
    #[inline(always)]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| err.into_error().context(consequent))
    }
}
