use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    CountZeroLength,
    FailedAddTo,
    FailedCount,
    FailedForPeriod,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            CountZeroLength => f.write_str(
                "cannot count occurrences of a duration with zero length",
            ),
            FailedAddTo => f.write_str("failed to add duration to date"),
            FailedCount => f.write_str(
                "failed to count occurrences of duration between dates",
            ),
            FailedForPeriod => f.write_str(
                "failed to compute duration for period between dates",
            ),
        }
    }
}
