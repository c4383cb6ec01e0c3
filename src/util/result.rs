use std::error::Error;

/// Escalates a typed error into a panic, for the accessors which don't return a [`Result`].
pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`], or panics with the [`Display`](std::fmt::Display) message of the error
    /// itself. A failed `get` therefore reads "index out of bounds: ..." rather than the `Debug`
    /// form that [`Result::unwrap`] prints.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
