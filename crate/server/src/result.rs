use crate::error::SkError;

pub type SkResult<R> = Result<R, SkError>;

/// A helper trait for `SkResult` that provides additional methods for error handling.
pub trait SkResultHelper<T> {
    /// Sets the context for the error.
    ///
    /// # Errors
    ///
    /// Returns a `SkResult` with the specified context if the original result is an error.
    fn context(self, context: &str) -> SkResult<T>;

    /// Sets the context for the error using a closure.
    ///
    /// # Errors
    ///
    /// Returns a `SkResult` with the context returned by the closure if the original result is an error.
    fn with_context<O>(self, op: O) -> SkResult<T>
    where
        O: FnOnce() -> String;
}

impl<T, E> SkResultHelper<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn context(self, context: &str) -> SkResult<T> {
        self.map_err(|e| SkError::ServerError(format!("{context}: {e}")))
    }

    fn with_context<O>(self, op: O) -> SkResult<T>
    where
        O: FnOnce() -> String,
    {
        self.map_err(|e| SkError::ServerError(format!("{}: {e}", op())))
    }
}

impl<T> SkResultHelper<T> for Option<T> {
    fn context(self, context: &str) -> SkResult<T> {
        self.ok_or_else(|| SkError::ServerError(context.to_owned()))
    }

    fn with_context<O>(self, op: O) -> SkResult<T>
    where
        O: FnOnce() -> String,
    {
        self.ok_or_else(|| SkError::ServerError(op()))
    }
}
