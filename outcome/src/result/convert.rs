use super::{Err, Ok, Result};

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            core::result::Result::Ok(v) => Ok(v),
            core::result::Result::Err(e) => Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> Result<T, E> {
    /// Discards the failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<u8, &str> = Ok(2);
    /// assert_eq!(x.ok(), Some(2));
    ///
    /// let y: Result<u8, &str> = Err("nothing here");
    /// assert_eq!(y.ok(), None);
    /// ```
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(_) => None,
        }
    }

    /// Discards the success value.
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(e) => Some(e),
        }
    }
}
