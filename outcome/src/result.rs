use alloc::boxed::Box;
use core::fmt;

use crate::errors::Error;

mod convert;
mod fault;
#[cfg(feature = "nightly")]
mod try_trait;

use fault::fault;

/// The outcome of an operation that either succeeded with a `T` or failed
/// with an `E`.
///
/// Every combinator takes `self` by value and hands back a new `Result` or a
/// plain value; an instance never changes variant once built.
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E = Box<dyn Error>> {
    /// The success value.
    Ok(T),
    /// The failure value.
    Err(E),
}

pub use self::Result::{Err, Ok};

impl<T, E> Result<T, E> {
    /// Returns `true` if the result is [`Ok`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<i32, &str> = Ok(-3);
    /// assert!(x.is_ok());
    ///
    /// let y: Result<i32, i32> = Err(-3);
    /// assert!(!y.is_ok());
    /// ```
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    /// Returns `true` if the result is [`Err`].
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `res` if the result is [`Ok`], otherwise the [`Err`] of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<i32, &str> = Ok(123);
    /// let y: Result<i32, &str> = Err("late error");
    /// assert_eq!(x.and(y), Err("late error"));
    ///
    /// let x: Result<i32, &str> = Err("early error");
    /// let y: Result<&str, &str> = Ok("foo");
    /// assert_eq!(x.and(y), Err("early error"));
    /// ```
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Ok(_) => res,
            Err(e) => Err(e),
        }
    }

    /// Calls `op` with the success value, or passes the [`Err`] through.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let sq = |x: i32| -> Result<i32, i32> { Ok(x * x) };
    /// let err = |x: i32| -> Result<i32, i32> { Err(x) };
    ///
    /// assert_eq!(Ok(2).and_then(sq).and_then(sq), Ok(16));
    /// assert_eq!(Ok(2).and_then(sq).and_then(err), Err(4));
    /// assert_eq!(Err(3).and_then(sq).and_then(sq), Err(3));
    /// ```
    pub fn and_then<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(v) => op(v),
            Err(e) => Err(e),
        }
    }

    /// Returns `res` if the result is [`Err`], otherwise the [`Ok`] of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<i32, &str> = Err("not a 2");
    /// let y: Result<i32, &str> = Err("late error");
    /// assert_eq!(x.or(y), Err("late error"));
    ///
    /// let x: Result<i32, &str> = Ok(2);
    /// let y: Result<i32, &str> = Ok(228);
    /// assert_eq!(x.or(y), Ok(2));
    /// ```
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(_) => res,
        }
    }

    /// Calls `op` with the failure value, or passes the [`Ok`] through.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let sq = |x: i32| -> Result<i32, i32> { Ok(x * x) };
    /// let err = |x: i32| -> Result<i32, i32> { Err(x) };
    ///
    /// assert_eq!(Err(3).or_else(sq).or_else(err), Ok(9));
    /// assert_eq!(Err(3).or_else(err).or_else(err), Err(3));
    /// assert_eq!(Ok(2).or_else(err).or_else(sq), Ok(2));
    /// ```
    pub fn or_else<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => op(e),
        }
    }

    /// Maps a `Result<T, E>` to `Result<U, E>` by applying `op` to the success
    /// value. An [`Err`] is returned untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<i32, i32> = Ok(1);
    /// assert_eq!(x.map(|v| v + 10), Ok(11));
    ///
    /// let y: Result<i32, i32> = Err(1);
    /// assert_eq!(y.map(|v| v + 10), Err(1));
    /// ```
    pub fn map<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => Ok(op(v)),
            Err(e) => Err(e),
        }
    }

    /// Maps a `Result<T, E>` to `Result<T, F>` by applying `op` to the failure
    /// value. An [`Ok`] is returned untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Result};
    ///
    /// let x: Result<&str, i32> = Err(228);
    /// assert_eq!(
    ///     x.map_err(|code| format!("error code: {code}")),
    ///     Err("error code: 228".to_string())
    /// );
    /// ```
    pub fn map_err<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(op(e)),
        }
    }

    /// Applies `op` to the success value, or returns `default` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<&str, i32> = Ok("foo");
    /// assert_eq!(x.map_or(42, str::len), 3);
    ///
    /// let y: Result<&str, i32> = Err(1);
    /// assert_eq!(y.map_or(228, str::len), 228);
    /// ```
    pub fn map_or<U, F>(self, default: U, op: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => op(v),
            Err(_) => default,
        }
    }

    /// Folds both variants into a `U`: `map_ok` handles the success value and
    /// `map_err` the failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<i32, i32> = Ok(0);
    /// assert_eq!(x.map_or_else(|e| e, |v| v + 3), 3);
    ///
    /// let y: Result<i32, i32> = Err(0);
    /// assert_eq!(y.map_or_else(|e| e, |v| v + 3), 0);
    /// ```
    pub fn map_or_else<U, D, F>(self, map_err: D, map_ok: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => map_ok(v),
            Err(e) => map_err(e),
        }
    }

    /// Returns the success value, or `default` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<i32, &str> = Ok(123);
    /// assert_eq!(x.unwrap_or(228), 123);
    ///
    /// let y: Result<&str, &str> = Err("expected");
    /// assert_eq!(y.unwrap_or("default"), "default");
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(v) => v,
            Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Ok, Result};
    ///
    /// let x: Result<i32, i32> = Ok(123);
    /// assert_eq!(x.unwrap_or_else(|e| e + 1), 123);
    ///
    /// let y: Result<usize, &str> = Err("hello");
    /// assert_eq!(y.unwrap_or_else(str::len), 5);
    /// ```
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Ok(v) => v,
            Err(e) => op(e),
        }
    }

    /// Borrows the payload without consuming `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Ok, Result};
    ///
    /// let x: Result<String, u8> = Ok("owned".to_string());
    /// assert_eq!(x.as_ref().map(String::len), Ok(5));
    /// assert!(x.is_ok());
    /// ```
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e),
        }
    }
}

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the success value.
    ///
    /// Calling this on an [`Err`] is a bug in the caller, not a recoverable
    /// failure: it panics.
    ///
    /// # Panics
    ///
    /// Panics if the value is an [`Err`], with a message containing the
    /// `Debug` rendering of the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Ok, Result};
    ///
    /// let x: Result<i32, &str> = Ok(123);
    /// assert_eq!(x.unwrap(), 123);
    /// ```
    ///
    /// ```should_panic
    /// use outcome::{Err, Result};
    ///
    /// let x: Result<i32, &str> = Err("emergency failure");
    /// x.unwrap(); // panics with `unwrap on an Err value: "emergency failure"`
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => fault("unwrap on an Err value", &e),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an [`Err`], with a message made of `msg` and the
    /// `Debug` rendering of the error.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome::{Err, Result};
    ///
    /// let x: Result<i32, &str> = Err("emergency failure");
    /// x.expect("Testing expect"); // panics with `Testing expect: "emergency failure"`
    /// ```
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => fault(msg, &e),
        }
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an [`Ok`], with a message containing the `Debug`
    /// rendering of the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Err, Result};
    ///
    /// let x: Result<i32, &str> = Err("expected");
    /// assert_eq!(x.unwrap_err(), "expected");
    /// ```
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Ok(v) => fault("unwrap_err on an Ok value", &v),
            Err(e) => e,
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an [`Ok`], with a message made of `msg` and the
    /// `Debug` rendering of the success value.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Ok(v) => fault(msg, &v),
            Err(e) => e,
        }
    }
}
