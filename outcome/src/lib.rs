//! A two-variant result type: [`Ok`] for success, [`Err`] for expected
//! failure.
//!
//! Combinators thread one logical result through a chain of transformations,
//! short-circuiting on the first [`Err`]. The partial extractions
//! ([`Result::unwrap`], [`Result::expect`], [`Result::unwrap_err`],
//! [`Result::expect_err`]) panic when called on the wrong variant; that panic
//! signals a bug in the caller and is never the way an expected failure is
//! reported.
//!
//! ```
//! use outcome::{Err, Ok, Result};
//!
//! let x: Result<i32, &str> = Ok(2);
//! assert_eq!(x.map(|v| v * v).map(|v| v * v).unwrap(), 16);
//!
//! let y: Result<i32, i32> = Err(3);
//! assert_eq!(y.or_else(|e| Ok::<i32, i32>(e * e)).unwrap(), 9);
//! ```
#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]
#![cfg_attr(feature = "nightly", feature(try_trait_v2))]

extern crate alloc;

pub mod errors;
pub mod result;

pub use errors::Error;
pub use result::{Err, Ok, Result};
