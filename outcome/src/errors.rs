/// Marker for error values carried by the default failure type.
///
/// Every sized [`core::error::Error`] implements it, so any concrete error can
/// be boxed into `Box<dyn Error>` and stored in a [`Result`](crate::Result).
pub trait Error: core::error::Error {}

impl<T: core::error::Error> Error for T {}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use core::fmt;

    use super::Error;

    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("timed out")
        }
    }

    impl core::error::Error for Timeout {}

    #[test]
    fn test_boxed_error() {
        let error: Box<dyn Error> = Box::new(Timeout);
        assert_eq!(alloc::format!("{error}"), "timed out");
    }
}
