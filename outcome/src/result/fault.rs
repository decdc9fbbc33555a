use core::fmt;

/// Panics for a partial extraction called on the wrong variant.
///
/// Only reachable from `unwrap`, `expect`, `unwrap_err` and `expect_err`.
/// Kept out of line so the happy path of those methods stays small.
#[cold]
#[inline(never)]
#[track_caller]
pub(super) fn fault(msg: &str, payload: &dyn fmt::Debug) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(?payload, "{}", msg);

    panic!("{msg}: {payload:?}")
}

#[cfg(test)]
mod tests {
    use super::fault;

    #[test]
    #[should_panic(expected = "bad state: [1, 2]")]
    fn test_fault_renders_payload() {
        fault("bad state", &[1, 2]);
    }
}
