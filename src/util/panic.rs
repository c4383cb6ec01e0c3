/// Asserts that running `$run` panics. The `contains = "..."` form also checks that the panic
/// message includes the given text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, contains = $fragment:literal) => {{
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run))
            .expect_err("assertion failed to panic");
        let message = $crate::util::panic::panic_message(&*payload);
        assert!(
            message.contains($fragment),
            "panic message {message:?} should contain {:?}",
            $fragment
        );
        println!("^ panic caught");
    }};
    ($run:block, $msg:literal) => {{
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// The message of a caught panic, or an empty str if the payload isn't a string.
#[cfg(test)]
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or_default()
}
