/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra arguments
/// are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => panic!(
                "expected `Err`; actual={:?}{}",
                actual,
                $crate::__context!($( $($t)* )?)
            ),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!(
                "expected `Ok`; error={}{}",
                e,
                $crate::__context!($( $($t)* )?)
            ),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __context {
    () => {
        ""
    };
    ($($t:tt)+) => {
        format!(", {}", format_args!($($t)+))
    };
}
