#[macro_export]
macro_rules! assert_none {
    ($e:expr $(, $($t:tt)* )?) => {
        match &$e {
            None => {}
            actual => panic!(
                "expected `None`; actual={:?}{}",
                actual,
                $crate::__context!($( $($t)* )?)
            ),
        }
    };
}

#[macro_export]
macro_rules! assert_some {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Some(v) => v,
            None => panic!(
                "expected `Some`; actual=None{}",
                $crate::__context!($( $($t)* )?)
            ),
        }
    };
}
