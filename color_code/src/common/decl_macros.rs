// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq`] so that a failing assertion on a
/// [`crate::Color`] or a color code string shows a readable diff.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Asserts that two [`crate::Color`]s are equal within `tolerance` on every channel.
/// Colors that went through HSL math are never bit for bit equal, so tests compare them
/// with this.
#[macro_export]
macro_rules! assert_color_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_color_approx_eq!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right) = ($left, $right);
        assert!(
            left.approx_eq(&right, $tolerance),
            "\nleft : {left:?}\nright: {right:?}\ntolerance: {}",
            $tolerance
        );
    }};
}
