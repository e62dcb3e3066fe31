//! Helper macros for creation of crate Errors.

/// Creates an Error wrapped in Err.
///
/// Called as:  err!(InvalidName(name_err)).
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::new(
            $crate::error::ErrKind::$($kind)+,
        ))
    };
}

