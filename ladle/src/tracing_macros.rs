//! Logging shims that forward to `tracing` when the `tracing` feature is
//! enabled and expand to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($tt:tt)*) => {
        tracing::trace!($($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($tt:tt)*) => {
        tracing::debug!($($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}
