// Structured events under the `sticky_headers` target. Without the `tracing` feature the
// arguments are dropped unevaluated.
#[cfg(feature = "tracing")]
macro_rules! sticky_event {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "sticky_headers", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sticky_event {
    ($level:ident, $($tt:tt)*) => {};
}

// Per-frame resolution.
macro_rules! strace {
    ($($tt:tt)*) => {
        sticky_event!(trace, $($tt)*)
    };
}

// Cache lifecycle and construction.
macro_rules! sdebug {
    ($($tt:tt)*) => {
        sticky_event!(debug, $($tt)*)
    };
}

// Host contract violations that are recovered from.
macro_rules! swarn {
    ($($tt:tt)*) => {
        sticky_event!(warn, $($tt)*)
    };
}
