//! Crate-internal logging macros.
//!
//! With the `defmt` feature enabled these forward to `defmt`, so messages
//! reach the firmware's RTT logger. Without it they compile to nothing, but
//! the arguments are still borrowed to keep them type-checked and used.
#![allow(unused_macros)]

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        #[allow(unused_parens)]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        #[allow(unused_parens)]
        let _ = ($( & $x ),*);
    }};
}
