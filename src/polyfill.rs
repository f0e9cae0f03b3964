use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "std")] {
        pub(crate) use std::error::Error;
    } else if #[cfg(feature = "error_in_core")] {
        pub(crate) use core::error::Error;
    }
}

cfg_if! {
    if #[cfg(feature = "trusted_len")] {
        pub(crate) use core::iter::TrustedLen;
    }
}
