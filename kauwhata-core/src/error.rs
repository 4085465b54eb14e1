//! Error types for the Kauwhata core library.
//!
//! Generation is total apart from allocation failure, so the error surface is
//! deliberately small. Each variant carries a stable code for log fields.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by [`crate::generate`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerationError {
    /// A per-run structure could not be allocated for the requested graph.
    #[error("cannot reserve {requested} slots for the {structure}")]
    CapacityExceeded {
        /// Structure whose allocation failed.
        structure: &'static str,
        /// Number of slots that were requested.
        requested: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// A per-run structure could not be allocated.
        CapacityExceeded => CapacityExceeded { .. } => "GENERATION_CAPACITY_EXCEEDED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn capacity_error_reports_code_and_message() {
        let err = GenerationError::CapacityExceeded {
            structure: "degree tracker",
            requested: 42,
        };
        assert_eq!(err.code(), GenerationErrorCode::CapacityExceeded);
        assert_eq!(err.code().as_str(), "GENERATION_CAPACITY_EXCEEDED");
        assert_eq!(
            err.to_string(),
            "cannot reserve 42 slots for the degree tracker"
        );
    }
}
