//! Error types for the sociograph core library.
//!
//! Each concern owns a small error enum with a stable, machine-readable code
//! so that callers (and the CLI) can branch on failures without matching on
//! display strings.

use std::fmt;

use thiserror::Error;

use crate::member::MemberId;

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

/// An error produced while building or querying a [`crate::Network`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NetworkError {
    /// An operation referenced a member that was never added.
    #[error("member {id} does not exist in the network")]
    UnknownMember {
        /// Identifier that could not be resolved.
        id: MemberId,
    },
    /// A member with the same identifier was already added.
    #[error("member {id} already exists in the network")]
    DuplicateMember {
        /// Identifier that was added twice.
        id: MemberId,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// An operation referenced a member that was never added.
        UnknownMember => UnknownMember { .. } => "NETWORK_UNKNOWN_MEMBER",
        /// A member with the same identifier was already added.
        DuplicateMember => DuplicateMember { .. } => "NETWORK_DUPLICATE_MEMBER",
    }
}

/// An error produced while building a [`crate::WeightedGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// Edge weights must be finite and non-negative.
    #[error("edge weight {weight} must be finite and non-negative")]
    InvalidWeight {
        /// The rejected weight, widened for reporting.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Edge weights must be finite and non-negative.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
    }
}

/// An error produced by the statistics helpers in [`crate::analysis`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AnalysisError {
    /// Paired samples had different lengths.
    #[error("sample length mismatch: left={left}, right={right}")]
    LengthMismatch {
        /// Length of the explanatory sample.
        left: usize,
        /// Length of the response sample.
        right: usize,
    },
    /// A computation needed at least one observation.
    #[error("at least one observation is required")]
    EmptySample,
}

define_error_codes! {
    /// Stable codes describing [`AnalysisError`] variants.
    enum AnalysisErrorCode for AnalysisError {
        /// Paired samples had different lengths.
        LengthMismatch => LengthMismatch { .. } => "ANALYSIS_LENGTH_MISMATCH",
        /// A computation needed at least one observation.
        EmptySample => EmptySample => "ANALYSIS_EMPTY_SAMPLE",
    }
}

/// An error produced when a synthetic generator configuration is invalid.
#[cfg(feature = "synthetic")]
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SyntheticError {
    /// A synthetic network needs at least one member.
    #[error("synthetic network must contain at least one member")]
    NoMembers,
    /// A synthetic graph needs at least one node.
    #[error("synthetic graph must contain at least one node")]
    NoNodes,
    /// Random edge weights are drawn from `1..=max_weight`.
    #[error("max_weight must be at least 1 (got {got})")]
    InvalidMaxWeight {
        /// The rejected upper bound.
        got: u32,
    },
    /// A generated member or follow operation failed.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// A generated weighted edge was rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[cfg(feature = "synthetic")]
define_error_codes! {
    /// Stable codes describing [`SyntheticError`] variants.
    enum SyntheticErrorCode for SyntheticError {
        /// A synthetic network needs at least one member.
        NoMembers => NoMembers => "SYNTHETIC_NO_MEMBERS",
        /// A synthetic graph needs at least one node.
        NoNodes => NoNodes => "SYNTHETIC_NO_NODES",
        /// Random edge weights are drawn from `1..=max_weight`.
        InvalidMaxWeight => InvalidMaxWeight { .. } => "SYNTHETIC_INVALID_MAX_WEIGHT",
        /// A generated member or follow operation failed.
        NetworkFailure => Network { .. } => "SYNTHETIC_NETWORK_FAILURE",
        /// A generated weighted edge was rejected.
        GraphFailure => Graph { .. } => "SYNTHETIC_GRAPH_FAILURE",
    }
}

/// Convenient alias for results returned by network operations.
pub type Result<T> = core::result::Result<T, NetworkError>;
