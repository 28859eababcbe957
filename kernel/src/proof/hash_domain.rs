//! Typed domain separators for canonical hashing.
//!
//! Every hash in the workspace picks a domain from [`HashDomain`]. Adding a
//! domain is one line in the macro invocation below.

/// Declares `HashDomain`, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // Kernel

    /// Canonical level encoding.
    Level => b"TILEBOT::LEVEL::V1\0",

    /// Action log produced by the interpreter.
    ActionLog => b"TILEBOT::ACTION_LOG::V1\0",

    /// Root + child procedures.
    Solution => b"TILEBOT::SOLUTION::V1\0",

    // Search

    /// Solver policy snapshot.
    SolverPolicy => b"TILEBOT::SOLVER_POLICY::V1\0",

    // Harness

    /// Per-artifact content hash inside a run report.
    ReportArtifact => b"TILEBOT::REPORT_ARTIFACT::V1\0",

    /// Digest over a run report's normative artifacts.
    ReportDigest => b"TILEBOT::REPORT_DIGEST::V1\0",

    // Benchmarks

    /// Benchmark input identity.
    BenchInput => b"TILEBOT::BENCH_INPUT::V1\0",
}
