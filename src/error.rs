// SPDX-License-Identifier: MPL-2.0

//! Errors produced while parsing, encoding, or solving.

use thiserror::Error;

use crate::package::PackageId;

/// Errors that may occur while resolving an install/uninstall request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A reference string (a package name with an optional operator and
    /// version) could not be parsed.
    #[error("could not parse reference {input:?}")]
    ParseError {
        /// The raw string that failed to parse.
        input: String,
    },

    /// An install constraint has no matching package in the catalog, so
    /// the formula is trivially unsatisfiable before the oracle is even
    /// consulted.
    #[error("no catalog package matches install reference {reference:?}")]
    NoMatchingPackage {
        /// The raw (unresolved) reference string.
        reference: String,
    },

    /// The oracle reported no satisfying assignment for the root formula.
    #[error("no solution satisfies the given constraints")]
    Unsatisfiable,

    /// A candidate assignment could not be ordered into a command list
    /// because some package in `to_install` has a dependency group with
    /// no already-installed and no to-be-installed supplier.
    #[error("package {package} has no installable supplier for one of its dependency groups")]
    InfeasibleCandidate {
        /// The package whose dependency group could not be satisfied.
        package: PackageId,
    },

    /// A candidate's install or removal subgraph contains a cycle, so no
    /// linear command order exists for it.
    #[error("dependency graph has a cycle among {remaining:?}")]
    TopologicalCycle {
        /// The package ids left over once no more nodes had zero
        /// in-degree; they form (or are reachable only through) the cycle.
        remaining: Vec<PackageId>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SolveError>;
