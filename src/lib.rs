// SPDX-License-Identifier: MPL-2.0

//! A minimum-cost package install/uninstall solver.
//!
//! Given a [`Catalog`] of packages (each with a size, a set of dependency
//! groups, and a set of conflicts) and a [`Request`] (an initial installed
//! state, packages to install, packages to uninstall), this crate finds the
//! cheapest sequence of `+name=version` / `-name=version` commands that
//! reaches a state satisfying the request.
//!
//! Loading and parsing a catalog document, and invoking an actual external
//! SAT solver process, are both out of scope: this crate reduces the
//! problem to CNF and expects a [`SatOracle`] to decide it.
//!
//! # Pipeline
//!
//! 1. [`Catalog::build`] resolves raw package records into a catalog with
//!    every dependency/conflict reference turned into concrete ids.
//! 2. [`Request::from_raw`] resolves the initial state and constraint
//!    strings against that catalog.
//! 3. [`encoder::encode`] turns catalog + request into a [`dimacs::CnfFormula`].
//! 4. [`mode::solve`] hands that formula to a [`SatOracle`], either running
//!    [`optimizer::optimize`]'s full enumeration loop or, for very large
//!    catalogs, accepting the first feasible solution.
//! 5. [`command::build_plan`] turns a satisfying assignment into an ordered,
//!    costed [`command::Plan`].
//!
//! # Example
//!
//! ```
//! use depsolve::{Catalog, RawPackage, Request, SolverConfig, solve, BruteForceOracle};
//!
//! let catalog = Catalog::build(vec![
//!     RawPackage {
//!         name: "menu".to_string(),
//!         version: "1".to_string(),
//!         size: 5,
//!         depends: vec![vec!["icons".to_string()]],
//!         conflicts: vec![],
//!     },
//!     RawPackage {
//!         name: "icons".to_string(),
//!         version: "1".to_string(),
//!         size: 3,
//!         depends: vec![],
//!         conflicts: vec![],
//!     },
//! ])
//! .unwrap();
//!
//! let request = Request::from_raw(&catalog, &[], &["+menu".to_string()]).unwrap();
//! let plan = solve(&catalog, &request, &BruteForceOracle, SolverConfig::default()).unwrap();
//!
//! assert_eq!(plan.commands, vec!["+icons=1", "+menu=1"]);
//! assert_eq!(plan.cost, 8);
//! ```

#![warn(missing_docs)]

mod catalog;
mod command;
mod encoder;
mod error;
mod mode;
mod optimizer;
mod oracle;
mod package;
mod reference;
mod request;
mod type_aliases;
mod version;

pub use catalog::{Catalog, RawPackage};
pub use command::Plan;
pub use encoder::encode;
pub use error::{Result, SolveError};
pub use mode::{solve, SolverConfig, DEFAULT_OPTIMIZE_THRESHOLD};
pub use oracle::{BruteForceOracle, SatOracle};
pub use package::{Package, PackageId};
pub use reference::{Operator, Reference};
pub use request::Request;
pub use type_aliases::{Map, Set};
pub use version::Version;
