// SPDX-License-Identifier: MPL-2.0

//! Mode selection: choose between the full optimizer loop and a single
//! first-feasible-solution pass based on catalog size.

use log::info;

use dimacs::OracleResponse;

use crate::catalog::Catalog;
use crate::command::{build_plan, Plan};
use crate::encoder::encode;
use crate::error::SolveError;
use crate::optimizer::optimize;
use crate::oracle::SatOracle;
use crate::request::Request;

/// Default catalog size above which solving switches to a single pass,
/// absent an explicit override.
pub const DEFAULT_OPTIMIZE_THRESHOLD: usize = 50_000;

/// Tuning knobs for [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Catalogs with more packages than this use a single pass rather than
    /// the full optimizer loop, unless `always_optimize` is set.
    pub optimize_threshold: usize,
    /// Force the full optimizer loop regardless of catalog size.
    pub always_optimize: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            optimize_threshold: DEFAULT_OPTIMIZE_THRESHOLD,
            always_optimize: false,
        }
    }
}

/// Resolve `request` against `catalog` using `oracle`, picking single-pass
/// or fully-optimizing mode per `config`.
pub fn solve(
    catalog: &Catalog,
    request: &Request,
    oracle: &dyn SatOracle,
    config: SolverConfig,
) -> Result<Plan, SolveError> {
    let formula = encode(catalog, request)?;

    if !config.always_optimize && catalog.len() > config.optimize_threshold {
        info!(
            "catalog has {} packages (> {}); using single-pass mode",
            catalog.len(),
            config.optimize_threshold
        );
        let response = oracle.solve(&formula);
        return match response {
            OracleResponse::Sat(_) => build_plan(catalog, &request.initial, &response),
            OracleResponse::Unsat => Err(SolveError::Unsatisfiable),
        };
    }

    optimize(catalog, &request.initial, oracle, formula)
}
