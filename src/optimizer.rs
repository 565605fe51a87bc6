// SPDX-License-Identifier: MPL-2.0

//! Iterative enumeration: ask the oracle for a solution, cost it, forbid it,
//! and repeat until the oracle reports no solution remains.

use log::{debug, info, warn};

use dimacs::{CnfFormula, OracleResponse};

use crate::catalog::Catalog;
use crate::command::{build_plan, Plan};
use crate::error::SolveError;
use crate::oracle::SatOracle;
use crate::package::PackageId;
use crate::type_aliases::Set;

/// Run the optimizer loop against `formula`, returning the cheapest feasible
/// [`Plan`] found before the oracle first reports unsatisfiable.
///
/// Each round that yields a candidate assignment, whether or not the
/// Command Builder can turn it into a feasible plan, is blocked by a clause
/// forbidding every package installed in that round from being installed
/// again — so the enumeration always makes progress.
pub fn optimize(
    catalog: &Catalog,
    initial: &Set<PackageId>,
    oracle: &dyn SatOracle,
    mut formula: CnfFormula,
) -> Result<Plan, SolveError> {
    let mut best: Option<Plan> = None;
    let mut rounds = 0u64;

    loop {
        let response = oracle.solve(&formula);
        let OracleResponse::Sat(literals) = response else {
            debug!("oracle reported unsatisfiable after {rounds} round(s)");
            break;
        };
        rounds += 1;

        let installed: Vec<PackageId> = catalog
            .iter_ids()
            .filter(|id| literals.contains(&(id.get() as i32)))
            .collect();

        match build_plan(catalog, initial, &OracleResponse::Sat(literals)) {
            Ok(plan) => {
                debug!("round {rounds}: candidate cost {}", plan.cost);
                if best.as_ref().map_or(true, |b| plan.cost < b.cost) {
                    info!("round {rounds}: new best cost {}", plan.cost);
                    best = Some(plan);
                }
            }
            Err(err) => {
                warn!("round {rounds}: candidate rejected ({err})");
            }
        }

        let blocking: Vec<i32> = installed.iter().map(|id| -(id.get() as i32)).collect();
        formula.push_clause(blocking);
    }

    best.ok_or(SolveError::Unsatisfiable)
}
