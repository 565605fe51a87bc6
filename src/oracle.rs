// SPDX-License-Identifier: MPL-2.0

//! The external SAT solver boundary.
//!
//! Invoking an actual SAT solver process is out of scope for this crate;
//! [`SatOracle`] is the trait that boundary is expressed as, and
//! [`BruteForceOracle`] is a small, exhaustive reference implementation
//! used by this crate's own tests.

use dimacs::{CnfFormula, OracleResponse};

/// Something that can decide satisfiability of a [`CnfFormula`].
///
/// A real implementation would serialize the formula to DIMACS text, hand
/// it to an external solver process, and parse the response back with
/// [`dimacs::parse_response`]; this crate only depends on the trait.
pub trait SatOracle {
    /// Solve `formula`, returning a satisfying assignment or `Unsat`.
    fn solve(&self, formula: &CnfFormula) -> OracleResponse;
}

/// An exhaustive, in-memory oracle that tries every assignment.
///
/// Exponential in the number of variables; suitable only for the small
/// catalogs exercised by this crate's tests, mirroring how other solvers
/// keep a naive reference implementation around for their own test suite.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceOracle;

impl SatOracle for BruteForceOracle {
    fn solve(&self, formula: &CnfFormula) -> OracleResponse {
        let n = formula.num_vars();
        for bits in 0..(1u64 << n) {
            let assignment: Vec<i32> = (0..n)
                .map(|i| {
                    let var = (i + 1) as i32;
                    if bits & (1 << i) != 0 {
                        var
                    } else {
                        -var
                    }
                })
                .collect();
            if satisfies(formula, &assignment) {
                return OracleResponse::Sat(assignment);
            }
        }
        OracleResponse::Unsat
    }
}

fn satisfies(formula: &CnfFormula, assignment: &[i32]) -> bool {
    formula.clauses().all(|clause| {
        clause
            .iter()
            .any(|&lit| assignment.contains(&lit))
    })
}
