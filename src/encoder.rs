// SPDX-License-Identifier: MPL-2.0

//! Encoding a [`Catalog`] and [`Request`] into a [`dimacs::CnfFormula`].

use log::debug;

use dimacs::CnfFormula;

use crate::catalog::Catalog;
use crate::error::SolveError;
use crate::request::Request;

/// Encode `catalog`/`request` into a CNF formula over package ids `1..=N`.
///
/// Clauses are emitted in catalog iteration order (conflicts before
/// dependencies for each package), followed by uninstall unit clauses, then
/// install disjunction clauses — a stable order so re-encoding the same
/// catalog and request always produces byte-identical DIMACS text.
pub fn encode(catalog: &Catalog, request: &Request) -> Result<CnfFormula, SolveError> {
    let mut formula = CnfFormula::new(catalog.len() as u32);

    for package in catalog.all() {
        let p = package.id.get() as i32;
        for conflict in &package.conflicts {
            formula.push_clause(vec![-p, -(conflict.get() as i32)]);
        }
        for group in &package.dep_groups {
            let mut clause = vec![-p];
            clause.extend(group.iter().map(|id| id.get() as i32));
            formula.push_clause(clause);
        }
    }

    for uninstall in &request.uninstall {
        formula.push_clause(vec![-(uninstall.get() as i32)]);
    }

    for reference in &request.install {
        let matches = catalog.matching(reference);
        if matches.is_empty() {
            return Err(SolveError::NoMatchingPackage {
                reference: reference.to_string(),
            });
        }
        formula.push_clause(matches.iter().map(|id| id.get() as i32).collect());
    }

    debug!(
        "encoded {} vars, {} clauses",
        formula.num_vars(),
        formula.num_clauses()
    );

    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawPackage;
    use crate::reference::Reference;

    fn raw(name: &str, version: &str, size: u64, depends: &[&[&str]], conflicts: &[&str]) -> RawPackage {
        RawPackage {
            name: name.to_string(),
            version: version.to_string(),
            size,
            depends: depends
                .iter()
                .map(|g| g.iter().map(|s| s.to_string()).collect())
                .collect(),
            conflicts: conflicts.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn encodes_conflicts_and_dependencies() {
        let catalog = Catalog::build(vec![
            raw("A", "1", 5, &[&["B"]], &["C"]),
            raw("B", "1", 3, &[], &[]),
            raw("C", "1", 1, &[], &[]),
        ])
        .unwrap();
        let request = Request {
            initial: Default::default(),
            install: Vec::new(),
            uninstall: Default::default(),
        };
        let formula = encode(&catalog, &request).unwrap();
        assert_eq!(formula.num_vars(), 3);
        // conflict clause (¬A ∨ ¬C), dependency clause (¬A ∨ B)
        assert_eq!(formula.num_clauses(), 2);
    }

    #[test]
    fn unmatched_install_reference_is_an_error() {
        let catalog = Catalog::build(vec![raw("A", "1", 1, &[], &[])]).unwrap();
        let request = Request {
            initial: Default::default(),
            install: vec![Reference::parse("Missing").unwrap()],
            uninstall: Default::default(),
        };
        assert!(encode(&catalog, &request).is_err());
    }
}
