// SPDX-License-Identifier: MPL-2.0

//! End-to-end scenarios run through the full pipeline with the brute-force
//! oracle.

use depsolve::{solve, BruteForceOracle, Catalog, PackageId, RawPackage, Request, SolverConfig};

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

fn run(catalog: &Catalog, initial: &[&str], constraints: &[&str]) -> (Vec<String>, u64) {
    let initial: Vec<String> = initial.iter().map(|s| s.to_string()).collect();
    let constraints: Vec<String> = constraints.iter().map(|s| s.to_string()).collect();
    let request = Request::from_raw(catalog, &initial, &constraints).unwrap();
    let plan = solve(catalog, &request, &BruteForceOracle, SolverConfig::default()).unwrap();
    (plan.commands, plan.cost)
}

#[test]
fn scenario_1_fresh_install() {
    let catalog = Catalog::build(vec![raw("A", "1", 10, &[], &[])]).unwrap();
    let (commands, cost) = run(&catalog, &[], &["+A=1"]);
    assert_eq!(commands, vec!["+A=1"]);
    assert_eq!(cost, 10);
}

#[test]
fn scenario_2_uninstall_only() {
    let catalog = Catalog::build(vec![raw("A", "1", 10, &[], &[])]).unwrap();
    let (commands, cost) = run(&catalog, &["A=1"], &["-A=1"]);
    assert_eq!(commands, vec!["-A=1"]);
    assert_eq!(cost, 1_000_000);
}

#[test]
fn scenario_3_install_pulls_in_dependency() {
    let catalog = Catalog::build(vec![
        raw("A", "1", 5, &[&["B"]], &[]),
        raw("B", "1", 3, &[], &[]),
    ])
    .unwrap();
    let (commands, cost) = run(&catalog, &[], &["+A=1"]);
    assert_eq!(commands, vec!["+B=1", "+A=1"]);
    assert_eq!(cost, 8);
}

#[test]
fn scenario_4_cheapest_dependency_alternative_wins() {
    let catalog = Catalog::build(vec![
        raw("A", "1", 5, &[&["B", "C"]], &[]),
        raw("B", "1", 100, &[], &[]),
        raw("C", "1", 2, &[], &[]),
    ])
    .unwrap();
    let (commands, cost) = run(&catalog, &[], &["+A=1"]);
    assert_eq!(commands, vec!["+C=1", "+A=1"]);
    assert_eq!(cost, 7);
}

#[test]
fn scenario_5_cheapest_version_variant_wins() {
    let catalog = Catalog::build(vec![raw("A", "1", 10, &[], &[]), raw("A", "2", 5, &[], &[])]).unwrap();
    let (commands, cost) = run(&catalog, &[], &["+A"]);
    assert_eq!(commands, vec!["+A=2"]);
    assert_eq!(cost, 5);
}

#[test]
fn scenario_6_conflict_forces_removal() {
    let catalog = Catalog::build(vec![
        raw("A", "1", 10, &[], &["C"]),
        raw("B", "1", 20, &[], &[]),
        raw("C", "1", 30, &[], &[]),
    ])
    .unwrap();
    let (commands, cost) = run(&catalog, &["A=1", "B=1"], &["+C=1"]);
    assert_eq!(commands, vec!["-A=1", "+C=1"]);
    assert_eq!(cost, 1_000_030);
}

#[test]
fn unmatched_install_reports_unsatisfiable() {
    let catalog = Catalog::build(vec![raw("A", "1", 1, &[], &[])]).unwrap();
    let request = Request::from_raw(&catalog, &[], &["+B".to_string()]).unwrap();
    let err = solve(&catalog, &request, &BruteForceOracle, SolverConfig::default()).unwrap_err();
    assert!(matches!(err, depsolve::SolveError::NoMatchingPackage { .. }));
}

#[test]
fn package_id_is_one_based() {
    let catalog = Catalog::build(vec![raw("A", "1", 1, &[], &[])]).unwrap();
    assert_eq!(catalog.by_id(PackageId::new(1)).name, "A");
}
