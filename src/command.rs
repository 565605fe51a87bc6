// SPDX-License-Identifier: MPL-2.0

//! Turning a satisfying assignment into an ordered list of install/uninstall
//! commands, and scoring that list.

use dimacs::OracleResponse;

use crate::catalog::Catalog;
use crate::error::SolveError;
use crate::package::PackageId;
use crate::type_aliases::{Map, Set};

/// Cost charged per removed package, dwarfing any plausible install size so
/// the optimizer always prefers fewer removals over a smaller install.
const UNINSTALL_PENALTY: u64 = 1_000_000;

/// An ordered, costed plan: the commands to run, and their total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Commands in the order they should be executed: all removals (in
    /// dependents-before-dependencies order), then all installs (in
    /// suppliers-before-dependents order).
    pub commands: Vec<String>,
    /// `|to_remove| * 1_000_000 + sum(size of every installed package)`.
    pub cost: u64,
}

/// Build the [`Plan`] for `assignment` against catalog state `initial`.
pub fn build_plan(
    catalog: &Catalog,
    initial: &Set<PackageId>,
    assignment: &OracleResponse,
) -> Result<Plan, SolveError> {
    let installed: Set<PackageId> = catalog
        .iter_ids()
        .filter(|id| assignment.is_true(id.get()))
        .collect();

    let to_install: Set<PackageId> = installed.difference(initial).copied().collect();
    let to_remove: Set<PackageId> = initial.difference(&installed).copied().collect();

    let removal_order = order_removals(catalog, &to_remove)?;
    let install_order = order_installs(catalog, &installed, &to_install)?;

    let mut commands = Vec::with_capacity(removal_order.len() + install_order.len());
    for id in &removal_order {
        let package = catalog.by_id(*id);
        commands.push(format!("-{}={}", package.name, package.version.raw()));
    }
    for id in &install_order {
        let package = catalog.by_id(*id);
        commands.push(format!("+{}={}", package.name, package.version.raw()));
    }

    let cost = to_remove.len() as u64 * UNINSTALL_PENALTY
        + to_install
            .iter()
            .map(|id| catalog.by_id(*id).size)
            .sum::<u64>();

    Ok(Plan { commands, cost })
}

/// Removal order: a package being removed must be removed before any
/// package it depends on that is also being removed, so nothing still
/// installed is ever left depending on something already gone.
fn order_removals(catalog: &Catalog, to_remove: &Set<PackageId>) -> Result<Vec<PackageId>, SolveError> {
    let mut edges: Vec<(PackageId, PackageId)> = Vec::new();
    for &p in to_remove {
        for group in &catalog.by_id(p).dep_groups {
            for &q in group {
                if to_remove.contains(&q) {
                    edges.push((p, q));
                }
            }
        }
    }
    toposort(to_remove.iter().copied(), &edges)
}

/// Install order: every dependency group of a package being installed must
/// already be satisfied by the surviving state, or supplied by one other
/// package also being installed, which must itself be installed first. A
/// group satisfiable by the surviving state needs no edge. A group with
/// more than one fresh-install candidate picks the lowest-id one as the
/// supplier and adds a single edge for it; the rest need no edge of their
/// own since the group is already satisfied once the chosen supplier lands.
fn order_installs(
    catalog: &Catalog,
    installed: &Set<PackageId>,
    to_install: &Set<PackageId>,
) -> Result<Vec<PackageId>, SolveError> {
    let mut edges: Vec<(PackageId, PackageId)> = Vec::new();
    for &p in to_install {
        for group in &catalog.by_id(p).dep_groups {
            if group.iter().any(|q| installed.contains(q) && !to_install.contains(q)) {
                continue;
            }
            let supplier = group
                .iter()
                .copied()
                .filter(|q| to_install.contains(q))
                .min_by_key(|q| q.get());
            match supplier {
                Some(q) => edges.push((q, p)),
                None => return Err(SolveError::InfeasibleCandidate { package: p }),
            }
        }
    }
    toposort(to_install.iter().copied(), &edges)
}

/// Kahn's algorithm: `edges` are `(before, after)` pairs. Returns the nodes
/// in an order respecting every edge, or a [`SolveError::TopologicalCycle`]
/// naming whatever nodes could not be ordered.
fn toposort(
    nodes: impl Iterator<Item = PackageId>,
    edges: &[(PackageId, PackageId)],
) -> Result<Vec<PackageId>, SolveError> {
    let mut indegree: Map<PackageId, u32> = nodes.map(|id| (id, 0)).collect();
    let mut successors: Map<PackageId, Vec<PackageId>> = Map::default();
    for &(before, after) in edges {
        successors.entry(before).or_default().push(after);
        *indegree.entry(after).or_insert(0) += 1;
    }

    let mut ready: Vec<PackageId> = indegree
        .iter()
        .filter(|(_, &deg)| deg == 0)
        .map(|(&id, _)| id)
        .collect();
    ready.sort_by_key(|id| id.get());

    let mut order = Vec::with_capacity(indegree.len());
    let mut cursor = 0;
    while cursor < ready.len() {
        let current = ready[cursor];
        cursor += 1;
        order.push(current);
        if let Some(next) = successors.get(&current) {
            let mut freed = Vec::new();
            for &succ in next {
                let deg = indegree.get_mut(&succ).expect("edge target was declared a node");
                *deg -= 1;
                if *deg == 0 {
                    freed.push(succ);
                }
            }
            freed.sort_by_key(|id| id.get());
            ready.splice(ready.len().., freed);
        }
    }

    if order.len() != indegree.len() {
        let ordered: Set<PackageId> = order.iter().copied().collect();
        let mut remaining: Vec<PackageId> = indegree
            .keys()
            .filter(|id| !ordered.contains(id))
            .copied()
            .collect();
        remaining.sort_by_key(|id| id.get());
        return Err(SolveError::TopologicalCycle { remaining });
    }

    Ok(order)
}
