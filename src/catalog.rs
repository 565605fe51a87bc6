// SPDX-License-Identifier: MPL-2.0

//! The catalog: every known package, indexed by id and by name.

use crate::error::SolveError;
use crate::package::{Package, PackageId};
use crate::reference::Reference;
use crate::type_aliases::{Map, Set};
use crate::version::Version;

/// One package record as it arrives from the (already-parsed) catalog
/// document. Loading and parsing that document from disk or network is out
/// of scope for this crate; only the shape of the parsed record lives here.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPackage {
    /// Package name.
    pub name: String,
    /// Raw version string.
    pub version: String,
    /// Installed size.
    pub size: u64,
    /// Dependency groups, each a list of reference strings (a disjunction).
    pub depends: Vec<Vec<String>>,
    /// Conflicting references.
    pub conflicts: Vec<String>,
}

/// The universe of known packages, each with a stable integer id.
///
/// Built in two passes: first every package gets an id and is indexed by
/// name (so references can resolve against the full set), then every
/// package's `depends`/`conflicts` references are resolved into concrete id
/// sets.
#[derive(Debug, Clone)]
pub struct Catalog {
    packages: Vec<Package>,
    variants: Map<String, Vec<PackageId>>,
}

impl Catalog {
    /// Build a catalog from raw package records, assigning ids in insertion
    /// order starting at 1 and resolving every reference against the full
    /// package set.
    pub fn build(raw: Vec<RawPackage>) -> Result<Self, SolveError> {
        let mut packages = Vec::with_capacity(raw.len());
        let mut variants: Map<String, Vec<PackageId>> = Map::default();
        let mut raw_depends = Vec::with_capacity(raw.len());
        let mut raw_conflicts = Vec::with_capacity(raw.len());

        for (index, entry) in raw.into_iter().enumerate() {
            let id = PackageId::new((index + 1) as u32);
            let version = Version::parse(entry.version)?;
            variants.entry(entry.name.clone()).or_default().push(id);
            raw_depends.push(entry.depends);
            raw_conflicts.push(entry.conflicts);
            packages.push(Package {
                id,
                name: entry.name,
                version,
                size: entry.size,
                dep_groups: Vec::new(),
                conflicts: Set::default(),
            });
        }

        let mut catalog = Self { packages, variants };

        for index in 0..catalog.packages.len() {
            let conflicts = catalog.resolve_refs(&raw_conflicts[index])?;

            let mut dep_groups = Vec::with_capacity(raw_depends[index].len());
            for group in &raw_depends[index] {
                let mut resolved = catalog.resolve_refs(group)?;
                // A dep-group element that is also a conflict is stripped
                // from the group; if that empties it, the group is dropped
                // rather than left unsatisfiable. See DESIGN.md.
                resolved.retain(|id| !conflicts.contains(id));
                if !resolved.is_empty() {
                    dep_groups.push(resolved);
                }
            }

            catalog.packages[index].conflicts = conflicts;
            catalog.packages[index].dep_groups = dep_groups;
        }

        Ok(catalog)
    }

    fn resolve_refs(&self, raw: &[String]) -> Result<Set<PackageId>, SolveError> {
        let mut ids = Set::default();
        for text in raw {
            let reference = Reference::parse(text)?;
            ids.extend(self.matching(&reference));
        }
        Ok(ids)
    }

    /// Every package id matching `reference`.
    pub fn matching(&self, reference: &Reference) -> Vec<PackageId> {
        self.variants
            .get(reference.name())
            .into_iter()
            .flatten()
            .copied()
            .filter(|id| reference.matches(self.by_id(*id)))
            .collect()
    }

    /// All variants under `name`, in catalog insertion order.
    pub fn variants(&self, name: &str) -> Vec<&Package> {
        self.variants
            .get(name)
            .into_iter()
            .flatten()
            .map(|id| self.by_id(*id))
            .collect()
    }

    /// Look up a package by id. Panics if `id` does not belong to this
    /// catalog, since every `PackageId` in circulation is expected to have
    /// been handed out by this same `Catalog::build` call.
    pub fn by_id(&self, id: PackageId) -> &Package {
        &self.packages[(id.get() - 1) as usize]
    }

    /// All packages, in catalog insertion (id) order.
    pub fn all(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter()
    }

    /// Number of packages in the catalog (`N` in the Mode Selector).
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the catalog holds no packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Package ids in catalog (insertion) order, the order clauses are
    /// emitted in.
    pub fn iter_ids(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.packages.iter().map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn assigns_ids_in_insertion_order() {
        let catalog = Catalog::build(vec![
            raw("A", "1", 1, &[], &[]),
            raw("B", "1", 1, &[], &[]),
        ])
        .unwrap();
        assert_eq!(catalog.by_id(PackageId::new(1)).name, "A");
        assert_eq!(catalog.by_id(PackageId::new(2)).name, "B");
    }

    #[test]
    fn resolves_dependency_group_references() {
        let catalog = Catalog::build(vec![
            raw("A", "1", 5, &[&["B"]], &[]),
            raw("B", "1", 3, &[], &[]),
        ])
        .unwrap();
        let a = catalog.by_id(PackageId::new(1));
        assert_eq!(a.dep_groups.len(), 1);
        assert!(a.dep_groups[0].contains(&PackageId::new(2)));
    }

    #[test]
    fn drops_empty_groups() {
        let catalog = Catalog::build(vec![raw("A", "1", 5, &[&["Missing"]], &[])]).unwrap();
        assert!(catalog.by_id(PackageId::new(1)).dep_groups.is_empty());
    }

    #[test]
    fn strips_conflict_from_dep_group() {
        // B is both a dependency of A and a conflict of A: it is removed
        // from the dep group, which becomes empty and is dropped.
        let catalog = Catalog::build(vec![
            raw("A", "1", 5, &[&["B"]], &["B"]),
            raw("B", "1", 3, &[], &[]),
        ])
        .unwrap();
        let a = catalog.by_id(PackageId::new(1));
        assert!(a.dep_groups.is_empty());
        assert!(a.conflicts.contains(&PackageId::new(2)));
    }
}
