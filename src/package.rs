// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A package in the catalog: its identity, version, size, and the
//! dependency/conflict edges resolved against other catalog entries.

use std::fmt;
use std::num::NonZeroU32;

use crate::type_aliases::Set;
use crate::version::Version;

/// A package id, unique within a [`Catalog`](crate::catalog::Catalog).
///
/// Ids are assigned in catalog insertion order starting at 1, matching the
/// "positive integer id" used as the CNF variable number for this package.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackageId(NonZeroU32);

impl PackageId {
    /// Build a `PackageId` from a 1-based index. Panics if `index` is 0.
    pub fn new(index: u32) -> Self {
        Self(NonZeroU32::new(index).expect("package ids are 1-based"))
    }

    /// The id as a plain `u32`, the form used as a DIMACS variable number.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved catalog entry.
///
/// `dep_groups` and `conflicts` are resolved against other packages in the
/// same catalog at build time: each raw dependency-group name and raw
/// conflict reference has already been turned into the set of package ids
/// it currently matches.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    /// Unique id, used as the CNF variable number for "this package is
    /// installed".
    pub id: PackageId,
    /// Package name; multiple versions of the same package share a name.
    pub name: String,
    /// The version exactly as given in the catalog.
    pub version: Version,
    /// Installed size, used by the Optimizer Loop's cost function.
    pub size: u64,
    /// Each group is a disjunction: installing this package requires at
    /// least one package id from each group to also be installed.
    pub dep_groups: Vec<Set<PackageId>>,
    /// Package ids that cannot be installed at the same time as this one.
    pub conflicts: Set<PackageId>,
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.version)
    }
}
