// SPDX-License-Identifier: MPL-2.0

//! Turning raw initial-state and constraint strings into a typed [`Request`].

use crate::catalog::Catalog;
use crate::error::SolveError;
use crate::package::PackageId;
use crate::reference::Reference;
use crate::type_aliases::Set;

/// The fully-resolved install/uninstall request against a given [`Catalog`].
#[derive(Debug, Clone)]
pub struct Request {
    /// Packages installed in the starting state.
    pub initial: Set<PackageId>,
    /// Unresolved install constraints; each must be satisfied by at least
    /// one installed package in the final state.
    pub install: Vec<Reference>,
    /// Packages that must not be installed in the final state.
    pub uninstall: Set<PackageId>,
}

impl Request {
    /// Parse the three raw textual inputs into a `Request`.
    ///
    /// `initial_refs` are bare reference strings (no `+`/`-` prefix).
    /// `constraints` are reference strings each prefixed with `+` (install)
    /// or `-` (uninstall).
    pub fn from_raw(
        catalog: &Catalog,
        initial_refs: &[String],
        constraints: &[String],
    ) -> Result<Self, SolveError> {
        let mut initial = Set::default();
        for text in initial_refs {
            let reference = Reference::parse(text)?;
            if let Some(&first) = catalog.matching(&reference).first() {
                initial.insert(first);
            }
        }

        let mut install = Vec::new();
        let mut uninstall = Set::default();
        for text in constraints {
            let (prefix, rest) = text.split_at(text.len().min(1));
            let reference = Reference::parse(rest).map_err(|_| SolveError::ParseError {
                input: text.clone(),
            })?;
            match prefix {
                "-" => uninstall.extend(catalog.matching(&reference)),
                "+" => install.push(reference),
                _ => {
                    return Err(SolveError::ParseError {
                        input: text.clone(),
                    })
                }
            }
        }

        Ok(Self {
            initial,
            install,
            uninstall,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, RawPackage};

    fn raw(name: &str, version: &str, size: u64) -> RawPackage {
        RawPackage {
            name: name.to_string(),
            version: version.to_string(),
            size,
            depends: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    #[test]
    fn resolves_first_matching_initial_package() {
        let catalog = Catalog::build(vec![raw("A", "1", 1), raw("A", "2", 1)]).unwrap();
        let request = Request::from_raw(&catalog, &["A".to_string()], &[]).unwrap();
        assert_eq!(request.initial.len(), 1);
        assert!(request.initial.contains(&PackageId::new(1)));
    }

    #[test]
    fn skips_unmatched_initial_reference() {
        let catalog = Catalog::build(vec![raw("A", "1", 1)]).unwrap();
        let request = Request::from_raw(&catalog, &["B".to_string()], &[]).unwrap();
        assert!(request.initial.is_empty());
    }

    #[test]
    fn uninstall_constraint_resolves_every_match() {
        let catalog = Catalog::build(vec![raw("A", "1", 1), raw("A", "2", 1)]).unwrap();
        let request = Request::from_raw(&catalog, &[], &["-A".to_string()]).unwrap();
        assert_eq!(request.uninstall.len(), 2);
    }

    #[test]
    fn install_constraint_stays_unresolved() {
        let catalog = Catalog::build(vec![raw("A", "1", 1)]).unwrap();
        let request = Request::from_raw(&catalog, &[], &["+A".to_string()]).unwrap();
        assert_eq!(request.install.len(), 1);
        assert_eq!(request.install[0].name(), "A");
    }
}
