// SPDX-License-Identifier: MPL-2.0

//! References: a package name plus an optional version comparison.

use std::fmt;

use crate::error::SolveError;
use crate::package::Package;
use crate::version::Version;

/// A comparison operator usable in a [`Reference`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
}

impl Operator {
    fn evaluate(self, candidate: &str, target: &str) -> bool {
        match self {
            Operator::Eq => candidate == target,
            Operator::Lt => candidate < target,
            Operator::Gt => candidate > target,
            Operator::Le => candidate <= target,
            Operator::Ge => candidate >= target,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Eq => "=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
        };
        f.write_str(s)
    }
}

/// A predicate over packages of a given name: `name`, `name=ver`, `name<ver`,
/// `name>ver`, `name<=ver`, or `name>=ver`.
///
/// A reference with no operator matches every package with that name.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    pub(crate) name: String,
    constraint: Option<(Operator, Version)>,
}

impl Reference {
    /// Parse a reference from its raw textual form.
    pub fn parse(raw: &str) -> Result<Self, SolveError> {
        let err = || SolveError::ParseError {
            input: raw.to_string(),
        };

        let op_index = raw.find(['=', '<', '>']);
        let Some(op_index) = op_index else {
            if raw.is_empty() {
                return Err(err());
            }
            return Ok(Self {
                name: raw.to_string(),
                constraint: None,
            });
        };

        let name = &raw[..op_index];
        if name.is_empty() {
            return Err(err());
        }
        let rest = &raw[op_index..];
        let (operator, version_start) = match rest.as_bytes()[0] {
            b'=' => (Operator::Eq, 1),
            b'<' if rest.as_bytes().get(1) == Some(&b'=') => (Operator::Le, 2),
            b'>' if rest.as_bytes().get(1) == Some(&b'=') => (Operator::Ge, 2),
            b'<' => (Operator::Lt, 1),
            b'>' => (Operator::Gt, 1),
            _ => return Err(err()),
        };
        let version_str = &rest[version_start..];
        if version_str.is_empty() {
            return Err(err());
        }
        let version = Version::parse(version_str).map_err(|_| err())?;

        Ok(Self {
            name: name.to_string(),
            constraint: Some((operator, version)),
        })
    }

    /// The package name this reference is about.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `package` satisfies this reference.
    pub fn matches(&self, package: &Package) -> bool {
        if package.name != self.name {
            return false;
        }
        match &self.constraint {
            None => true,
            Some((operator, version)) => {
                operator.evaluate(package.version.canonical(), version.canonical())
            }
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            None => write!(f, "{}", self.name),
            Some((operator, version)) => write!(f, "{}{}{}", self.name, operator, version),
        }
    }
}
