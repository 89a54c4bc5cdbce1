//! Version constraint expressions
//!
//! A constraint is one or more comma-separated clauses, all of which must hold:
//! - `1.2.3`, `= 1.2.3` - exact match
//! - `!= 1.2.3` - anything but
//! - `> 1.2`, `>= 1.2`, `=> 1.2` - greater than (or equal)
//! - `< 3.0`, `<= 3.0`, `=< 3.0` - less than (or equal)
//! - `~> 1.2` - pessimistic: >=1.2.0 <2.0.0 (all but the last written segment are pinned)
//!
//! Pre-release candidates only satisfy range operators when the clause version is
//! itself a pre-release with the same numeric segments.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::ConstraintError;
use crate::version::semver::{ParsedVersion, parse_version};

static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(~>|!=|>=|=>|<=|=<|=|>|<)?\s*(v?[0-9][0-9A-Za-z.+\-]*)\s*$")
        .expect("clause pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Pessimistic,
}

impl Operator {
    fn from_token(token: &str) -> Self {
        match token {
            "!=" => Operator::NotEqual,
            ">" => Operator::Greater,
            ">=" | "=>" => Operator::GreaterOrEqual,
            "<" => Operator::Less,
            "<=" | "=<" => Operator::LessOrEqual,
            "~>" => Operator::Pessimistic,
            _ => Operator::Equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Clause {
    operator: Operator,
    target: ParsedVersion,
}

impl Clause {
    fn parse(clause: &str) -> Result<Self, ConstraintError> {
        let caps = CLAUSE_RE
            .captures(clause)
            .ok_or_else(|| ConstraintError::Malformed(clause.trim().to_string()))?;

        let operator = Operator::from_token(caps.get(1).map_or("", |m| m.as_str()));
        let raw_version = caps.get(2).map_or("", |m| m.as_str());
        let target = parse_version(raw_version)
            .ok_or_else(|| ConstraintError::InvalidVersion(raw_version.to_string()))?;

        Ok(Self { operator, target })
    }

    fn satisfies(&self, candidate: &ParsedVersion) -> bool {
        let target = &self.target;
        let ord = candidate.compare(target);

        match self.operator {
            Operator::Equal => ord.is_eq(),
            Operator::NotEqual => ord.is_ne(),
            Operator::Greater => prerelease_compatible(candidate, target) && ord.is_gt(),
            Operator::GreaterOrEqual => prerelease_compatible(candidate, target) && ord.is_ge(),
            Operator::Less => prerelease_compatible(candidate, target) && ord.is_lt(),
            Operator::LessOrEqual => prerelease_compatible(candidate, target) && ord.is_le(),
            Operator::Pessimistic => self.satisfies_pessimistic(candidate),
        }
    }

    fn satisfies_pessimistic(&self, candidate: &ParsedVersion) -> bool {
        let target = &self.target;

        // A pre-release pessimistic clause only admits pre-releases
        if !prerelease_compatible(candidate, target)
            || (target.is_prerelease() && !candidate.is_prerelease())
        {
            return false;
        }
        if candidate.compare(target).is_lt() || target.segments.len() > candidate.segments.len() {
            return false;
        }

        let pinned = target.precision.saturating_sub(1);
        target.segments[..pinned] == candidate.segments[..pinned]
    }
}

/// Returns false when a pre-release candidate must not be considered against `target`
fn prerelease_compatible(candidate: &ParsedVersion, target: &ParsedVersion) -> bool {
    match (candidate.is_prerelease(), target.is_prerelease()) {
        (true, true) => candidate.segments == target.segments,
        (true, false) => false,
        _ => true,
    }
}

/// A parsed version constraint scoped to a single coordinate occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    expression: String,
    clauses: Vec<Clause>,
}

impl Constraint {
    pub fn parse(expression: &str) -> Result<Self, ConstraintError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(ConstraintError::Empty);
        }

        let clauses = expression
            .split(',')
            .map(Clause::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            expression: expression.to_string(),
            clauses,
        })
    }

    /// Check a candidate version string against every clause.
    ///
    /// Candidates that cannot be parsed as versions never satisfy a constraint.
    pub fn satisfies(&self, version: &str) -> bool {
        parse_version(version)
            .is_some_and(|candidate| self.clauses.iter().all(|c| c.satisfies(&candidate)))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
