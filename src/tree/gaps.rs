use std::collections::HashSet;

use tracing::trace;

use crate::models::{ClassifiedLine, DependencyCoordinate, GapReport, LineRole};

/// How two coordinates are compared when deciding whether a transitive
/// dependency is already declared as a main dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKey {
    /// `groupId:artifactId`.
    GroupArtifact,
    /// `artifactId` alone, so the same library under another group still matches.
    ArtifactOnly,
}

impl IdentityKey {
    pub fn identity(&self, coordinate: &DependencyCoordinate) -> String {
        match self {
            IdentityKey::GroupArtifact => coordinate.ga(),
            IdentityKey::ArtifactOnly => coordinate.artifact_id.clone(),
        }
    }
}

/// Identities of every main dependency in the listing. Built once, before any
/// gap is judged, and only read afterwards.
#[derive(Debug, Clone)]
pub struct Baseline {
    key: IdentityKey,
    identities: HashSet<String>,
}

impl Baseline {
    pub fn build(lines: &[ClassifiedLine], key: IdentityKey) -> Self {
        let identities = lines
            .iter()
            .filter(|l| l.role == LineRole::Main)
            .filter_map(|l| l.coordinate.as_ref())
            .map(|c| key.identity(c))
            .collect();
        Self { key, identities }
    }

    pub fn contains(&self, coordinate: &DependencyCoordinate) -> bool {
        self.identities.contains(&self.key.identity(coordinate))
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }
}

/// Pair every transitive line with the main dependency most recently seen
/// before it. Transitive lines that precede the first main are dropped.
pub fn attribute(
    lines: &[ClassifiedLine],
) -> Vec<(&DependencyCoordinate, &DependencyCoordinate)> {
    let mut current_main: Option<&DependencyCoordinate> = None;
    let mut pairs = Vec::new();

    for line in lines {
        let Some(coordinate) = line.coordinate.as_ref() else {
            continue;
        };
        match line.role {
            LineRole::Main => current_main = Some(coordinate),
            LineRole::Transitive => match current_main {
                Some(main) => pairs.push((main, coordinate)),
                None => trace!("dropping orphan transitive {}", coordinate),
            },
            LineRole::Unrecognized => {}
        }
    }

    pairs
}

/// Collect, per main dependency, the transitive dependencies whose identity
/// under `key` is absent from the main baseline.
///
/// Two passes: the baseline must see every main line before the second pass
/// can decide that something is missing.
pub fn find_gaps(lines: &[ClassifiedLine], key: IdentityKey) -> GapReport {
    let baseline = Baseline::build(lines, key);
    trace!("{:?} baseline holds {} identities", key, baseline.len());

    let mut report = GapReport::new();
    for (main, transitive) in attribute(lines) {
        if !baseline.contains(transitive) {
            report.insert(&main.ga(), transitive.ga());
        }
    }
    report
}
