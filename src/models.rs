use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use serde::Serialize;

/// A Maven coordinate as rendered in a `dependency:tree` line
/// (`group:artifact:jar:version:scope`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
}

impl DependencyCoordinate {
    /// `groupId:artifactId`, ignoring version and scope.
    pub fn ga(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl std::fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:jar:{}:{}",
            self.group_id, self.artifact_id, self.version, self.scope
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Main,
    Transitive,
    Unrecognized,
}

impl std::fmt::Display for LineRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineRole::Main => write!(f, "main"),
            LineRole::Transitive => write!(f, "transitive"),
            LineRole::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// One tree line after classification. `coordinate` is `None` exactly when
/// the role is [`LineRole::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub role: LineRole,
    pub coordinate: Option<DependencyCoordinate>,
}

impl ClassifiedLine {
    pub fn unrecognized() -> Self {
        Self {
            role: LineRole::Unrecognized,
            coordinate: None,
        }
    }
}

/// Gaps found under one main dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapEntry {
    /// GA identity of the main dependency.
    pub main: String,
    /// GA identities of its transitive dependencies that failed the check.
    pub missing: BTreeSet<String>,
}

/// Main dependency → missing transitive dependencies, keyed in the order the
/// main dependencies first produced a gap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapReport {
    pub entries: Vec<GapEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl GapReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `missing` under `main`, creating the key on first use.
    pub fn insert(&mut self, main: &str, missing: String) {
        let idx = match self.index.get(main) {
            Some(&idx) => idx,
            None => {
                self.entries.push(GapEntry {
                    main: main.to_string(),
                    missing: BTreeSet::new(),
                });
                self.index.insert(main.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[idx].missing.insert(missing);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Line counts gathered while classifying a tree listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub main: usize,
    pub transitive: usize,
    /// Transitive lines seen before any main line; dropped from both reports.
    pub orphaned: usize,
    pub unrecognized: usize,
}

/// Result of analysing a `dependency:tree` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeAnalysis {
    /// Report 1: transitive dependencies whose `groupId:artifactId` is not a main dependency.
    pub group_artifact: GapReport,
    /// Report 2: transitive dependencies whose `artifactId` is not a main dependency.
    pub artifact_only: GapReport,
    pub stats: LineStats,
}

/// Jar filenames that share a base name once the version suffix is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub base: String,
    pub jars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub total: usize,
    pub with_version: usize,
    pub without_version: usize,
    pub with_version_file: PathBuf,
    pub without_version_file: PathBuf,
}

/// A jar whose Maven coordinates were found on the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedJar {
    pub jar: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolveSummary {
    pub total: usize,
    pub resolved: usize,
    pub failed: usize,
    pub output_file: PathBuf,
    pub unresolved_file: PathBuf,
}
