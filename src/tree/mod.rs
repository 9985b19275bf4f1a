//! Gap analysis over a rendered `mvn dependency:tree` listing.
//!
//! - [`classifier`] — finds the coordinate on each line and decides whether it
//!   is a main (direct) or transitive dependency.
//! - [`gaps`] — builds the main-dependency baseline and collects transitive
//!   dependencies missing from it, once per [`gaps::IdentityKey`].

pub mod classifier;
pub mod gaps;

use tracing::debug;

use crate::models::{ClassifiedLine, LineRole, LineStats, TreeAnalysis};
use classifier::{classify, MarkerHeuristic, MavenMarkers};
use gaps::{find_gaps, IdentityKey};

/// Analyze a tree listing with Maven's default markers.
pub fn analyze<I, S>(lines: I) -> TreeAnalysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    analyze_with(&MavenMarkers, lines)
}

pub fn analyze_with<H, I, S>(heuristic: &H, lines: I) -> TreeAnalysis
where
    H: MarkerHeuristic,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classified = classify(heuristic, lines);
    let stats = line_stats(&classified);
    debug!(
        "classified {} lines: {} main, {} transitive, {} orphaned, {} unrecognized",
        stats.total, stats.main, stats.transitive, stats.orphaned, stats.unrecognized
    );

    TreeAnalysis {
        group_artifact: find_gaps(&classified, IdentityKey::GroupArtifact),
        artifact_only: find_gaps(&classified, IdentityKey::ArtifactOnly),
        stats,
    }
}

fn line_stats(lines: &[ClassifiedLine]) -> LineStats {
    let mut stats = LineStats {
        total: lines.len(),
        ..LineStats::default()
    };
    let mut seen_main = false;

    for line in lines {
        match line.role {
            LineRole::Main => {
                seen_main = true;
                stats.main += 1;
            }
            LineRole::Transitive if seen_main => stats.transitive += 1,
            LineRole::Transitive => stats.orphaned += 1,
            LineRole::Unrecognized => stats.unrecognized += 1,
        }
    }

    stats
}
