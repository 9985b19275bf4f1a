use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ClassifiedLine, DependencyCoordinate, LineRole};

/// `group:artifact:jar:version:scope`, matched anywhere in the line. Word
/// characters are ASCII only.
static COORDINATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_.-]+):([A-Za-z0-9_.-]+):jar:([A-Za-z0-9_.-]+):([A-Za-z0-9_]+)")
        .expect("coordinate pattern is valid")
});

/// Log level tag Maven puts in front of every line, e.g. `[INFO] `.
static LOG_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[A-Z]+\] ?").expect("log prefix pattern is valid"));

/// Branch marker for a non-last child at any depth.
const BRANCH: &str = "+- ";
/// Branch marker for the last child at any depth.
const LAST_BRANCH: &str = "\\- ";

/// The line with its log prefix removed.
fn tree_part(line: &str) -> &str {
    match LOG_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Decides the structural role of a line that carries a coordinate.
///
/// Kept apart from coordinate parsing so that a different rendering heuristic
/// (column-based, say) can replace [`MavenMarkers`] without touching the
/// coordinate model.
pub trait MarkerHeuristic {
    fn is_main(&self, line: &str) -> bool;
    fn is_transitive(&self, line: &str) -> bool;
}

/// Substring matching on the markers of Maven's default tree renderer.
///
/// Only the most recent main dependency is tracked, so grandchildren collapse
/// onto the nearest main, and a top-level `\- ` entry (Maven's last direct
/// dependency) counts as transitive of the main before it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MavenMarkers;

impl MarkerHeuristic for MavenMarkers {
    /// A `+- ` with nothing but the log prefix before it. Any `|` column or
    /// indentation in front makes it nested.
    fn is_main(&self, line: &str) -> bool {
        tree_part(line).starts_with(BRANCH)
    }

    fn is_transitive(&self, line: &str) -> bool {
        line.contains(LAST_BRANCH) || (line.contains(BRANCH) && !self.is_main(line))
    }
}

/// Extract the first coordinate found in `line`, if any.
pub fn parse_coordinate(line: &str) -> Option<DependencyCoordinate> {
    let caps = COORDINATE.captures(line)?;
    Some(DependencyCoordinate {
        group_id: caps[1].to_string(),
        artifact_id: caps[2].to_string(),
        version: caps[3].to_string(),
        scope: caps[4].to_string(),
    })
}

/// Classify a single tree line. Never fails: anything that is not a
/// coordinate under a recognised marker is [`LineRole::Unrecognized`].
pub fn classify_line<H: MarkerHeuristic>(heuristic: &H, line: &str) -> ClassifiedLine {
    let Some(coordinate) = parse_coordinate(line) else {
        return ClassifiedLine::unrecognized();
    };

    let role = if heuristic.is_main(line) {
        LineRole::Main
    } else if heuristic.is_transitive(line) {
        LineRole::Transitive
    } else {
        return ClassifiedLine::unrecognized();
    };

    ClassifiedLine {
        role,
        coordinate: Some(coordinate),
    }
}

/// Classify every line, preserving input order.
pub fn classify<H, I, S>(heuristic: &H, lines: I) -> Vec<ClassifiedLine>
where
    H: MarkerHeuristic,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| classify_line(heuristic, line.as_ref()))
        .collect()
}
