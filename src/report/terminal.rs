use std::fmt::Write as _;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::models::{DuplicateGroup, GapReport, ResolveSummary, SplitSummary, TreeAnalysis};

const RULE: &str = "--------------------------------------------------";
const BANNER: &str = "==================================================";

pub const GROUP_ARTIFACT_TITLE: &str =
    "REPORT 1: Missing transitive deps (groupId + artifactId comparison)";
pub const ARTIFACT_ONLY_TITLE: &str =
    "REPORT 2: Missing transitive deps (artifactId-only comparison, group ignored)";

/// Render both gap reports, preceded by the assumptions banner unless `quiet`.
pub fn render_tree(analysis: &TreeAnalysis, quiet: bool) {
    if !quiet {
        println!("{}", assumptions());
        let s = &analysis.stats;
        println!(
            " {} lines: {} main, {} transitive, {} skipped\n",
            s.total,
            s.main.to_string().bold(),
            s.transitive.to_string().bold(),
            (s.unrecognized + s.orphaned).to_string().dimmed(),
        );
    }
    print!("{}", format_gap_report(GROUP_ARTIFACT_TITLE, &analysis.group_artifact));
    print!("{}", format_gap_report(ARTIFACT_ONLY_TITLE, &analysis.artifact_only));
}

fn assumptions() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", BANNER);
    let _ = writeln!(out, "{}", "Key Assumptions".bold());
    let _ = writeln!(out, "{}", RULE);
    for line in [
        "- The tree is generated with default Maven formatting",
        "- Lines with '+-' are main dependencies",
        "- Lines with '\\-' or '|  +-' are transitive dependencies",
        "- Report 1 conflict check uses groupId + artifactId",
        "- Report 2 conflict check uses artifactId only (groupId ignored)",
        "- Version differences are ignored intentionally",
    ] {
        let _ = writeln!(out, "{}", line);
    }
    let _ = write!(out, "{}", BANNER);
    out
}

/// Plain-text rendering of one gap report: the title, then every main
/// dependency followed by its gaps as `  -> group:artifact` lines.
pub fn format_gap_report(title: &str, report: &GapReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", RULE);

    if report.is_empty() {
        let _ = writeln!(out, "No entries found.\n");
        return out;
    }

    for entry in &report.entries {
        let _ = writeln!(out, "{}", entry.main);
        for dep in &entry.missing {
            let _ = writeln!(out, "  -> {}", dep);
        }
        let _ = writeln!(out);
    }
    out
}

pub fn render_duplicates(groups: &[DuplicateGroup], quiet: bool) {
    print!("{}", format_duplicates(groups));
    if !quiet {
        eprintln!(
            "  {} {} duplicate group(s)",
            "→".cyan(),
            groups.len().to_string().bold()
        );
    }
}

pub fn format_duplicates(groups: &[DuplicateGroup]) -> String {
    let mut out = String::new();
    if groups.is_empty() {
        let _ = writeln!(out, "No duplicates found.");
        return out;
    }
    for group in groups {
        let _ = writeln!(out, "DUPLICATE FOUND: {}", group.base);
        for jar in &group.jars {
            let _ = writeln!(out, "  {}", jar);
        }
        let _ = writeln!(out, "-------------------------");
    }
    out
}

pub fn render_split(summary: &SplitSummary) {
    let mut table = summary_table("JAR Split Summary");
    table.add_row(count_row("Total jar names read", summary.total));
    table.add_row(count_row("Jars WITH version", summary.with_version));
    table.add_row(count_row("Jars WITHOUT version", summary.without_version));
    table.add_row(vec![
        Cell::new("With-version file"),
        Cell::new(summary.with_version_file.display()),
    ]);
    table.add_row(vec![
        Cell::new("Without-version file"),
        Cell::new(summary.without_version_file.display()),
    ]);
    println!("{}", table);
}

pub fn render_resolve(summary: &ResolveSummary) {
    let mut table = summary_table("Maven Dependency Generation Summary");
    table.add_row(count_row("Total jars processed", summary.total));
    table.add_row(vec![
        Cell::new("Resolved successfully"),
        Cell::new(summary.resolved)
            .fg(comfy_table::Color::Green)
            .set_alignment(CellAlignment::Right),
    ]);
    let failed_color = if summary.failed > 0 {
        comfy_table::Color::Red
    } else {
        comfy_table::Color::Reset
    };
    table.add_row(vec![
        Cell::new("Failed / unresolved"),
        Cell::new(summary.failed)
            .fg(failed_color)
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Output file"),
        Cell::new(summary.output_file.display()),
    ]);
    table.add_row(vec![
        Cell::new("Unresolved jars file"),
        Cell::new(summary.unresolved_file.display()),
    ]);
    println!("{}", table);
}

fn summary_table(title: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(title).add_attribute(Attribute::Bold),
            Cell::new(""),
        ]);
    table
}

fn count_row(label: &str, count: usize) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(count).set_alignment(CellAlignment::Right),
    ]
}
