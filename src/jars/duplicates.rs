use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::DuplicateGroup;

/// Everything from the first `-<digit>` up to the `.jar` extension.
static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d.*\.jar$").expect("version suffix pattern is valid"));

/// Strip the version suffix: `commons-lang3-3.12.0.jar` → `commons-lang3`.
/// Names without a versioned suffix are returned unchanged.
pub fn base_name(jar: &str) -> String {
    VERSION_SUFFIX.replace(jar, "").into_owned()
}

/// Group jar filenames by base name and keep the groups with more than one
/// member. Groups are sorted by base name; members keep input order.
pub fn find_duplicates<S: AsRef<str>>(jars: &[S]) -> Vec<DuplicateGroup> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for jar in jars {
        let jar = jar.as_ref();
        groups.entry(base_name(jar)).or_default().push(jar.to_string());
    }

    groups
        .into_iter()
        .filter(|(_, jars)| jars.len() > 1)
        .map(|(base, jars)| DuplicateGroup { base, jars })
        .collect()
}
