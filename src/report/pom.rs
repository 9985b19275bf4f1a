use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::models::ResolvedJar;

/// Render one `<dependency>` declaration, preceded by a comment naming the
/// jar it was resolved from.
pub fn dependency_snippet(jar: &ResolvedJar) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Comment(BytesText::from_escaped(format!(" {} ", jar.jar))))?;
    writer.write_event(Event::Start(BytesStart::new("dependency")))?;
    for (tag, value) in [
        ("groupId", &jar.group_id),
        ("artifactId", &jar.artifact_id),
        ("version", &jar.version),
    ] {
        writer
            .create_element(tag)
            .write_text_content(BytesText::new(value))?;
    }
    writer.write_event(Event::End(BytesEnd::new("dependency")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Write every snippet to `path`, separated by blank lines.
pub fn write_dependencies(path: &Path, jars: &[ResolvedJar]) -> Result<()> {
    let mut out = String::new();
    for jar in jars {
        out.push_str(&dependency_snippet(jar)?);
        out.push_str("\n\n");
    }
    std::fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}
