use std::sync::LazyLock;

use anyhow::{bail, Result};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::config::SearchConfig;

/// `<artifactId>-<version>.jar`, split at the last `-<digit>`.
static JAR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)-(\d+.*)\.jar$").expect("jar name pattern is valid"));

/// Split a versioned jar filename into `(artifactId, version)`.
pub fn parse_jar_name(jar: &str) -> Option<(&str, &str)> {
    let caps = JAR_NAME.captures(jar)?;
    let artifact_id = caps.get(1)?.as_str();
    let version = caps.get(2)?.as_str();
    Some((artifact_id, version))
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    g: String,
}

/// Find the groupId of `artifact_id` at exactly `version` through the Solr
/// select endpoint of the search service.
pub async fn search_group_id(
    client: &Client,
    config: &SearchConfig,
    artifact_id: &str,
    version: &str,
) -> Result<Option<String>> {
    let query = format!("a:{} AND v:{}", artifact_id, version);

    let response = client
        .get(&config.endpoint)
        .query(&[("q", query.as_str()), ("rows", "1"), ("wt", "json")])
        .header("User-Agent", &config.user_agent)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        bail!("search returned HTTP {}", response.status());
    }

    let body = response.text().await?;
    group_id_from_body(&body)
}

/// Extract `response.docs[0].g` from a search response body.
fn group_id_from_body(body: &str) -> Result<Option<String>> {
    let parsed: SearchResponse = serde_json::from_str(body)?;
    Ok(parsed.response.docs.into_iter().next().map(|doc| doc.g))
}
