//! Aggregation functions behind `/visualizations/data`.
//!
//! All three functions are pure, single-pass transformations over the
//! full watch history fetched in ascending `watch_date` order. Creator
//! and genre fields are unstructured comma-separated text at the
//! storage boundary; the only tokenization applied here is split on
//! `,`, trim, drop empties.
//!
//! Output orderings are part of the contract with the frontend:
//! nodes, links, week buckets, and per-genre runtime lists all keep
//! first-seen/insertion order, hence [`IndexMap`] throughout.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// Projection of one watch-log row, built by the caller from a stored
/// record. `watch_date` is parsed up front so the functions below are
/// total.
#[derive(Debug, Clone)]
pub struct WatchRecord {
    pub title: String,
    pub director: String,
    pub writers: String,
    pub genre: String,
    pub runtime: i64,
    pub watch_date: NaiveDate,
}

/// A director or writer credited on at least one watched movie.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorNode {
    pub name: String,
    pub role: CreatorRole,
    /// One entry per credit, in watch order. A creator credited on
    /// several movies (or twice on the same movie) appears repeatedly.
    pub movies: Vec<String>,
}

/// Role assigned the first time a creator is seen; never recomputed,
/// even if a later movie credits the same name differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatorRole {
    Director,
    Writer,
}

/// An unordered pair of creators sharing a credit on the same movie.
/// `source`/`target` are the two names sorted lexicographically; the
/// frontend's force layout resolves them against node `name`s.
#[derive(Debug, Clone, Serialize)]
pub struct CollaborationLink {
    pub source: String,
    pub target: String,
    pub movies: Vec<String>,
}

/// Node/link lists for the d3 force-directed collaboration graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatorsNetwork {
    pub nodes: Vec<CreatorNode>,
    pub links: Vec<CollaborationLink>,
}

/// Watch events per calendar week (`%Y-%W`: weeks start Monday, week
/// 00 covers the days before the year's first Monday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewingPattern {
    pub date: String,
    pub count: u32,
}

/// Split a comma-separated free-text list into trimmed, non-empty
/// tokens.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the director/writer collaboration graph.
///
/// Pairing runs over the concatenated `directors ++ writers` token
/// list of each movie, so a name credited in both lists pairs with
/// itself and accumulates the title twice. That quirk comes from the
/// unnormalized free-text credits and is relied on by existing data.
pub fn build_creators_network(records: &[WatchRecord]) -> CreatorsNetwork {
    let mut creators: IndexMap<String, CreatorNode> = IndexMap::new();
    let mut collaborations: IndexMap<(String, String), CollaborationLink> = IndexMap::new();

    for record in records {
        let directors = split_list(&record.director);
        let writers = split_list(&record.writers);

        for name in directors.iter().chain(writers.iter()) {
            let node = creators.entry(name.clone()).or_insert_with(|| CreatorNode {
                name: name.clone(),
                role: if directors.contains(name) {
                    CreatorRole::Director
                } else {
                    CreatorRole::Writer
                },
                movies: Vec::new(),
            });
            node.movies.push(record.title.clone());
        }

        let credited: Vec<&String> = directors.iter().chain(writers.iter()).collect();
        for i in 0..credited.len() {
            for j in (i + 1)..credited.len() {
                let (a, b) = if credited[i] <= credited[j] {
                    (credited[i], credited[j])
                } else {
                    (credited[j], credited[i])
                };
                let link = collaborations
                    .entry((a.clone(), b.clone()))
                    .or_insert_with(|| CollaborationLink {
                        source: a.clone(),
                        target: b.clone(),
                        movies: Vec::new(),
                    });
                link.movies.push(record.title.clone());
            }
        }
    }

    CreatorsNetwork {
        nodes: creators.into_values().collect(),
        links: collaborations.into_values().collect(),
    }
}

/// Count watch events per `%Y-%W` week bucket, in first-seen bucket
/// order (the input arrives in ascending watch-date order).
pub fn build_viewing_patterns(records: &[WatchRecord]) -> Vec<ViewingPattern> {
    let mut buckets: IndexMap<String, u32> = IndexMap::new();

    for record in records {
        let week = record.watch_date.format("%Y-%W").to_string();
        *buckets.entry(week).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| ViewingPattern { date, count })
        .collect()
}

/// Group runtimes by individual genre token. A movie tagged
/// `"Action, Sci-Fi"` contributes its runtime to both buckets.
pub fn build_runtime_distribution(records: &[WatchRecord]) -> IndexMap<String, Vec<i64>> {
    let mut distribution: IndexMap<String, Vec<i64>> = IndexMap::new();

    for record in records {
        for genre in split_list(&record.genre) {
            distribution.entry(genre).or_default().push(record.runtime);
        }
    }

    distribution
}
