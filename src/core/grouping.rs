//! Grouping — bucket regular files by their test-resource format.
//!
//! The suffix checks form a chain: `.xml`, then `.json`, then `.textproto`.
//! The first match wins and anything else is dropped.

use super::fs::Entry;

// ───────────────────────────────────────── types ─────────────

/// The recognised resource formats, in classification and output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Xml,
    Json,
    Protobuf,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Xml, Category::Json, Category::Protobuf];

    /// File-name suffix, matched case-sensitively.
    pub fn suffix(self) -> &'static str {
        match self {
            Category::Xml => ".xml",
            Category::Json => ".json",
            Category::Protobuf => ".textproto",
        }
    }

    /// Section heading used in the report.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Xml => "XML Entries",
            Category::Json => "JSON Entries",
            Category::Protobuf => "Protobuf Entries",
        }
    }

    /// Walk the suffix chain for `name`.
    pub fn classify(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| name.ends_with(c.suffix()))
    }
}

/// File names per category, each in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    xml: Vec<String>,
    json: Vec<String>,
    protobuf: Vec<String>,
}

impl Buckets {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Xml => &self.xml,
            Category::Json => &self.json,
            Category::Protobuf => &self.protobuf,
        }
    }

    fn push(&mut self, category: Category, name: String) {
        match category {
            Category::Xml => self.xml.push(name),
            Category::Json => self.json.push(name),
            Category::Protobuf => self.protobuf.push(name),
        }
    }
}

// ───────────────────────────────────────── algorithm ─────────

/// Single pass over `entries`; order within each bucket follows `entries`.
pub fn group_entries(entries: impl IntoIterator<Item = Entry>) -> Buckets {
    let mut buckets = Buckets::default();

    for entry in entries {
        if !entry.is_file {
            tracing::debug!(name = %entry.name, "skip: not a regular file");
            continue;
        }
        match Category::classify(&entry.name) {
            Some(category) => {
                tracing::debug!(name = %entry.name, ?category, "classified");
                buckets.push(category, entry.name);
            }
            None => tracing::debug!(name = %entry.name, "skip: unrecognised suffix"),
        }
    }

    buckets
}
