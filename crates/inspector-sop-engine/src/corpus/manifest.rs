//! Directory corpora described by a `sop.toml` manifest.
//!
//! ```toml
//! title = "Residential Home Inspection Standards of Practice"
//!
//! [[sections]]
//! id = "roof"
//! title = "Roof"
//! file = "roof.txt"
//! ```
//!
//! `file` is resolved relative to the corpus directory.

use std::fs;
use std::path::Path;

use relative_path::{RelativePath, RelativePathBuf};
use serde::Deserialize;

use super::{Corpus, CorpusError, Section};

pub const MANIFEST_FILE: &str = "sop.toml";

#[derive(Debug, Deserialize)]
struct Manifest {
    title: String,
    #[serde(default)]
    sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
struct SectionEntry {
    id: String,
    title: String,
    file: RelativePathBuf,
}

impl Corpus {
    /// Loads a corpus from a directory containing a [`MANIFEST_FILE`].
    pub fn load_dir(corpus_root: &Path) -> Result<Self, CorpusError> {
        let manifest_path = corpus_root.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Err(CorpusError::NotFound(manifest_path));
        }
        log::debug!("loading corpus manifest {}", manifest_path.display());

        let content = fs::read_to_string(&manifest_path)?;
        let manifest: Manifest =
            toml::from_str(&content).map_err(|source| CorpusError::ManifestParse {
                path: manifest_path.clone(),
                source,
            })?;

        if manifest.sections.is_empty() {
            log::warn!("corpus manifest {} lists no sections", manifest_path.display());
        }

        let sections = manifest
            .sections
            .into_iter()
            .map(|entry| -> Result<Section, CorpusError> {
                let text = read_section_text(&entry.file, corpus_root)?;
                Ok(Section::new(entry.id, entry.title, text))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Corpus::from_sections(manifest.title, sections)
    }
}

fn read_section_text(
    relative_path: &RelativePath,
    corpus_root: &Path,
) -> Result<String, CorpusError> {
    let absolute_path = relative_path.to_path(corpus_root);
    if !absolute_path.exists() {
        return Err(CorpusError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(CorpusError::Io)
}
