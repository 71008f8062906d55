use std::collections::HashMap;

use crate::scoring::domain::{Lead, Publication};

/// Lookup seam for resolving a person's scientific publications. The engine
/// never fetches data itself; implementations wrap whatever index the host
/// has (a PubMed mirror, a warehouse table, a test fixture).
pub trait PublicationSource: Send + Sync {
    fn publications_for(&self, author_name: &str)
        -> Result<Vec<Publication>, PublicationSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublicationSourceError {
    #[error("publication source unavailable: {0}")]
    Unavailable(String),
}

/// In-memory author → publications index, keyed case-insensitively.
#[derive(Debug, Default)]
pub struct InMemoryPublicationIndex {
    by_author: HashMap<String, Vec<Publication>>,
}

impl InMemoryPublicationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, author_name: &str, publications: Vec<Publication>) {
        self.by_author
            .entry(author_name.to_lowercase())
            .or_default()
            .extend(publications);
    }
}

impl PublicationSource for InMemoryPublicationIndex {
    fn publications_for(
        &self,
        author_name: &str,
    ) -> Result<Vec<Publication>, PublicationSourceError> {
        Ok(self
            .by_author
            .get(&author_name.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

/// Attach looked-up publications to every lead that does not already carry
/// any. Existing publication lists are left untouched.
pub fn enrich_leads<S: PublicationSource>(
    leads: &mut [Lead],
    source: &S,
) -> Result<(), PublicationSourceError> {
    for lead in leads.iter_mut() {
        if lead.publications.is_empty() {
            lead.publications = source.publications_for(&lead.name)?;
        }
    }
    Ok(())
}
