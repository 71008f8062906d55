//! Lead-source collaborators: anything that produces candidate lead records
//! for the scoring engine. The engine itself only consumes the domain model.

pub mod apollo;
pub mod catalog;
pub mod publications;

pub use apollo::{ApolloImportError, ApolloLeadImporter};
pub use publications::{
    enrich_leads, InMemoryPublicationIndex, PublicationSource, PublicationSourceError,
};
