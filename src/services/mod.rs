//! Business logic services

pub mod library;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub library: library::LibraryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            library: library::LibraryService::new(repository),
        }
    }
}
