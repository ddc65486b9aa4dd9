//! Local project library, the persistence collaborator.
//!
//! Projects are stored as one JSON document on disk, the moral equivalent
//! of the browser build's localStorage entry. All operations work on the
//! plain [`Project`] value; a corrupt or unwritable store surfaces an
//! error and never touches the in-memory document.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config;
use crate::project::{Project, ProjectId};

/// Errors that can occur while reading or writing the project store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize project data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access project storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("project {0} not found")]
    NotFound(ProjectId),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Sort orders offered by the project gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Recent,
    Oldest,
    Name,
}

pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    /// Creates a store backed by the JSON file at `path`. The file is
    /// created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored projects. A missing file reads as an empty library;
    /// corrupt contents surface as a serialization error.
    pub fn projects(&self) -> StorageResult<Vec<Project>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Inserts or updates a project by id and returns that id.
    ///
    /// When inserting into a full library (MAX_PROJECTS), the project with
    /// the oldest `last_modified` is evicted first.
    pub fn save_project(&self, project: &Project) -> StorageResult<ProjectId> {
        let mut projects = self.projects()?;

        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => {
                if projects.len() >= config::MAX_PROJECTS {
                    projects.sort_by_key(|p| p.last_modified);
                    let evicted = projects.remove(0);
                    log::info!(
                        "project store full, evicting oldest project {}",
                        evicted.id
                    );
                }
                projects.push(project.clone());
            }
        }

        self.write(&projects)?;
        Ok(project.id)
    }

    /// Loads a project by id. Unlike the mutation paths, a missing project
    /// here is a surfaced error: the caller asked for something specific.
    pub fn load_project(&self, id: ProjectId) -> StorageResult<Project> {
        self.projects()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(StorageError::NotFound(id))
    }

    /// Deletes a project; returns whether it existed.
    pub fn delete_project(&self, id: ProjectId) -> StorageResult<bool> {
        let mut projects = self.projects()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == before {
            return Ok(false);
        }
        self.write(&projects)?;
        Ok(true)
    }

    /// Case-insensitive search over project and owner names. A blank
    /// query returns everything.
    pub fn search(&self, query: &str) -> StorageResult<Vec<Project>> {
        let projects = self.projects()?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(projects);
        }

        Ok(projects
            .into_iter()
            .filter(|p| {
                p.project_name.to_lowercase().contains(&query)
                    || p.owner_name.to_lowercase().contains(&query)
            })
            .collect())
    }

    /// Removes every stored project.
    pub fn clear(&self) -> StorageResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn write(&self, projects: &[Project]) -> StorageResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string(projects)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Sorts a project list for gallery display.
pub fn sort_projects(mut projects: Vec<Project>, order: SortOrder) -> Vec<Project> {
    match order {
        SortOrder::Recent => projects.sort_by(|a, b| b.last_modified.cmp(&a.last_modified)),
        SortOrder::Oldest => projects.sort_by_key(|p| p.last_modified),
        SortOrder::Name => {
            projects.sort_by(|a, b| a.project_name.to_lowercase().cmp(&b.project_name.to_lowercase()))
        }
    }
    projects
}
