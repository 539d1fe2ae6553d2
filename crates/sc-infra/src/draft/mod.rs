mod file_draft_repository;

pub use file_draft_repository::{FileWizardDraftRepository, DEFAULT_DRAFTS_DIR};
