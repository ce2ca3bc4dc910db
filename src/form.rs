//! Add-movie form state.
//!
//! Holds the draft the user is typing, decides whether submit is enabled,
//! and keeps the last failed validation for inline messages. Rules come
//! from [`validate_movie`]; the form never carries its own.

use crate::config::CatalogConfig;
use crate::movie::{validate_movie, FieldError, MovieField, RawMovie, ValidationReport};

#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub rating: f64,
}

impl MovieDraft {
    pub fn empty(default_rating: f64) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            poster_url: String::new(),
            rating: default_rating,
        }
    }

    pub fn to_raw(&self) -> RawMovie {
        RawMovie::new(
            self.title.clone(),
            self.description.clone(),
            self.poster_url.clone(),
            self.rating,
        )
    }
}

#[derive(Debug, Clone)]
pub struct MovieForm {
    draft: MovieDraft,
    default_rating: f64,
    errors: ValidationReport,
    open: bool,
}

impl MovieForm {
    pub fn new(default_rating: f64) -> Self {
        Self {
            draft: MovieDraft::empty(default_rating),
            default_rating,
            errors: ValidationReport::default(),
            open: false,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.default_form_rating)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show or hide the form. Hiding clears inline errors; the draft stays.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if !self.open {
            self.errors = ValidationReport::default();
        }
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MovieDraft {
        &mut self.draft
    }

    /// Errors from the last rejected submit.
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    pub fn error(&self, field: MovieField) -> Option<FieldError> {
        self.errors.error(field)
    }

    /// Whether submit should be enabled for the current draft.
    pub fn is_submittable(&self) -> bool {
        validate_movie(&self.draft.to_raw()).is_valid()
    }

    /// Validate the draft. On success return the candidate, reset the draft
    /// and close the form; on failure keep the draft and record the errors.
    pub fn submit(&mut self) -> Option<RawMovie> {
        let candidate = self.draft.to_raw();
        let report = validate_movie(&candidate);
        if !report.is_valid() {
            self.errors = report;
            return None;
        }

        self.draft = MovieDraft::empty(self.default_rating);
        self.errors = ValidationReport::default();
        self.open = false;
        Some(candidate)
    }
}
