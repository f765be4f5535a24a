use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::extract::ExtractorRegistry;
use crate::import::segmenter::SegmenterConfig;
use crate::models::resume::ResumeState;

/// The shared resume document with its change-tracking envelope.
///
/// `revision` is bumped exactly once per completed mutation; downstream
/// consumers (preview refresh, autosave) key off it to pick up changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
    pub resume: ResumeState,
}

impl ResumeDocument {
    pub fn new() -> Self {
        Self {
            revision: 0,
            updated_at: Utc::now(),
            resume: ResumeState {
                template: "classic".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn touch(&mut self) {
        self.revision += 1;
        self.updated_at = Utc::now();
    }
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resume: Arc<RwLock<ResumeDocument>>,
    pub extractors: Arc<ExtractorRegistry>,
    pub segmenter: SegmenterConfig,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            resume: Arc::new(RwLock::new(ResumeDocument::new())),
            extractors: Arc::new(ExtractorRegistry::with_defaults()),
            segmenter: SegmenterConfig::default(),
            config,
        }
    }

    /// State with a caller-supplied extractor registry, for tests and
    /// alternative backend wiring.
    pub fn with_extractors(config: Config, extractors: ExtractorRegistry) -> Self {
        Self {
            extractors: Arc::new(extractors),
            ..Self::new(config)
        }
    }
}
