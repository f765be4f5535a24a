//! Resume import pipeline.
//!
//! Data flows strictly left to right: binary upload → text blob → line
//! sequence → (contact scan ∥ section segmentation) → per-section structured
//! population → shared-state merge. Extraction failures abort before any
//! state mutation; once parsing starts, each populator degrades on its own
//! and the pipeline as a whole cannot fail.

pub mod contact;
pub mod handlers;
pub mod lines;
pub mod populate;
pub mod segmenter;

use tracing::info;

use crate::import::contact::{extract_contact, ContactReport};
use crate::import::lines::normalize_lines;
use crate::import::populate::{
    populate_certifications, populate_education, populate_objective, populate_projects,
    populate_skills,
};
use crate::import::segmenter::{segment_lines, SegmenterConfig};
use crate::models::resume::ResumeState;

/// What one parse actually recovered, for the import summary and logs.
#[derive(Debug)]
pub struct ImportReport {
    pub contact: ContactReport,
    /// Section fields that were (re)populated, in pipeline order.
    pub sections: Vec<&'static str>,
}

/// Runs the heuristic parse over an extracted text blob, writing recovered
/// values into the shared resume state.
///
/// Best effort by design: sections whose structure cannot be inferred fall
/// back per-populator, and sections with no bucketed content leave the
/// corresponding state fields exactly as they were.
pub fn parse_resume_text(
    state: &mut ResumeState,
    text: &str,
    cfg: &SegmenterConfig,
) -> ImportReport {
    let lines = normalize_lines(text);
    let contact = extract_contact(state, &lines);
    let buckets = segment_lines(&lines, cfg);

    let mut sections = Vec::new();
    if populate_objective(state, &buckets.objective) {
        sections.push("objective");
    }
    if populate_skills(state, &buckets.skills) {
        sections.push("skills");
    }
    if populate_certifications(state, &buckets.certifications) {
        sections.push("certifications");
    }
    if populate_projects(state, &buckets.projects) {
        sections.push("projects");
    }
    if populate_education(state, &buckets.education) {
        sections.push("education");
    }

    info!(
        lines = lines.len(),
        sections = sections.len(),
        "Parsed resume text"
    );
    ImportReport { contact, sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Doe
jane.doe@example.com | (415) 555-1234 | linkedin.com/in/janedoe
Summary
Backend engineer focused on reliability.
Technical Skills
Python, Java, SQL
Projects
E-Commerce App
- Built full stack platform
- Added payments
Education
BS Computer Science
Example University
Certifications
AWS Certified Solutions Architect - Associate
";

    #[test]
    fn test_full_pipeline_over_sample_resume() {
        let mut state = ResumeState::default();
        let report = parse_resume_text(&mut state, SAMPLE, &SegmenterConfig::default());

        assert_eq!(state.full_name, "Jane Doe");
        assert_eq!(state.email, "jane.doe@example.com");
        assert_eq!(state.linkedin, "https://linkedin.com/in/janedoe");
        assert_eq!(state.objective, "Backend engineer focused on reliability.");
        assert_eq!(state.skill_categories[0].skills, vec!["Python", "Java", "SQL"]);
        assert_eq!(state.projects[0].title, "E-Commerce App");
        assert_eq!(state.projects[0].bullets.len(), 2);
        assert_eq!(state.education[0].degree, "BS Computer Science");
        assert_eq!(state.education[0].college, "Example University");
        assert_eq!(state.certifications.len(), 1);

        assert_eq!(
            report.sections,
            vec!["objective", "skills", "certifications", "projects", "education"]
        );
        assert!(report.contact.name && report.contact.email);
        assert!(!report.contact.github);
    }

    #[test]
    fn test_parse_with_no_recognized_headers_touches_only_contact() {
        let mut state = ResumeState::default();
        let report = parse_resume_text(
            &mut state,
            "Jane Doe\njane@example.com\nsome unsectioned text",
            &SegmenterConfig::default(),
        );
        assert!(report.sections.is_empty());
        assert!(state.projects.is_empty());
        assert!(state.objective.is_empty());
        assert_eq!(state.email, "jane@example.com");
    }

    #[test]
    fn test_partial_population_preserves_untouched_fields() {
        let mut state = ResumeState::default();
        state.location = "Lisbon".to_string();
        state.objective = "existing objective".to_string();
        parse_resume_text(
            &mut state,
            "Jane Doe\nSkills\nRust, Go?",
            &SegmenterConfig::default(),
        );
        // Location is outside the import write-set; objective had no bucket.
        assert_eq!(state.location, "Lisbon");
        assert_eq!(state.objective, "existing objective");
        assert_eq!(state.skill_categories.len(), 1);
    }

    #[test]
    fn test_reparsing_same_text_is_stable() {
        let mut a = ResumeState::default();
        let mut b = ResumeState::default();
        parse_resume_text(&mut a, SAMPLE, &SegmenterConfig::default());
        parse_resume_text(&mut b, SAMPLE, &SegmenterConfig::default());
        assert_eq!(a.objective, b.objective);
        assert_eq!(a.projects[0].bullets, b.projects[0].bullets);
        assert_eq!(a.skill_categories[0].skills, b.skill_categories[0].skills);
    }
}
