use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The shared resume document the form UI edits and the import pipeline
/// populates. Serialized in camelCase to match the client-side document shape.
///
/// The import pipeline writes only: `full_name`, `phone`, `email`, `linkedin`,
/// `github`, `objective`, `skill_categories`, `projects`, `education`,
/// `certifications`. `location`, `soft_skills`, and `template` are owned by
/// the form surface and never touched by an import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeState {
    pub full_name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub objective: String,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub soft_skills: Vec<String>,
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub technologies: Vec<String>,
    pub bullets: Vec<String>,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub college: String,
    pub year: String,
    pub cgpa: String,
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub org: String,
    pub year: String,
}

/// Generates an id for an imported entry. Millisecond timestamp plus a random
/// suffix keeps ids unique within a session; collisions are accepted as
/// negligible, not eliminated.
pub fn import_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("imported_{}_{}", Utc::now().timestamp_millis(), &suffix[..6])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_id_prefix_and_uniqueness() {
        let a = import_id();
        let b = import_id();
        assert!(a.starts_with("imported_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_resume_state_camel_case_round_trip() {
        let json = r#"{
            "fullName": "Jane Doe",
            "skillCategories": [{"id": "c1", "name": "Programming", "skills": ["Rust"]}],
            "softSkills": ["Communication"],
            "template": "classic"
        }"#;
        let state: ResumeState = serde_json::from_str(json).unwrap();
        assert_eq!(state.full_name, "Jane Doe");
        assert_eq!(state.skill_categories[0].name, "Programming");
        assert_eq!(state.soft_skills, vec!["Communication"]);

        let back = serde_json::to_value(&state).unwrap();
        assert_eq!(back["fullName"], "Jane Doe");
        assert!(back.get("full_name").is_none());
    }

    #[test]
    fn test_resume_state_default_is_empty() {
        let state = ResumeState::default();
        assert!(state.full_name.is_empty());
        assert!(state.skill_categories.is_empty());
        assert!(state.projects.is_empty());
    }
}
