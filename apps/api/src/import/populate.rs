//! Section populators: per-section reducers that turn raw bucket lines into
//! structured resume entries. Each one is independent, tolerates any input,
//! and never fails; when structure cannot be inferred it degrades to
//! placeholders or a synthetic fallback entry. An empty bucket always leaves
//! the corresponding resume field untouched.

use crate::models::resume::{
    import_id, Certification, Education, Project, ResumeState, SkillCategory,
};

/// Hard cap on the imported objective text, in characters.
const OBJECTIVE_MAX_CHARS: usize = 500;

/// Skill tokens outside these bounds (exclusive) are discarded.
const SKILL_MIN_CHARS: usize = 2;
const SKILL_MAX_CHARS: usize = 30;

/// At most this many skills survive into the imported category.
const SKILL_CAP: usize = 15;

/// A certification line must be longer than this to become an entry.
const CERT_MIN_CHARS: usize = 10;

/// A non-bullet line shorter than this opens a new project as its title.
const PROJECT_TITLE_MAX_CHARS: usize = 50;

/// How many raw lines the synthetic fallback project keeps.
const PROJECT_FALLBACK_LINES: usize = 5;

/// Joins the bucket into a single objective string, hard-cut at 500
/// characters (not word-boundary aware). Replaces any prior objective.
pub fn populate_objective(state: &mut ResumeState, bucket: &[String]) -> bool {
    if bucket.is_empty() {
        return false;
    }
    state.objective = bucket
        .join(" ")
        .chars()
        .take(OBJECTIVE_MAX_CHARS)
        .collect();
    true
}

/// Splits the bucket on comma/pipe/bullet separators into skill tokens,
/// keeps tokens strictly between 2 and 30 characters, deduplicates preserving
/// first occurrence, and caps at 15. Survivors become one new
/// "Imported Skills" category appended to the existing ones; the lone
/// "Programming" sample-data category is discarded first when present.
pub fn populate_skills(state: &mut ResumeState, bucket: &[String]) -> bool {
    if bucket.is_empty() {
        return false;
    }
    let raw = bucket.join(", ");
    let mut skills: Vec<String> = Vec::new();
    for token in raw.split([',', '|', '•']) {
        let token = token.trim();
        let len = token.chars().count();
        if len > SKILL_MIN_CHARS && len < SKILL_MAX_CHARS && !skills.iter().any(|s| s == token) {
            skills.push(token.to_string());
            if skills.len() == SKILL_CAP {
                break;
            }
        }
    }
    if skills.is_empty() {
        return false;
    }

    if state.skill_categories.len() == 1 && state.skill_categories[0].name == "Programming" {
        state.skill_categories.clear();
    }
    state.skill_categories.push(SkillCategory {
        id: import_id(),
        name: "Imported Skills".to_string(),
        skills,
    });
    true
}

/// Replaces the certification list with one name-only entry per bucket line
/// longer than 10 characters; shorter lines are silently dropped.
pub fn populate_certifications(state: &mut ResumeState, bucket: &[String]) -> bool {
    if bucket.is_empty() {
        return false;
    }
    state.certifications = bucket
        .iter()
        .filter(|line| line.chars().count() > CERT_MIN_CHARS)
        .map(|line| Certification {
            id: import_id(),
            name: line.clone(),
            org: String::new(),
            year: String::new(),
        })
        .collect();
    true
}

/// How the project reducer reads one bucket line.
#[derive(Debug, PartialEq)]
enum ProjectLine {
    /// Short, unbulleted: opens a new project with this title.
    NewProjectTitle(String),
    /// Starts with a bullet marker; the marker is stripped.
    BulletLine(String),
    /// Long unbulleted text; attached verbatim to the open project.
    Unclassified(String),
}

fn classify_project_line(line: &str) -> ProjectLine {
    if let Some(stripped) = line.strip_prefix(['-', '•', '*']) {
        return ProjectLine::BulletLine(stripped.trim_start().to_string());
    }
    if line.chars().count() < PROJECT_TITLE_MAX_CHARS {
        return ProjectLine::NewProjectTitle(line.to_string());
    }
    ProjectLine::Unclassified(line.to_string())
}

/// Replaces the project list. Short unbulleted lines open new projects;
/// bulleted and long lines attach to the currently open project, and are lost
/// when no project is open yet. If no titles were recognized at all, the
/// whole bucket collapses into one synthetic "Imported Project Data" entry
/// holding the first 5 raw lines.
pub fn populate_projects(state: &mut ResumeState, bucket: &[String]) -> bool {
    if bucket.is_empty() {
        return false;
    }
    let mut projects: Vec<Project> = Vec::new();

    for line in bucket {
        match classify_project_line(line) {
            ProjectLine::NewProjectTitle(title) => projects.push(Project {
                id: import_id(),
                title,
                technologies: Vec::new(),
                bullets: Vec::new(),
                impact: String::new(),
            }),
            ProjectLine::BulletLine(text) | ProjectLine::Unclassified(text) => {
                if let Some(open) = projects.last_mut() {
                    open.bullets.push(text);
                }
            }
        }
    }

    if projects.is_empty() {
        projects.push(Project {
            id: import_id(),
            title: "Imported Project Data".to_string(),
            technologies: Vec::new(),
            bullets: bucket.iter().take(PROJECT_FALLBACK_LINES).cloned().collect(),
            impact: String::new(),
        });
    }

    state.projects = projects;
    true
}

/// Replaces the education list with exactly one entry: first line as degree,
/// second as college, placeholders when absent. Remaining lines are
/// discarded.
pub fn populate_education(state: &mut ResumeState, bucket: &[String]) -> bool {
    if bucket.is_empty() {
        return false;
    }
    state.education = vec![Education {
        id: import_id(),
        degree: bucket
            .first()
            .cloned()
            .unwrap_or_else(|| "Degree Name".to_string()),
        college: bucket
            .get(1)
            .cloned()
            .unwrap_or_else(|| "University Name".to_string()),
        year: String::new(),
        cgpa: String::new(),
        coursework: Vec::new(),
    }];
    true
}
