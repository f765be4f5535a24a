//! Contact extraction: pattern scans over the full text plus a first-line
//! name heuristic. First match wins for every field; a miss leaves the
//! corresponding resume field untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ResumeState;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}").unwrap());

// Tolerates an optional country code, parenthesized area code, and
// hyphen/space/dot separators between 3-3-4 digit groups.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/[\w-]+").unwrap());

static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"github\.com/[\w-]+").unwrap());

/// Which contact fields a scan actually recovered, for the import summary.
#[derive(Debug, Default, PartialEq)]
pub struct ContactReport {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub linkedin: bool,
    pub github: bool,
}

/// Scans the normalized lines for contact details and writes any hits into
/// the resume state. The name heuristic is deliberately crude: the first line
/// is accepted as the full name only when it has fewer than 5 whitespace
/// tokens; no capitalization or dictionary check.
pub fn extract_contact(state: &mut ResumeState, lines: &[String]) -> ContactReport {
    let mut report = ContactReport::default();
    let full_text = lines.join("\n");

    if let Some(first) = lines.first() {
        if first.split_whitespace().count() < 5 {
            state.full_name = first.clone();
            report.name = true;
        }
    }

    if let Some(m) = EMAIL_RE.find(&full_text) {
        state.email = m.as_str().to_string();
        report.email = true;
    }

    if let Some(m) = PHONE_RE.find(&full_text) {
        state.phone = m.as_str().to_string();
        report.phone = true;
    }

    // Profile links are matched as bare substrings and re-qualified with a
    // scheme so the stored value is always a usable URL.
    if let Some(m) = LINKEDIN_RE.find(&full_text) {
        state.linkedin = format!("https://{}", m.as_str());
        report.linkedin = true;
    }

    if let Some(m) = GITHUB_RE.find(&full_text) {
        state.github = format!("https://{}", m.as_str());
        report.github = true;
    }

    report
}
