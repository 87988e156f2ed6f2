//! Portfolio content entities and their authoring invariants.

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

/// A content-authoring error detected during startup validation.
///
/// The dataset is fixed at build time, so any of these indicates a mistake in
/// [`crate::content`], not a runtime fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// Two projects share a title. Titles are the display key for cards.
    #[error("duplicate project title: {0}")]
    DuplicateProjectTitle(String),

    /// An outbound link is not an absolute http(s) URL.
    #[error("malformed {context} link: {url}")]
    MalformedLink { context: String, url: String },

    /// The contact email is empty or not addressable.
    #[error("malformed contact email: {0}")]
    MalformedEmail(String),

    /// A site-relative asset href does not start with `/`.
    #[error("malformed {context} asset path: {path}")]
    MalformedAssetPath { context: String, path: String },

    /// A required text field is empty.
    #[error("empty required field: {0}")]
    EmptyField(&'static str),
}

/// One project card: title, summary, ordered tech tags, and outbound links.
#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    /// Display order matters; rendered left to right as given.
    pub tech: Vec<&'static str>,
    pub repo_url: &'static str,
    /// Live deployment, when the project has one.
    pub demo_url: Option<&'static str>,
}

/// One education record, rendered verbatim in sequence order.
#[derive(Debug, Clone)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub date: &'static str,
    pub note: &'static str,
}

/// The single experience narrative block.
#[derive(Debug, Clone)]
pub struct ExperienceRole {
    pub role: &'static str,
    pub tenure: &'static str,
    pub highlights: Vec<&'static str>,
    pub recent_work: Vec<&'static str>,
}

/// One quick-stat tile: a figure, a caption, and an optional outbound link.
#[derive(Debug, Clone)]
pub struct QuickStat {
    pub figure: &'static str,
    pub caption: &'static str,
    pub href: Option<&'static str>,
}

/// A labelled outbound profile link.
#[derive(Debug, Clone)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// The aggregate content record behind the whole page.
///
/// Constructed once by [`crate::content::profile`] when the server starts,
/// validated, wrapped in an `Arc`, and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub badges: Vec<&'static str>,
    pub initials: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub stats: Vec<QuickStat>,
    pub projects_blurb: &'static str,
    pub projects: Vec<Project>,
    pub experience: ExperienceRole,
    pub skills: Vec<&'static str>,
    pub links: Vec<SocialLink>,
    pub education: Vec<EducationEntry>,
    pub coursework: Vec<&'static str>,
    pub certifications: Vec<&'static str>,
    pub achievements: Vec<&'static str>,
    pub contact_pitch: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub resume_href: &'static str,
}

impl Profile {
    /// Checks the authoring invariants of the dataset.
    ///
    /// Run once at startup; a failure aborts boot with the offending literal
    /// named in the error.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if a project title repeats, an outbound
    /// link is not an absolute http(s) URL, the email is not addressable,
    /// the resume href is not site-relative, or a required field is empty.
    pub fn validate(&self) -> Result<(), ProfileError> {
        ensure_non_empty("name", self.name)?;
        ensure_non_empty("tagline", self.tagline)?;
        ensure_non_empty("headline", self.headline)?;
        ensure_non_empty("intro", self.intro)?;

        ensure_unique_titles(&self.projects)?;
        for project in &self.projects {
            ensure_non_empty("project title", project.title)?;
            ensure_absolute_url("project repository", project.repo_url)?;
            if let Some(demo) = project.demo_url {
                ensure_absolute_url("project demo", demo)?;
            }
        }

        for stat in &self.stats {
            if let Some(href) = stat.href {
                ensure_absolute_url("quick stat", href)?;
            }
        }

        for link in &self.links {
            ensure_absolute_url(link.label, link.url)?;
        }
        ensure_absolute_url("contact GitHub", self.github_url)?;

        ensure_email(self.email)?;
        ensure_asset_path("resume", self.resume_href)?;

        Ok(())
    }
}

/// Rejects duplicate project titles; titles key the rendered cards.
fn ensure_unique_titles(projects: &[Project]) -> Result<(), ProfileError> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.title) {
            return Err(ProfileError::DuplicateProjectTitle(project.title.to_string()));
        }
    }
    Ok(())
}

/// Accepts absolute http(s) URLs only.
fn ensure_absolute_url(context: &str, raw: &str) -> Result<(), ProfileError> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ProfileError::MalformedLink {
            context: context.to_string(),
            url: raw.to_string(),
        }),
    }
}

/// Accepts a minimally addressable mailbox (`local@domain`).
fn ensure_email(raw: &str) -> Result<(), ProfileError> {
    let addressable = raw
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if addressable {
        Ok(())
    } else {
        Err(ProfileError::MalformedEmail(raw.to_string()))
    }
}

/// Accepts site-relative asset paths (`/resume.pdf`).
fn ensure_asset_path(context: &str, path: &str) -> Result<(), ProfileError> {
    if path.starts_with('/') && path.len() > 1 {
        Ok(())
    } else {
        Err(ProfileError::MalformedAssetPath {
            context: context.to_string(),
            path: path.to_string(),
        })
    }
}

fn ensure_non_empty(field: &'static str, value: &str) -> Result<(), ProfileError> {
    if value.trim().is_empty() {
        Err(ProfileError::EmptyField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &'static str) -> Project {
        Project {
            title,
            summary: "A small systems project.",
            tech: vec!["Rust"],
            repo_url: "https://github.com/example/project",
            demo_url: None,
        }
    }

    #[test]
    fn test_unique_titles_accepts_distinct() {
        let projects = vec![project("First"), project("Second")];
        assert!(ensure_unique_titles(&projects).is_ok());
    }

    #[test]
    fn test_unique_titles_rejects_duplicate() {
        let projects = vec![project("Same"), project("Same")];
        assert_eq!(
            ensure_unique_titles(&projects),
            Err(ProfileError::DuplicateProjectTitle("Same".to_string()))
        );
    }

    #[test]
    fn test_absolute_url_accepts_https() {
        assert!(ensure_absolute_url("test", "https://github.com/dhairyajoshi/gomq").is_ok());
        assert!(ensure_absolute_url("test", "https://bfs-visualizer.onrender.com/#/").is_ok());
    }

    #[test]
    fn test_absolute_url_rejects_relative_and_other_schemes() {
        assert!(ensure_absolute_url("test", "/resume.pdf").is_err());
        assert!(ensure_absolute_url("test", "ftp://example.com/file").is_err());
        assert!(ensure_absolute_url("test", "not a url").is_err());
    }

    #[test]
    fn test_email_accepts_mailbox() {
        assert!(ensure_email("joshidhairaya2002@gmail.com").is_ok());
    }

    #[test]
    fn test_email_rejects_unaddressable() {
        assert!(ensure_email("").is_err());
        assert!(ensure_email("no-at-sign").is_err());
        assert!(ensure_email("@gmail.com").is_err());
        assert!(ensure_email("user@localhost").is_err());
    }

    #[test]
    fn test_asset_path_must_be_site_relative() {
        assert!(ensure_asset_path("resume", "/resume.pdf").is_ok());
        assert!(ensure_asset_path("resume", "resume.pdf").is_err());
        assert!(ensure_asset_path("resume", "/").is_err());
    }
}
