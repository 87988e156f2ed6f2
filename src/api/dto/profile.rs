//! DTOs projecting the page dataset for API consumers.
//!
//! The content model lives in [`crate::domain`]; these shapes decouple the
//! wire format from it. All text borrows the `'static` literals directly.

use serde::Serialize;

use crate::domain::{EducationEntry, ExperienceRole, Profile, Project, QuickStat, SocialLink};

/// One project card as exposed by `GET /api/projects`.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub title: &'static str,
    pub summary: &'static str,
    pub tech: Vec<&'static str>,
    pub repo_url: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<&'static str>,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title,
            summary: project.summary,
            tech: project.tech.clone(),
            repo_url: project.repo_url,
            demo_url: project.demo_url,
        }
    }
}

/// One education record, in display order.
#[derive(Debug, Serialize)]
pub struct EducationResponse {
    pub degree: &'static str,
    pub school: &'static str,
    pub date: &'static str,
    pub note: &'static str,
}

impl From<&EducationEntry> for EducationResponse {
    fn from(entry: &EducationEntry) -> Self {
        Self {
            degree: entry.degree,
            school: entry.school,
            date: entry.date,
            note: entry.note,
        }
    }
}

/// The experience narrative block.
#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub role: &'static str,
    pub tenure: &'static str,
    pub highlights: Vec<&'static str>,
    pub recent_work: Vec<&'static str>,
}

impl From<&ExperienceRole> for ExperienceResponse {
    fn from(experience: &ExperienceRole) -> Self {
        Self {
            role: experience.role,
            tenure: experience.tenure,
            highlights: experience.highlights.clone(),
            recent_work: experience.recent_work.clone(),
        }
    }
}

/// One quick-stat tile.
#[derive(Debug, Serialize)]
pub struct StatResponse {
    pub figure: &'static str,
    pub caption: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
}

impl From<&QuickStat> for StatResponse {
    fn from(stat: &QuickStat) -> Self {
        Self {
            figure: stat.figure,
            caption: stat.caption,
            href: stat.href,
        }
    }
}

/// A labelled outbound profile link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub label: &'static str,
    pub url: &'static str,
}

impl From<&SocialLink> for LinkResponse {
    fn from(link: &SocialLink) -> Self {
        Self {
            label: link.label,
            url: link.url,
        }
    }
}

/// The full dataset as exposed by `GET /api/profile`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub name: &'static str,
    pub tagline: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub stats: Vec<StatResponse>,
    pub projects: Vec<ProjectResponse>,
    pub experience: ExperienceResponse,
    pub skills: Vec<&'static str>,
    pub links: Vec<LinkResponse>,
    pub education: Vec<EducationResponse>,
    pub coursework: Vec<&'static str>,
    pub certifications: Vec<&'static str>,
    pub achievements: Vec<&'static str>,
    pub resume_href: &'static str,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name,
            tagline: profile.tagline,
            role: profile.role,
            location: profile.location,
            email: profile.email,
            stats: profile.stats.iter().map(StatResponse::from).collect(),
            projects: profile.projects.iter().map(ProjectResponse::from).collect(),
            experience: ExperienceResponse::from(&profile.experience),
            skills: profile.skills.clone(),
            links: profile.links.iter().map(LinkResponse::from).collect(),
            education: profile.education.iter().map(EducationResponse::from).collect(),
            coursework: profile.coursework.clone(),
            certifications: profile.certifications.clone(),
            achievements: profile.achievements.clone(),
            resume_href: profile.resume_href,
        }
    }
}
