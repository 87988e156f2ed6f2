//! Domain layer containing the portfolio content model.
//!
//! Defines the immutable content entities rendered by the web layer and the
//! authoring invariants checked once at startup. The dataset itself lives in
//! [`crate::content`]; this module only knows its shape and its rules.
//!
//! # Design Principles
//!
//! - Entities are plain value records over `'static` literals; nothing is
//!   created, updated, or deleted at runtime
//! - Authoring mistakes (duplicate titles, malformed links) are rejected at
//!   startup via [`profile::Profile::validate`], never surfaced at render time

pub mod profile;

pub use profile::{
    EducationEntry, ExperienceRole, Profile, ProfileError, Project, QuickStat, SocialLink,
};
