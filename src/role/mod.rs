//! Roles and their static catalog entries.
//!
//! A role is picked at login and never changes for the rest of the session. Everything that
//! differs between roles (sidebar, routing table, quick actions, headline figures) hangs off
//! [`Role::profile`], so adding a role means adding one catalog entry instead of touching
//! every screen.

mod catalog;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::EduTrackError;

pub use catalog::{DemoCredentials, NavItem, QuickAction, RoleProfile};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "student")]
    Student,
    #[serde(rename = "teacher")]
    Teacher,
    #[serde(rename = "school-admin")]
    SchoolAdmin,
    #[serde(rename = "government")]
    Government,
}

impl Role {
    /// Selector order.
    pub const ALL: [Role; 4] = [Role::Student, Role::Teacher, Role::SchoolAdmin, Role::Government];

    pub fn id(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::SchoolAdmin => "school-admin",
            Role::Government => "government",
        }
    }

    pub fn profile(&self) -> &'static RoleProfile {
        match self {
            Role::Student => &catalog::STUDENT,
            Role::Teacher => &catalog::TEACHER,
            Role::SchoolAdmin => &catalog::SCHOOL_ADMIN,
            Role::Government => &catalog::GOVERNMENT,
        }
    }

    /// Next role in selector order, wrapping.
    pub fn next(&self) -> Role {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Role {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = EduTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.id() == s)
            .ok_or_else(|| EduTrackError::UnknownRole(s.to_string()))
    }
}
