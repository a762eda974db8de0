//! Picks the view for a (role, section) pair.

use serde::{Deserialize, Serialize};

use crate::{navigation::Section, role::Role};

/// Presentational unit rendered in the dashboard's content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    TodaysWork,
    Syllabus,
    Progress,
    Schemes,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub role: Role,
    /// Section as requested, before any fallback
    pub requested: Section,
    pub view: View,
    /// True when `requested` is not in the role's allow-list
    pub is_fallback: bool,
}

pub struct SectionRouter;

impl SectionRouter {
    /// Never fails: anything outside the role's allow-list gets the role's default view.
    pub fn resolve(role: Role, section: &Section) -> ViewDescriptor {
        let profile = role.profile();
        let (view, is_fallback) = match profile.route(section) {
            Some(view) => (view, false),
            None => (profile.default_view, true),
        };

        ViewDescriptor {
            role,
            requested: section.clone(),
            view,
            is_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_outside_allow_list_fall_back_to_dashboard() {
        for role in Role::ALL {
            let profile = role.profile();
            let mut candidates: Vec<Section> = Section::known().to_vec();
            candidates.push(Section::Other("library".into()));
            candidates.push(Section::Other(String::new()));

            for section in candidates.iter().filter(|s| !profile.allows(s)) {
                let descriptor = SectionRouter::resolve(role, section);
                assert_eq!(descriptor.view, View::Dashboard, "{role} / {section}");
                assert!(descriptor.is_fallback);
                assert_eq!(&descriptor.requested, section);
            }
        }
    }

    #[test]
    fn test_sections_in_allow_list_get_their_view() {
        for role in Role::ALL {
            for (section, view) in role.profile().routes {
                let descriptor = SectionRouter::resolve(role, section);
                assert_eq!(descriptor.view, *view);
                assert!(!descriptor.is_fallback);
            }
        }
    }

    #[test]
    fn test_role_specific_bindings() {
        let view = |role, id: &str| SectionRouter::resolve(role, &Section::from(id)).view;

        assert_eq!(view(Role::Teacher, "todays-work"), View::TodaysWork);
        assert_eq!(view(Role::Student, "todays-work"), View::Dashboard);

        assert_eq!(view(Role::Student, "syllabus"), View::Syllabus);
        assert_eq!(view(Role::Teacher, "syllabus"), View::Syllabus);
        assert_eq!(view(Role::SchoolAdmin, "syllabus"), View::Dashboard);

        assert_eq!(view(Role::Student, "progress"), View::Progress);
        assert_eq!(view(Role::Teacher, "progress"), View::Dashboard);

        assert_eq!(view(Role::Student, "schemes"), View::Schemes);
        assert_eq!(view(Role::Government, "schemes"), View::Dashboard);

        assert_eq!(view(Role::Government, "chatbot"), View::Chat);
        assert_eq!(view(Role::Teacher, "reports"), View::Dashboard);
        assert_eq!(view(Role::Student, "attendance"), View::Dashboard);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let section = Section::from("progress");
        assert_eq!(
            SectionRouter::resolve(Role::Student, &section),
            SectionRouter::resolve(Role::Student, &section)
        );
    }
}
