use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A named sub-view inside a role's dashboard.
///
/// Identifiers are plain strings on the outside ("todays-work", "schemes", ...). Unrecognised
/// identifiers are kept as [`Section::Other`] rather than rejected; the router decides what
/// they show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Attendance,
    Chatbot,
    Notifications,
    Syllabus,
    Progress,
    Schemes,
    TodaysWork,
    Reports,
    Staff,
    Analytics,
    Settings,
    Compliance,
    District,
    Schools,
    Policies,
    Data,
    Other(String),
}

static KNOWN_SECTIONS: [Section; 17] = [
    Section::Dashboard,
    Section::Attendance,
    Section::Chatbot,
    Section::Notifications,
    Section::Syllabus,
    Section::Progress,
    Section::Schemes,
    Section::TodaysWork,
    Section::Reports,
    Section::Staff,
    Section::Analytics,
    Section::Settings,
    Section::Compliance,
    Section::District,
    Section::Schools,
    Section::Policies,
    Section::Data,
];

impl Section {
    pub fn from_id(id: &str) -> Self {
        KNOWN_SECTIONS
            .iter()
            .find(|section| section.id() == id)
            .cloned()
            .unwrap_or_else(|| Section::Other(id.to_string()))
    }

    pub fn id(&self) -> &str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Attendance => "attendance",
            Section::Chatbot => "chatbot",
            Section::Notifications => "notifications",
            Section::Syllabus => "syllabus",
            Section::Progress => "progress",
            Section::Schemes => "schemes",
            Section::TodaysWork => "todays-work",
            Section::Reports => "reports",
            Section::Staff => "staff",
            Section::Analytics => "analytics",
            Section::Settings => "settings",
            Section::Compliance => "compliance",
            Section::District => "district",
            Section::Schools => "schools",
            Section::Policies => "policies",
            Section::Data => "data",
            Section::Other(id) => id,
        }
    }

    pub fn known() -> &'static [Section] {
        &KNOWN_SECTIONS
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Dashboard
    }
}

impl From<&str> for Section {
    fn from(id: &str) -> Self {
        Section::from_id(id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Section::from_id(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_parse_to_their_variant() {
        for section in Section::known() {
            assert_eq!(&Section::from_id(section.id()), section);
        }
        assert_eq!(Section::from_id("todays-work"), Section::TodaysWork);
    }

    #[test]
    fn test_unknown_id_is_kept_verbatim() {
        let section = Section::from("library");
        assert_eq!(section, Section::Other("library".to_string()));
        assert_eq!(section.id(), "library");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Section::TodaysWork).unwrap(), "\"todays-work\"");
        let section: Section = serde_json::from_str("\"canteen\"").unwrap();
        assert_eq!(section, Section::Other("canteen".into()));
    }
}
