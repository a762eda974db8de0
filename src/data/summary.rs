use serde::Serialize;

use crate::role::Role;

use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

/// Headline figures on a role's dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleSummary {
    pub name: &'static str,
    pub stats: [StatCard; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub time: &'static str,
    pub event: &'static str,
    pub kind: ActivityKind,
}

macro_rules! stat {
    ($label:expr, $value:expr, $icon:expr, $tone:ident) => {
        StatCard { label: $label, value: $value, icon: $icon, tone: Tone::$tone }
    };
}

static STUDENT: RoleSummary = RoleSummary {
    name: "Alex Johnson",
    stats: [
        stat!("Attendance Rate", "92%", "📈", Success),
        stat!("Today's Status", "Present", "✔", Success),
        stat!("Last Scan", "08:15 AM", "🕒", Neutral),
        stat!("Syllabus Progress", "64%", "📅", Neutral),
    ],
};

static TEACHER: RoleSummary = RoleSummary {
    name: "Sarah Wilson",
    stats: [
        stat!("Total Students", "156", "👥", Neutral),
        stat!("Present Today", "142", "✔", Success),
        stat!("Classes Today", "3", "🎓", Neutral),
        stat!("Avg Progress", "67%", "📊", Neutral),
    ],
};

static SCHOOL_ADMIN: RoleSummary = RoleSummary {
    name: "Dr. Michael Brown",
    stats: [
        stat!("Total Students", "1,250", "👥", Neutral),
        stat!("Present Today", "1,180", "✔", Success),
        stat!("Total Teachers", "45", "🏫", Neutral),
        stat!("System Health", "98%", "🛡", Success),
    ],
};

static GOVERNMENT: RoleSummary = RoleSummary {
    name: "Dr. Priya Sharma",
    stats: [
        stat!("Total Schools", "125", "🏢", Neutral),
        stat!("Total Students", "45,000", "👥", Neutral),
        stat!("Avg Attendance", "89%", "📈", Success),
        stat!("Policy Compliance", "94%", "🌐", Neutral),
    ],
};

pub fn summary_for(role: Role) -> &'static RoleSummary {
    match role {
        Role::Student => &STUDENT,
        Role::Teacher => &TEACHER,
        Role::SchoolAdmin => &SCHOOL_ADMIN,
        Role::Government => &GOVERNMENT,
    }
}

pub fn welcome_message(role: Role) -> String {
    format!("Welcome back, {}", summary_for(role).name)
}

/// Attendance panel heading; government sees district figures.
pub fn chart_title(role: Role) -> &'static str {
    match role {
        Role::Government => "District Analytics",
        _ => "Attendance Analytics",
    }
}

pub fn recent_activity(role: Role) -> [Activity; 4] {
    let government = role == Role::Government;
    let pick = |gov: &'static str, other: &'static str| if government { gov } else { other };

    [
        Activity {
            time: "08:15 AM",
            event: pick("District compliance report generated", "RFID scan detected at main entrance"),
            kind: ActivityKind::Success,
        },
        Activity {
            time: "08:10 AM",
            event: pick("Policy update notification sent to all schools", "Daily attendance report generated"),
            kind: ActivityKind::Info,
        },
        Activity {
            time: "07:45 AM",
            event: pick("125 schools system health verified", "System health check completed"),
            kind: ActivityKind::Success,
        },
        Activity {
            time: "07:30 AM",
            event: "New government scheme notification",
            kind: ActivityKind::Info,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_uses_role_name() {
        assert_eq!(welcome_message(Role::Teacher), "Welcome back, Sarah Wilson");
        assert_eq!(welcome_message(Role::Government), "Welcome back, Dr. Priya Sharma");
    }

    #[test]
    fn test_government_activity_differs() {
        let gov = recent_activity(Role::Government);
        let student = recent_activity(Role::Student);
        assert_eq!(gov[0].event, "District compliance report generated");
        assert_eq!(student[0].event, "RFID scan detected at main entrance");
        assert_eq!(gov[3], student[3]);
    }

    #[test]
    fn test_every_role_has_four_stats() {
        for role in Role::ALL {
            let summary = summary_for(role);
            assert!(summary.stats.iter().all(|s| !s.label.is_empty()));
        }
        assert_eq!(summary_for(Role::SchoolAdmin).stats[0].value, "1,250");
    }
}
