use serde::Serialize;

use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl WorkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Completed => "completed",
            WorkStatus::InProgress => "in-progress",
            WorkStatus::Upcoming => "upcoming",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            WorkStatus::Completed => Tone::Success,
            WorkStatus::InProgress => Tone::Warning,
            WorkStatus::Upcoming => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkItem {
    pub subject: &'static str,
    pub topic: &'static str,
    pub class: &'static str,
    pub time: &'static str,
    pub status: WorkStatus,
    /// `None` until the period has started
    pub attendance: Option<&'static str>,
}

pub static TODAYS_WORK: [WorkItem; 3] = [
    WorkItem {
        subject: "Mathematics",
        topic: "Quadratic Equations - Chapter 4",
        class: "Class 10-A",
        time: "09:00 - 10:00 AM",
        status: WorkStatus::Completed,
        attendance: Some("28/30"),
    },
    WorkItem {
        subject: "Physics",
        topic: "Motion and Force - Lab Exercise",
        class: "Class 10-B",
        time: "11:00 - 12:00 PM",
        status: WorkStatus::InProgress,
        attendance: Some("25/30"),
    },
    WorkItem {
        subject: "Chemistry",
        topic: "Periodic Table - Elements Study",
        class: "Class 10-A",
        time: "02:00 - 03:00 PM",
        status: WorkStatus::Upcoming,
        attendance: None,
    },
];

pub fn count_with_status(items: &[WorkItem], status: WorkStatus) -> usize {
    items.iter().filter(|w| w.status == status).count()
}
