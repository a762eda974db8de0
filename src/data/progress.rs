use serde::Serialize;

use super::{mean, round1};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectGrade {
    pub subject: &'static str,
    pub progress: u8,
    pub grade: &'static str,
    pub last_test: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    /// Month or subject the award is for
    pub context: &'static str,
    pub icon: &'static str,
}

pub static STUDENT_PROGRESS: [SubjectGrade; 5] = [
    SubjectGrade { subject: "Mathematics", progress: 85, grade: "A", last_test: 92 },
    SubjectGrade { subject: "Science", progress: 78, grade: "B+", last_test: 84 },
    SubjectGrade { subject: "English", progress: 92, grade: "A+", last_test: 95 },
    SubjectGrade { subject: "History", progress: 74, grade: "B", last_test: 78 },
    SubjectGrade { subject: "Geography", progress: 89, grade: "A", last_test: 91 },
];

pub static ACHIEVEMENTS: [Achievement; 3] = [
    Achievement { title: "Perfect Attendance", context: "November", icon: "🏆" },
    Achievement { title: "Top Performer", context: "Mathematics", icon: "✔" },
    Achievement { title: "Improved Grade", context: "Science", icon: "📈" },
];

pub const CURRENT_GPA: f64 = 3.8;
pub const DAYS_PRESENT: (u32, u32) = (142, 154);
pub const SEMESTER_ATTENDANCE: f64 = 92.2;

/// Mean subject progress, one decimal.
pub fn overall_progress(subjects: &[SubjectGrade]) -> f64 {
    round1(mean(subjects.iter().map(|s| s.progress as f64)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_progress() {
        assert_eq!(overall_progress(&STUDENT_PROGRESS), 83.6);
    }

    #[test]
    fn test_semester_attendance_matches_days() {
        let (present, total) = DAYS_PRESENT;
        assert_eq!(round1(present as f64 / total as f64 * 100.0), SEMESTER_ATTENDANCE);
    }
}
