//! Fixed literal tables behind every view. Nothing here is mutated at runtime.

pub mod attendance;
pub mod progress;
pub mod schemes;
pub mod summary;
pub mod syllabus;
pub mod todays_work;

pub use attendance::{DayAttendance, MonthTrend, MONTHLY_TRENDS, WEEKLY_ATTENDANCE};
pub use progress::{Achievement, SubjectGrade, ACHIEVEMENTS, STUDENT_PROGRESS};
pub use schemes::{EnrollmentStatus, Scheme, Scholarship, SCHEMES, SCHOLARSHIPS};
pub use summary::{Activity, ActivityKind, RoleSummary, StatCard};
pub use syllabus::{ClassSyllabus, SubjectSyllabus, CLASS_SYLLABUS, LEARNING_GOALS, STUDENT_SYLLABUS};
pub use todays_work::{WorkItem, WorkStatus, TODAYS_WORK};

use serde::Serialize;

/// Colour band of a percentage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    /// >= 80 success, >= 60 warning, below that danger
    pub fn for_progress(percent: f64) -> Tone {
        if percent >= 80.0 {
            Tone::Success
        } else if percent >= 60.0 {
            Tone::Warning
        } else {
            Tone::Danger
        }
    }
}

/// Mean of `values`, `0.0` for an empty slice.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Round to one decimal place, the precision every percentage is shown at.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_bands() {
        assert_eq!(Tone::for_progress(80.0), Tone::Success);
        assert_eq!(Tone::for_progress(79.9), Tone::Warning);
        assert_eq!(Tone::for_progress(60.0), Tone::Warning);
        assert_eq!(Tone::for_progress(58.0), Tone::Danger);
    }

    #[test]
    fn test_mean_of_nothing_is_zero() {
        assert_eq!(mean(Vec::new()), 0.0);
        assert_eq!(mean([1.0, 2.0, 3.0]), 2.0);
    }
}
