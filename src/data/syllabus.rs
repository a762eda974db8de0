use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectSyllabus {
    pub name: &'static str,
    pub chapters: u32,
    pub completed: u32,
    pub current: &'static str,
    pub next_test: &'static str,
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassSyllabus {
    pub name: &'static str,
    pub students: u32,
    pub chapters: u32,
    pub completed: u32,
    pub current: &'static str,
    pub avg_progress: u8,
    pub on_track: u32,
    pub behind: u32,
}

pub static STUDENT_SYLLABUS: [SubjectSyllabus; 3] = [
    SubjectSyllabus {
        name: "Mathematics",
        chapters: 12,
        completed: 8,
        current: "Quadratic Equations",
        next_test: "2024-01-15",
        progress: 67,
    },
    SubjectSyllabus {
        name: "Physics",
        chapters: 10,
        completed: 6,
        current: "Motion and Force",
        next_test: "2024-01-20",
        progress: 60,
    },
    SubjectSyllabus {
        name: "Chemistry",
        chapters: 14,
        completed: 9,
        current: "Periodic Table",
        next_test: "2024-01-18",
        progress: 64,
    },
];

pub const STUDENT_OVERALL_SYLLABUS: u8 = 64;

pub static LEARNING_GOALS: [&str; 3] = [
    "Complete Math Chapter 4 by end of week",
    "Physics lab report submission due Monday",
    "Chemistry test preparation - 3 more topics",
];

pub static CLASS_SYLLABUS: [ClassSyllabus; 2] = [
    ClassSyllabus {
        name: "Class 10-A Mathematics",
        students: 30,
        chapters: 12,
        completed: 8,
        current: "Quadratic Equations",
        avg_progress: 67,
        on_track: 25,
        behind: 5,
    },
    ClassSyllabus {
        name: "Class 10-B Mathematics",
        students: 28,
        chapters: 12,
        completed: 7,
        current: "Linear Equations",
        avg_progress: 58,
        on_track: 20,
        behind: 8,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_head_counts() {
        for class in &CLASS_SYLLABUS {
            assert_eq!(class.on_track + class.behind, class.students, "{}", class.name);
        }
    }

    #[test]
    fn test_completed_never_exceeds_chapters() {
        assert!(STUDENT_SYLLABUS.iter().all(|s| s.completed <= s.chapters));
        assert!(CLASS_SYLLABUS.iter().all(|c| c.completed <= c.chapters));
    }
}
