use serde::Serialize;

use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Eligible,
    Applied,
    Enrolled,
    Pending,
}

impl EnrollmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentStatus::Eligible => "eligible",
            EnrollmentStatus::Applied => "applied",
            EnrollmentStatus::Enrolled => "enrolled",
            EnrollmentStatus::Pending => "pending",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            EnrollmentStatus::Enrolled => Tone::Success,
            EnrollmentStatus::Applied | EnrollmentStatus::Pending => Tone::Warning,
            EnrollmentStatus::Eligible => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scholarship {
    pub title: &'static str,
    pub provider: &'static str,
    pub amount: &'static str,
    pub deadline: &'static str,
    pub status: EnrollmentStatus,
    pub requirements: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub title: &'static str,
    pub provider: &'static str,
    pub kind: &'static str,
    pub status: EnrollmentStatus,
    pub description: &'static str,
}

pub static SCHOLARSHIPS: [Scholarship; 3] = [
    Scholarship {
        title: "Merit-Based Scholarship 2024",
        provider: "Ministry of Education",
        amount: "₹50,000",
        deadline: "2024-12-15",
        status: EnrollmentStatus::Eligible,
        requirements: &["GPA > 3.5", "Attendance > 85%"],
        description: "For academically excellent students",
    },
    Scholarship {
        title: "Digital India Scholarship",
        provider: "Government of India",
        amount: "₹25,000",
        deadline: "2024-11-30",
        status: EnrollmentStatus::Applied,
        requirements: &["STEM Field", "Family Income < 5L"],
        description: "Promoting digital literacy and innovation",
    },
    Scholarship {
        title: "Sports Excellence Award",
        provider: "State Sports Council",
        amount: "₹30,000",
        deadline: "2024-12-20",
        status: EnrollmentStatus::Pending,
        requirements: &["State Level Participation", "Academic Performance"],
        description: "Supporting sports talent development",
    },
];

pub static SCHEMES: [Scheme; 3] = [
    Scheme {
        title: "Mid-Day Meal Scheme",
        provider: "Department of Education",
        kind: "Nutritional Support",
        status: EnrollmentStatus::Enrolled,
        description: "Free nutritious meals for students",
    },
    Scheme {
        title: "Free Textbook Scheme",
        provider: "State Government",
        kind: "Educational Material",
        status: EnrollmentStatus::Eligible,
        description: "Free textbooks for all subjects",
    },
    Scheme {
        title: "Uniform Assistance",
        provider: "Education Department",
        kind: "Material Support",
        status: EnrollmentStatus::Enrolled,
        description: "Free school uniforms and shoes",
    },
];

/// Parse a rupee amount such as `₹50,000`.
pub fn amount_in_rupees(amount: &str) -> Option<u32> {
    let digits: String = amount.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Sum of every scholarship amount that parses.
pub fn total_scholarship_value(scholarships: &[Scholarship]) -> u32 {
    scholarships
        .iter()
        .filter_map(|s| amount_in_rupees(s.amount))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amounts_parse() {
        assert_eq!(amount_in_rupees("₹50,000"), Some(50_000));
        assert_eq!(amount_in_rupees("free"), None);
        assert_eq!(total_scholarship_value(&SCHOLARSHIPS), 105_000);
    }

    #[test]
    fn test_enrolled_schemes() {
        let enrolled = SCHEMES
            .iter()
            .filter(|s| s.status == EnrollmentStatus::Enrolled)
            .count();
        assert_eq!(enrolled, 2);
    }
}
