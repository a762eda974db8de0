use std::fmt;

pub const SCHOLARSHIP_RESPONSE: &str = "Here are current scholarship opportunities:\n\n\
• National Merit Scholarship (Deadline: March 15)\n\
• State Education Grant (Monthly stipend: ₹2,000)\n\
• Minority Community Scholarship\n\
• Excellence in STEM Award\n\n\
Would you like detailed information about any specific scholarship?";

pub const ATTENDANCE_RESPONSE: &str = "Your current attendance status:\n\n\
• Overall: 92% (Excellent)\n\
• This month: 95%\n\
• Days present: 23/25\n\
• Last RFID scan: Today 8:15 AM\n\n\
You're maintaining excellent attendance! Keep it up!";

pub const SCHEMES_RESPONSE: &str = "Latest Government Education Schemes:\n\n\
• Digital India Education Initiative\n\
• Skill Development Program 2024\n\
• Free Textbook Distribution\n\
• Mid-day Meal Program\n\
• Teacher Training Enhancement\n\n\
These schemes are actively running in your district. Would you like application details?";

pub const FALLBACK_RESPONSE: &str = "I understand your query. Let me provide you with relevant information from our database. You can ask me about:\n\n\
• Government scholarships and schemes\n\
• Attendance tracking\n\
• Academic support resources\n\
• Application procedures\n\n\
How can I assist you further?";

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// One (predicate, response) pair. The predicate sees the lower-cased query.
pub struct ResponseRule {
    pub name: &'static str,
    predicate: Predicate,
    pub response: &'static str,
}

impl ResponseRule {
    pub fn new(
        name: &'static str,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        response: &'static str,
    ) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
            response,
        }
    }

    /// Matches when any keyword is a substring of the query.
    pub fn any_keyword(
        name: &'static str,
        keywords: &'static [&'static str],
        response: &'static str,
    ) -> Self {
        Self::new(name, move |query| keywords.iter().any(|k| query.contains(k)), response)
    }

    pub fn matches(&self, lowered_query: &str) -> bool {
        (self.predicate)(lowered_query)
    }
}

impl fmt::Debug for ResponseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Answers free text with the first matching canned reply, in rule order.
#[derive(Debug)]
pub struct QueryResponder {
    rules: Vec<ResponseRule>,
    fallback: &'static str,
}

impl QueryResponder {
    pub fn with_rules(rules: Vec<ResponseRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    pub fn respond(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.response)
            .unwrap_or(self.fallback)
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }
}

impl Default for QueryResponder {
    fn default() -> Self {
        Self::with_rules(
            vec![
                ResponseRule::any_keyword("scholarship", &["scholarship"], SCHOLARSHIP_RESPONSE),
                ResponseRule::any_keyword("attendance", &["attendance"], ATTENDANCE_RESPONSE),
                ResponseRule::any_keyword("schemes", &["scheme", "government"], SCHEMES_RESPONSE),
            ],
            FALLBACK_RESPONSE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scholarship_query() {
        let responder = QueryResponder::default();
        let reply = responder.respond("Show me scholarship opportunities");
        assert_eq!(reply, SCHOLARSHIP_RESPONSE);
        assert!(reply.contains("Scholarship"));
    }

    #[test]
    fn test_unrelated_text_gets_fallback() {
        let responder = QueryResponder::default();
        assert_eq!(responder.respond("random unrelated text"), FALLBACK_RESPONSE);
        assert_eq!(responder.respond(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_matching_ignores_case() {
        let responder = QueryResponder::default();
        assert_eq!(responder.respond("MY ATTENDANCE SUMMARY"), ATTENDANCE_RESPONSE);
        assert_eq!(responder.respond("Government education schemes"), SCHEMES_RESPONSE);
        assert_eq!(responder.respond("any new Scheme?"), SCHEMES_RESPONSE);
    }

    #[test]
    fn test_earlier_rule_wins() {
        let responder = QueryResponder::default();
        // mentions all three groups; scholarship is checked first
        assert_eq!(
            responder.respond("government scholarship and attendance"),
            SCHOLARSHIP_RESPONSE
        );
        assert_eq!(responder.respond("attendance for government schools"), ATTENDANCE_RESPONSE);
    }

    #[test]
    fn test_financial_aid_has_no_rule() {
        let responder = QueryResponder::default();
        assert_eq!(responder.respond("Financial aid programs"), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_custom_rules() {
        let responder = QueryResponder::with_rules(
            vec![ResponseRule::new("question", |q| q.ends_with('?'), "Good question.")],
            "Noted.",
        );
        assert_eq!(responder.respond("Is it raining?"), "Good question.");
        assert_eq!(responder.respond("It is raining."), "Noted.");
        assert_eq!(responder.rules().len(), 1);
    }
}
