//! Static educational guidance (tax, investment, help)
//!
//! None of this is calculated advice. The text only branches on the user type.

use crate::models::{Profile, UserType};

/// Fallback response when no report matches a question
pub const HELP_MESSAGE: &str =
    "I can assist with budget, spending insights, tax basics, or investment tips.";

const INVESTMENT_TIPS: &str = "General investment advice:
- Emergency fund
- Diversified equity/index funds
- Short-term: liquid funds or FDs";

pub fn generate_tax_guidance(profile: &Profile) -> String {
    let mut lines = vec!["**Tax Guidance (general educational):**"];
    match profile.user_type {
        UserType::Student => {
            lines.push("- Check filing threshold for part-time income.");
            lines.push("- Keep educational expense receipts.");
        }
        UserType::Professional => {
            lines.push("- Track salary components & use standard deductions.");
            lines.push("- Save proofs for investments (PPF, ELSS, insurance).");
        }
    }
    lines.push("- Consult a tax professional for accuracy.");
    lines.join("\n")
}

pub fn investment_tips() -> String {
    INVESTMENT_TIPS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_tax_guidance() {
        let text = generate_tax_guidance(&Profile::default());
        assert_eq!(
            text,
            "**Tax Guidance (general educational):**
- Check filing threshold for part-time income.
- Keep educational expense receipts.
- Consult a tax professional for accuracy."
        );
    }

    #[test]
    fn test_professional_tax_guidance() {
        let profile = Profile::new("Priya", UserType::Professional, 35, 90_000).unwrap();
        let text = generate_tax_guidance(&profile);
        assert!(text.contains("standard deductions"));
        assert!(text.contains("PPF, ELSS, insurance"));
        assert!(!text.contains("part-time income"));
        assert!(text.ends_with("- Consult a tax professional for accuracy."));
    }

    #[test]
    fn test_investment_tips_static() {
        let tips = investment_tips();
        assert!(tips.starts_with("General investment advice:"));
        assert_eq!(tips.lines().count(), 4);
    }
}
