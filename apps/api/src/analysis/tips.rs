//! Improvement tips derived from a finished analysis.
//!
//! Each rule in `TIP_RULES` is checked independently and contributes at most
//! one tip. Output order follows the table.

use serde::Serialize;

use crate::analysis::contact::ContactInfo;
use crate::analysis::scoring::{word_count, ScoreBreakdown};
use crate::analysis::skills::SkillSet;

/// Shown by callers when no tip applies.
pub const CLOSING_REMARK: &str =
    "Your resume looks well-structured! Keep updating it with new skills and experiences.";

const LOW_SCORE_THRESHOLD: u32 = 70;
const FEW_SKILLS_THRESHOLD: usize = 5;
const SHORT_CONTENT_WORDS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    LowScore,
    FewSkills,
    MissingEmail,
    MissingPhone,
    ShortContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub category: TipCategory,
    pub message: &'static str,
}

/// Everything a tip rule may look at.
pub struct TipInputs<'a> {
    pub text: &'a str,
    pub skills: &'a SkillSet,
    pub contact: &'a ContactInfo,
    pub score: &'a ScoreBreakdown,
}

struct TipRule {
    category: TipCategory,
    applies: fn(&TipInputs<'_>) -> bool,
    message: &'static str,
}

const TIP_RULES: &[TipRule] = &[
    TipRule {
        category: TipCategory::LowScore,
        applies: |i| i.score.total < LOW_SCORE_THRESHOLD,
        message: "Add more relevant technical skills for your target field, include specific \
                  achievements and quantifiable results, and ensure clear section headers \
                  (Experience, Education, Skills)",
    },
    TipRule {
        category: TipCategory::FewSkills,
        applies: |i| i.skills.len() < FEW_SKILLS_THRESHOLD,
        message: "Add more technical skills relevant to your career field",
    },
    TipRule {
        category: TipCategory::MissingEmail,
        applies: |i| !i.contact.has_email(),
        message: "Make sure your email address is clearly visible",
    },
    TipRule {
        category: TipCategory::MissingPhone,
        applies: |i| !i.contact.has_phone(),
        message: "Include your phone number for easy contact",
    },
    TipRule {
        category: TipCategory::ShortContent,
        applies: |i| word_count(i.text) < SHORT_CONTENT_WORDS,
        message: "Consider adding more detail about your experience and projects",
    },
];

pub fn build_tips(
    text: &str,
    skills: &SkillSet,
    contact: &ContactInfo,
    score: &ScoreBreakdown,
) -> Vec<Tip> {
    let inputs = TipInputs {
        text,
        skills,
        contact,
        score,
    };

    TIP_RULES
        .iter()
        .filter(|rule| (rule.applies)(&inputs))
        .map(|rule| Tip {
            category: rule.category,
            message: rule.message,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::contact::NOT_FOUND;

    fn score(total: u32) -> ScoreBreakdown {
        ScoreBreakdown {
            length: 0,
            skills: 0,
            contact: 0,
            structure: 0,
            total,
        }
    }

    fn skills(n: usize) -> SkillSet {
        (0..n).map(|i| format!("Skill{i}")).collect()
    }

    fn full_contact() -> ContactInfo {
        ContactInfo {
            name: "Jane Doe".to_string(),
            email: "jane@doe.dev".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    fn categories(tips: &[Tip]) -> Vec<TipCategory> {
        tips.iter().map(|t| t.category).collect()
    }

    #[test]
    fn test_all_tips_fire_for_empty_resume() {
        let text = vec!["lo"; 50].join(" ");
        let tips = build_tips(&text, &SkillSet::new(), &ContactInfo::default(), &score(0));
        assert_eq!(
            categories(&tips),
            vec![
                TipCategory::LowScore,
                TipCategory::FewSkills,
                TipCategory::MissingEmail,
                TipCategory::MissingPhone,
                TipCategory::ShortContent,
            ]
        );
    }

    #[test]
    fn test_no_tips_for_strong_resume() {
        let text = vec!["lo"; 250].join(" ");
        let tips = build_tips(&text, &skills(8), &full_contact(), &score(85));
        assert!(tips.is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let text = vec!["lo"; 200].join(" ");
        let tips = build_tips(&text, &skills(5), &full_contact(), &score(70));
        assert!(tips.is_empty());

        let text = vec!["lo"; 199].join(" ");
        let tips = build_tips(&text, &skills(4), &full_contact(), &score(69));
        assert_eq!(
            categories(&tips),
            vec![
                TipCategory::LowScore,
                TipCategory::FewSkills,
                TipCategory::ShortContent
            ]
        );
    }

    #[test]
    fn test_missing_phone_only() {
        let contact = ContactInfo {
            phone: NOT_FOUND.to_string(),
            ..full_contact()
        };
        let text = vec!["lo"; 300].join(" ");
        let tips = build_tips(&text, &skills(10), &contact, &score(90));
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].category, TipCategory::MissingPhone);
        assert_eq!(tips[0].message, "Include your phone number for easy contact");
    }
}
