//! Résumé scoring — a deterministic 0–100 score built from four independent categories.
//!
//! | Category  | Signal                                         | Points        |
//! |-----------|------------------------------------------------|---------------|
//! | length    | word count in 200..=800 / above 100            | 25 / 15       |
//! | skills    | distinct skills ≥10 / ≥5 / ≥1                  | 25 / 20 / 10  |
//! | contact   | `@` present; 3-3-4 digit phone pattern present | 15 + 10       |
//! | structure | each section keyword found                     | 4 each        |
//!
//! Length and skills are ladders: only the first matching band counts.
//! Contact and structure flags add independently. The total is capped at 100.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::skills::SkillSet;

pub const MAX_SCORE: u32 = 100;

/// A band in a threshold ladder: applies when `min <= value <= max`.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub min: usize,
    pub max: usize,
    pub points: u32,
}

/// Checked top to bottom; the first band containing the word count applies.
pub const LENGTH_BANDS: &[Band] = &[
    Band {
        min: 200,
        max: 800,
        points: 25,
    },
    Band {
        min: 101,
        max: usize::MAX,
        points: 15,
    },
];

pub const SKILL_BANDS: &[Band] = &[
    Band {
        min: 10,
        max: usize::MAX,
        points: 25,
    },
    Band {
        min: 5,
        max: 9,
        points: 20,
    },
    Band {
        min: 1,
        max: 4,
        points: 10,
    },
];

pub const EMAIL_POINTS: u32 = 15;
pub const PHONE_POINTS: u32 = 10;

pub const STRUCTURE_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "work",
    "summary",
];
pub const STRUCTURE_POINTS: u32 = 4;

lazy_static! {
    static ref PHONE_DIGITS: Regex = Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub length: u32,
    pub skills: u32,
    pub contact: u32,
    pub structure: u32,
    /// Sum of the categories, capped at `MAX_SCORE`.
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    NeedsImprovement,
}

/// Rating thresholds, checked in order.
const RATING_LADDER: &[(u32, ScoreRating)] = &[
    (80, ScoreRating::Excellent),
    (60, ScoreRating::Good),
    (0, ScoreRating::NeedsImprovement),
];

impl ScoreRating {
    pub fn from_score(total: u32) -> Self {
        RATING_LADDER
            .iter()
            .find(|(threshold, _)| total >= *threshold)
            .map(|(_, rating)| *rating)
            .unwrap_or(ScoreRating::NeedsImprovement)
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent! Your resume is well-optimized.",
            ScoreRating::Good => "Good resume with room for improvement.",
            ScoreRating::NeedsImprovement => "Your resume needs significant improvements.",
        }
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Points from the first band containing `value`, or 0.
pub fn band_points(bands: &[Band], value: usize) -> u32 {
    bands
        .iter()
        .find(|b| value >= b.min && value <= b.max)
        .map(|b| b.points)
        .unwrap_or(0)
}

pub fn score_resume(text: &str, skills: &SkillSet) -> ScoreBreakdown {
    let length = band_points(LENGTH_BANDS, word_count(text));
    let skills = band_points(SKILL_BANDS, skills.len());

    let mut contact = 0;
    if text.contains('@') {
        contact += EMAIL_POINTS;
    }
    if PHONE_DIGITS.is_match(text) {
        contact += PHONE_POINTS;
    }

    let text_lower = text.to_lowercase();
    let structure = STRUCTURE_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .count() as u32
        * STRUCTURE_POINTS;

    let total = (length + skills + contact + structure).min(MAX_SCORE);

    ScoreBreakdown {
        length,
        skills,
        contact,
        structure,
        total,
    }
}
