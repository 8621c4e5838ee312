//! The analysis pipeline: PDF bytes → text → contact info + skills → field, score, tips.
//!
//! Every stage is a pure function of the extracted text and the shared,
//! read-only taxonomy. Nothing is cached between calls.

pub mod contact;
pub mod scoring;
pub mod skills;
pub mod taxonomy;
pub mod tips;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::extraction::{ExtractionError, PdfTextExtractor};

use self::contact::{parse_contact_info, ContactInfo};
use self::scoring::{score_resume, word_count, ScoreBreakdown, ScoreRating};
use self::skills::{find_skills, predict_field, SkillSet};
use self::taxonomy::Taxonomy;
use self::tips::{build_tips, Tip, CLOSING_REMARK};

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No strategy produced readable text.
    #[error("Could not extract text from the PDF")]
    ExtractionFailed,

    #[error(transparent)]
    Staging(#[from] ExtractionError),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReport {
    pub contact_info: ContactInfo,
    pub skills: SkillSet,
    pub predicted_field: String,
    pub score: ScoreBreakdown,
    pub rating: ScoreRating,
    pub rating_message: &'static str,
    pub tips: Vec<Tip>,
    /// Set only when no tip applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_remark: Option<&'static str>,
    /// Courses for `predicted_field`, empty when it is "General IT".
    pub recommended_courses: Vec<String>,
    pub word_count: usize,
}

pub struct ResumeAnalyzer {
    taxonomy: Arc<Taxonomy>,
    extractor: PdfTextExtractor,
}

impl ResumeAnalyzer {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self::with_extractor(taxonomy, PdfTextExtractor::default())
    }

    pub fn with_extractor(taxonomy: Arc<Taxonomy>, extractor: PdfTextExtractor) -> Self {
        Self {
            taxonomy,
            extractor,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn analyze_pdf(&self, pdf_bytes: &[u8]) -> Result<ResumeReport, AnalysisError> {
        let text = self.extractor.extract(pdf_bytes)?;
        self.analyze_text(&text)
    }

    /// Runs the pipeline on already-extracted text. Blank text is an extraction failure.
    pub fn analyze_text(&self, text: &str) -> Result<ResumeReport, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::ExtractionFailed);
        }

        let contact_info = parse_contact_info(text);
        let skills = find_skills(text, &self.taxonomy);
        let predicted_field = predict_field(&skills, &self.taxonomy);
        let score = score_resume(text, &skills);
        let tips = build_tips(text, &skills, &contact_info, &score);
        let recommended_courses = self.taxonomy.courses_for(&predicted_field).to_vec();

        info!(
            field = %predicted_field,
            score = score.total,
            skills = skills.len(),
            tips = tips.len(),
            "Resume analyzed"
        );

        let closing_remark = tips.is_empty().then_some(CLOSING_REMARK);
        let rating = ScoreRating::from_score(score.total);

        Ok(ResumeReport {
            contact_info,
            predicted_field,
            rating,
            rating_message: rating.message(),
            score,
            tips,
            closing_remark,
            recommended_courses,
            word_count: word_count(text),
            skills,
        })
    }
}
