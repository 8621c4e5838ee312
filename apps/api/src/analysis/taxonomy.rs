//! Reference taxonomy — the static field → skill keyword table and the
//! course recommendations attached to each field.
//!
//! Built once at startup and shared read-only behind an `Arc`. Field order is
//! significant: `predict_field` breaks ties in favour of the field declared first.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed taxonomy file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid taxonomy: {0}")]
    Invalid(String),
}

/// One career field with its skill keywords and recommended courses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldEntry {
    pub name: String,
    /// Keywords matched case-insensitively against résumé text.
    pub skills: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Taxonomy {
    fields: Vec<FieldEntry>,
}

// (field, skills, courses) in declaration order.
const BUILTIN_FIELDS: &[(&str, &[&str], &[&str])] = &[
    (
        "Data Science",
        &[
            "python",
            "r",
            "sql",
            "machine learning",
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "jupyter",
            "data analysis",
            "statistics",
            "tableau",
        ],
        &[
            "Python for Data Science - Coursera",
            "Machine Learning Course - edX",
            "Data Analysis with Pandas - Udemy",
            "Statistics for Data Science - Khan Academy",
        ],
    ),
    (
        "Web Development",
        &[
            "html",
            "css",
            "javascript",
            "react",
            "angular",
            "vue",
            "node.js",
            "express",
            "django",
            "flask",
            "php",
            "laravel",
            "bootstrap",
            "jquery",
        ],
        &[
            "Full Stack Web Development - freeCodeCamp",
            "React Complete Guide - Udemy",
            "JavaScript Basics - Codecademy",
            "HTML/CSS Fundamentals - W3Schools",
        ],
    ),
    (
        "Mobile Development",
        &[
            "android",
            "ios",
            "react native",
            "flutter",
            "swift",
            "kotlin",
            "java",
            "xamarin",
            "ionic",
            "cordova",
        ],
        &[
            "Android Development - Google Developers",
            "iOS Development - Apple Developer",
            "Flutter Course - Udacity",
            "React Native - Meta",
        ],
    ),
    (
        "DevOps",
        &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "jenkins",
            "git",
            "linux",
            "bash",
            "terraform",
            "ansible",
        ],
        &[
            "Docker Essentials - Docker Hub",
            "AWS Cloud Practitioner - AWS",
            "Kubernetes Basics - CNCF",
            "Git Version Control - GitHub",
        ],
    ),
    (
        "AI/ML",
        &[
            "artificial intelligence",
            "deep learning",
            "nlp",
            "computer vision",
            "opencv",
            "keras",
            "neural networks",
        ],
        &[
            "Deep Learning Specialization - Coursera",
            "Computer Vision - OpenCV",
            "Natural Language Processing - NLTK",
            "Machine Learning - Andrew Ng",
        ],
    ),
];

impl Taxonomy {
    /// Builds a taxonomy from explicit entries, rejecting empty or ambiguous tables.
    pub fn new(fields: Vec<FieldEntry>) -> Result<Self, TaxonomyError> {
        if fields.is_empty() {
            return Err(TaxonomyError::Invalid(
                "taxonomy must declare at least one field".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in &fields {
            let name = field.name.trim();
            if name.is_empty() {
                return Err(TaxonomyError::Invalid("field name is empty".to_string()));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(TaxonomyError::Invalid(format!(
                    "field '{name}' is declared more than once"
                )));
            }
            if field.skills.iter().any(|s| s.trim().is_empty()) {
                return Err(TaxonomyError::Invalid(format!(
                    "field '{name}' contains an empty skill keyword"
                )));
            }
        }

        Ok(Self { fields })
    }

    /// The table shipped with the analyzer.
    pub fn builtin() -> Self {
        let fields = BUILTIN_FIELDS
            .iter()
            .map(|(name, skills, courses)| FieldEntry {
                name: name.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
                courses: courses.iter().map(|c| c.to_string()).collect(),
            })
            .collect();
        Self { fields }
    }

    /// Loads a JSON array of `{ "name", "skills", "courses" }` objects.
    /// Array order becomes field order.
    pub fn from_json_file(path: &Path) -> Result<Self, TaxonomyError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TaxonomyError> {
        let fields: Vec<FieldEntry> = serde_json::from_str(raw)?;
        Self::new(fields)
    }

    pub fn fields(&self) -> &[FieldEntry] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Recommended courses for a predicted field; empty for "General IT".
    pub fn courses_for(&self, field: &str) -> &[String] {
        self.field(field)
            .map(|f| f.courses.as_slice())
            .unwrap_or(&[])
    }
}
