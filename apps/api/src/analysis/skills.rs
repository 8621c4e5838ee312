//! Skill matching and career field prediction.
//!
//! Both operations are plain keyword lookups against the taxonomy:
//! - `find_skills`: case-insensitive substring containment of every keyword in the text
//! - `predict_field`: the field whose keyword list covers the most found skills

use std::collections::BTreeSet;

use crate::analysis::taxonomy::Taxonomy;

/// Returned when no taxonomy field matches any skill.
pub const GENERAL_FIELD: &str = "General IT";

/// Distinct, title-cased skill labels. Ordered so output is stable.
pub type SkillSet = BTreeSet<String>;

pub fn find_skills(text: &str, taxonomy: &Taxonomy) -> SkillSet {
    let text_lower = text.to_lowercase();

    taxonomy
        .fields()
        .iter()
        .flat_map(|field| field.skills.iter())
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| title_case(skill))
        .collect()
}

/// Counts, per field, how many of `skills` appear in that field's keyword list.
/// A skill is counted for every field that lists it, regardless of which
/// field it was originally found under. The strictly highest count wins;
/// ties go to the field declared first.
pub fn predict_field(skills: &SkillSet, taxonomy: &Taxonomy) -> String {
    let labels: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut best_field: &str = GENERAL_FIELD;
    let mut best_score = 0usize;

    for field in taxonomy.fields() {
        let score = labels
            .iter()
            .filter(|label| field.skills.iter().any(|kw| kw.to_lowercase() == **label))
            .count();

        if score > best_score {
            best_score = score;
            best_field = field.name.as_str();
        }
    }

    best_field.to_string()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest
/// (`node.js` -> `Node.Js`, `scikit-learn` -> `Scikit-Learn`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::taxonomy::FieldEntry;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn field(name: &str, skills: &[&str]) -> FieldEntry {
        FieldEntry {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            courses: vec![],
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("sql"), "Sql");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
        assert_eq!(title_case("PYTORCH"), "Pytorch");
        assert_eq!(title_case("3d modeling"), "3D Modeling");
    }

    #[test]
    fn test_find_skills_is_case_insensitive() {
        let taxonomy = Taxonomy::new(vec![field("Ops", &["docker", "kubernetes"])]).unwrap();
        let skills = find_skills("Shipped DOCKER images to KuBeRnEtEs", &taxonomy);
        assert_eq!(skills, set(&["Docker", "Kubernetes"]));
    }

    #[test]
    fn test_find_skills_dedups_across_fields() {
        let taxonomy = Taxonomy::new(vec![
            field("A", &["python", "git"]),
            field("B", &["Python"]),
        ])
        .unwrap();
        let skills = find_skills("python python PYTHON", &taxonomy);
        assert_eq!(skills, set(&["Python"]));
    }

    #[test]
    fn test_find_skills_is_idempotent_under_repetition() {
        let taxonomy = Taxonomy::builtin();
        let text = "Built React dashboards backed by Django and Docker.";
        let doubled = format!("{text}{text}");
        assert_eq!(
            find_skills(text, &taxonomy),
            find_skills(&doubled, &taxonomy)
        );
    }

    #[test]
    fn test_find_skills_matches_substrings() {
        // "java" is contained in "javascript".
        let skills = find_skills("javascript", &Taxonomy::builtin());
        assert!(skills.contains("Java"));
        assert!(skills.contains("Javascript"));
    }

    #[test]
    fn test_find_skills_empty_text() {
        assert!(find_skills("", &Taxonomy::builtin()).is_empty());
    }

    #[test]
    fn test_predict_field_empty_is_general() {
        assert_eq!(predict_field(&SkillSet::new(), &Taxonomy::builtin()), GENERAL_FIELD);
    }

    #[test]
    fn test_predict_field_unknown_skills_is_general() {
        let skills = set(&["Cobol", "Fortran"]);
        assert_eq!(predict_field(&skills, &Taxonomy::builtin()), GENERAL_FIELD);
    }

    #[test]
    fn test_predict_field_highest_count_wins() {
        let skills = set(&["Docker", "Kubernetes", "Python"]);
        assert_eq!(predict_field(&skills, &Taxonomy::builtin()), "DevOps");
    }

    #[test]
    fn test_predict_field_tie_goes_to_first_declared() {
        let taxonomy = Taxonomy::new(vec![
            field("First", &["rust"]),
            field("Second", &["go"]),
        ])
        .unwrap();
        let skills = set(&["Go", "Rust"]);
        assert_eq!(predict_field(&skills, &taxonomy), "First");
    }

    #[test]
    fn test_predict_field_counts_shared_skills_for_every_field() {
        let taxonomy = Taxonomy::new(vec![
            field("Backend", &["sql"]),
            field("Analytics", &["sql", "tableau"]),
        ])
        .unwrap();
        let skills = find_skills("sql and tableau", &taxonomy);
        assert_eq!(predict_field(&skills, &taxonomy), "Analytics");
    }

    #[test]
    fn test_predict_field_matches_dotted_labels() {
        let skills = set(&["Node.Js", "React"]);
        assert_eq!(predict_field(&skills, &Taxonomy::builtin()), "Web Development");
    }
}
