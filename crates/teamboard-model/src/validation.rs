//! Form-level validation.
//!
//! Editors run these checks synchronously before saving and show the issues
//! inline; a non-empty list blocks the save. The store itself never
//! validates records.

use std::fmt;

use crate::{
    Designer, LearningModule, Lesson, MAX_LEVEL, Project, Skill, Test, designer::PeerReview,
};

/// One problem found in a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// camelCase path of the offending field, e.g. `skills[2].targetLevel`.
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Records that can be checked before saving.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationIssue>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Loose email check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn require(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "is required"));
    }
}

fn percent(issues: &mut Vec<ValidationIssue>, field: &str, value: u8) {
    if value > MAX_LEVEL {
        issues.push(ValidationIssue::new(
            field,
            format!("must be between 0 and {MAX_LEVEL}"),
        ));
    }
}

impl Validate for Designer {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "name", &self.name);
        require(&mut issues, "position", &self.position);
        if self.email.trim().is_empty() {
            issues.push(ValidationIssue::new("email", "is required"));
        } else if !is_valid_email(&self.email) {
            issues.push(ValidationIssue::new("email", "is not a valid email address"));
        }

        for (i, rating) in self.skills.iter().enumerate() {
            if rating.skill_id.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    format!("skills[{i}].skillId"),
                    "is required",
                ));
            }
            percent(
                &mut issues,
                &format!("skills[{i}].currentLevel"),
                rating.current_level,
            );
            percent(
                &mut issues,
                &format!("skills[{i}].targetLevel"),
                rating.target_level,
            );
        }

        for (i, goal) in self.career_goals.iter().enumerate() {
            require(&mut issues, &format!("careerGoals[{i}].title"), &goal.title);
            percent(
                &mut issues,
                &format!("careerGoals[{i}].progress"),
                goal.progress,
            );
        }

        for (i, review) in self.peer_reviews.iter().enumerate() {
            check_review(&mut issues, i, review);
        }
        issues
    }
}

fn check_review(issues: &mut Vec<ValidationIssue>, index: usize, review: &PeerReview) {
    if !(1..=5).contains(&review.rating) {
        issues.push(ValidationIssue::new(
            format!("peerReviews[{index}].rating"),
            "must be between 1 and 5",
        ));
    }
}

impl Validate for Skill {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "name", &self.name);
        require(&mut issues, "category", &self.category);
        issues
    }
}

impl Validate for LearningModule {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "title", &self.title);
        if self.duration_minutes == Some(0) {
            issues.push(ValidationIssue::new(
                "durationMinutes",
                "must be greater than zero",
            ));
        }
        issues
    }
}

impl Validate for Lesson {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "title", &self.title);
        require(&mut issues, "moduleId", &self.module_id);
        issues
    }
}

impl Validate for Test {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "title", &self.title);
        require(&mut issues, "moduleId", &self.module_id);
        percent(&mut issues, "passingScore", self.passing_score);
        if self.questions.is_empty() {
            issues.push(ValidationIssue::new(
                "questions",
                "at least one question is required",
            ));
        }
        for (i, question) in self.questions.iter().enumerate() {
            require(&mut issues, &format!("questions[{i}].text"), &question.text);
            if question.options.len() < 2 {
                issues.push(ValidationIssue::new(
                    format!("questions[{i}].options"),
                    "needs at least two options",
                ));
            } else if question.correct_option >= question.options.len() {
                issues.push(ValidationIssue::new(
                    format!("questions[{i}].correctOption"),
                    "must point at one of the options",
                ));
            }
        }
        issues
    }
}

impl Validate for Project {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "name", &self.name);
        percent(&mut issues, "progress", self.progress);
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                issues.push(ValidationIssue::new(
                    "endDate",
                    "must not be before the start date",
                ));
            }
        }
        issues
    }
}
