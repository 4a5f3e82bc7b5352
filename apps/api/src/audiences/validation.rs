use std::fmt;

use serde::Serialize;

use crate::models::audience::NewAudience;

pub const AGE_RANGES: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55-64", "65+"];

pub const INCOME_RANGES: &[&str] = &[
    "Under $25k",
    "$25k-$50k",
    "$50k-$75k",
    "$75k-$100k",
    "$100k-$150k",
    "$150k+",
];

pub const INTEREST_OPTIONS: &[&str] = &[
    "Technology",
    "Health & Fitness",
    "Travel",
    "Food & Dining",
    "Fashion",
    "Sports",
    "Entertainment",
    "Education",
    "Finance",
    "Home & Garden",
    "Arts & Culture",
    "Gaming",
    "Sustainability",
    "Business",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// Every problem found in one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationErrors {
    pub issues: Vec<FieldIssue>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates an intake submission and returns a normalized copy.
///
/// Required: name, age range, location, income, at least one interest.
/// Age range, income and interests must come from the fixed option lists.
/// Text is trimmed; repeated interests are collapsed keeping first occurrence.
/// Pain points and goals may be empty.
pub fn validate_audience(input: &NewAudience) -> Result<NewAudience, ValidationErrors> {
    let mut issues = Vec::new();

    let name = input.name.trim();
    if name.is_empty() {
        issues.push(required("name"));
    }

    let age_range = input.age_range.trim();
    if age_range.is_empty() {
        issues.push(required("ageRange"));
    } else if !AGE_RANGES.contains(&age_range) {
        issues.push(not_an_option("ageRange", age_range, AGE_RANGES));
    }

    let location = input.location.trim();
    if location.is_empty() {
        issues.push(required("location"));
    }

    let income = input.income.trim();
    if income.is_empty() {
        issues.push(required("income"));
    } else if !INCOME_RANGES.contains(&income) {
        issues.push(not_an_option("income", income, INCOME_RANGES));
    }

    let mut interests: Vec<String> = Vec::new();
    for interest in input.interests.iter().map(|i| i.trim()) {
        if !INTEREST_OPTIONS.contains(&interest) {
            issues.push(not_an_option("interests", interest, INTEREST_OPTIONS));
        } else if !interests.iter().any(|i| i == interest) {
            interests.push(interest.to_string());
        }
    }
    if input.interests.is_empty() {
        issues.push(FieldIssue {
            field: "interests",
            message: "select at least one interest".to_string(),
        });
    }

    if !issues.is_empty() {
        return Err(ValidationErrors { issues });
    }

    Ok(NewAudience {
        name: name.to_string(),
        age_range: age_range.to_string(),
        location: location.to_string(),
        income: income.to_string(),
        interests,
        pain_points: input.pain_points.trim().to_string(),
        goals: input.goals.trim().to_string(),
    })
}

fn required(field: &'static str) -> FieldIssue {
    FieldIssue {
        field,
        message: "is required".to_string(),
    }
}

fn not_an_option(field: &'static str, value: &str, options: &[&str]) -> FieldIssue {
    FieldIssue {
        field,
        message: format!("'{value}' is not one of: {}", options.join(", ")),
    }
}
