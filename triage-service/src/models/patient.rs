use serde::{Deserialize, Serialize};

/// Patient identity and history fields embedded in the generated prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: u32,
    /// Free-form gender text as submitted, normalized via [`Gender::normalize`].
    pub gender: String,
    pub preferred_language: String,
    pub known_conditions: String,
}

/// Symptom data reported for a single diagnosis request.
///
/// `symptoms` is ordered and appended to with image-derived findings before
/// the prompt is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomReport {
    pub symptoms: Vec<String>,
    pub taking_pills: String,
    pub duration: String,
    pub pain_rating: u8,
}

/// Normalized gender labels used in prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

const FEMALE_TOKENS: [&str; 4] = ["female", "f", "girl", "woman"];
const MALE_TOKENS: [&str; 4] = ["male", "m", "boy", "man"];

impl Gender {
    /// Map free-form gender text onto the closed label set.
    ///
    /// Matching is case-insensitive and substring-based, so entries like
    /// "Female (she/her)" still resolve. Female tokens are checked first:
    /// "female" contains "male" and "woman" contains "man", so the reverse
    /// order could never yield `Female`. Text matching neither token set
    /// maps to `Other`.
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        if FEMALE_TOKENS.iter().any(|t| lowered.contains(t)) {
            Gender::Female
        } else if MALE_TOKENS.iter().any(|t| lowered.contains(t)) {
            Gender::Male
        } else {
            Gender::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_female_tokens() {
        assert_eq!(Gender::normalize("Female"), Gender::Female);
        assert_eq!(Gender::normalize("female"), Gender::Female);
        assert_eq!(Gender::normalize("WOMAN"), Gender::Female);
        assert_eq!(Gender::normalize("girl"), Gender::Female);
        assert_eq!(Gender::normalize("F"), Gender::Female);
    }

    #[test]
    fn test_normalize_male_tokens() {
        assert_eq!(Gender::normalize("Male"), Gender::Male);
        assert_eq!(Gender::normalize("man"), Gender::Male);
        assert_eq!(Gender::normalize("BOY"), Gender::Male);
        assert_eq!(Gender::normalize("m"), Gender::Male);
    }

    #[test]
    fn test_female_never_resolves_to_male() {
        // "female" contains "male" and "woman" contains "man"; the female
        // token set must win.
        assert_eq!(Gender::normalize("female"), Gender::Female);
        assert_eq!(Gender::normalize("woman"), Gender::Female);
    }

    #[test]
    fn test_normalize_falls_back_to_other() {
        assert_eq!(Gender::normalize("Other"), Gender::Other);
        assert_eq!(Gender::normalize("unknown"), Gender::Other);
        assert_eq!(Gender::normalize(""), Gender::Other);
    }

    #[test]
    fn test_normalize_matches_substrings() {
        assert_eq!(Gender::normalize("Female (she/her)"), Gender::Female);
        assert_eq!(Gender::normalize("cis male"), Gender::Male);
    }
}
