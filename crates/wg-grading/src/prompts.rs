//! Prompt templates sent to the completion API.

/// Rubric prompt asking for a bare 0-100 grade.
#[must_use]
pub fn grade_prompt(sentence: &str) -> String {
    format!(
        "Grade the following sentence on a scale of 0 to 100 based on these criteria:\n\
         1. Technical grammatical correctness (40% weight)\n\
         2. Friendliness and readability (40% weight)\n\
         3. Thematic coherence (10% weight)\n\
         4. Poetic quality (10% weight)\n\
         Provide only the final numeric grade.\n\
         Sentence: \"{sentence}\""
    )
}

#[must_use]
pub fn synonyms_prompt(word: &str) -> String {
    format!("Provide 10 synonyms for the word \"{word}\" without explanation, separated by commas.")
}

/// Ask for a short analysis of `word` in its column and row, plus
/// alternatives under an `Alternatives:` heading.
#[must_use]
pub fn analysis_prompt(word: &str, vertical: &str, horizontal: &str) -> String {
    format!(
        "Analyze the word \"{word}\" in the following contexts:\n\
         Vertical sentence: \"{vertical}\"\n\
         Horizontal sentence: \"{horizontal}\"\n\
         Provide a brief summary of your thoughts about the word in these contexts, \
         then list 3-5 alternative word suggestions under the heading \"Alternatives:\" \
         to improve both sentences."
    )
}
