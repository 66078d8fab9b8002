pub const SYSTEM: &str = include_str!("../data/prompts/system.txt");
pub const DEFAULT_IMAGE: &str = include_str!("../data/prompts/default_image.txt");
pub const REFUSAL: &str = include_str!("../data/prompts/refusal.txt");
pub const BANNED_PHRASES: &str = include_str!("../data/prompts/banned_phrases.txt");

/// Split a phrase list on newlines or commas, dropping blanks.
pub fn parse_phrase_list(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect()
}
