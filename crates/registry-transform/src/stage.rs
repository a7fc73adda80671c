//! Disease-stage extraction from free-text staging fields.

use registry_model::Stage;

/// Extracts a stage code from free text.
///
/// Searches the uppercased text for a whole-token Roman numeral, longest
/// numeral first (IV, III, II, I) so that "IV" is never reported as "I" with
/// stray characters. A token is whole when it is not flanked by alphanumeric
/// characters. No match leaves the stage undefined.
pub fn extract_stage(text: &str) -> Option<Stage> {
    let chars: Vec<char> = text.to_uppercase().chars().collect();
    for stage in [Stage::IV, Stage::III, Stage::II, Stage::I] {
        if contains_token(&chars, stage.as_str()) {
            return Some(stage);
        }
    }
    None
}

fn contains_token(chars: &[char], token: &str) -> bool {
    let token: Vec<char> = token.chars().collect();
    if chars.len() < token.len() {
        return false;
    }
    for start in 0..=chars.len() - token.len() {
        let end = start + token.len();
        if chars[start..end] != token[..] {
            continue;
        }
        let before_ok = start == 0 || !chars[start - 1].is_alphanumeric();
        let after_ok = end == chars.len() || !chars[end].is_alphanumeric();
        if before_ok && after_ok {
            return true;
        }
    }
    false
}
