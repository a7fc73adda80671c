//! Text normalization for header matching.

/// Normalizes a header label for comparison: trims, lowercases, folds
/// Portuguese diacritics, and collapses separators into single spaces.
pub fn fold_label(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut folded = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        folded.push(fold_char(ch));
    }
    folded
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn fold_char(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => ch,
    }
}
