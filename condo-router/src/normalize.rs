//! Input and sender-id normalization.

/// Strips the transport-specific suffix from a sender identity
/// (`"5585...@c.us"` becomes `"5585..."`). Roster keys are canonical.
pub fn canonical_sender(sender_id: &str) -> &str {
    sender_id.split('@').next().unwrap_or(sender_id)
}

/// Normalizes a message body for routing: trim, lowercase, fold the accented
/// characters that show up in the greeting commands (`"Olá"` routes like
/// `"ola"`).
pub fn normalize_input(body: &str) -> String {
    body.trim()
        .to_lowercase()
        .chars()
        .map(fold_diacritic)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}
