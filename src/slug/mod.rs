//! # Slug Derivation
//!
//! Maps an explanation request to the identifier used both as the cache
//! key and as the public URL segment.
//!
//! Two different topics that normalize to the same text share a slug and
//! therefore share a cache file. That collision is accepted.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum slug length in characters
pub const MAX_SLUG_LEN: usize = 80;

/// Substitutions applied before transliteration so symbols carry meaning
const REPLACEMENTS: &[(&str, &str)] = &[("+", "plus"), ("#", "sharp")];

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex"));

/// Derive the slug for `(topic, level, analogy)`.
///
/// The input is `"{topic}-{level}-{analogy}"` with an empty analogy when
/// absent, transliterated to ASCII, lowercased and hyphen separated.
pub fn derive_slug(topic: &str, level: &str, analogy: Option<&str>) -> String {
    let base = format!("{}-{}-{}", topic, level, analogy.unwrap_or(""));
    slugify(&base)
}

/// Normalize arbitrary text into a slug.
pub fn slugify(text: &str) -> String {
    let mut replaced = text.to_string();
    for (from, to) in REPLACEMENTS {
        replaced = replaced.replace(from, to);
    }

    let ascii = deunicode::deunicode(&replaced).to_lowercase();
    let ascii: String = ascii.chars().filter(|c| *c != '\'').collect();

    let hyphenated = NON_ALNUM.replace_all(&ascii, "-");
    let trimmed = hyphenated.trim_matches('-');

    // ASCII only at this point, so byte and char positions agree
    let capped = if trimmed.len() > MAX_SLUG_LEN {
        &trimmed[..MAX_SLUG_LEN]
    } else {
        trimmed
    };

    capped.trim_end_matches('-').to_string()
}

/// Whether `slug` could have been produced by [`slugify`].
///
/// Anything else is refused before it reaches the filesystem.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
