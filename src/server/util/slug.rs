/// Symbols spelled out as words so they survive in the slug
static SYMBOL_WORDS: &[(char, &str)] = &[('&', " and "), ('%', " percent ")];

/// Builds a URL slug from a product name
///
/// Non-ASCII letters are transliterated, everything else that is not a letter or a digit
/// collapses into a single `-`.
pub fn generate_slug(name: &str) -> String {
    let spelled = name
        .chars()
        .fold(String::with_capacity(name.len()), |mut out, c| {
            match SYMBOL_WORDS.iter().find(|(symbol, _)| *symbol == c) {
                Some((_, word)) => out.push_str(word),
                None => out.push(c),
            }
            out
        });

    slug::slugify(spelled)
}
