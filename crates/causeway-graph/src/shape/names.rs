/// Display form of a variable name: underscores become spaces, then each
/// word is title-cased.
///
/// A "word" starts after any non-letter, so `covid-19_cases` becomes
/// `Covid-19 Cases` and `o'brien` becomes `O'Brien`.
pub fn display_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_is_letter = false;
    for ch in raw.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
