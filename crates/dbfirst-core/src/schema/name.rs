/// An identifier split into its underscore-separated segments.
///
/// Store identifiers such as `order_line_item` become the canonical
/// `OrderLineItem` form used for class names and output keys.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src.split('_').map(String::from).collect();
        Self { parts }
    }

    /// Returns the canonical form: every segment title-cased, joined without a
    /// separator.
    ///
    /// A name with a single segment carries no separator to split on and is
    /// assumed to already be cased; only the first letter of each word is
    /// raised. This keeps the transformation idempotent, since the output of a
    /// multi-segment name is always a single segment.
    pub fn normalized(&self) -> String {
        match &self.parts[..] {
            [single] => capitalize_words(single, false),
            parts => parts
                .iter()
                .map(|part| capitalize_words(part, true))
                .collect(),
        }
    }
}

/// Normalizes a raw store identifier into its canonical form.
///
/// An empty input is returned unchanged.
///
/// ```
/// use dbfirst_core::schema::normalize;
///
/// assert_eq!(normalize("order_line_item"), "OrderLineItem");
/// assert_eq!(normalize("CUSTOMER_ID"), "CustomerId");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    Name::new(raw).normalized()
}

/// Title-cases each word of `raw`: the first letter is upper-cased and the rest
/// of the word lower-cased. Words are delimited by whitespace and ASCII
/// punctuation. Underscores are not treated specially.
pub fn title_case(raw: &str) -> String {
    capitalize_words(raw, true)
}

fn capitalize_words(src: &str, lower_rest: bool) -> String {
    let mut out = String::with_capacity(src.len());
    let mut word_start = true;

    for ch in src.chars() {
        if is_word_boundary(ch) {
            out.push(ch);
            word_start = true;
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else if lower_rest {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Case mapping never produces or removes a boundary character, so word
/// boundaries are the same before and after capitalizing.
fn is_word_boundary(ch: char) -> bool {
    ch.is_whitespace() || ch.is_ascii_punctuation()
}
