use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters left unescaped when a reference is placed in a URL query:
/// ASCII alphanumerics plus `- _ . ! ~ * ' ( )`
const REFERENCE_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const LOOKUP_BASE: &str = "https://www.biblegateway.com/passage/?search=";

const TRANSLATION: &str = "RSVCE";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Category {
    OldTestament,
    Psalms,
    WisdomBooks,
    NewTestament,
}

// Checked in order; the first rule with a matching keyword wins.
static RULES: &[(Category, &[&str])] = &[
    (Category::Psalms, &["psalm"]),
    (Category::WisdomBooks, &["prov", "sirach", "wisdom", "ecclesiastes"]),
    (
        Category::NewTestament,
        &[
            "john",
            "matthew",
            "mark",
            "luke",
            "acts",
            "revelation",
            "romans",
            "corinthians",
            "galatians",
            "ephesians",
            "philippians",
            "colossians",
            "thessalonians",
            "timothy",
            "titus",
            "philemon",
            "hebrews",
            "james",
            "peter",
            "jude",
        ],
    ),
];

impl Category {
    /// Classify a reference by the book-name keywords it contains, ignoring
    /// case.  Anything unrecognized is Old Testament.
    pub(crate) fn for_reference(reference: &str) -> Category {
        let reference = reference.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| reference.contains(kw)))
            .map_or(Category::OldTestament, |&(cat, _)| cat)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Category::OldTestament => "Old Testament",
            Category::Psalms => "Psalms",
            Category::WisdomBooks => "Wisdom Books",
            Category::NewTestament => "New Testament",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Reading {
    pub(crate) reference: String,
    pub(crate) category: Category,
    pub(crate) link: String,
}

impl Reading {
    pub(crate) fn new(reference: &str) -> Reading {
        let reference = reference.trim();
        Reading {
            reference: reference.to_owned(),
            category: Category::for_reference(reference),
            link: lookup_link(reference),
        }
    }
}

/// Returns the scripture-lookup URL for a reference
pub(crate) fn lookup_link(reference: &str) -> String {
    let search = utf8_percent_encode(reference.trim(), REFERENCE_ESCAPES);
    format!("{LOOKUP_BASE}{search}&version={TRANSLATION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(Category::for_reference("Genesis 1-2"), Category::OldTestament);
        assert_eq!(Category::for_reference("Psalm 19"), Category::Psalms);
        assert_eq!(Category::for_reference("Prov 1:1-7"), Category::WisdomBooks);
        assert_eq!(Category::for_reference("Sirach 3"), Category::WisdomBooks);
        assert_eq!(Category::for_reference("Ecclesiastes 1"), Category::WisdomBooks);
        assert_eq!(Category::for_reference("John 3"), Category::NewTestament);
        assert_eq!(Category::for_reference("1 Corinthians 13"), Category::NewTestament);
        assert_eq!(Category::for_reference("Judges 4-5"), Category::OldTestament);
        assert_eq!(
            Category::for_reference("Consult full reading plan"),
            Category::OldTestament
        );
    }

    #[test]
    fn test_category_ignores_case() {
        assert_eq!(Category::for_reference("PSALM 23"), Category::Psalms);
        assert_eq!(Category::for_reference("acts 2"), Category::NewTestament);
    }

    #[test]
    fn test_category_precedence() {
        // Psalms beats every other rule
        assert_eq!(Category::for_reference("Psalm 1 | Prov 2"), Category::Psalms);
        assert_eq!(Category::for_reference("Mark 1 | Psalm 2"), Category::Psalms);
        // Wisdom Books beats New Testament
        assert_eq!(Category::for_reference("Wisdom of John"), Category::WisdomBooks);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::OldTestament.to_string(), "Old Testament");
        assert_eq!(Category::Psalms.to_string(), "Psalms");
        assert_eq!(Category::WisdomBooks.to_string(), "Wisdom Books");
        assert_eq!(Category::NewTestament.to_string(), "New Testament");
    }

    #[test]
    fn test_lookup_link() {
        assert_eq!(
            lookup_link("Psalm 19"),
            "https://www.biblegateway.com/passage/?search=Psalm%2019&version=RSVCE"
        );
        assert_eq!(
            lookup_link("  Prov 1:1-7 "),
            "https://www.biblegateway.com/passage/?search=Prov%201%3A1-7&version=RSVCE"
        );
        assert_eq!(
            lookup_link("Psalm 119:1-88; 2 (a)*"),
            "https://www.biblegateway.com/passage/?search=Psalm%20119%3A1-88%3B%202%20(a)*&version=RSVCE"
        );
    }

    #[test]
    fn test_reading_trims() {
        let reading = Reading::new("  Job 1-2 ");
        assert_eq!(reading.reference, "Job 1-2");
        assert_eq!(reading.category, Category::OldTestament);
        assert_eq!(
            reading.link,
            "https://www.biblegateway.com/passage/?search=Job%201-2&version=RSVCE"
        );
    }
}
