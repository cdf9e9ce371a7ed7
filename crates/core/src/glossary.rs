//! Static legal glossary with plain-language examples.

use std::fmt::{self, Display};

use serde::Serialize;

/// The category filter value that matches every entry.
pub const ALL_CATEGORIES: &str = "all";

/// How hard a term is for a lay reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Everyday vocabulary.
    Basic,
    /// Needs some legal background.
    Intermediate,
    /// Specialist vocabulary.
    Advanced,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        })
    }
}

/// A glossary entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    /// The legal term.
    pub term: String,
    /// Formal definition.
    pub definition: String,
    /// Everyday analogy.
    pub example: String,
    /// Area of law, e.g. `"Contract Law"`.
    pub category: String,
    /// Difficulty rating.
    pub difficulty: Difficulty,
}

const BUILTIN: [(&str, &str, &str, &str, Difficulty); 6] = [
    (
        "Indemnification",
        "A contractual obligation where one party agrees to compensate another for certain losses or damages.",
        "Like insurance for a contract - if something goes wrong, the indemnifying party pays for it. Think of renting a car: if you damage it, you're responsible for the costs.",
        "Contract Law",
        Difficulty::Intermediate,
    ),
    (
        "Force Majeure",
        "Unforeseeable circumstances that prevent a party from fulfilling a contract.",
        "Natural disasters, wars, or pandemics that make it impossible to keep your promises. Like a delivery being delayed due to a hurricane - it's beyond anyone's control.",
        "Contract Law",
        Difficulty::Intermediate,
    ),
    (
        "Liability",
        "Legal responsibility for one's acts or omissions.",
        "Being responsible for something that goes wrong. Like being liable for damages if your dog bites someone - you're responsible for the consequences.",
        "Tort Law",
        Difficulty::Basic,
    ),
    (
        "Due Process",
        "The legal requirement that the state must respect all legal rights owed to a person.",
        "Fair treatment in legal proceedings. Like having the right to a fair trial before being convicted - the system must follow proper procedures.",
        "Constitutional Law",
        Difficulty::Basic,
    ),
    (
        "Jurisdiction",
        "The authority of a court to hear and decide a case.",
        "Which court can handle your case. Like how a local court handles local disputes, but federal court handles cases involving different states.",
        "Procedural Law",
        Difficulty::Intermediate,
    ),
    (
        "Breach of Contract",
        "Failure to perform any duty or obligation specified in a contract.",
        "Breaking a promise you made in a contract. Like not paying rent when you agreed to - you've broken your part of the rental agreement.",
        "Contract Law",
        Difficulty::Basic,
    ),
];

/// An immutable, ordered collection of glossary entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Glossary {
    entries: Vec<Entry>,
}

impl Glossary {
    /// Creates a glossary from the given entries, keeping their order.
    #[inline]
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The glossary shipped with the demo.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(term, definition, example, category, difficulty)| Entry {
                term: (*term).to_owned(),
                definition: (*definition).to_owned(),
                example: (*example).to_owned(),
                category: (*category).to_owned(),
                difficulty: *difficulty,
            })
            .collect();
        Self { entries }
    }

    /// All entries in collection order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// [`ALL_CATEGORIES`] followed by every distinct category in the order
    /// it first appears.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for entry in &self.entries {
            if !categories.contains(&entry.category.as_str()) {
                categories.push(&entry.category);
            }
        }
        categories
    }

    /// Returns the entries matching both `query` and `category`.
    ///
    /// An entry matches `query` when its term or definition contains it,
    /// ignoring case; an empty query matches everything. It matches
    /// `category` when the category is [`ALL_CATEGORIES`] or equal to the
    /// entry's category. Results keep collection order.
    pub fn filter(&self, query: &str, category: &str) -> Vec<&Entry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                category == ALL_CATEGORIES || entry.category == category
            })
            .filter(|entry| {
                entry.term.to_lowercase().contains(&query)
                    || entry.definition.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.term.clone()).collect()
    }

    #[test]
    fn test_filter_by_query() {
        let glossary = Glossary::builtin();
        let found = glossary.filter("indemn", ALL_CATEGORIES);
        assert_eq!(terms(&found), ["Indemnification"]);

        let found = glossary.filter("CONTRACT", ALL_CATEGORIES);
        assert_eq!(
            terms(&found),
            ["Indemnification", "Force Majeure", "Breach of Contract"]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let glossary = Glossary::builtin();
        let found = glossary.filter("", "Contract Law");
        assert_eq!(
            terms(&found),
            ["Indemnification", "Force Majeure", "Breach of Contract"]
        );
        assert!(glossary.filter("", "Maritime Law").is_empty());
    }

    #[test]
    fn test_filter_combined() {
        let glossary = Glossary::builtin();
        assert_eq!(
            terms(&glossary.filter("court", "Procedural Law")),
            ["Jurisdiction"]
        );
        assert!(glossary.filter("court", "Tort Law").is_empty());
        assert_eq!(glossary.filter("", ALL_CATEGORIES).len(), 6);
    }

    #[test]
    fn test_example_is_not_searched() {
        let glossary = Glossary::builtin();
        // Only appears in the Force Majeure example.
        assert!(glossary.filter("hurricane", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn test_categories() {
        let glossary = Glossary::builtin();
        assert_eq!(
            glossary.categories(),
            [
                "all",
                "Contract Law",
                "Tort Law",
                "Constitutional Law",
                "Procedural Law"
            ]
        );
        assert_eq!(Glossary::default().categories(), ["all"]);
    }
}
