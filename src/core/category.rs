use clap::ValueEnum;
use std::fmt;

/// Canonical symbol category enumeration.
///
/// `All` and `Favorites` are derived views rather than literal tables: `All`
/// is the deduplicated union of every concrete category, and `Favorites`
/// resolves through the favorites store, never the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CategoryId {
    All,
    Ascii,
    Currency,
    GreekLetters,
    RomanNumerals,
    Punctuation,
    Math,
    Arrows,
    Zodiac,
    Planets,
    PlayingCardSuits,
    Musical,
    Other,
    Favorites,
}

impl CategoryId {
    /// Concrete categories in merge order. The `All` view is built by
    /// inserting these tables in exactly this order, first writer wins.
    pub const CONCRETE: [CategoryId; 12] = [
        CategoryId::Ascii,
        CategoryId::Currency,
        CategoryId::GreekLetters,
        CategoryId::RomanNumerals,
        CategoryId::Punctuation,
        CategoryId::Math,
        CategoryId::Arrows,
        CategoryId::Zodiac,
        CategoryId::Planets,
        CategoryId::PlayingCardSuits,
        CategoryId::Musical,
        CategoryId::Other,
    ];

    /// Every selectable category, in picker order.
    pub const SELECTABLE: [CategoryId; 14] = [
        CategoryId::All,
        CategoryId::Ascii,
        CategoryId::Currency,
        CategoryId::GreekLetters,
        CategoryId::RomanNumerals,
        CategoryId::Punctuation,
        CategoryId::Math,
        CategoryId::Arrows,
        CategoryId::Zodiac,
        CategoryId::Planets,
        CategoryId::PlayingCardSuits,
        CategoryId::Musical,
        CategoryId::Other,
        CategoryId::Favorites,
    ];

    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            CategoryId::All => "All",
            CategoryId::Ascii => "ASCII-Printable",
            CategoryId::Currency => "Currency",
            CategoryId::GreekLetters => "Greek Letters",
            CategoryId::RomanNumerals => "Roman Numerals",
            CategoryId::Punctuation => "Punctuation",
            CategoryId::Math => "Math",
            CategoryId::Arrows => "Arrows",
            CategoryId::Zodiac => "Zodiac",
            CategoryId::Planets => "Planets",
            CategoryId::PlayingCardSuits => "Playing Card Suits",
            CategoryId::Musical => "Musical",
            CategoryId::Other => "Other",
            CategoryId::Favorites => "★ Favorites",
        }
    }

    /// Whether this category is a derived view rather than a literal table.
    pub fn is_derived(self) -> bool {
        matches!(self, CategoryId::All | CategoryId::Favorites)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
