/// Coarse semantic tag stored in `symbols.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Currency,
    Arrows,
    Emoji,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Currency => "currency",
            Category::Arrows => "arrows",
            Category::Emoji => "emoji",
        }
    }

    /// `Sc` (currency symbol) wins over a name mentioning "arrow".
    pub fn classify(general_category: &str, lowercase_name: &str) -> Option<Self> {
        if general_category == "Sc" {
            Some(Category::Currency)
        } else if lowercase_name.contains("arrow") {
            Some(Category::Arrows)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub glyph: String,
    pub name: String,
    pub category: Option<Category>,
}

impl Character {
    pub fn new(
        glyph: impl Into<String>,
        name: impl Into<String>,
        category: Option<Category>,
    ) -> Self {
        Self {
            glyph: glyph.into(),
            name: name.into(),
            category,
        }
    }

    /// Control characters carry a bracketed placeholder name such as `<control>`.
    pub fn is_control(&self) -> bool {
        self.name.contains('<')
    }
}

/// A searchable term pointing at a glyph. Ordering is (keyword, glyph).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keyword {
    pub keyword: String,
    pub glyph: String,
}

impl Keyword {
    pub fn new(keyword: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            glyph: glyph.into(),
        }
    }
}
