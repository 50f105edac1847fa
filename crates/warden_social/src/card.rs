//! Platform-independent reply cards.

use derive_getters::Getters;
use derive_setters::Setters;

/// Author line shown at the top of a card.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CardAuthor {
    name: String,
    icon_url: Option<String>,
}

impl CardAuthor {
    /// Create an author line.
    pub fn new(name: impl Into<String>, icon_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            icon_url,
        }
    }
}

/// A named value shown in a card.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CardField {
    name: String,
    value: String,
    inline: bool,
}

/// A rendered reply, converted to an embed by the platform layer.
///
/// # Example
///
/// ```
/// use warden_social::Card;
///
/// let card = Card::default()
///     .with_description("hello".to_string())
///     .field("Status", "online");
/// assert_eq!(card.fields().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct Card {
    description: Option<String>,
    author: Option<CardAuthor>,
    #[setters(skip)]
    fields: Vec<CardField>,
    footer: Option<String>,
}

impl Card {
    /// Append an inline field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(CardField {
            name: name.into(),
            value: value.into(),
            inline: true,
        });
        self
    }

    /// Value of the first field called `name`.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
