//! Item text validation and form input

use serde::Deserialize;

use super::ValidationError;

/// Validated to-do item text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText(String);

impl ItemText {
    /// Create item text, requiring at least one non-whitespace character.
    ///
    /// The text is stored exactly as given; no length or format rules apply.
    ///
    /// # Example
    /// ```
    /// use todolist_server::models::ItemText;
    ///
    /// assert!(ItemText::new("Buy peacock feathers").is_ok());
    /// assert!(ItemText::new("").is_err());
    /// assert!(ItemText::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "item text" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Form body shared by the new-list and add-item endpoints.
///
/// A missing field deserializes to empty text so it is reported as a
/// validation error instead of a form rejection.
#[derive(Debug, Deserialize)]
pub struct NewItemForm {
    #[serde(default)]
    pub item_text: String,
}

impl NewItemForm {
    /// Validate the submitted text.
    pub fn validate(&self) -> Result<ItemText, ValidationError> {
        ItemText::new(&self.item_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_verbatim() {
        let text = ItemText::new("  A new to do row ").unwrap();
        assert_eq!(text.as_str(), "  A new to do row ");
    }

    #[test]
    fn rejects_empty() {
        let err = ItemText::new("").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "item text" });
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(ItemText::new(" \t\n").is_err());
    }

    #[test]
    fn no_length_limit() {
        let long = "x".repeat(10_000);
        assert_eq!(ItemText::new(&long).unwrap().into_string().len(), 10_000);
    }

    #[test]
    fn missing_form_field_is_empty() {
        let form: NewItemForm = serde_json::from_str("{}").unwrap();
        assert!(form.validate().is_err());
    }
}
