use crate::errors::ValidationError;

/// Quoting convention shared between the upstream tokenizer and the
/// validator. Fields are private so the builder's equal-chars rejection
/// cannot be bypassed with a struct literal.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    escape_char: char,
    quote_char: char,
    doublequote: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            escape_char: '\\',
            quote_char: '"',
            doublequote: true,
        }
    }
}

impl ValidatorConfig {
    pub fn escape_char(&self) -> char {
        self.escape_char
    }

    pub fn quote_char(&self) -> char {
        self.quote_char
    }

    pub fn doublequote(&self) -> bool {
        self.doublequote
    }

    /// Longest run of unescaped quote chars the tokenizer's escape idiom
    /// could legitimately have produced: one, or two when doubling is the
    /// accepted escape form.
    pub fn max_quote_run(&self) -> usize {
        1 + self.doublequote as usize
    }
}

pub struct ValidatorConfigBuilder {
    escape_char: char,
    quote_char: char,
    doublequote: bool,
}

impl ValidatorConfigBuilder {
    /// Create a new [`ValidatorConfigBuilder`]
    pub fn new() -> Self {
        let config = ValidatorConfig::default();
        Self {
            escape_char: config.escape_char,
            quote_char: config.quote_char,
            doublequote: config.doublequote,
        }
    }

    /// Build a [`ValidatorConfig`], rejecting an escape char equal to the
    /// quote char.
    pub fn build(self) -> Result<ValidatorConfig, ValidationError> {
        if self.escape_char == self.quote_char {
            return Err(ValidationError::ConfigError(self.quote_char));
        }
        Ok(ValidatorConfig {
            escape_char: self.escape_char,
            quote_char: self.quote_char,
            doublequote: self.doublequote,
        })
    }

    pub fn with_escape_char(self, escape: char) -> Self {
        Self {
            escape_char: escape,
            ..self
        }
    }

    pub fn with_quote_char(self, quote: char) -> Self {
        Self {
            quote_char: quote,
            ..self
        }
    }

    pub fn with_doublequote(self, doublequote: bool) -> Self {
        Self {
            doublequote,
            ..self
        }
    }
}

impl Default for ValidatorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ValidatorConfig::default();
        assert_eq!(config.escape_char(), '\\');
        assert_eq!(config.quote_char(), '"');
        assert_eq!(config.doublequote(), true);
        assert_eq!(config.max_quote_run(), 2);
    }

    #[test]
    fn test_config_builder() {
        let config = ValidatorConfigBuilder::new()
            .with_quote_char('\'')
            .with_doublequote(false)
            .build()
            .unwrap();
        assert_eq!(config.quote_char(), '\'');
        assert_eq!(config.escape_char(), '\\');
        assert_eq!(config.doublequote(), false);
        assert_eq!(config.max_quote_run(), 1);
    }

    #[test]
    fn test_config_builder_rejects_equal_chars() {
        let result = ValidatorConfigBuilder::new().with_escape_char('"').build();
        assert!(matches!(result, Err(ValidationError::ConfigError('"'))));
    }
}
