//! Indentation configuration for code generation.

use serde::{Deserialize, Deserializer, de::Error};

const SPACES: &str = "                ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (1 to 16).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Width(u8),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Width(n) => Ok(Indent::Spaces(n)),
            Raw::Name(s) if s == "tab" => Ok(Indent::Tab),
            Raw::Name(s) => Err(D::Error::custom(format!(
                "invalid indent '{}', expected a width or \"tab\"",
                s
            ))),
        }
    }
}

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => &SPACES[..(*n as usize).clamp(1, SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_indent_width_is_clamped() {
        assert_eq!(Indent::Spaces(0).as_str(), " ");
        assert_eq!(Indent::Spaces(40).as_str().len(), 16);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Config {
            indent: Indent,
        }
        let spaces: Config = toml::from_str("indent = 4").unwrap();
        assert_eq!(spaces.indent, Indent::Spaces(4));
        let tab: Config = toml::from_str(r#"indent = "tab""#).unwrap();
        assert_eq!(tab.indent, Indent::Tab);
        assert!(toml::from_str::<Config>(r#"indent = "wide""#).is_err());
    }
}
