//! Text filters for list queries.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::Error;

/// Comparison operator of a text filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOperator {
    /// Exact match.
    Equals,
    /// Anything but an exact match.
    NotEquals,
    /// Substring match. The value is wrapped in `%` wildcards.
    Contains,
    /// No substring match.
    NotContains,
    /// Pattern match with `%` wildcards supplied by the caller.
    Matches,
}

impl TextOperator {
    /// All operators, in wire-name order.
    pub const ALL: [TextOperator; 5] = [
        TextOperator::Equals,
        TextOperator::NotEquals,
        TextOperator::Contains,
        TextOperator::NotContains,
        TextOperator::Matches,
    ];

    /// Returns the operator name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextOperator::Equals => "EQUALS",
            TextOperator::NotEquals => "NOT_EQUALS",
            TextOperator::Contains => "CONTAINS",
            TextOperator::NotContains => "NOT_CONTAINS",
            TextOperator::Matches => "MATCHES",
        }
    }
}

impl fmt::Display for TextOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("invalid text operator `{}`", s)))
    }
}

/// A `{OPERATOR: value}` text comparison.
///
/// ```rust
/// use getresponse::{TextFilter, TextOperator};
/// use serde_json::json;
///
/// let filter = TextFilter::new(TextOperator::Contains, "news");
/// assert_eq!(filter.to_value(), json!({"CONTAINS": "%news%"}));
///
/// let filter: TextFilter = TextFilter::parse("EQUALS", "news")?;
/// assert_eq!(filter.to_value(), json!({"EQUALS": "news"}));
/// # Ok::<(), getresponse::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    operator: TextOperator,
    value: String,
}

impl TextFilter {
    /// Builds a filter. `Contains` wraps the value as `%value%`.
    pub fn new(operator: TextOperator, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = match operator {
            TextOperator::Contains => format!("%{}%", value),
            _ => value,
        };
        Self { operator, value }
    }

    /// Builds a filter from an operator name.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error for an unknown operator name.
    pub fn parse(operator: &str, value: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::new(operator.parse()?, value))
    }

    /// Builds a filter with the value sent verbatim, whatever the operator.
    pub fn exact(operator: TextOperator, value: impl Into<String>) -> Self {
        Self {
            operator,
            value: value.into(),
        }
    }

    /// Shorthand for an `EQUALS` filter.
    pub fn equals(value: impl Into<String>) -> Self {
        Self::new(TextOperator::Equals, value)
    }

    /// Shorthand for a `CONTAINS` filter.
    pub fn contains(value: impl Into<String>) -> Self {
        Self::new(TextOperator::Contains, value)
    }

    /// Returns the operator.
    pub fn operator(&self) -> TextOperator {
        self.operator
    }

    /// Returns the value as sent.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders the filter as `{OPERATOR: value}`.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(self.operator.as_str().to_owned(), Value::String(self.value.clone()));
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(TextOperator::Equals, json!({"EQUALS": "news"}) ; "equals")]
    #[test_case(TextOperator::NotEquals, json!({"NOT_EQUALS": "news"}) ; "not equals")]
    #[test_case(TextOperator::Contains, json!({"CONTAINS": "%news%"}) ; "contains wraps")]
    #[test_case(TextOperator::NotContains, json!({"NOT_CONTAINS": "news"}) ; "not contains")]
    #[test_case(TextOperator::Matches, json!({"MATCHES": "news"}) ; "matches")]
    fn test_render(operator: TextOperator, expected: Value) {
        assert_eq!(TextFilter::new(operator, "news").to_value(), expected);
    }

    #[test]
    fn test_parse_round_trips_names() {
        for op in TextOperator::ALL {
            assert_eq!(op.as_str().parse::<TextOperator>().unwrap(), op);
            assert_eq!(op.to_string(), op.as_str());
        }
    }

    #[test]
    fn test_parse_unknown_operator() {
        let err = "LIKE".parse::<TextOperator>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("LIKE"));

        let err = TextFilter::parse("equals", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_exact_does_not_wrap() {
        let filter = TextFilter::exact(TextOperator::Contains, "%");
        assert_eq!(filter.value(), "%");
        assert_eq!(filter.operator(), TextOperator::Contains);
    }

    #[test]
    fn test_shorthands() {
        assert_eq!(TextFilter::equals("a").to_value(), json!({"EQUALS": "a"}));
        assert_eq!(TextFilter::contains("a").to_value(), json!({"CONTAINS": "%a%"}));
    }
}
