use std::fmt;

use crate::expression::Expression;

/// Outcome of one search. Not finding an answer is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Found(Expression),
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            SearchResult::Found(expr) => Some(expr),
            SearchResult::NotFound => None,
        }
    }

    pub fn into_option(self) -> Option<Expression> {
        match self {
            SearchResult::Found(expr) => Some(expr),
            SearchResult::NotFound => None,
        }
    }
}

impl From<Option<Expression>> for SearchResult {
    fn from(found: Option<Expression>) -> Self {
        found.map_or(SearchResult::NotFound, SearchResult::Found)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchResult::Found(expr) => write!(f, "{}", expr),
            SearchResult::NotFound => write!(f, "[No answer found!]"),
        }
    }
}
