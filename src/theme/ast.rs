//! AST types for the theme parser

use crate::theme::types::{Distance, Padding};

/// A complete stylesheet
#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

/// A single rule: selector(s) + properties
#[derive(Debug, Clone)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub properties: Vec<Property>,
}

/// Widget selector
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Universal selector: *
    Universal,
    /// Element selector with optional state: `grid` or `grid.disabled`
    Element { name: String, state: Option<String> },
}

impl Selector {
    pub fn element(name: impl Into<String>) -> Self {
        Selector::Element {
            name: name.into(),
            state: None,
        }
    }

    pub fn element_with_state(name: impl Into<String>, state: impl Into<String>) -> Self {
        Selector::Element {
            name: name.into(),
            state: Some(state.into()),
        }
    }
}

/// A property: name-value pair
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub value: Value,
}

/// Property value
#[derive(Debug, Clone)]
pub enum Value {
    /// Distance with unit
    Distance(Distance),
    /// Plain number (no unit)
    Number(f64),
    /// Quoted string
    String(String),
    /// Identifier (e.g., `inherit`, `true`)
    Ident(String),
    /// Padding shorthand (2 values: vertical horizontal)
    Padding2(Distance, Distance),
    /// Padding shorthand (4 values: top right bottom left)
    Padding4(Distance, Distance, Distance, Distance),
}

impl Value {
    /// Try to convert to Distance
    pub fn as_distance(&self) -> Option<Distance> {
        match self {
            Value::Distance(d) => Some(d.clone()),
            Value::Number(n) => Some(Distance::px(*n)), // Default to px
            _ => None,
        }
    }

    /// Try to convert to Padding
    pub fn as_padding(&self) -> Option<Padding> {
        match self {
            Value::Distance(d) => Some(Padding::uniform(d.clone())),
            Value::Number(n) => Some(Padding::uniform(Distance::px(*n))),
            Value::Padding2(v, h) => Some(Padding::symmetric(v.clone(), h.clone())),
            Value::Padding4(t, r, b, l) => {
                Some(Padding::new(t.clone(), r.clone(), b.clone(), l.clone()))
            }
            _ => None,
        }
    }

    /// Try to convert to String
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Ident(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Try to convert to f64
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Distance(d) => Some(d.value),
            _ => None,
        }
    }

    /// Try to convert to bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Ident(s) if s == "true" => Some(true),
            Value::Ident(s) if s == "false" => Some(false),
            _ => None,
        }
    }
}
