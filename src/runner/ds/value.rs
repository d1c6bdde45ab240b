use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::program::ast::LiteralType;
use crate::runner::ds::function_object::FunctionObject;

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";

#[derive(Debug, Clone, PartialEq)]
pub enum JsNumberType {
    Integer(i64),
    Float(f64),
}
impl JsNumberType {
    pub fn as_f64(&self) -> f64 {
        match self {
            JsNumberType::Integer(i) => *i as f64,
            JsNumberType::Float(f) => *f,
        }
    }
}
impl Display for JsNumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsNumberType::Integer(i) => write!(f, "{}", i),
            JsNumberType::Float(nf) => {
                if nf.is_nan() {
                    write!(f, "NaN")
                } else if nf.is_infinite() {
                    write!(f, "{}Infinity", if *nf < 0.0 { "-" } else { "" })
                } else if *nf == 0.0 {
                    // -0 prints as 0
                    write!(f, "0")
                } else if nf.fract() == 0.0 && nf.abs() < 1e15 {
                    write!(f, "{:.0}", nf)
                } else {
                    write!(f, "{}", nf)
                }
            }
        }
    }
}

pub enum JsValue {
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Number(JsNumberType),
    Function(Rc<FunctionObject>),
}
impl JsValue {
    pub fn from_literal(literal: &LiteralType) -> Self {
        match literal {
            LiteralType::Undefined => JsValue::Undefined,
            LiteralType::Null => JsValue::Null,
            LiteralType::Boolean(b) => JsValue::Boolean(*b),
            LiteralType::Integer(i) => JsValue::Number(JsNumberType::Integer(*i)),
            LiteralType::Float(f) => JsValue::Number(JsNumberType::Float(*f)),
            LiteralType::String(s) => JsValue::String(s.clone()),
        }
    }
}
impl Clone for JsValue {
    fn clone(&self) -> Self {
        match self {
            JsValue::Undefined => JsValue::Undefined,
            JsValue::Null => JsValue::Null,
            JsValue::Boolean(b) => JsValue::Boolean(*b),
            JsValue::String(s) => JsValue::String(s.to_string()),
            JsValue::Number(n) => JsValue::Number(n.clone()),
            JsValue::Function(f) => JsValue::Function(f.clone()),
        }
    }
}

/// Formats the way `console.log` prints a value.
impl Display for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "{}", TYPE_STR_UNDEFINED),
            JsValue::Null => write!(f, "{}", TYPE_STR_NULL),
            JsValue::Boolean(b) => write!(f, "{}", b),
            JsValue::String(s) => write!(f, "{}", s),
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::Function(func) => write!(f, "[Function: {}]", func.name),
        }
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "JsValue::Undefined"),
            JsValue::Null => write!(f, "JsValue::Null"),
            JsValue::Boolean(b) => write!(f, "JsValue::Boolean({})", b),
            JsValue::String(s) => write!(f, "JsValue::String({:?})", s),
            JsValue::Number(n) => write!(f, "JsValue::Number({:?})", n),
            JsValue::Function(func) => write!(f, "JsValue::Function({})", func.name),
        }
    }
}

/// Strict equality (`===`). Integers and floats compare numerically.
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Number(JsNumberType::Integer(a)), JsValue::Number(JsNumberType::Integer(b))) => {
                a == b
            }
            (JsValue::Number(a), JsValue::Number(b)) => a.as_f64() == b.as_f64(),
            (JsValue::Function(a), JsValue::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
