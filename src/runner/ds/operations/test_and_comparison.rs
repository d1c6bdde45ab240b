use crate::runner::ds::value::{JsNumberType, JsValue};

pub fn to_boolean(value: &JsValue) -> bool {
    match value {
        JsValue::Undefined | JsValue::Null => false,
        JsValue::Boolean(b) => *b,
        JsValue::Number(JsNumberType::Integer(i)) => *i != 0,
        JsValue::Number(JsNumberType::Float(f)) => !(*f == 0.0 || f.is_nan()),
        JsValue::String(s) => !s.is_empty(),
        JsValue::Function(_) => true,
    }
}

/// `===`: values of different types are never equal, NaN never equals anything.
pub fn strict_equality_comparison(a: &JsValue, b: &JsValue) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values() {
        assert!(!to_boolean(&JsValue::Undefined));
        assert!(!to_boolean(&JsValue::Null));
        assert!(!to_boolean(&JsValue::Number(JsNumberType::Integer(0))));
        assert!(!to_boolean(&JsValue::Number(JsNumberType::Float(f64::NAN))));
        assert!(!to_boolean(&JsValue::String(String::new())));
        assert!(to_boolean(&JsValue::String("0".to_string())));
    }

    #[test]
    fn three_is_not_four() {
        let three = JsValue::Number(JsNumberType::Integer(3));
        let four = JsValue::Number(JsNumberType::Integer(4));
        assert!(!strict_equality_comparison(&three, &four));
        assert!(strict_equality_comparison(&three, &three.clone()));
    }
}
