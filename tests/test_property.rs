// Property tests for hoisting and dead-zone rules.
//
// Names and values are generated; the shape of each program is fixed.

extern crate hoist;

use hoist::program::ast::{ExpressionType as E, Program, StatementType as S};
use hoist::runner::ds::error::ResolveError;
use hoist::runner::ds::value::{JsNumberType, JsValue};
use hoist::runner::{evaluate, EvalConfig};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn var_read_before_declaration_is_undefined(name in name_strategy(), v in any::<i64>()) {
        let program = Program::new(vec![S::log_ident(name.clone()), S::var(name.clone(), E::int(v))]);
        let evaluation = evaluate(&program, &EvalConfig::default()).unwrap();
        prop_assert_eq!(evaluation.values_of(&name), vec![JsValue::Undefined]);
    }

    #[test]
    fn var_read_before_declaration_inside_function_is_undefined(
        name in name_strategy(),
        outer in any::<i64>(),
        inner in any::<i64>(),
    ) {
        prop_assume!(name != "f");
        let program = Program::new(vec![
            S::var(name.clone(), E::int(outer)),
            S::function("f", vec![
                S::log_ident(name.clone()),
                S::block(vec![S::var(name.clone(), E::int(inner))]),
                S::log_ident(name.clone()),
            ]),
            S::call("f"),
        ]);
        let evaluation = evaluate(&program, &EvalConfig::default()).unwrap();
        prop_assert_eq!(
            evaluation.values_of(&name),
            vec![JsValue::Undefined, JsValue::Number(JsNumberType::Integer(inner))]
        );
    }

    #[test]
    fn let_read_before_declaration_fails(name in name_strategy(), v in any::<i64>(), nested in any::<bool>()) {
        let body = vec![S::log_ident(name.clone()), S::let_(name.clone(), E::int(v))];
        let program = if nested {
            Program::new(vec![S::block(body)])
        } else {
            Program::new(body)
        };
        let result = evaluate(&program, &EvalConfig::default());
        prop_assert_eq!(result.unwrap_err(), ResolveError::UninitializedAccess(name));
    }

    #[test]
    fn let_in_block_never_overrides_outer(name in name_strategy(), outer in any::<bool>(), taken in any::<bool>()) {
        let program = Program::new(vec![
            S::let_(name.clone(), E::boolean(outer)),
            S::if_(E::boolean(taken), vec![S::let_(name.clone(), E::boolean(!outer))]),
            S::log_ident(name.clone()),
        ]);
        let evaluation = evaluate(&program, &EvalConfig::default()).unwrap();
        prop_assert_eq!(evaluation.last_value_of(&name), Some(JsValue::Boolean(outer)));
    }

    #[test]
    fn last_var_declaration_wins(name in name_strategy(), values in prop::collection::vec(any::<i64>(), 1..6)) {
        let mut body: Vec<S> = values.iter().map(|v| S::var(name.clone(), E::int(*v))).collect();
        body.push(S::log_ident(name.clone()));
        let evaluation = evaluate(&Program::new(body), &EvalConfig::default()).unwrap();
        let last = *values.last().unwrap();
        prop_assert_eq!(
            evaluation.last_value_of(&name),
            Some(JsValue::Number(JsNumberType::Integer(last)))
        );
    }
}
