//! Integration tests for rule evaluation with the built-in operators.

use json_logic::{evaluate, JsonLogicError, Value};
use serde_json::json;

fn check(rule: serde_json::Value, data: serde_json::Value, expected: serde_json::Value) {
    let result = evaluate(&Value::from(&rule), &Value::from(data))
        .unwrap_or_else(|e| panic!("evaluate({}) failed: {}", rule, e));
    assert_eq!(result, Value::from(expected), "rule: {}", rule);
}

fn eval(rule: serde_json::Value, data: serde_json::Value) -> Value {
    evaluate(&Value::from(&rule), &Value::from(data))
        .unwrap_or_else(|e| panic!("evaluate({}) failed: {}", rule, e))
}

fn check_err(rule: serde_json::Value, data: serde_json::Value) -> JsonLogicError {
    evaluate(&Value::from(&rule), &Value::from(data))
        .err()
        .unwrap_or_else(|| panic!("expected error for {}", rule))
}

// ----------------------------------------------------------------- Literals

#[test]
fn test_literals_ignore_context() {
    for literal in [
        json!(null),
        json!(true),
        json!(3.5),
        json!("x"),
        json!([]),
        json!([1, "a", [null]]),
        json!({}),
        json!({"a": 1, "b": {"var": "x"}}),
    ] {
        check(literal.clone(), json!({"x": 1}), literal);
    }
}

#[test]
fn test_arrays_with_operations_are_evaluated() {
    check(json!([1, {"var": "a"}, [{"+": [1, 1]}]]), json!({"a": "x"}), json!([1, "x", [2]]));
}

// ----------------------------------------------------------------- Variables

#[test]
fn test_var() {
    check(json!({"var": "a.b"}), json!({"a": {"b": 5}}), json!(5));
    check(json!({"var": "a.c"}), json!({"a": {"b": 5}}), json!(null));
    check(json!({"var": ["a.c", 42]}), json!({"a": {}}), json!(42));
    check(json!({"var": ["a"]}), json!({"a": 1}), json!(1));
    check(json!({"var": "a.1.b"}), json!({"a": [{}, {"b": "y"}]}), json!("y"));
    check(json!({"var": 1}), json!(["zero", "one"]), json!("one"));
    check(json!({"var": "1"}), json!(["zero", "one"]), json!("one"));
}

#[test]
fn test_var_whole_context() {
    check(json!({"var": ""}), json!({"a": 1}), json!({"a": 1}));
    check(json!({"var": []}), json!([1, 2]), json!([1, 2]));
    check(json!({"var": null}), json!("ctx"), json!("ctx"));
}

#[test]
fn test_var_present_null_is_not_replaced_by_default() {
    check(json!({"var": ["a", 1]}), json!({"a": null}), json!(null));
    check(json!({"var": ["a.b", 1]}), json!({"a": null}), json!(1));
}

#[test]
fn test_var_through_scalars_falls_back_to_default() {
    check(json!({"var": ["a.b", "d"]}), json!({"a": 5}), json!("d"));
    check(json!({"var": ["a", "d"]}), json!("str"), json!("d"));
    check(json!({"var": ["a", "d"]}), json!(null), json!("d"));
}

#[test]
fn test_var_with_computed_path() {
    check(
        json!({"var": {"cat": ["user.", {"var": "field"}]}}),
        json!({"field": "name", "user": {"name": "ann"}}),
        json!("ann"),
    );
}

#[test]
fn test_var_container_path_is_invalid() {
    let err = check_err(json!({"var": [["a"]]}), json!({"a": 1}));
    assert!(matches!(err, JsonLogicError::InvalidArgument { ref operator, .. } if operator == "var"));
}

#[test]
fn test_missing() {
    check(json!({"missing": ["a", "b"]}), json!({"a": 1}), json!(["b"]));
    check(json!({"missing": ["a", "b"]}), json!({"a": 1, "b": 2}), json!([]));
    check(json!({"missing": "a"}), json!({}), json!(["a"]));
    check(json!({"missing": ["a.b"]}), json!({"a": {"b": null}}), json!(["a.b"]));
    check(json!({"missing": [["a", "b"]]}), json!({"b": 0}), json!(["a"]));
}

#[test]
fn test_missing_with_merge() {
    check(
        json!({"missing": {"merge": ["vin", {"if": [{"var": "financing"}, ["apr"], []]}]}}),
        json!({"financing": true}),
        json!(["vin", "apr"]),
    );
    check(
        json!({"missing": {"merge": ["vin", {"if": [{"var": "financing"}, ["apr"], []]}]}}),
        json!({"financing": false, "vin": "x"}),
        json!([]),
    );
}

#[test]
fn test_missing_some() {
    check(json!({"missing_some": [1, ["a", "b", "c"]]}), json!({"a": "apple"}), json!([]));
    check(json!({"missing_some": [2, ["a", "b", "c"]]}), json!({"a": "apple"}), json!(["b", "c"]));
    check(
        json!({"missing_some": [2, ["a", "b", "c"]]}),
        json!({"a": "apple", "c": "carrot"}),
        json!([]),
    );
    check(json!({"missing_some": [0, ["a"]]}), json!({}), json!([]));
}

#[test]
fn test_missing_some_requires_path_array() {
    let err = check_err(json!({"missing_some": [1, "a"]}), json!({}));
    assert!(matches!(err, JsonLogicError::InvalidArgument { .. }));
}

// ----------------------------------------------------------------- Logic

#[test]
fn test_and() {
    check(json!({"and": [true, true]}), json!(null), json!(true));
    check(json!({"and": [true, false]}), json!(null), json!(false));
    check(json!({"and": [true, 1, "x", 0, "unreached"]}), json!(null), json!(0));
    check(json!({"and": [1, "x"]}), json!(null), json!("x"));
    check(json!({"and": [[], true]}), json!(null), json!([]));
}

#[test]
fn test_and_or_need_operands() {
    for rule in [json!({"and": []}), json!({"or": []})] {
        let err = check_err(rule, json!(null));
        assert!(matches!(err, JsonLogicError::EvaluationError(_)), "{:?}", err);
    }
    assert_eq!(
        check_err(json!({"and": []}), json!(null)).to_string(),
        "\"and\" needs at least one operand"
    );
}

#[test]
fn test_or() {
    check(json!({"or": [false, 0, "a"]}), json!(null), json!("a"));
    check(json!({"or": [false, 0, ""]}), json!(null), json!(""));
    check(json!({"or": [[], {}]}), json!(null), json!({}));
}

#[test]
fn test_not_and_double_not() {
    check(json!({"!": true}), json!(null), json!(false));
    check(json!({"!": [false]}), json!(null), json!(true));
    check(json!({"!": [[]]}), json!(null), json!(true));
    check(json!({"!": []}), json!(null), json!(true));
    check(json!({"!": [0, 1]}), json!(null), json!(true));
    check(json!({"!!": ["0"]}), json!(null), json!(true));
    check(json!({"!!": [[]]}), json!(null), json!(false));
    check(json!({"!!": [{}]}), json!(null), json!(true));
    check(json!({"!": {"var": "a"}}), json!({"a": 0}), json!(true));
}

// ----------------------------------------------------------------- Control

#[test]
fn test_if() {
    check(json!({"if": [true, "yes", "no"]}), json!(null), json!("yes"));
    check(json!({"if": [[], "yes", "no"]}), json!(null), json!("no"));
    check(json!({"if": [false, "a", true, "b", "c"]}), json!(null), json!("b"));
    check(json!({"if": [false, "a", false, "b", "c"]}), json!(null), json!("c"));
    check(json!({"if": [false, "a", false, "b"]}), json!(null), json!(null));
    check(json!({"if": [true, "a"]}), json!(null), json!("a"));
    check(json!({"if": ["only"]}), json!(null), json!("only"));
    check(json!({"if": []}), json!(null), json!(null));
    check(json!({"?:": [0, "a", "b"]}), json!(null), json!("b"));
}

#[test]
fn test_if_fizzbuzz() {
    let rule = json!({"if": [
        {"==": [{"%": [{"var": "i"}, 15]}, 0]}, "fizzbuzz",
        {"==": [{"%": [{"var": "i"}, 3]}, 0]}, "fizz",
        {"==": [{"%": [{"var": "i"}, 5]}, 0]}, "buzz",
        {"var": "i"}
    ]});
    check(rule.clone(), json!({"i": 1}), json!(1));
    check(rule.clone(), json!({"i": 3}), json!("fizz"));
    check(rule.clone(), json!({"i": 5}), json!("buzz"));
    check(rule, json!({"i": 30}), json!("fizzbuzz"));
}

// ----------------------------------------------------------------- Comparison

#[test]
fn test_loose_equality() {
    check(json!({"==": [1, "1"]}), json!(null), json!(true));
    check(json!({"==": [0, false]}), json!(null), json!(true));
    check(json!({"==": [null, false]}), json!(null), json!(false));
    check(json!({"==": [null, null]}), json!(null), json!(true));
    check(json!({"==": ["abc", "abc"]}), json!(null), json!(true));
    check(json!({"==": [[1, 2], ["1", 2]]}), json!(null), json!(true));
    check(json!({"==": [[1], 1]}), json!(null), json!(false));
    check(json!({"!=": [1, "2"]}), json!(null), json!(true));
    check(json!({"!=": [1, "1"]}), json!(null), json!(false));
}

#[test]
fn test_strict_equality() {
    check(json!({"===": [1, "1"]}), json!(null), json!(false));
    check(json!({"===": [1, 1.0]}), json!(null), json!(true));
    check(json!({"!==": [1, "1"]}), json!(null), json!(true));
    check(json!({"!==": [null, null]}), json!(null), json!(false));
}

// Objects compare structurally under both equality operators.
#[test]
fn test_object_equality_is_structural() {
    let a = json!({"a": 1, "b": [1, 2]});
    let b = json!({"b": [1, 2], "a": 1});
    let data = json!({"a": a, "b": b});
    check(json!({"==": [{"var": "a"}, {"var": "b"}]}), data.clone(), json!(true));
    check(json!({"===": [{"var": "a"}, {"var": "b"}]}), data.clone(), json!(true));
    check(json!({"==": [{"var": "a"}, {"var": "a.b"}]}), data, json!(false));
}

#[test]
fn test_ordering() {
    check(json!({">": [2, 1]}), json!(null), json!(true));
    check(json!({">=": [1, 1]}), json!(null), json!(true));
    check(json!({"<": [1, 2]}), json!(null), json!(true));
    check(json!({"<=": [2, 1]}), json!(null), json!(false));
    check(json!({"<": ["11", 2]}), json!(null), json!(false));
    check(json!({"<": ["11", "2"]}), json!(null), json!(true));
    check(json!({">": ["abc", 1]}), json!(null), json!(false));
    check(json!({"<": ["abc", 1]}), json!(null), json!(false));
    check(json!({"<=": [null, 0]}), json!(null), json!(true));
}

#[test]
fn test_between() {
    check(json!({"<": [1, 2, 3]}), json!(null), json!(true));
    check(json!({"<": [1, 1, 3]}), json!(null), json!(false));
    check(json!({"<": [1, 4, 3]}), json!(null), json!(false));
    check(json!({"<=": [1, 1, 3]}), json!(null), json!(true));
    check(json!({"<=": [1, 3, 3]}), json!(null), json!(true));
    check(json!({"<=": [1, 4, 3]}), json!(null), json!(false));
    check(json!({"<": [0, {"var": "temp"}, 100]}), json!({"temp": 37}), json!(true));
}

// ----------------------------------------------------------------- Arithmetic

#[test]
fn test_add() {
    check(json!({"+": [1, 2]}), json!(null), json!(3));
    check(json!({"+": [1, 2, 3, 4]}), json!(null), json!(10));
    check(json!({"+": ["1", "10.5"]}), json!(null), json!(11.5));
    check(json!({"+": "3.14"}), json!(null), json!(3.14));
    check(json!({"+": []}), json!(null), json!(0));
    check(json!({"+": [true, null]}), json!(null), json!(1));
    assert!(matches!(eval(json!({"+": [1, "x"]}), json!(null)), Value::Number(n) if n.is_nan()));
    check(json!({"+": ["0x1F"]}), json!(null), json!(31));
    check(json!({"+": ["0x10000000000000000"]}), json!(null), json!(18_446_744_073_709_551_616.0));
    assert!(matches!(eval(json!({"+": ["0x+1"]}), json!(null)), Value::Number(n) if n.is_nan()));
}

#[test]
fn test_subtract() {
    check(json!({"-": [4, 2]}), json!(null), json!(2));
    check(json!({"-": [2]}), json!(null), json!(-2));
    check(json!({"-": ["5", 1]}), json!(null), json!(4));
    check(json!({"-": [10, 1, 100]}), json!(null), json!(9));
}

#[test]
fn test_multiply() {
    check(json!({"*": [3, 2]}), json!(null), json!(6));
    check(json!({"*": [2, 2, 2, 2]}), json!(null), json!(16));
    check(json!({"*": ["1.5", 2]}), json!(null), json!(3));
    check(json!({"*": [5]}), json!(null), json!(5));
}

#[test]
fn test_divide() {
    check(json!({"/": [4, 2]}), json!(null), json!(2));
    check(json!({"/": [1, 4]}), json!(null), json!(0.25));
    assert_eq!(eval(json!({"/": [1, 0]}), json!(null)), Value::Number(f64::INFINITY));
    assert_eq!(eval(json!({"/": [-1, 0]}), json!(null)), Value::Number(f64::NEG_INFINITY));
    assert!(matches!(eval(json!({"/": [0, 0]}), json!(null)), Value::Number(n) if n.is_nan()));
}

#[test]
fn test_nan_never_equals_itself() {
    let nan = json!({"/": [0, 0]});
    check(json!({"==": [nan.clone(), nan.clone()]}), json!(null), json!(false));
    check(json!({"===": [nan.clone(), nan.clone()]}), json!(null), json!(false));
    check(json!({"!=": [nan.clone(), nan.clone()]}), json!(null), json!(true));
    check(json!({"<": [nan.clone(), 1]}), json!(null), json!(false));
    check(json!({">=": [nan.clone(), 1]}), json!(null), json!(false));
    check(json!({"!!": [nan]}), json!(null), json!(false));
}

#[test]
fn test_modulo() {
    check(json!({"%": [7, 3]}), json!(null), json!(1));
    check(json!({"%": [-7, 3]}), json!(null), json!(-1));
    check(json!({"%": [7.5, 2]}), json!(null), json!(1.5));
    assert!(matches!(eval(json!({"%": [1, 0]}), json!(null)), Value::Number(n) if n.is_nan()));
}

#[test]
fn test_min_max() {
    check(json!({"min": [3, 1, 2]}), json!(null), json!(1));
    check(json!({"max": [3, 1, "4"]}), json!(null), json!(4));
    assert_eq!(eval(json!({"min": []}), json!(null)), Value::Number(f64::INFINITY));
    assert_eq!(eval(json!({"max": []}), json!(null)), Value::Number(f64::NEG_INFINITY));
    assert!(matches!(eval(json!({"max": [1, "x", 3]}), json!(null)), Value::Number(n) if n.is_nan()));
}

// ----------------------------------------------------------------- Strings

#[test]
fn test_cat() {
    check(json!({"cat": ["I love", " pie"]}), json!(null), json!("I love pie"));
    check(json!({"cat": ["n=", 1, ", x=", 2.5]}), json!(null), json!("n=1, x=2.5"));
    check(json!({"cat": [null, true, [1, [2, null]]]}), json!(null), json!("nulltrue1,2,"));
    check(json!({"cat": "solo"}), json!(null), json!("solo"));
    check(json!({"cat": []}), json!(null), json!(""));
}

#[test]
fn test_substr() {
    check(json!({"substr": ["jsonlogic", 4]}), json!(null), json!("logic"));
    check(json!({"substr": ["jsonlogic", -5]}), json!(null), json!("logic"));
    check(json!({"substr": ["jsonlogic", 1, 3]}), json!(null), json!("son"));
    check(json!({"substr": ["jsonlogic", 4, -2]}), json!(null), json!("log"));
    check(json!({"substr": ["jsonlogic", 20]}), json!(null), json!(""));
    check(json!({"substr": ["jsonlogic", -20, 2]}), json!(null), json!("js"));
    check(json!({"substr": ["jsonlogic", 4, -10]}), json!(null), json!(""));
    check(json!({"substr": ["héllo", 1, 3]}), json!(null), json!("éll"));
    check(json!({"substr": [12345, "1", "2"]}), json!(null), json!("23"));
    check(json!({"substr": ["abc", 1, null]}), json!(null), json!("bc"));
}

#[test]
fn test_substr_rejects_non_numeric_positions() {
    let err = check_err(json!({"substr": ["abc", "x"]}), json!(null));
    assert!(matches!(err, JsonLogicError::InvalidArgument { ref operator, .. } if operator == "substr"));
    let err = check_err(json!({"substr": ["abc", 0, {}]}), json!(null));
    assert!(matches!(err, JsonLogicError::InvalidArgument { .. }));
}

#[test]
fn test_in() {
    check(json!({"in": ["Spring", "Springfield"]}), json!(null), json!(true));
    check(json!({"in": ["i", "team"]}), json!(null), json!(false));
    check(json!({"in": ["Ringo", ["John", "Paul", "George", "Ringo"]]}), json!(null), json!(true));
    check(json!({"in": ["1", [1, 2]]}), json!(null), json!(true));
    check(json!({"in": [1, "a1b"]}), json!(null), json!(true));
    check(json!({"in": ["a", null]}), json!(null), json!(false));
    check(json!({"in": ["a", {"a": 1, "b": 2}]}), json!(null), json!(false));
}

// ----------------------------------------------------------------- Arrays

#[test]
fn test_merge() {
    check(json!({"merge": [[1, 2], [3, 4]]}), json!(null), json!([1, 2, 3, 4]));
    check(json!({"merge": [1, 2, [3, 4]]}), json!(null), json!([1, 2, 3, 4]));
    check(json!({"merge": [[1, [2]], 3]}), json!(null), json!([1, [2], 3]));
    check(json!({"merge": []}), json!(null), json!([]));
}

#[test]
fn test_map() {
    check(
        json!({"map": [{"var": "items"}, {"*": [{"var": ""}, 2]}]}),
        json!({"items": [1, 2, 3]}),
        json!([2, 4, 6]),
    );
    check(json!({"map": [{"var": "x"}, {"var": ""}]}), json!({}), json!([]));
    check(
        json!({"map": [{"var": "rows"}, {"var": "a"}]}),
        json!({"rows": [{"a": 1}, {"a": 2}]}),
        json!([1, 2]),
    );
}

#[test]
fn test_scoped_context_is_the_element_only() {
    check(
        json!({"map": [{"var": "items"}, {"var": "outer"}]}),
        json!({"items": [1, 2], "outer": "x"}),
        json!([null, null]),
    );
}

#[test]
fn test_filter() {
    check(
        json!({"filter": [{"var": "n"}, {">=": [{"var": ""}, 2]}]}),
        json!({"n": [1, 2, 3]}),
        json!([2, 3]),
    );
    check(json!({"filter": [[0, 1, "", "a", [], [0]], {"var": ""}]}), json!(null), json!([1, "a", [0]]));
    check(json!({"filter": [5, true]}), json!(null), json!([]));
}

#[test]
fn test_reduce() {
    check(
        json!({"reduce": [
            {"var": "n"},
            {"+": [{"var": "current"}, {"var": "accumulator"}]},
            0
        ]}),
        json!({"n": [1, 2, 3, 4]}),
        json!(10),
    );
    check(
        json!({"reduce": [
            [2, 3],
            {"*": [{"var": "current"}, {"var": "accumulator"}]},
            {"var": "start"}
        ]}),
        json!({"start": 10}),
        json!(60),
    );
    check(json!({"reduce": [{"var": "none"}, {"var": "current"}, 7]}), json!({}), json!(7));
    check(json!({"reduce": [[], {"var": "current"}]}), json!({}), json!(null));
}

#[test]
fn test_all_some_none() {
    check(json!({"all": [[1, 2, 3], {">": [{"var": ""}, 0]}]}), json!(null), json!(true));
    check(json!({"all": [[1, 2, 3], {">": [{"var": ""}, 1]}]}), json!(null), json!(false));
    check(json!({"some": [[1, 2, 3], {">": [{"var": ""}, 2]}]}), json!(null), json!(true));
    check(json!({"some": [[1, 2, 3], {">": [{"var": ""}, 3]}]}), json!(null), json!(false));
    check(json!({"none": [[1, 2, 3], {">": [{"var": ""}, 3]}]}), json!(null), json!(true));
    check(json!({"none": [[1, 2, 3], {">": [{"var": ""}, 2]}]}), json!(null), json!(false));
}

#[test]
fn test_quantifiers_on_empty_arrays() {
    check(json!({"all": [[], false]}), json!(null), json!(true));
    check(json!({"none": [[], true]}), json!(null), json!(true));
    check(json!({"some": [[], true]}), json!(null), json!(false));
    check(json!({"all": [{"var": "missing"}, false]}), json!({}), json!(true));
}

#[test]
fn test_some_over_objects() {
    let data = json!({"pies": [
        {"filling": "pumpkin", "temp": 110},
        {"filling": "rhubarb", "temp": 210},
        {"filling": "apple", "temp": 310}
    ]});
    check(
        json!({"some": [{"var": "pies"}, {"==": [{"var": "filling"}, "apple"]}]}),
        data.clone(),
        json!(true),
    );
    check(
        json!({"all": [{"var": "pies"}, {">": [{"var": "temp"}, 200]}]}),
        data,
        json!(false),
    );
}

// ----------------------------------------------------------------- Misc

#[test]
fn test_log_passes_value_through() {
    check(json!({"log": "apple"}), json!(null), json!("apple"));
    check(json!({"log": [{"var": "a"}]}), json!({"a": [1]}), json!([1]));
}

#[test]
fn test_empty_values_as_context() {
    for data in [json!([]), json!({}), json!(""), json!(null)] {
        let truthy = data.is_object();
        check(json!({"var": "a"}), data.clone(), json!(null));
        check(json!({"!!": {"var": ""}}), data.clone(), json!(truthy));
        check(json!({"missing": ["a"]}), data.clone(), json!(["a"]));
        check(json!({"map": [{"var": ""}, 1]}), data.clone(), json!([]));
        check(json!({"all": [{"var": ""}, false]}), data, json!(true));
    }
}

// ----------------------------------------------------------------- Errors

#[test]
fn test_unknown_operator() {
    let err = check_err(json!({"and": [true, {"nope": [1]}]}), json!(null));
    assert_eq!(
        err,
        JsonLogicError::UnknownOperator { name: "nope".to_string(), path: "/and/1".to_string() }
    );
    assert_eq!(err.to_string(), "unknown operator \"nope\" at \"/and/1\"");
}

#[test]
fn test_unknown_operator_behind_short_circuit_is_not_reached() {
    check(json!({"or": [true, {"nope": [1]}]}), json!(null), json!(true));
    check(json!({"if": [false, {"nope": []}, "ok"]}), json!(null), json!("ok"));
}

#[test]
fn test_malformed_rule() {
    let err = check_err(json!({"var": {"a": 1, "b": 2}}), json!(null));
    assert!(matches!(err, JsonLogicError::MalformedRule { ref path, .. } if path == "/var"));
}
