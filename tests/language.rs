use std::{fs, path::Path};

use pretty_assertions::assert_eq;
use tlang::{Error, get_result};
use walkdir::WalkDir;

#[test]
fn sample_scripts_print_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("scripts").into_iter()
                                        .filter_map(Result::ok)
                                        .filter(|e| e.path().extension().is_some_and(|ext| ext == "t"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_output(path);

        count += 1;
        match get_result(&source) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in scripts/");
}

fn expected_output(script: &Path) -> Vec<String> {
    let path = script.with_extension("out");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
                             .lines()
                             .map(str::to_string)
                             .collect()
}

fn assert_output(src: &str, expected: &[&str]) {
    match get_result(src) {
        Ok(output) => assert_eq!(output, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_runtime_error(src: &str, message: &str) {
    match get_result(src) {
        Err(Error::Runtime(e)) => assert_eq!(e.to_string(), message, "script: {src}"),
        Err(e) => panic!("Expected a runtime error, got: {e}"),
        Ok(output) => panic!("Script succeeded but was expected to fail, printed {output:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_output("println(5 * (2 * 1))", &["10"]);
    assert_output("println(50 / 2 * 10)", &["250"]);
    assert_output("println(-50 + 100 + -50)", &["0"]);
    assert_output("println(3 * (3 * 3) + 10)", &["37"]);
    assert_output("println((5 + 10 * 2 + 15 / 3) * 2 + -10)", &["50"]);
    assert_output("println(7 / 2, \" \", -7 / 2)", &["3 -3"]);
}

#[test]
fn boolean_expressions() {
    assert_output("println(1 < 2, 1 > 2, 1 == 1, 1 != 1)", &["truefalsetruefalse"]);
    assert_output("println(true == true, true != false, (1 < 2) == true)", &["truetruetrue"]);
    assert_output("println(!true, !!5, !0)", &["falsetruefalse"]);
}

#[test]
fn conditionals() {
    assert_output("println(if (1) { 10 })", &["10"]);
    assert_output("println(if (false) { 10 })", &["null"]);
    assert_output("println(if (1 > 2) { 10 } else { 20 })", &["20"]);
    assert_output("let x = 5; println(if (x < 0) { 1 } else if (x < 10) { 2 } else { 3 })",
                  &["2"]);
}

#[test]
fn scopes() {
    assert_output("let x = 1; if (true) { let x = 2; println(x); }; println(x)", &["2", "1"]);
    assert_output("let x = 1; if (true) { x = 2; }; println(x)", &["2"]);
    assert_runtime_error("if (true) { let hidden = 1; }; hidden", "identifier not found: hidden");
}

#[test]
fn closures() {
    assert_output("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); \
                   println(addTwo(2));",
                  &["4"]);
    assert_output("let apply = fn(f, v) { f(v) }; println(apply(fn(n) { n * n }, 9))", &["81"]);
}

#[test]
fn return_statements() {
    assert_output("let f = fn() { return 10; 9; }; println(f())", &["10"]);
    assert_output("let f = fn(x) { while (true) { return x; } }; println(f(3))", &["3"]);
    assert_output("println(1); return 2; println(3);", &["1"]);
}

#[test]
fn while_loops() {
    assert_output("let i = 0; while (i < 3) { println(i); i = i + 1; }", &["0", "1", "2"]);
    assert_output("let n = 0; while (n) { n = false; println(\"once\"); }", &["once"]);
}

#[test]
fn strings() {
    assert_output("println(\"Hello\" + \" \" + \"World!\")", &["Hello World!"]);
    assert_output("println(\"a\" != \"b\")", &["true"]);
    assert_runtime_error("\"a\" < \"b\"", "unknown operator: STRING < STRING");
}

#[test]
fn strings_compare_by_identity() {
    assert_output("println(\"a\" == \"a\"); let s = \"a\"; println(s == s);",
                  &["false", "true"]);
    assert_output("let s = \"a\"; let t = s; println(s == t, s != t, s == s + \"\")",
                  &["truefalsefalse"]);
}

#[test]
fn identity_equality() {
    assert_output("let f = fn() { 1 }; let g = f; println(f == g, f == fn() { 1 })",
                  &["truefalse"]);
    assert_output("println(1 == true, 1 != true, if (false) { 1 } == if (false) { 2 })",
                  &["falsetruetrue"]);
}

#[test]
fn type_mismatch_is_error() {
    assert_runtime_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("\"a\" * 2", "type mismatch: STRING * INTEGER");
}

#[test]
fn unknown_operator_is_error() {
    assert_runtime_error("-true", "unknown operator: -BOOLEAN");
    assert_runtime_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                         "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("\"Hello\" - \"World\"", "unknown operator: STRING - STRING");
}

#[test]
fn unknown_variable_is_error() {
    assert_runtime_error("foobar", "identifier not found: foobar");
    assert_runtime_error("foobar = 1;", "unknown identifier: foobar");
}

#[test]
fn division_by_zero_is_error() {
    assert_runtime_error("let x = 1 / 0", "division by zero");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_runtime_error("fn(x) { x }()", "wrong number of arguments: expected 1, got 0");
    assert_runtime_error("let f = fn(x, y) { x + y }; f(3)",
                         "wrong number of arguments: expected 2, got 1");
}

#[test]
fn calling_a_value_is_error() {
    assert_runtime_error("let x = true; x()", "not a function: BOOLEAN");
}

#[test]
fn parse_errors_are_all_reported() {
    match get_result("let = 5; let y = 10; let 838383;") {
        Err(Error::Parse(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected parse errors, got {other:?}"),
    }
}

#[test]
fn canonical_form_parses_back() {
    let source = "let f = fn(a, b) { if (a < b) { return -a * b; } else if (a == b) { 0 } \
                  else { println(\"x\", a); } }; while (f(1, 2) != 0) { f = 1; }";
    let (program, errors) = tlang::parse(source);
    assert!(errors.is_empty(), "{errors:?}");

    let printed = program.to_string();
    let (reparsed, errors) = tlang::parse(&printed);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(reparsed.to_string(), printed);
}
