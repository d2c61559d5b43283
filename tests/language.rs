use std::fs::{self};

use quill::{get_result, interpreter::value::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_quill_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, true) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No quill examples found in book/src");
}

fn extract_quill_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```quill") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, true) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, true).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_value(src: &str, expected: Value) {
    match get_result(src, true) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_int(src: &str, expected: i64) {
    assert_value(src, Value::Int(expected));
}

fn assert_bool(src: &str, expected: bool) {
    assert_value(src, Value::Bool(expected));
}

fn assert_unit(src: &str) {
    assert_value(src, Value::Unit);
}

#[test]
fn declaration_and_basic_arithmetic() {
    assert_int("var x = 1 + 2; x", 3);
    assert_int("var x = 7 * 9; x", 63);
    assert_int("var x = 8 - 5; x", 3);
    assert_int("var x = 10 / 3; x", 3);
    assert_int("var x = 10 % 3; x", 1);
    assert_int("-7 / 2", -3);
    assert_int("-7 % 2", -1);
}

#[test]
fn precedence_and_grouping() {
    assert_int("1 + 2 * 3", 7);
    assert_int("(1 + 2) * 3", 9);
    assert_int("1 - 2 - 3", -4);
    assert_int("2 * 3 % 4", 2);
    assert_bool("1 + 2 < 4 and 2 * 2 == 4", true);
    assert_bool("false and true or true", true);
    assert_bool("false and (true or true)", false);
}

#[test]
fn unary_operators() {
    assert_int("-5 + 2", -3);
    assert_int("- -5", 5);
    assert_bool("not true", false);
    assert_bool("not not true", true);
    assert_bool("not (1 < 2)", false);
    assert_int("var a = 4; -a * 2", -8);
}

#[test]
fn comparisons_and_equality() {
    assert_bool("2 < 3", true);
    assert_bool("3 > 2", true);
    assert_bool("2 <= 2", true);
    assert_bool("3 >= 4", false);
    assert_bool("2 != 3", true);
    assert_bool("2 == 2", true);
    assert_bool("false == false", true);
    assert_bool("{ } == { }", true);
}

#[test]
fn conditionals() {
    assert_int("if true then 1 else 2", 1);
    assert_int("if 1 > 2 then 1 else 2", 2);
    assert_int("var x = if 2 < 3 then { 7 } else { 11 }; x", 7);
    assert_int("if false then 1 else if true then 2 else 3", 2);
    assert_unit("if false then { }");
    assert_unit("var x = 0; if true then x = 1");
}

#[test]
fn blocks_and_results() {
    assert_int("{ 1; 2 }", 2);
    assert_unit("{ 1; 2; }");
    assert_unit("{ }");
    assert_int("var y = { var a = 1; var b = 2; a + b }; y", 3);
    assert_int("{ { 1 } { 2 } }", 2);
    assert_int("{ var a = 1; { a } a + 1 }", 2);
}

#[test]
fn scoping_and_shadowing() {
    assert_int("var x = 5; x", 5);
    assert_int("var x = 1; { var x = 2; x }", 2);
    assert_int("var x = 1; { var x = 2; }; x", 1);
    assert_int("var x = 1; { x = 2; }; x", 2);
    assert_int("var a = 1; var b = { var a = 10; a + 1 }; a + b", 12);
}

#[test]
fn while_loops() {
    assert_int("var i = 0; var sum = 0; while i < 5 do { i = i + 1; sum = sum + i; }; sum",
               15);
    assert_unit("var i = 3; while i > 0 do i = i - 1");
    assert_int("var i = 3; while false do i = 0; i", 3);
}

#[test]
fn annotated_declarations() {
    assert_int("var x: Int = 41; x + 1", 42);
    assert_bool("var b: Bool = 1 < 2; b", true);
    assert_unit("var u: Unit = { }; u");
}

#[test]
fn comments_are_ignored() {
    assert_int("// leading comment\nvar x = 1; # trailing\nx + 1 // done", 2);
}

#[test]
fn builtin_functions() {
    assert_unit("print_int(42)");
    assert_unit("print_bool(1 < 2)");
    assert_unit("print_int(1 + 2); print_bool(true);");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.quill").expect("missing file");
    assert_success(&script);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("var x = 1 / 0");
    assert_failure("var x = 1 % 0");
}

#[test]
fn overflow_is_error() {
    assert_failure("9223372036854775807 + 1");
    assert_failure("-9223372036854775807 - 2");
    assert_failure("9223372036854775808");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("foo == 1");
    assert_failure("var x = 5; y");
    assert_failure("{ var a = 1; }; a");
}

#[test]
fn type_errors_are_errors() {
    assert_failure("1 + true");
    assert_failure("not 1");
    assert_failure("-true");
    assert_failure("if 1 then 2 else 3");
    assert_failure("if true then 1 else false");
    assert_failure("if true then 1");
    assert_failure("while 1 do 2");
    assert_failure("var x: Int = true");
    assert_failure("var x: Text = 1");
    assert_failure("var x = 1; x = true");
    assert_failure("1 == true");
    assert_failure("print_int(true)");
    assert_failure("print_int(1, 2)");
}

#[test]
fn unknown_function_is_error() {
    assert_failure("launch(1)");
    assert_failure("var f = 1; f(2)");
}

#[test]
fn syntax_errors_are_errors() {
    assert_failure("");
    assert_failure("1 +");
    assert_failure("1 2");
    assert_failure("(1 + 2");
    assert_failure("{ 1 2 }");
    assert_failure("{ 1; ");
    assert_failure("1 + var x = 2");
    assert_failure("var if = 1");
    assert_failure("print_int()");
    assert_failure("1 $ 2");
}
