use std::fs;

use lumen::{
    Context, Options,
    error::{LumenError, ParseError, RuntimeError},
    run_program, run_with_context,
};
use walkdir::WalkDir;

fn run_output(src: &str) -> String {
    match run_program(src, &Options::default()) {
        Ok(execution) => execution.output,
        Err(e) => panic!("Script failed: {e}\nSource:\n{src}"),
    }
}

fn run_err(src: &str) -> LumenError {
    match run_program(src, &Options::default()) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

#[test]
fn declarations_bind_kind_and_value() {
    assert_eq!(run_output("int x 5;\nprint x;"), "5\n");
    assert_eq!(run_output("str s \"hi\";\nprint s;"), "hi\n");
    assert_eq!(run_output("bool b true;\nprint b;"), "true\n");
    assert_eq!(run_output("var v 2.5;\nprint v;"), "2.5\n");
    assert_eq!(run_output("ary a[1, 2, 3];\nprint a;"), "[1, 2, 3]\n");
    assert_eq!(run_output("dic d{\"k\": \"v\";};\nprint d;"), "{\"k\": \"v\"}\n");
}

#[test]
fn static_reassignment_always_fails() {
    let err = run_err("static int c 1;\nc 2;");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::ImmutableAssignment { .. })));

    // The new value's type is irrelevant.
    let err = run_err("static var c 1;\nc \"other\";");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::ImmutableAssignment { .. })));

    // Writing through an index is still a write.
    let err = run_err("static ary a[1, 2];\na[0] = 9;");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::ImmutableAssignment { .. })));
}

#[test]
fn declared_kinds_are_enforced() {
    let err = run_err("int x 1;\nx \"two\";");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::TypeMismatch { .. })));

    let err = run_err("bool b 1;");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::TypeMismatch { .. })));

    // A var variable changes its runtime type freely.
    assert_eq!(run_output("var x 1;\nx \"two\";\nprint x;"), "two\n");
}

#[test]
fn juxtaposed_and_explicit_assignment_agree() {
    assert_eq!(run_output("int x 1;\nx 10;\nprint x;"), "10\n");
    assert_eq!(run_output("int y 1;\ny = 10;\nprint y;"), "10\n");
}

#[test]
fn redeclaration_in_same_scope_fails() {
    let err = run_err("int x 1;\nint x 2;");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::VariableRedeclared { .. })));

    let err = run_err("fun f() {\n};\nfun f() {\n};");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::VariableRedeclared { .. })));
}

#[test]
fn operator_precedence() {
    assert_eq!(run_output("print 1 + 2 * 3;"), "7\n");
    assert_eq!(run_output("print (1 + 2) * 3;"), "9\n");
}

#[test]
fn division_semantics() {
    // Integer division truncates toward zero.
    assert_eq!(run_output("print 10 / 3;"), "3\n");
    assert_eq!(run_output("print -7 / 2;"), "-3\n");
    // As soon as a real is involved, division is floating.
    assert_eq!(run_output("print 10.0 / 4;"), "2.5\n");

    let err = run_err("print 10 / 0;");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn goto_forward_skips_statements() {
    let src = "print \"one\";\ngoto end;\nprint \"never\";\nend:\nprint \"two\";";
    assert_eq!(run_output(src), "one\ntwo\n");
}

#[test]
fn goto_backward_re_executes_side_effects() {
    let src = r#"
int n 0;
retry:
n++;
print n;
if (n < 3) {
    goto retry;
};
"#;
    assert_eq!(run_output(src), "1\n2\n3\n");
}

#[test]
fn goto_jumps_out_of_nested_blocks() {
    let src = r#"
int i 0;
while (true) {
    i++;
    if (i == 2) {
        goto done;
    };
};
done:
print i;
"#;
    assert_eq!(run_output(src), "2\n");
}

#[test]
fn goto_within_a_block_stays_local() {
    // Both the label and the goto live in the while body's own sequence;
    // the loop keeps running afterwards.
    let src = r#"
int i 0;
int skipped 0;
while (i < 3) {
    i++;
    goto over;
    skipped++;
    over:
};
print i, skipped;
"#;
    assert_eq!(run_output(src), "3 0\n");
}

#[test]
fn unresolved_labels_fail() {
    let err = run_err("goto nowhere;");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::UnresolvedLabel { .. })));

    // Jumping into a function body from outside is not possible.
    let err = run_err("fun f() {\n    inside:\n    return;\n};\ngoto inside;");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::UnresolvedLabel { .. })));

    // Neither is jumping out of one.
    let err = run_err("top:\nfun f() {\n    goto top;\n};\nf();");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::UnresolvedLabel { .. })));
}

#[test]
fn duplicate_labels_fail() {
    let err = run_err("dup:\ndup:\nprint 1;");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::DuplicateLabel { .. })));
}

#[test]
fn array_and_dict_access_failures() {
    let err = run_err("ary a[1, 2, 3];\nprint a[5];");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::IndexOutOfRange { .. })));

    let err = run_err("dic d{\"k\": \"v\";};\nprint d[\"missing\"];");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::KeyNotFound { .. })));
}

#[test]
fn index_assignment_replaces_in_place() {
    assert_eq!(run_output("ary a[1, 2, 3];\na[1] = 42;\nprint a;"), "[1, 42, 3]\n");
    // Dictionary index assignment inserts missing keys.
    assert_eq!(run_output("dic d{\"k\": 1;};\nd[\"j\"] = 2;\nprint d[\"j\"];"), "2\n");
}

#[test]
fn call_arity_is_checked() {
    let src = "fun add(a, b) {\n    return a + b;\n};\nprint add(2);";
    let err = run_err(src);
    assert!(matches!(err, LumenError::Runtime(RuntimeError::CallError { .. })));

    let err = run_err("missing(1);");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::CallError { .. })));
}

#[test]
fn functions_return_values_or_nil() {
    let src = "fun add(a, b) {\n    return a + b;\n};\nprint add(2, 5);";
    assert_eq!(run_output(src), "7\n");

    let src = "fun noop() {\n    int x 1;\n};\nprint noop();";
    assert_eq!(run_output(src), "nil\n");

    let src = "fun f() {\n    return;\n};\nprint f();";
    assert_eq!(run_output(src), "nil\n");
}

#[test]
fn recursion_works() {
    let src = r#"
fun fact(n) {
    if (n <= 1) {
        return 1;
    };
    return n * fact(n - 1);
};
print fact(5);
"#;
    assert_eq!(run_output(src), "120\n");
}

#[test]
fn functions_see_globals_but_not_caller_locals() {
    let src = r#"
int counter 0;
fun bump() {
    counter += 1;
};
bump();
bump();
print counter;
"#;
    assert_eq!(run_output(src), "2\n");

    let src = r#"
fun shows() {
    print hidden;
};
fun caller() {
    int hidden 1;
    shows();
};
caller();
"#;
    let err = run_err(src);
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn return_outside_function_fails() {
    let err = run_err("return 1;");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::ReturnOutsideFunction { .. })));
}

#[test]
fn increments_and_compound_assignment() {
    assert_eq!(run_output("int x 5;\nx++;\nx++;\nx--;\nx += 10;\nx -= 2;\nprint x;"),
               "14\n");
}

#[test]
fn while_loops_run_to_completion() {
    let src = r#"
int sum 0;
int i 1;
while (i <= 5) {
    sum += i;
    i++;
};
print sum;
"#;
    assert_eq!(run_output(src), "15\n");
}

#[test]
fn if_else_chains() {
    let src = r#"
int score 85;
if (score >= 90) {
    print "A";
} else if (score >= 80) {
    print "B";
} else {
    print "C";
};
print "done";
"#;
    assert_eq!(run_output(src), "B\ndone\n");
}

#[test]
fn conditions_must_be_boolean() {
    let err = run_err("while (1) {\n};");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::TypeMismatch { .. })));

    let err = run_err("if (\"yes\") {\n};");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn logical_operators_short_circuit() {
    // The division by zero on the right is never evaluated.
    let src = "bool b false;\nif (b && 1 / 0 == 1) {\n    print \"no\";\n};\nprint \"ok\";";
    assert_eq!(run_output(src), "ok\n");

    let src = "bool b true;\nif (b || 1 / 0 == 1) {\n    print \"yes\";\n};";
    assert_eq!(run_output(src), "yes\n");

    let err = run_err("print 1 && true;");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn string_concatenation_and_comparison() {
    assert_eq!(run_output("print \"a\" + 1;"), "a1\n");
    assert_eq!(run_output("print 1 + \"a\";"), "1a\n");
    assert_eq!(run_output("print \"abc\" < \"abd\";"), "true\n");
    assert_eq!(run_output("print \"a\" == \"a\";"), "true\n");

    let err = run_err("print 1 < \"a\";");
    assert!(matches!(err, LumenError::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn print_joins_arguments_with_spaces() {
    assert_eq!(run_output("print 1, \"two\", true;"), "1 two true\n");
}

#[test]
fn missing_semicolon_after_block_is_an_error() {
    let err = run_err("if (true) {\n    print 1;\n}");
    assert!(matches!(err, LumenError::Parse(ParseError::MissingSemicolon { .. })));

    let err = run_err("int x 5");
    assert!(matches!(err, LumenError::Parse(ParseError::MissingSemicolon { .. })));
}

#[test]
fn malformed_conditions_are_ordinary_parse_errors() {
    let src = "int bmi 32;\nif (bmi > 30 {\n    print \"x\";\n};";
    let err = run_err(src);
    assert!(matches!(err, LumenError::Parse(_)));
}

#[test]
fn lex_failures_abort_before_execution() {
    let err = run_err("print \"unterminated;");
    assert!(matches!(err, LumenError::Lex(_)));

    let err = run_err("/* never closed\nprint 1;");
    assert!(matches!(err, LumenError::Lex(_)));
}

#[test]
fn random_module_is_deterministic_under_seed() {
    let src = r#"
#include <RANDOM>;
RANDOM.seed(42);
print RANDOM.randint(1, 6);
print RANDOM.randint(1, 6);
print RANDOM.random();
"#;
    assert_eq!(run_output(src), run_output(src));
}

#[test]
fn random_module_validates_ranges() {
    let src = "#include <RANDOM>;\nprint RANDOM.randint(6, 1);";
    let err = run_err(src);
    assert!(matches!(err, LumenError::Runtime(RuntimeError::InvalidRange { .. })));
}

#[test]
fn library_calls_require_an_include() {
    let err = run_err("print math.pi;");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::UnknownLibraryCall { .. })));

    // Including an unknown name parses fine; the call site fails.
    let err = run_err("#include <FOO>;\nfoo.bar();");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::UnknownLibraryCall { .. })));

    let err = run_err("#include <MATH>;\nprint math.tangent(1);");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::UnknownLibraryCall { .. })));
}

#[test]
fn module_names_are_case_insensitive() {
    let src = "#include <MATH>;\nprint MATH.factorial(3), Math.factorial(3), math.factorial(3);";
    assert_eq!(run_output(src), "6 6 6\n");
}

#[test]
fn math_module() {
    assert_eq!(run_output("#include <MATH>;\nprint math.sqrt(81);"), "9\n");
    assert_eq!(run_output("#include <MATH>;\nprint math.factorial(5);"), "120\n");
    assert_eq!(run_output("#include <MATH>;\nprint math.pow(2, 10);"), "1024\n");
    assert_eq!(run_output("#include <MATH>;\nprint math.pi > 3.14 && math.pi < 3.15;"),
               "true\n");

    let err = run_err("#include <MATH>;\nprint math.sqrt(0 - 9);");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn regex_module() {
    assert_eq!(run_output("#include <REGEX>;\nprint regex.findall(\"[0-9]+\", \"a1b22c333\");"),
               "[\"1\", \"22\", \"333\"]\n");
    assert_eq!(run_output("#include <REGEX>;\nprint regex.sub(\"[0-9]+\", \"#\", \"a1b22\");"),
               "a#b#\n");
    assert_eq!(run_output("#include <REGEX>;\nprint regex.split(\",\", \"a,b,c\");"),
               "[\"a\", \"b\", \"c\"]\n");
    assert_eq!(run_output("#include <REGEX>;\nprint regex.search(\"z+\", \"abc\");"), "nil\n");

    let err = run_err("#include <REGEX>;\nprint regex.search(\"(\", \"x\");");
    assert!(matches!(err,
                     LumenError::Runtime(RuntimeError::RegexSyntaxError { .. })));
}

#[test]
fn stdio_file_roundtrip() {
    let dir = std::env::temp_dir().join("lumen_stdio_test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("note.txt");
    let path_str = path.display().to_string();

    let src = format!("#include <STDIO>;\nSTDIO.write(\"{path_str}\", \"hello file\");\nprint STDIO.read(\"{path_str}\");\nSTDIO.remove(\"{path_str}\");");
    assert_eq!(run_output(&src), "hello file\n");
    assert!(!path.exists());

    let src = format!("#include <STDIO>;\nprint STDIO.read(\"{path_str}\");");
    let err = run_err(&src);
    assert!(matches!(err, LumenError::Runtime(RuntimeError::IoError { .. })));
}

#[test]
fn stdio_input_reads_supplied_lines() {
    let mut context = Context::captured();
    context.feed_input(vec!["Ada".to_string(), "36".to_string()]);

    let src = "#include <STDIO>;\nstr name STDIO.input(\"name: \");\nint age STDIO.inputInt();\nprint name, age;";
    run_with_context(src, &Options::default(), &mut context).unwrap();

    assert_eq!(context.take_output(), "name: Ada 36\n");
}

#[test]
fn info_os_and_date_modules_answer() {
    let src = r#"
#include <INFO>;
#include <OS>;
#include <DATE>;
print INFO.os();
print INFO.lmnver();
print OS.pathjoin("a", "b");
print DATE.datetime();
"#;
    let output = run_output(src);
    assert_eq!(output.lines().count(), 4);
    assert!(output.contains("a/b") || output.contains("a\\b"));
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "lmn"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_program(&source, &Options::default()) {
            panic!("Demo script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
