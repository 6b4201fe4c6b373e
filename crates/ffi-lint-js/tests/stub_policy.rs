//! End-to-end checks of the FFI stub policy through the engine.

use std::fs;
use std::path::Path;

use ffi_lint_core::{Config, Diagnostic, Severity};
use ffi_lint_js::{Analyzer, Engine};
use ffi_lint_rules::all_rules;
use tempfile::TempDir;

fn check(source: &str) -> Vec<Diagnostic> {
    let engine = Engine::builder().rules(all_rules()).build();
    engine
        .check_source(Path::new("src/ffi.js"), source)
        .expect("check failed")
}

#[test]
fn clean_stub_file_passes() {
    let source = r#"
import { PDFDocument } from "pdf-lib";

export const createDocument = () => PDFDocument.create();
export const foo = (x) => () => lib.method(x);
"#;
    assert!(check(source).is_empty());
}

#[test]
fn helper_with_array_method_yields_two_diagnostics() {
    let diagnostics = check("function helper(x) { return x.map(y => y); }");
    assert_eq!(diagnostics.len(), 2);

    let helper = diagnostics
        .iter()
        .find(|d| d.message_id == "helperFunction")
        .expect("missing helperFunction diagnostic");
    assert_eq!(helper.data.get("name").map(String::as_str), Some("helper"));

    let array = diagnostics
        .iter()
        .find(|d| d.message_id == "arrayMethod")
        .expect("missing arrayMethod diagnostic");
    assert_eq!(array.data.get("method").map(String::as_str), Some("map"));
}

#[test]
fn local_import_is_flagged_with_source() {
    let diagnostics = check(r#"import { helper } from "../../js/utils.js";"#);
    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics[0];
    assert_eq!(d.code, "FFI002");
    assert_eq!(d.rule, "no-local-imports");
    assert_eq!(d.message_id, "noLocalImport");
    assert_eq!(
        d.data.get("source").map(String::as_str),
        Some("../../js/utils.js")
    );
    assert_eq!(d.location.line, 1);
}

#[test]
fn all_three_import_mechanisms_have_distinct_messages() {
    let diagnostics = check(
        r#"
import a from "./a";
const b = require("./b");
const c = import("./c");
"#,
    );
    let ids: Vec<&str> = diagnostics.iter().map(|d| d.message_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["noLocalImport", "noLocalRequire", "noLocalDynamicImport"]
    );
}

#[test]
fn mixed_file_reports_everything_in_order() {
    let source = r#"
import { helper } from "./utils.js";

export function wrap(x) {
    if (x) {
        return x ? lib.a() : lib.b();
    }
    for (const y of x) {
        lib.consume(y);
    }
    return x.filter(Boolean);
}
"#;
    let diagnostics = check(source);
    let ids: Vec<&str> = diagnostics.iter().map(|d| d.message_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["noLocalImport", "ifStatement", "ternary", "loop", "arrayMethod"]
    );

    // Positions are ascending.
    let lines: Vec<usize> = diagnostics.iter().map(|d| d.location.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn disabling_a_rule_silences_it() {
    let config =
        Config::parse("[rules.no-logic]\nenabled = false\n").expect("config parse failed");
    let engine = Engine::builder().rules(all_rules()).config(config).build();
    let diagnostics = engine
        .check_source(
            Path::new("src/ffi.js"),
            r#"import a from "./a"; if (x) { }"#,
        )
        .expect("check failed");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, "no-local-imports");
}

#[test]
fn severity_override_applies_to_every_diagnostic_of_the_rule() {
    let config =
        Config::parse("[rules.no-logic]\nseverity = \"warning\"\n").expect("config parse failed");
    let engine = Engine::builder().rules(all_rules()).config(config).build();
    let diagnostics = engine
        .check_source(Path::new("src/ffi.js"), "if (a) { } switch (b) { }")
        .expect("check failed");
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
}

#[test]
fn analyzer_checks_a_directory_tree() {
    let tmp = TempDir::new().expect("tempdir failed");
    let ffi = tmp.path().join("src/ffi");
    fs::create_dir_all(&ffi).expect("mkdir failed");
    fs::write(
        ffi.join("pdf.js"),
        r#"import { PDFDocument } from "pdf-lib";
export const create = () => PDFDocument.create();
"#,
    )
    .expect("write failed");
    fs::write(
        ffi.join("bad.js"),
        r#"import { helper } from "./helpers.js";
function normalize(x) { return x; }
"#,
    )
    .expect("write failed");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rules(all_rules())
        .build()
        .expect("build failed");
    let result = analyzer.analyze().expect("analyze failed");

    assert_eq!(result.files_checked, 2);
    assert_eq!(result.diagnostics.len(), 2);
    assert!(result.has_errors());
    // Paths are reported relative to the root.
    assert!(result.diagnostics[0]
        .location
        .file
        .starts_with("src/ffi"));
}
