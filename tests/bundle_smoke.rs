// End-to-end bundling through the compiled binary.
//
// We use assert_cmd for spawning the binary and capturing output, and
// assert_fs fixtures (via tests/util.rs) so every run is hermetic.

use assert_cmd::prelude::*;
use std::process::Command;

mod util;

// Test: the full reference scenario. One resolvable fragment, one missing
// conditional fragment, a configured namespace, and fixed header/library
// lines must assemble in the documented order.
#[test]
fn test_reference_bundle_layout() {
    // Create the fixture with `a.h` present and `b.h` missing.
    let tmp = util::make_reference_fixture();

    // Run the binary against the default manifest name.
    Command::cargo_bin("voltron")
        .expect("bin")
        .current_dir(tmp.path())
        .assert()
        .success();

    // The bundled header must match the assembled layout byte for byte:
    // preamble, guard pair, libraries, namespace-wrapped body with the
    // empty conditional block for the missing fragment, closing brace,
    // terminal guard end.
    let bundled = std::fs::read_to_string(tmp.path().join("bundle.h")).expect("bundle.h");
    assert_eq!(
        bundled,
        "// generated\n\
         #ifndef _BUNDLE_H_\n\
         #define _BUNDLE_H_\n\n\
         #include <stdint.h>\n\n\
         namespace demo\n\
         {\n\
         struct A {};\n\
         #ifdef HAS_B\n\
         #endif\n\n\
         }\n\
         #endif"
    );

    // The unresolved conditional entry lands in the side-channel report.
    let errors = std::fs::read_to_string(tmp.path().join("errors.txt")).expect("errors.txt");
    assert_eq!(errors, "Could not write ./src/b.h\n");
}

// Test: the guard macro is derived from the output file name and appears
// exactly once as an #ifndef/#define pair, with a single terminal #endif.
#[test]
fn test_guard_naming_and_balance() {
    let tmp = util::make_reference_fixture();

    Command::cargo_bin("voltron")
        .expect("bin")
        .current_dir(tmp.path())
        .assert()
        .success();

    let bundled = std::fs::read_to_string(tmp.path().join("bundle.h")).expect("bundle.h");

    // Exactly one guard pair for `bundle.h` -> `_BUNDLE_H_`.
    assert_eq!(bundled.matches("#ifndef _BUNDLE_H_").count(), 1);
    assert_eq!(bundled.matches("#define _BUNDLE_H_").count(), 1);

    // The text ends on the guard's terminal #endif.
    assert!(bundled.ends_with("#endif"));
}

// Test: running the binary twice on unchanged inputs yields byte-identical
// output. Determinism is a required property, not a style choice.
#[test]
fn test_byte_identical_across_runs() {
    // Prepare one fixture reused by both runs.
    let tmp = util::make_reference_fixture();

    // Helper to run once and read the produced bundle.
    let run_once = || {
        Command::cargo_bin("voltron")
            .expect("bin")
            .current_dir(tmp.path())
            .assert()
            .success();
        std::fs::read(tmp.path().join("bundle.h")).expect("bundle.h")
    };

    // Execute two times and compare for perfect equality.
    let first = run_once();
    let second = run_once();
    assert_eq!(first, second, "bundle output should be deterministic");
}

// Test: an explicit manifest path as the positional argument overrides the
// default `voltron.txt` lookup.
#[test]
fn test_explicit_manifest_argument() {
    let tmp = util::make_reference_fixture();

    // Rename the manifest away from the default name.
    std::fs::rename(
        tmp.path().join("voltron.txt"),
        tmp.path().join("custom_manifest.txt"),
    )
    .expect("rename manifest");

    Command::cargo_bin("voltron")
        .expect("bin")
        .current_dir(tmp.path())
        .arg("custom_manifest.txt")
        .assert()
        .success();

    assert!(tmp.path().join("bundle.h").is_file());
}
