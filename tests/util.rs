//! Shared test utilities for integration tests
//!
//! Provides common fixture creation used across multiple test files. Each
//! fixture is a hermetic temp directory holding a manifest plus a small
//! fragment tree, so tests never depend on the developer's filesystem.

use assert_fs::prelude::*;

/// Create the reference bundle fixture: namespace `demo`, one header line,
/// one system library, fragment `a.h` present on disk, and a conditional
/// entry `b.h,HAS_B` whose fragment is intentionally missing.
pub fn make_reference_fixture() -> assert_fs::TempDir {
    // Initialize the temporary project root
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    // Write the manifest the binary picks up by default
    tmp.child("voltron.txt")
        .write_str(
            "source_path=./src/\n\
             output_header=bundle.h\n\
             namespace=demo\n\
             [HEADER]\n\
             // generated\n\
             [SYSTEM_LIBRARIES]\n\
             #include <stdint.h>\n\
             [INCLUSIONS]\n\
             a.h\n\
             b.h,HAS_B\n",
        )
        .expect("write manifest");

    // One self-guarded fragment that resolves
    tmp.child("src/a.h")
        .write_str(
            "#ifndef _A_H_\n\
             #define _A_H_\n\
             #include <vector>\n\
             struct A {};\n\
             #endif\n",
        )
        .expect("write a.h");

    // `b.h` is deliberately absent so the run records one unresolved entry

    // Return the prepared directory to the caller
    tmp
}
