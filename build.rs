extern crate glob;

use glob::glob;
use std::env;
use std::fmt;
use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

/// Unlike the upstream `grok` crate this is grounded on (which flattens
/// every pattern file into `(name, body)` pairs at build time), the
/// repository parses pattern files lazily at runtime, so this build script
/// only has to embed each catalog file's *raw text*, keyed by its logical
/// file name. `patterns/junos .pattern` intentionally keeps its trailing
/// space so the embedded key matches the catalog entry in `src/catalog.rs`
/// verbatim.
fn main() {
    println!("cargo:rerun-if-changed=patterns");

    let mut files = glob("patterns/*.pattern")
        .unwrap()
        .map(|e| e.unwrap())
        .map(|path| {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let contents = fs::read_to_string(&path).unwrap();
            (name, contents)
        })
        .collect::<Vec<_>>();
    files.sort();

    let mut output = String::new();
    fmt::write(
        &mut output,
        format_args!("static EMBEDDED_PATTERN_FILES: &[(&str, &str)] = &[\n"),
    )
    .unwrap();
    for (name, contents) in &files {
        fmt::write(
            &mut output,
            format_args!("\t({name:?}, r#####\"{contents}\"#####),\n"),
        )
        .unwrap();
    }
    fmt::write(&mut output, format_args!("];\n")).unwrap();

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("embedded_patterns.rs");
    let mut file = File::create(&dest_path).unwrap();
    file.write_all(output.as_bytes()).unwrap();
}
