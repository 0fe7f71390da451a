#![allow(clippy::incompatible_msrv)]
// ^need 1.66 for `black_box`

use grokit::GrokCompiler;

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_simple_pattern_match(b: divan::Bencher) {
    let mut compiler = GrokCompiler::empty();
    compiler.register("USERNAME", r"[a-zA-Z0-9._-]+");
    let grok = compiler.compile("%{USERNAME}").expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against("user")));
}

#[divan::bench]
fn bench_simple_pattern_no_match(b: divan::Bencher) {
    let mut compiler = GrokCompiler::empty();
    compiler.register("USERNAME", r"[a-zA-Z0-9._-]+");
    let grok = compiler.compile("%{USERNAME}").expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against("$$$$")));
}

#[divan::bench]
fn bench_simple_pattern_match_with_anchor(b: divan::Bencher) {
    let mut compiler = GrokCompiler::empty();
    compiler.register("USERNAME", r"[a-zA-Z0-9._-]+");
    let grok = compiler.compile("^%{USERNAME}$").expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against("user")));
}

#[divan::bench]
fn bench_simple_pattern_no_match_with_anchor(b: divan::Bencher) {
    let mut compiler = GrokCompiler::empty();
    compiler.register("USERNAME", r"[a-zA-Z0-9._-]+");
    let grok = compiler.compile("^%{USERNAME}$").expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against("$$$$")));
}
