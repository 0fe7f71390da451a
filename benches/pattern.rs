#![allow(clippy::incompatible_msrv)]
// ^need 1.66 for `black_box`

use grokit::GrokCompiler;

fn main() {
    divan::main();
}

#[divan::bench]
fn create_with_default_patterns(b: divan::Bencher) {
    let compiler = GrokCompiler::with_default_patterns();
    divan::black_box(&compiler);
    b.bench(|| {
        let compiler = GrokCompiler::with_default_patterns();
        divan::black_box(compiler);
    });
}

#[divan::bench]
fn parse_complex_pattern(b: divan::Bencher) {
    let compiler = GrokCompiler::with_default_patterns();
    b.bench(|| {
        compiler.clear_cache();
        let grok = compiler.compile("%{BACULA_LOGLINE}").unwrap();
        divan::black_box(grok);
    });
}

#[divan::bench]
fn parse_complex_pattern_cached(b: divan::Bencher) {
    let compiler = GrokCompiler::with_default_patterns();
    b.bench(|| {
        let grok = compiler.compile("%{BACULA_LOGLINE}").unwrap();
        divan::black_box(grok);
    });
}
