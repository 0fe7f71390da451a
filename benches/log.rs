#![allow(clippy::incompatible_msrv)]
// ^need 1.66 for `black_box`

use grokit::GrokCompiler;

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_log_match(b: divan::Bencher) {
    let msg = "2016-09-19T18:19:00 [8.8.8.8:prd] DEBUG this is an example log message";

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r"%{TIMESTAMP_ISO8601:timestamp} \[%{IPV4:ip}:%{WORD:environment}\] %{LOGLEVEL:log_level} %{GREEDYDATA:message}")
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn bench_log_no_match(b: divan::Bencher) {
    let msg = "2016-09-19T18:19:00 [8.8.8.8:prd] DEBUG this is an example log message";

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r"%{TIMESTAMP_ISO8601:timestamp} \[%{IPV4:ip};%{WORD:environment}\] %{LOGLEVEL:log_level} %{GREEDYDATA:message}")
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn bench_log_match_with_anchors(b: divan::Bencher) {
    let msg = "2016-09-19T18:19:00 [8.8.8.8:prd] DEBUG this is an example log message";

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r"^%{TIMESTAMP_ISO8601:timestamp} \[%{IPV4:ip}:%{WORD:environment}\] %{LOGLEVEL:log_level} %{GREEDYDATA:message}$")
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn bench_log_no_match_with_anchors(b: divan::Bencher) {
    let msg = "2016-09-19T18:19:00 [8.8.8.8;prd] DEBUG this is an example log message";

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r"^%{TIMESTAMP_ISO8601:timestamp} \[%{IPV4:ip}:%{WORD:environment}\] %{LOGLEVEL:log_level} %{GREEDYDATA:message}$")
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}
