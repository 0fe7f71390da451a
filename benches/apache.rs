#![allow(clippy::incompatible_msrv)]
// ^need 1.66 for `black_box`

use grokit::GrokCompiler;

fn main() {
    divan::main();
}

#[divan::bench]
fn r#match(b: divan::Bencher) {
    let msg = r#"220.181.108.96 - - [13/Jun/2015:21:14:28 +0000] "GET /blog/geekery/xvfb-firefox.html HTTP/1.1" 200 10975 "-" "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)""#;

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r#"%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "%{WORD:verb} %{DATA:request} HTTP/%{NUMBER:httpversion}" %{NUMBER:response} %{NUMBER:bytes} %{QS:referrer} %{QS:agent}"#)
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn no_match_start(b: divan::Bencher) {
    let msg = r#"tash-scale11x/css/fonts/Roboto-Regular.ttf HTTP/1.1" 200 41820 "http://semicomplete.com/presentations/logs"#;

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r#"%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "%{WORD:verb} %{DATA:request} HTTP/%{NUMBER:httpversion}" %{NUMBER:response} %{NUMBER:bytes} %{QS:referrer} %{QS:agent}"#)
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn no_match_middle(b: divan::Bencher) {
    let msg = r#"220.181.108.96 - - [13/Jun/2015:21:14:28 +0000] "111 /blog/geekery/xvfb-firefox.html HTTP/1.1" 200 10975 "-" "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)""#;

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r#"%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "%{WORD:verb} %{DATA:request} HTTP/%{NUMBER:httpversion}" %{NUMBER:response} %{NUMBER:bytes} %{QS:referrer} %{QS:agent}"#)
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn no_match_end(b: divan::Bencher) {
    let msg = r#"220.181.108.96 - - [13/Jun/2015:21:14:28 +0000] "GET /blog/geekery/xvfb-firefox.html HTTP/1.1" 200 10975 "-" 1"#;

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r#"%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "%{WORD:verb} %{DATA:request} HTTP/%{NUMBER:httpversion}" %{NUMBER:response} %{NUMBER:bytes} %{QS:referrer} %{QS:agent}"#)
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn match_anchor(b: divan::Bencher) {
    let msg = r#"220.181.108.96 - - [13/Jun/2015:21:14:28 +0000] "GET /blog/geekery/xvfb-firefox.html HTTP/1.1" 200 10975 "-" "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)""#;

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r#"^%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "%{WORD:verb} %{DATA:request} HTTP/%{NUMBER:httpversion}" %{NUMBER:response} %{NUMBER:bytes} %{QS:referrer} %{QS:agent}$"#)
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn no_match_start_anchor(b: divan::Bencher) {
    let msg = r#"tash-scale11x/css/fonts/Roboto-Regular.ttf HTTP/1.1" 200 41820 "http://semicomplete.com/presentations/logs"#;

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r#"^%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "%{WORD:verb} %{DATA:request} HTTP/%{NUMBER:httpversion}" %{NUMBER:response} %{NUMBER:bytes} %{QS:referrer} %{QS:agent}$"#)
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn no_match_middle_anchor(b: divan::Bencher) {
    let msg = r#"220.181.108.96 - - [13/Jun/2015:21:14:28 +0000] "111 /blog/geekery/xvfb-firefox.html HTTP/1.1" 200 10975 "-" "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)""#;

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r#"^%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "%{WORD:verb} %{DATA:request} HTTP/%{NUMBER:httpversion}" %{NUMBER:response} %{NUMBER:bytes} %{QS:referrer} %{QS:agent}$"#)
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}

#[divan::bench]
fn no_match_end_anchor(b: divan::Bencher) {
    let msg = r#"220.181.108.96 - - [13/Jun/2015:21:14:28 +0000] "GET /blog/geekery/xvfb-firefox.html HTTP/1.1" 200 10975 "-" 1"#;

    let compiler = GrokCompiler::with_default_patterns();
    let grok = compiler.compile(r#"^%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "%{WORD:verb} %{DATA:request} HTTP/%{NUMBER:httpversion}" %{NUMBER:response} %{NUMBER:bytes} %{QS:referrer} %{QS:agent}$"#)
        .expect("Error while compiling!");

    b.bench(|| divan::black_box(grok.match_against(msg)));
}
