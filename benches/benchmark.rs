//! Performance benchmarks for wikichapter.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A synthetic chapter page in both wikitext and rendered HTML form
//! - Unbalanced template braces, where the brace matcher scans to the end
//!   of the text

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wikichapter::{
    extract_tables_markdown, normalize, parse_from_html, parse_from_wikitext,
    wikitext::braces::remove_templates,
};

const SAMPLE_WIKITEXT: &str = "{{Chapterinfobox
|title=Prologue: Girl from the Plains
|game=Fire Emblem: The Blazing Blade
|objective=Defeat the boss
|number of allowed units=1 unit
|units gained=[[Lyn]]
|boss name={{Unit|Batta}}
}}
{{Quote|Are you awake?}}
'''Prologue: Girl from the Plains''' is the first chapter of [[Fire Emblem: The Blazing Blade]].

== Story ==
[[Lyn]] finds a traveler collapsed on the plains of [[Sacae]].

== Strategy ==
* Move Lyn onto the fort.
* Attack the brigand with her [[Mani Katti|sword]].
{{Clear}}

== Enemies ==
{| class=\"wikitable\"
! Unit !! Class
|-
| Batta || Brigand
|}
";

const SAMPLE_HTML: &str = r#"
<html><body><div class="mw-parser-output">
    <aside class="portable-infobox">
        <h2 class="pi-title">Prologue: Girl from the Plains</h2>
        <img src="https://static.example/prologue.png" alt="Map">
        <div class="pi-data"><h3 class="pi-data-label">Game</h3><div class="pi-data-value">The Blazing Blade</div></div>
        <section class="pi-group">
            <h2 class="pi-header">Battle</h2>
            <div class="pi-data"><h3 class="pi-data-label">Objective</h3><div class="pi-data-value">Defeat the boss</div></div>
        </section>
    </aside>
    <h2><span class="mw-headline">Story</span></h2>
    <p>Lyn finds a traveler collapsed on the plains of Sacae.</p>
    <h2><span class="mw-headline">Strategy</span></h2>
    <ul><li>Move Lyn onto the fort.</li><li>Attack the brigand.</li></ul>
    <table class="wikitable">
        <tr><th>Unit</th><th>Class</th></tr>
        <tr><td>Batta</td><td>Brigand</td></tr>
    </table>
</div></body></html>
"#;

fn bench_parse_wikitext(c: &mut Criterion) {
    c.bench_function("parse_from_wikitext", |b| {
        b.iter(|| parse_from_wikitext(black_box(SAMPLE_WIKITEXT)));
    });
}

fn bench_parse_html(c: &mut Criterion) {
    c.bench_function("parse_from_html", |b| {
        b.iter(|| parse_from_html(black_box(SAMPLE_HTML)));
    });
    c.bench_function("extract_tables_markdown", |b| {
        b.iter(|| extract_tables_markdown(black_box(SAMPLE_HTML)));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let doc = parse_from_wikitext(SAMPLE_WIKITEXT);
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&doc)));
    });
}

fn bench_unbalanced_braces(c: &mut Criterion) {
    let mut group = c.benchmark_group("unbalanced_braces");

    for openers in [10usize, 100, 1000] {
        let text = "{{Unit|".repeat(openers);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("remove_templates", openers), &text, |b, text| {
            b.iter(|| remove_templates(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("parse_from_wikitext", openers), &text, |b, text| {
            b.iter(|| parse_from_wikitext(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_wikitext,
    bench_parse_html,
    bench_normalize,
    bench_unbalanced_braces
);
criterion_main!(benches);
