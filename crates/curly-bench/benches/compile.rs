//! Reference compilation, cold and through the plan cache.
//!
//! Template compilation is measured both against a fresh engine and against
//! one whose cache already holds every plan the template needs.

use curly::Engine;
use curly_bench::reference_fixtures;
use curly_bench::template_fixtures;
use curly_bench::Article;
use curly_bench::ReferenceFixture;
use curly_bench::TemplateFixture;
use curly_compiler::compile_reference;
use curly_compiler::PlanCache;
use curly_compiler::Reference;
use curly_presenter::Presenter;
use divan::Bencher;

fn main() {
    divan::main();
}

#[divan::bench(args = reference_fixtures())]
fn compile_single_reference(bencher: Bencher, fixture: &ReferenceFixture) {
    let reference = Reference::parse(fixture.text).unwrap();

    bencher.bench(|| {
        let plan = compile_reference(Article::descriptor(), divan::black_box(&reference));
        divan::black_box(plan.unwrap());
    });
}

#[divan::bench(args = reference_fixtures())]
fn parse_and_compile_reference(bencher: Bencher, fixture: &ReferenceFixture) {
    bencher.bench(|| {
        let reference = Reference::parse(divan::black_box(fixture.text)).unwrap();
        divan::black_box(compile_reference(Article::descriptor(), &reference).unwrap());
    });
}

#[divan::bench(args = reference_fixtures())]
fn cached_reference(bencher: Bencher, fixture: &ReferenceFixture) {
    let cache = PlanCache::default();
    cache.reference::<Article>(fixture.text).unwrap();

    bencher.bench(|| {
        divan::black_box(cache.reference::<Article>(divan::black_box(fixture.text)).unwrap());
    });
}

#[divan::bench(args = template_fixtures())]
fn compile_template_cold(bencher: Bencher, fixture: &TemplateFixture) {
    bencher
        .with_inputs(Engine::default)
        .bench_local_values(|engine| {
            divan::black_box(engine.compile::<Article>(&fixture.source).unwrap());
        });
}

#[divan::bench(args = template_fixtures())]
fn compile_template_warm(bencher: Bencher, fixture: &TemplateFixture) {
    let engine = Engine::default();
    engine.compile::<Article>(&fixture.source).unwrap();

    bencher.bench(|| {
        divan::black_box(engine.compile::<Article>(&fixture.source).unwrap());
    });
}
