use curly::Engine;
use curly_bench::template_fixtures;
use curly_bench::Article;
use curly_bench::TemplateFixture;
use curly_compiler::compile_conditional;
use curly_compiler::Reference;
use curly_presenter::Presenter;
use divan::Bencher;

fn main() {
    divan::main();
}

#[divan::bench(args = template_fixtures())]
fn render_template(bencher: Bencher, fixture: &TemplateFixture) {
    let engine = Engine::default();
    let template = engine.compile::<Article>(&fixture.source).unwrap();
    let article = Article::sample();

    bencher.bench(|| {
        divan::black_box(template.render(divan::black_box(&article)).unwrap());
    });
}

#[divan::bench]
fn evaluate_conditional(bencher: Bencher) {
    let reference = Reference::parse("published?").unwrap();
    let plan = compile_conditional(Article::descriptor(), &reference).unwrap();
    let article = Article::sample();

    bencher.bench(|| divan::black_box(plan.execute(divan::black_box(&article)).unwrap()));
}
