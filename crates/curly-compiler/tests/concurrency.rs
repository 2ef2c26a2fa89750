use std::sync::Arc;
use std::sync::LazyLock;
use std::thread;

use curly_compiler::InvocationPlan;
use curly_compiler::PlanCache;
use curly_presenter::Capability;
use curly_presenter::Presenter;
use curly_presenter::PresenterDescriptor;
use curly_presenter::Value;

struct Counter {
    start: i64,
}

impl Presenter for Counter {
    fn descriptor() -> &'static PresenterDescriptor<Self> {
        static DESCRIPTOR: LazyLock<PresenterDescriptor<Counter>> = LazyLock::new(|| {
            PresenterDescriptor::builder("CounterPresenter")
                .method(Capability::new("plus").param(), |counter: &Counter, args| {
                    Ok((counter.start + args.parse_positional::<i64>()?).into())
                })
                .build()
        });
        &DESCRIPTOR
    }
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn plans_and_cache_are_thread_safe() {
    assert_send_sync::<InvocationPlan>();
    assert_send_sync::<PlanCache>();
}

#[test]
fn racing_compilations_converge_on_one_plan() {
    let cache = PlanCache::default();

    let plans: Vec<Arc<InvocationPlan>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| cache.reference::<Counter>("plus.5").unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(cache.len(), 1);
    for plan in &plans {
        assert_eq!(**plan, *plans[0]);
    }
}

#[test]
fn one_plan_renders_for_many_presenters_concurrently() {
    let cache = PlanCache::default();
    let plan = cache.reference::<Counter>("plus.5").unwrap();

    let results: Vec<Value> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|start| {
                let plan = Arc::clone(&plan);
                scope.spawn(move || plan.execute(&Counter { start }).unwrap())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(
        results,
        vec![
            Value::from(5),
            Value::from(6),
            Value::from(7),
            Value::from(8)
        ]
    );
}
