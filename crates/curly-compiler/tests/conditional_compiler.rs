use std::sync::LazyLock;

use curly_compiler::compile_conditional;
use curly_compiler::ConditionalPlan;
use curly_compiler::CompileError;
use curly_compiler::Reason;
use curly_compiler::Reference;
use curly_compiler::RenderError;
use curly_presenter::Capability;
use curly_presenter::Presenter;
use curly_presenter::PresenterDescriptor;
use curly_presenter::PresenterError;
use curly_presenter::Value;

struct Checks;

impl Presenter for Checks {
    fn descriptor() -> &'static PresenterDescriptor<Self> {
        static DESCRIPTOR: LazyLock<PresenterDescriptor<Checks>> = LazyLock::new(|| {
            PresenterDescriptor::builder("ChecksPresenter")
                .method(Capability::new("yes?"), |_, _| Ok(true.into()))
                .method(Capability::new("no?"), |_, _| Ok(false.into()))
                .method(Capability::new("nothing?"), |_, _| Ok(Value::Null))
                .method(Capability::new("empty?"), |_, _| Ok("".into()))
                .method(Capability::new("zero?"), |_, _| Ok(0.into()))
                .method(Capability::new("none?"), |_, _| {
                    Ok(Value::List(Vec::new()))
                })
                .method(Capability::new("even?").param(), |_, args| {
                    Ok((args.parse_positional::<i64>()? % 2 == 0).into())
                })
                .method(Capability::new("even").param(), |_, _| Ok(true.into()))
                .method(
                    Capability::new("square?").keyword("width").keyword("height"),
                    |_, args| {
                        let width = args.parse_keyword::<u32>("width")?;
                        let height = args.parse_keyword::<u32>("height")?;
                        Ok((width == height).into())
                    },
                )
                .method(Capability::new("broken?"), |_, _| {
                    Err(PresenterError::failed("database unavailable"))
                })
                .build()
        });
        &DESCRIPTOR
    }
}

fn compile(text: &str) -> Result<ConditionalPlan, CompileError> {
    compile_conditional(Checks::descriptor(), &Reference::parse(text).unwrap())
}

fn evaluate(text: &str) -> bool {
    compile(text).unwrap().execute(&Checks).unwrap()
}

#[test]
fn compiles_a_simple_conditional() {
    assert!(evaluate("yes?"));
    assert!(!evaluate("no?"));
}

#[test]
fn allows_a_parameter() {
    assert!(evaluate("even.42?"));
    assert!(!evaluate("even.7?"));
}

#[test]
fn allows_attributes() {
    assert!(evaluate("square? width=2 height=2"));
    assert!(!evaluate("square? width=2 height=3"));
}

#[test]
fn only_false_and_null_are_falsy() {
    assert!(!evaluate("nothing?"));
    assert!(evaluate("empty?"));
    assert!(evaluate("zero?"));
    assert!(evaluate("none?"));
}

#[test]
fn fails_if_the_reference_does_not_end_with_a_question_mark() {
    for text in ["even.42", "even"] {
        let err = compile(text).unwrap_err();
        assert_eq!(
            err.reason,
            Reason::NotBooleanShaped {
                identifier: "even".to_string(),
            }
        );
    }
}

#[test]
fn shape_is_checked_before_anything_else() {
    let err = compile("unknown extra=1").unwrap_err();
    assert_eq!(err.diagnostic_code(), "C107");
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid reference `unknown extra=1`: conditional `unknown` must end with `?`"
    );
}

#[test]
fn signature_checks_still_apply() {
    assert!(matches!(
        compile("even?").unwrap_err().reason,
        Reason::MissingParameter { .. }
    ));
    assert!(matches!(
        compile("yes.please?").unwrap_err().reason,
        Reason::UnexpectedParameter { .. }
    ));
    assert!(matches!(
        compile("square? width=2").unwrap_err().reason,
        Reason::MissingRequiredAttribute { .. }
    ));
}

#[test]
fn presenter_faults_propagate() {
    let plan = compile("broken?").unwrap();
    assert_eq!(
        plan.execute(&Checks),
        Err(RenderError::Presenter(PresenterError::failed(
            "database unavailable"
        )))
    );

    let plan = compile("even.forty?").unwrap();
    assert!(matches!(
        plan.execute(&Checks),
        Err(RenderError::Presenter(PresenterError::InvalidArgument { .. }))
    ));
}

#[test]
fn plan_exposes_the_underlying_call() {
    let plan = compile("even.42?").unwrap();
    assert_eq!(plan.plan().identifier(), "even?");
    assert_eq!(plan.plan().argument(), Some("42"));
    assert!(plan.plan().keywords().is_empty());
}
