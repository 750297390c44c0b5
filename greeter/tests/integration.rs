//! Integration tests for greeter

use greeter::{
    Form, FormError, GreetError, GreetingRequest, TestBackend, TestBackendError, greet,
};

#[test]
fn test_greeting_scenarios() {
    assert_eq!(
        greet("Alice", 3).unwrap(),
        "Hello, Alice!Hello, Alice!Hello, Alice!"
    );
    assert_eq!(greet("<script>", 1).unwrap(), "Hello, &lt;script&gt;!");
    assert_eq!(greet("", 2).unwrap(), "Hello, !Hello, !");

    let err = greet("Bob", 0).unwrap_err();
    assert!(matches!(err, GreetError::InvalidArgument { .. }));
    assert_eq!(
        err.to_string(),
        "Greeting repetitions must be a positive integer."
    );
}

#[test]
fn test_form_with_test_backend() {
    let request = GreetingRequest::builder()
        .run(
            TestBackend::new()
                .with_text("name", "Alice")
                .with_int("repetitions", 3),
        )
        .unwrap();

    assert_eq!(request, GreetingRequest::new("Alice", 3));
    assert_eq!(
        request.respond().unwrap(),
        "Hello, Alice!Hello, Alice!Hello, Alice!"
    );
}

#[test]
fn test_defaults_fill_missing_fields() {
    let request = GreetingRequest::builder().run(TestBackend::new()).unwrap();

    assert_eq!(request, GreetingRequest::new("", 1));
    assert_eq!(request.respond().unwrap(), "Hello, !");
}

#[test]
fn test_strict_backend_reports_missing_field() {
    let err = GreetingRequest::builder()
        .run(TestBackend::new().strict().with_text("name", "Alice"))
        .unwrap_err();

    match err {
        FormError::Backend(inner) => {
            let inner = inner.downcast::<TestBackendError>().unwrap();
            assert!(
                matches!(inner, TestBackendError::MissingResponse(path) if path == "repetitions")
            );
        }
        other => panic!("Expected backend error, got {other:?}"),
    }
}

#[test]
fn test_slider_bounds_are_enforced_by_backend() {
    let err = GreetingRequest::builder()
        .run(
            TestBackend::new()
                .with_text("name", "Alice")
                .with_int("repetitions", 11),
        )
        .unwrap_err();

    assert!(
        err.to_string()
            .contains("Validation failed for 'repetitions': Value must be between 1 and 10")
    );
}

#[test]
fn test_suggestion_is_used_when_unanswered() {
    let request = GreetingRequest::builder()
        .suggest("name", "Carol")
        .suggest("repetitions", 2)
        .run(TestBackend::new())
        .unwrap();

    assert_eq!(request, GreetingRequest::new("Carol", 2));
}

#[test]
fn test_assumption_overrides_answer() {
    let request = GreetingRequest::builder()
        .assume("name", "Dave")
        .run(
            TestBackend::new()
                .with_text("name", "ignored")
                .with_int("repetitions", 1),
        )
        .unwrap();

    assert_eq!(request.name, "Dave");
}

#[test]
fn test_unknown_suggestion_is_ignored() {
    let builder = GreetingRequest::builder().suggest("nickname", "Al");
    assert_eq!(builder.definition().len(), GreetingRequest::form().len());
}

#[test]
fn test_markup_survives_form_round_trip_escaped() {
    let request = GreetingRequest::builder()
        .run(
            TestBackend::new()
                .with_text("name", "<img src=x onerror='alert(1)'>")
                .with_int("repetitions", 1),
        )
        .unwrap();

    assert_eq!(
        request.respond().unwrap(),
        "Hello, &lt;img src=x onerror=&#x27;alert(1)&#x27;&gt;!"
    );
}

#[test]
fn test_assumed_name_with_suggested_repetitions() {
    let request = GreetingRequest::builder()
        .assume(GreetingRequest::NAME, "<Eve>")
        .suggest(GreetingRequest::REPETITIONS, 2)
        .run(TestBackend::new().strict().with_int("repetitions", 2))
        .unwrap();

    assert_eq!(request, GreetingRequest::new("<Eve>", 2));
    assert_eq!(request.respond().unwrap(), "Hello, &lt;Eve&gt;!Hello, &lt;Eve&gt;!");
}

#[test]
fn test_assumed_name_is_never_asked_for() {
    let definition = GreetingRequest::builder()
        .assume(GreetingRequest::NAME, "Eve")
        .definition()
        .clone();

    assert!(definition.fields()[0].is_assumed());
    assert!(!definition.fields()[1].is_assumed());
}
