use logger_helper::mock::RecordingSink;
use logger_helper::{Args, CallLogger, LoggerConfig};
use logger_helper_sample::basic::{basic_class, basic_module};
use logger_helper_sample::error::BasicError;
use tracing::Level;

/// Wraps the whole module and drives every symbol with the default formats.
#[test]
fn test_basic_module_call_log() {
    let sink = RecordingSink::new();
    let logger = CallLogger::new(sink.clone(), Level::INFO);
    let mut module = basic_module();

    logger.wrap_namespace(&mut module, None);

    module
        .call(
            "basic_function",
            &Args::new().arg(10).arg(20).kwarg("c", 40).kwarg("d", "Test"),
        )
        .unwrap();
    let err = module.call("exception_function", &Args::new()).unwrap_err();
    assert!(err.is::<BasicError>());

    let instance = module
        .class("BasicClass")
        .unwrap()
        .instantiate(&Args::new())
        .unwrap();
    instance.call_method("method_1", &Args::new()).unwrap();
    instance.call_method("method_2", &Args::new()).unwrap();

    sink.assert_messages(&[
        "Calling basic.basic_function(a = 10, b = 20, c = 40, d = \"Test\", e = 2)",
        "Returned \"Test\" from basic.basic_function",
        "Calling basic.exception_function()",
        "Exception BasicError occurred in basic.exception_function, \"This is an exception\"",
        "Calling basic.BasicClass.method_1()",
        "Returned \"Test 1\" from basic.BasicClass.method_1",
        "Calling basic.BasicClass.method_2()",
        "Returned \"Test 2\" from basic.BasicClass.method_2",
    ]);
    assert!(sink.entries().iter().all(|(level, _)| *level == Level::INFO));
}

#[test]
fn test_basic_module_with_config() {
    let config = LoggerConfig::from_toml_str(
        r#"
        level = "warn"

        [formats]
        call_log_format = "-> {callable}({args})"
        argument_format = "{name}={value}"
        argument_separator = ","
        return_log_format = "<- {callable}: {value}"
        "#,
    )
    .unwrap();
    let sink = RecordingSink::new();
    let logger = CallLogger::from_config(sink.clone(), &config).unwrap();
    let mut module = basic_module();

    logger.wrap_namespace(&mut module, Some(&["basic_function"]));

    module
        .call("basic_function", &Args::new().arg(1).arg(2).arg(3))
        .unwrap();
    module.call("exception_function", &Args::new()).unwrap_err();

    sink.assert_messages(&[
        "-> basic.basic_function(a=1,b=2,c=3,d=1,e=2)",
        "<- basic.basic_function: \"Test\"",
    ]);
    assert_eq!(sink.entries()[0].0, Level::WARN);
}

#[test]
fn test_wrapped_class_keeps_original_untouched() {
    let sink = RecordingSink::new();
    let logger = CallLogger::new(sink.clone(), Level::DEBUG);
    let original = basic_class();

    let wrapped = logger.wrap_class(&original);

    original
        .instantiate(&Args::new())
        .unwrap()
        .call_method("method_1", &Args::new())
        .unwrap();
    assert!(sink.is_empty());

    wrapped
        .instantiate(&Args::new())
        .unwrap()
        .call_method("method_1", &Args::new())
        .unwrap();
    assert_eq!(sink.len(), 2);
}
