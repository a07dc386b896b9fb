// Log format tests
use option_bitfield::common::log_format::LogFormat;

#[test]
fn test_log_format_usage() {
    let msg = LogFormat::call("Bitfield", "on", &[LogFormat::format_str_arg("h")]);
    assert_eq!(msg, "Bitfield::on('h')");

    let err = LogFormat::error("Bitfield", "deserialize", "missing field `options`");
    assert_eq!(err, "Bitfield::deserialize: missing field `options`");

    assert_eq!(LogFormat::format_register(5), "0b101");
}

// macros must compile with and without the logging feature
#[test]
fn test_macro_compilation() {
    option_bitfield::fn_log!("Test", "method", "arg1", "arg2");
    option_bitfield::err_log!("Test", "method", "error message");
}
