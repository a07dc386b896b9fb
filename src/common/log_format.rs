/// # Examples
/// ```
/// use option_bitfield::common::log_format::LogFormat;
///
/// let fn_message = LogFormat::call("Bitfield", "on", &["'debug'".to_string()]);
/// assert_eq!(fn_message, "Bitfield::on('debug')");
/// ```
pub struct LogFormat;

impl LogFormat {

    pub fn call(class: &str, fn_name: &str, args: &[String]) -> String {
        let args_str = args.join(", ");
        format!("{}::{}({})", class, fn_name, args_str)
    }

    /// # Examples
    /// ```
    /// use option_bitfield::common::log_format::LogFormat;
    ///
    /// let msg = LogFormat::error("Bitfield", "deserialize", "missing field `value`");
    /// assert_eq!(msg, "Bitfield::deserialize: missing field `value`");
    /// ```
    pub fn error(class: &str, fn_name: &str, message: &str) -> String {
        format!("{}::{}: {}", class, fn_name, message)
    }

    /// Format string argument for log output
    ///
    /// # Examples
    /// ```
    /// use option_bitfield::common::log_format::LogFormat;
    ///
    /// assert_eq!(LogFormat::format_str_arg("verbose"), "'verbose'");
    /// ```
    pub fn format_str_arg(s: &str) -> String {
        if s.chars().count() > 50 {
            let head: String = s.chars().take(47).collect();
            format!("'{}'...", head)
        } else {
            format!("'{}'", s)
        }
    }

    /// Format a register value for log output
    ///
    /// # Examples
    /// ```
    /// use option_bitfield::common::log_format::LogFormat;
    ///
    /// assert_eq!(LogFormat::format_register(144), "0b10010000");
    /// assert_eq!(LogFormat::format_register(0), "0b0");
    /// ```
    pub fn format_register(value: u64) -> String {
        format!("{:#b}", value)
    }
}

/// Log macro: fn call
///
/// # Examples
/// ```ignore
/// use crate::fn_log;
///
/// fn_log!("Bitfield", "on", "verbose");
/// // Logs: Bitfield::on('verbose')
/// ```
#[macro_export]
macro_rules! fn_log {
    ($class:expr, $fun:expr $(, $arg:expr)*) => {{
        #[cfg(feature = "logging")]
        {
            let args: Vec<String> = vec![
                $(
                    $crate::common::log_format::LogFormat::format_str_arg($arg),
                )*
            ];
            log::debug!("{}", $crate::common::log_format::LogFormat::call($class, $fun, &args));
        }
    }};
}

/// Log macro: a failure the caller does not see as an error
///
/// # Examples
/// ```ignore
/// use crate::err_log;
///
/// err_log!("Bitfield", "deserialize", "missing field `options`");
/// // Logs: Bitfield::deserialize: missing field `options`
/// ```
#[macro_export]
macro_rules! err_log {
    ($class:expr, $fun:expr, $msg:expr) => {{
        #[cfg(feature = "logging")]
        {
            log::warn!("{}", $crate::common::log_format::LogFormat::error($class, $fun, $msg));
        }
    }};
}
