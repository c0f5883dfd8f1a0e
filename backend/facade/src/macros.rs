//! Convenience macros over the [`Logger`](crate::Logger) method surface.
//!
//! Each macro packs its trailing arguments into the slice-of-`Display`
//! contract, so call sites read like ordinary variadic logging:
//!
//! ```ignore
//! duolog::log_info!(logger, "session {} opened by {}", session_id, user);
//! ```

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.verbose($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! rlog_verbose {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.r_verbose($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! rlog_debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.r_debug($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! rlog_info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.r_info($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! rlog_warn {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.r_warn($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! rlog_error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.r_error($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! rlog_fatal {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.r_fatal($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::{LogContext, Logger};
    use std::sync::Arc;

    #[test]
    fn test_macros_compile_for_all_arities() {
        let ctx = Arc::new(LogContext::new());
        ctx.set_debug_override(false);
        let logger = Logger::new(ctx, "macro-test").unwrap();

        crate::log_verbose!(logger, "no args");
        crate::log_debug!(logger, "one {}", 1);
        crate::log_info!(logger, "two {} {}", 1, "second");
        crate::log_warn!(logger, "three {} {} {}", 1, 2.5, "third",);
        crate::log_error!(logger, "{}", "only");
        crate::rlog_verbose!(logger, "release no args");
        crate::rlog_debug!(logger, "release {}", 1);
        crate::rlog_info!(logger, "release {} {}", "a", "b");
        crate::rlog_warn!(logger, "release warn");
        crate::rlog_error!(logger, "release error {}", 404);
    }
}
