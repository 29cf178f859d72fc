/// Target used for events that should be rendered as a completed step.
pub const SUCCESS_TARGET: &str = "scopa::success";

/// Target used for events whose `raw_msg` field is written to the terminal verbatim.
pub const PRINT_TARGET: &str = "scopa::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
