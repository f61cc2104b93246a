use std::sync::atomic::{AtomicBool, Ordering};

static PRINT_OUT: AtomicBool = AtomicBool::new(false);

pub fn set_print_out(value: bool) {
    PRINT_OUT.store(value, Ordering::Relaxed);
}

pub fn get_print_out() -> bool {
    PRINT_OUT.load(Ordering::Relaxed)
}

/// if PRINT_OUT is true, print to stderr
/// otherwise the message is dropped.
/// stdout is reserved for the one verdict line, so this never touches it.
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => ({
	if $crate::log::get_print_out() {
	    eprintln!("[{}] {}", std::process::id(), format_args!($($arg)*));
	}
    })
}
