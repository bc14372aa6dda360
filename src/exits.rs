//! Process hardening and signal handling.

/// Restore cooked mode directly through termios. Async-signal-safe.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: leave the terminal usable, then exit with 128 + signal.
extern "C" fn signal_handler(sig: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h\r\n";
            libc::write(
                libc::STDOUT_FILENO,
                RESTORE.as_ptr() as *const libc::c_void,
                RESTORE.len(),
            );
        }
        libc::_exit(128 + sig);
    }
}

/// Keep generated passwords out of core dumps and away from ptrace.
pub fn harden() {
    unsafe {
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);

        let no_core = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        libc::setrlimit(libc::RLIMIT_CORE, &no_core);
    }
}

/// Install termination handlers. Call early in `main`.
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}
