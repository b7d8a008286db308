//! termios raw mode.

use crate::TerminalError;
use std::io;
use std::os::fd::RawFd;

/// Raw mode on a file descriptor; the original settings come back on drop.
pub struct RawMode {
    fd: RawFd,
    original: libc::termios,
    active: bool,
}

impl RawMode {
    pub fn enable() -> Result<Self, TerminalError> {
        Self::enable_fd(libc::STDIN_FILENO)
    }

    pub fn enable_fd(fd: RawFd) -> Result<Self, TerminalError> {
        // SAFETY: termios is plain old data; tcgetattr fully initializes it on success.
        let mut original: libc::termios = unsafe { std::mem::zeroed() };
        // SAFETY: `original` is a valid, writable termios.
        if unsafe { libc::tcgetattr(fd, &mut original) } == -1 {
            return Err(TerminalError::GetAttr(io::Error::last_os_error()));
        }
        let raw = make_raw(&original);
        // SAFETY: `raw` is a valid termios derived from the one the kernel returned.
        if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, &raw) } == -1 {
            return Err(TerminalError::SetAttr(io::Error::last_os_error()));
        }
        Ok(Self {
            fd,
            original,
            active: true,
        })
    }

    pub fn disable(&mut self) -> Result<(), TerminalError> {
        if !self.active {
            return Ok(());
        }
        // SAFETY: `original` was filled by tcgetattr on the same descriptor.
        if unsafe { libc::tcsetattr(self.fd, libc::TCSAFLUSH, &self.original) } == -1 {
            return Err(TerminalError::SetAttr(io::Error::last_os_error()));
        }
        self.active = false;
        Ok(())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = self.disable();
    }
}

/// Derive the editor's raw settings from `orig`.
///
/// Input: no break-to-SIGINT, no CR→NL, no parity check, no 8th-bit strip, no
/// XON/XOFF. Output: no post-processing. Control: 8-bit chars. Local: no echo,
/// no canonical mode, no Ctrl-V, no signal keys. Reads return after at most
/// 100 ms, possibly with zero bytes.
pub fn make_raw(orig: &libc::termios) -> libc::termios {
    let mut raw = *orig;
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    raw.c_oflag &= !libc::OPOST;
    raw.c_cflag |= libc::CS8;
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = 1;
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_raw_clears_exactly_the_editor_flags() {
        // SAFETY: termios is plain old data.
        let mut t: libc::termios = unsafe { std::mem::zeroed() };
        t.c_iflag = !0;
        t.c_oflag = !0;
        t.c_lflag = !0;
        t.c_cflag = 0;
        t.c_cc[libc::VMIN] = 1;
        t.c_cc[libc::VTIME] = 0;

        let raw = make_raw(&t);
        for flag in [libc::BRKINT, libc::ICRNL, libc::INPCK, libc::ISTRIP, libc::IXON] {
            assert_eq!(raw.c_iflag & flag, 0);
        }
        assert_ne!(raw.c_iflag & libc::IGNCR, 0, "unrelated input flags survive");
        assert_eq!(raw.c_oflag & libc::OPOST, 0);
        assert_eq!(raw.c_cflag & libc::CS8, libc::CS8);
        for flag in [libc::ECHO, libc::ICANON, libc::IEXTEN, libc::ISIG] {
            assert_eq!(raw.c_lflag & flag, 0);
        }
        assert_eq!(raw.c_cc[libc::VMIN], 0);
        assert_eq!(raw.c_cc[libc::VTIME], 1);
    }

    #[test]
    fn enable_on_a_non_tty_fails_with_getattr() {
        let file = std::fs::File::open("/dev/null").unwrap();
        use std::os::fd::AsRawFd;
        match RawMode::enable_fd(file.as_raw_fd()) {
            Err(TerminalError::GetAttr(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("/dev/null is not a terminal"),
        }
    }
}
