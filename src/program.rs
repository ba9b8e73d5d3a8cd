//! Program startup and shutdown.
//!
//! This is the whole of the greeter: write [`GREETING`] to stdout with raw
//! `write` calls, and choose the status the program exits with.
//!
//! The command-line arguments and the environment are never consulted.

use crate::greeting::GREETING;
use rustix::fd::{AsFd, BorrowedFd};
use rustix::io::{self, Errno};

/// Write the greeting to `fd`.
///
/// On success, the returned count is always
/// [`GREETING_LEN`](crate::greeting::GREETING_LEN). See [`write_all`].
pub fn greet<Fd: AsFd>(fd: Fd) -> io::Result<usize> {
    let fd = fd.as_fd();
    write_all(GREETING, |buf| io::write(fd, buf))
}

/// Write all of `bytes` with repeated calls to `write`.
///
/// Short writes continue with the remaining bytes, and `EINTR` is retried.
/// A write that makes no progress fails with `EIO`. Nothing is buffered in
/// user space.
pub fn write_all<W>(bytes: &[u8], mut write: W) -> io::Result<usize>
where
    W: FnMut(&[u8]) -> io::Result<usize>,
{
    let mut remaining = bytes;
    while !remaining.is_empty() {
        match write(remaining) {
            Ok(0) => return Err(Errno::IO),
            Ok(n) => remaining = &remaining[n..],
            Err(Errno::INTR) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(bytes.len())
}

/// Choose the process exit status for the outcome of [`greet`].
///
/// A failed write is not reported unless the "report-write-errors" feature
/// is enabled.
#[inline]
pub fn exit_status(result: &io::Result<usize>) -> i32 {
    match result {
        Ok(_) => 0,
        #[cfg(feature = "report-write-errors")]
        Err(_) => 1,
        #[cfg(not(feature = "report-write-errors"))]
        Err(_) => 0,
    }
}

/// Write the greeting to stdout, and return the status to exit with.
pub fn main() -> i32 {
    let result = greet(stdout());

    #[cfg(feature = "log")]
    match &result {
        Ok(n) => log::debug!(target: "greeter::program", "Wrote {} bytes to stdout", n),
        Err(err) => log::warn!(target: "greeter::program", "Failed to write to stdout: {}", err),
    }

    let status = exit_status(&result);

    #[cfg(feature = "log")]
    log::trace!(target: "greeter::program", "Program exiting with status `{:?}`", status);

    status
}

#[cfg(feature = "std")]
#[inline]
fn stdout() -> BorrowedFd<'static> {
    rustix::stdio::stdout()
}

#[cfg(not(feature = "std"))]
#[inline]
fn stdout() -> BorrowedFd<'static> {
    // SAFETY: Nothing in this crate closes stdout, so the file descriptor
    // stays open for the rest of the program.
    unsafe { rustix::stdio::stdout() }
}
