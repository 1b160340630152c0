//! Blocking UDP datagram listener.
//!
//! Each injector owns exactly one [`DatagramListener`].  It binds the socket
//! at startup, keeps it for the process lifetime, and hands every received
//! datagram to a handler on the calling thread, one at a time.
//!
//! # Why blocking and single-threaded? (for beginners)
//!
//! One datagram is one input event, and applying it takes microseconds.  A
//! plain loop around `recv_from` on a single thread keeps events in the order
//! the transport delivered them and never calls the backend from two threads,
//! so backends need no locking.  There is no async runtime and no worker
//! pool; the only place the loop waits is the receive call.
//!
//! # Error handling
//!
//! | Condition                               | Result                     |
//! |-----------------------------------------|----------------------------|
//! | Bind fails                              | [`ListenerError::Bind`]    |
//! | `recv_from` interrupted by a signal     | retried                    |
//! | Windows: datagram larger than buffer    | skipped, loop continues    |
//! | Windows: ICMP port unreachable echo     | skipped, loop continues    |
//! | Any other receive error                 | [`ListenerError::Recv`]    |
//!
//! On Unix a datagram larger than the buffer is truncated by the kernel and
//! still delivered; the decoder only looks at the prefix it needs.

use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::ops::ControlFlow;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for the datagram listener.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The UDP socket could not be bound.
    #[error("failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    /// A receive failed for a reason other than a retryable interruption.
    #[error("recv error: {0}")]
    Recv(#[source] io::Error),
}

/// A bound UDP socket plus its receive buffer.
#[derive(Debug)]
pub struct DatagramListener {
    socket: UdpSocket,
    local_addr: SocketAddr,
    buf: Vec<u8>,
}

impl DatagramListener {
    /// Binds `addr` and allocates a receive buffer of `recv_buffer_size` bytes.
    ///
    /// Binding a non-loopback address is allowed but logged at `warn`: the
    /// protocol has no authentication, so anything that can reach the port
    /// can inject input.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Bind`] if the socket cannot be bound.
    pub fn bind(addr: SocketAddr, recv_buffer_size: usize) -> Result<Self, ListenerError> {
        if !addr.ip().is_loopback() {
            warn!("binding {addr}: not a loopback address, any host that can reach it can inject input");
        }
        let socket = UdpSocket::bind(addr).map_err(|source| ListenerError::Bind { addr, source })?;
        let local_addr = socket
            .local_addr()
            .map_err(|source| ListenerError::Bind { addr, source })?;

        info!("listening on UDP {local_addr} ({recv_buffer_size}-byte buffer)");
        Ok(Self {
            socket,
            local_addr,
            buf: vec![0u8; recv_buffer_size],
        })
    }

    /// The address actually bound (resolves port 0 to the OS-assigned port).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Sets a receive timeout.  `None` (the default) blocks indefinitely.
    ///
    /// With a timeout set, an expired wait surfaces as [`ListenerError::Recv`].
    /// The injector binaries never set one.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the option cannot be applied.
    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.socket.set_read_timeout(timeout)
    }

    /// Blocks until the next datagram arrives and returns its bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Recv`] for a non-retryable receive failure.
    pub fn recv_datagram(&mut self) -> Result<&[u8], ListenerError> {
        loop {
            match self.socket.recv_from(&mut self.buf) {
                Ok((len, _src)) => return Ok(&self.buf[..len]),
                Err(e) if is_retryable(&e) => {
                    debug!("retrying recv after transient error: {e}");
                    continue;
                }
                Err(e) => return Err(ListenerError::Recv(e)),
            }
        }
    }

    /// Receives datagrams forever, passing each to `handler` in arrival order.
    ///
    /// Returns `Ok(())` only if `handler` asks to stop with
    /// [`ControlFlow::Break`].
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Recv`] on the first non-retryable receive error.
    pub fn run<F>(&mut self, mut handler: F) -> Result<(), ListenerError>
    where
        F: FnMut(&[u8]) -> ControlFlow<()>,
    {
        loop {
            let datagram = self.recv_datagram()?;
            if handler(datagram).is_break() {
                return Ok(());
            }
        }
    }
}

/// Returns `true` for receive errors that say nothing about the socket itself.
fn is_retryable(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::Interrupted {
        return true;
    }
    #[cfg(windows)]
    {
        // WSAEMSGSIZE: datagram larger than the buffer (discarded by the OS).
        // WSAECONNRESET: ICMP "port unreachable" from an earlier send.
        const WSAEMSGSIZE: i32 = 10040;
        const WSAECONNRESET: i32 = 10054;
        if matches!(e.raw_os_error(), Some(WSAEMSGSIZE | WSAECONNRESET)) {
            return true;
        }
    }
    false
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn loopback_listener(buf: usize) -> DatagramListener {
        let listener = DatagramListener::bind("127.0.0.1:0".parse().unwrap(), buf)
            .expect("loopback bind must succeed");
        listener
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        listener
    }

    fn sender() -> UdpSocket {
        UdpSocket::bind("127.0.0.1:0").expect("sender bind")
    }

    #[test]
    fn test_is_retryable_recognises_interrupted() {
        // Arrange
        let e = io::Error::new(io::ErrorKind::Interrupted, "signal");

        // Act / Assert
        assert!(is_retryable(&e));
    }

    #[test]
    fn test_is_retryable_rejects_other_errors() {
        for kind in [io::ErrorKind::TimedOut, io::ErrorKind::WouldBlock, io::ErrorKind::Other] {
            assert!(!is_retryable(&io::Error::new(kind, "x")), "{kind:?}");
        }
    }

    #[test]
    fn test_bind_resolves_os_assigned_port() {
        let listener = loopback_listener(64);
        assert_ne!(listener.local_addr().port(), 0);
        assert!(listener.local_addr().ip().is_loopback());
    }

    #[test]
    fn test_bind_fails_when_port_in_use() {
        // Arrange
        let first = loopback_listener(64);

        // Act
        let second = DatagramListener::bind(first.local_addr(), 64);

        // Assert
        assert!(matches!(second, Err(ListenerError::Bind { .. })));
    }

    #[test]
    fn test_recv_datagram_returns_exact_bytes() {
        // Arrange
        let mut listener = loopback_listener(1024);
        let tx = sender();

        // Act
        tx.send_to(&[1, 6, 0x88, 0xFF], listener.local_addr()).unwrap();
        let received = listener.recv_datagram().unwrap().to_vec();

        // Assert
        assert_eq!(received, vec![1, 6, 0x88, 0xFF]);
    }

    #[test]
    fn test_run_delivers_datagrams_in_order_until_break() {
        // Arrange
        let mut listener = loopback_listener(64);
        let tx = sender();
        for i in 0u8..3 {
            tx.send_to(&[1, 2, i], listener.local_addr()).unwrap();
        }

        // Act
        let mut seen = Vec::new();
        listener
            .run(|d| {
                seen.push(d[2]);
                if seen.len() == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();

        // Assert
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_recv_timeout_surfaces_as_recv_error() {
        let mut listener = loopback_listener(64);
        listener
            .set_read_timeout(Some(Duration::from_millis(20)))
            .unwrap();

        let result = listener.recv_datagram();

        assert!(matches!(result, Err(ListenerError::Recv(_))));
    }
}
