// Listener construction
// Builds the TCP listener with socket2 so the socket options are explicit.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Bind the listening socket.
///
/// `SO_REUSEADDR` lets a restart rebind while the old socket sits in
/// TIME_WAIT. `SO_REUSEPORT` is deliberately not set: a second instance on
/// the same port must fail to bind, not silently share it.
pub fn bind_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    // Non-blocking is required before handing the fd to tokio.
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
