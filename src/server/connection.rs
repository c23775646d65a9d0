// Connection handling
// One spawned task per accepted TCP connection, HTTP/1 with keep-alive.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Serve one connection in a background task.
///
/// The accept loop stays free; in-flight connections keep running on their
/// own tasks through shutdown.
pub fn accept_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, config: &Arc<Config>) {
    let config = Arc::clone(config);
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, peer_addr, config).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
