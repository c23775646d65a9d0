use std::sync::Arc;
use std::time::Duration;

mod config;
mod handler;
mod http;
mod launcher;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind before anything else; an occupied port must fail fast.
    let listener = server::bind_listener(addr)?;

    let cfg = Arc::new(cfg);
    logger::log_server_start(&addr, &cfg.browse_url(), &cfg.root_dir(), &cfg);

    let shutdown = server::spawn_signal_listener();

    if cfg.launcher.enabled {
        let _open_task = launcher::schedule_browser_open(
            cfg.browse_url(),
            Duration::from_millis(cfg.launcher.delay_ms),
        );
    }

    run_accept_loop(listener, cfg, &shutdown).await;

    logger::log_shutdown();
    Ok(())
}

/// Accept connections until the shutdown notification fires. Dropping the
/// listener on exit releases the port; in-flight connections finish in
/// their own tasks.
async fn run_accept_loop(
    listener: tokio::net::TcpListener,
    cfg: Arc<config::Config>,
    shutdown: &Arc<tokio::sync::Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        server::accept_connection(stream, peer_addr, &cfg);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                drop(listener);
                return;
            }
        }
    }
}
