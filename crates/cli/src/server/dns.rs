use crate::di::DnsServices;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub async fn start_dns_server(
    bind_addr: String,
    services: DnsServices,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let DnsServices {
        mut responder,
        query_logger,
    } = services;

    let local = responder.start_on(socket_addr)?;
    info!(bind_address = %local, records = responder.records().len(), "DNS server ready");

    responder.serve(shutdown).await?;
    responder.stop();

    // The responder owns the last emitter; dropping it lets the logger drain.
    drop(responder);
    let logged = query_logger.await?;
    debug!(queries = logged, "Query logger finished");

    Ok(())
}
