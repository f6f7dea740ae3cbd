use nat64_dns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Bind one UDP listener per discovered IPv6 address and serve until the
/// last listener dies. Individual bind failures are logged and skipped;
/// only binding nothing at all is fatal.
pub async fn start_dns_server(
    addresses: &[Ipv6Addr],
    port: u16,
    handler: Arc<DnsServerHandler>,
) -> anyhow::Result<()> {
    let mut join_set: JoinSet<()> = JoinSet::new();
    let mut bound = 0usize;

    for address in addresses {
        let socket_addr = SocketAddrV6::new(*address, port, 0, 0);
        let socket = match create_udp_socket(socket_addr) {
            Ok(socket) => socket,
            Err(e) => {
                warn!(address = %socket_addr, error = %e, "Failed to bind, skipping address");
                continue;
            }
        };

        info!(address = %socket_addr, "Listening");
        bound += 1;

        let handler = handler.clone();
        join_set.spawn(async move {
            run_udp_listener(Arc::new(socket), handler).await;
        });
    }

    if bound == 0 {
        anyhow::bail!("Could not bind to any address on port {}", port);
    }

    info!(listeners = bound, "DNS server ready");
    while join_set.join_next().await.is_some() {}
    Ok(())
}

/// Receive datagrams serially and spawn one task per datagram; handling
/// is fully concurrent and unordered across requests.
async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; 4096];

    loop {
        let (len, peer) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let datagram = recv_buf[..len].to_vec();
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            if let Some(reply) = handler.handle_datagram(&datagram).await {
                if let Err(e) = socket.send_to(&reply, peer).await {
                    warn!(peer = %peer, error = %e, "Failed to send reply");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddrV6) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV6, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_only_v6(true)?;
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&SocketAddr::from(socket_addr).into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
