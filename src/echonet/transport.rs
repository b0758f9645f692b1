//! One-shot UDP multicast transport for ECHONET-Lite exchanges.
//!
//! A request is multicast to the well-known group and the reply arrives as a
//! unicast datagram on the well-known port. Each [`exchange`] call owns its
//! sockets for exactly one bind → send → receive → close cycle; nothing is
//! reused or pooled between calls. Because the receive socket binds the single
//! well-known port, at most one exchange can be in flight per host at a time —
//! callers serving concurrent requests must serialize their exchanges.

use crate::constants::{ECHONET_MULTICAST_ADDR, ECHONET_PORT};
use crate::error::EchonetError;
use std::net::Ipv4Addr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::timeout;

/// Upper bound on waiting for a device reply. A silent device fails the
/// exchange as a transport error instead of hanging the caller.
pub const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

const MAX_DATAGRAM: usize = 1024;

/// Performs one full request/response cycle: multicast `request`, return the
/// payload of the first datagram that arrives on the ECHONET-Lite port.
///
/// Both sockets are dropped (closed) on every exit path. Bind, send, receive,
/// and timeout failures all surface as [`EchonetError::Transport`].
pub async fn exchange(request: &[u8]) -> Result<Vec<u8>, EchonetError> {
    // Bind the receive side first so the reply cannot race past us.
    let recv_socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, ECHONET_PORT))
        .await
        .map_err(|e| EchonetError::Transport(format!("bind {ECHONET_PORT}: {e}")))?;

    let send_socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
        .await
        .map_err(|e| EchonetError::Transport(format!("bind send socket: {e}")))?;

    log::debug!("multicast request: {}", hex::encode(request));
    send_socket
        .send_to(request, (ECHONET_MULTICAST_ADDR, ECHONET_PORT))
        .await
        .map_err(|e| EchonetError::Transport(format!("send: {e}")))?;
    drop(send_socket);

    let mut buf = [0u8; MAX_DATAGRAM];
    let received = timeout(RECEIVE_TIMEOUT, recv_socket.recv(&mut buf))
        .await
        .map_err(|_| {
            EchonetError::Transport(format!(
                "no reply within {}s",
                RECEIVE_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| EchonetError::Transport(format!("receive: {e}")))?;

    log::debug!("response: {}", hex::encode(&buf[..received]));
    Ok(buf[..received].to_vec())
}
