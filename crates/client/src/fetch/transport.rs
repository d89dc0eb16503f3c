//! Plain and TLS byte streams over blocking TCP sockets.

use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use super::url::Target;
use rawfetch_core::Error;

/// Build the rustls client configuration with Mozilla's root certificates.
fn client_config() -> Arc<ClientConfig> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let mut config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();
    config.alpn_protocols = vec![b"http/1.1".to_vec()];

    Arc::new(config)
}

/// A connected byte stream, either in the clear or TLS-wrapped.
pub enum Transport {
    Plain(TcpStream),
    Tls(Box<StreamOwned<ClientConnection, TcpStream>>),
}

impl Transport {
    pub fn is_secure(&self) -> bool {
        matches!(self, Transport::Tls(_))
    }
}

impl Read for Transport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Transport::Plain(stream) => stream.read(buf),
            Transport::Tls(stream) => match stream.read(buf) {
                // Peer dropped TCP without close_notify; with Connection: close
                // that still marks the end of the response.
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::debug!("TLS peer closed without close_notify");
                    Ok(0)
                }
                other => other,
            },
        }
    }
}

impl Write for Transport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Transport::Plain(stream) => stream.write(buf),
            Transport::Tls(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Transport::Plain(stream) => stream.flush(),
            Transport::Tls(stream) => stream.flush(),
        }
    }
}

/// Opens transports for targets. Holds the shared TLS configuration.
#[derive(Clone)]
pub struct Connector {
    tls: Arc<ClientConfig>,
}

impl Connector {
    pub fn new() -> Self {
        Self { tls: client_config() }
    }

    /// Use a caller-supplied TLS configuration, e.g. with private roots.
    pub fn with_config(tls: Arc<ClientConfig>) -> Self {
        Self { tls }
    }

    /// Connect to the target's host and port, negotiating TLS for https.
    ///
    /// One attempt; any DNS, connect or handshake failure is returned as
    /// [`Error::Transport`].
    pub fn connect(&self, target: &Target) -> Result<Transport, Error> {
        let host = target.connect_host();
        let tcp = TcpStream::connect((host, target.port)).map_err(Error::Transport)?;
        tracing::debug!(host, port = target.port, secure = target.scheme.is_secure(), "connected");

        if !target.scheme.is_secure() {
            return Ok(Transport::Plain(tcp));
        }

        let server_name = ServerName::try_from(host.to_string())
            .map_err(|e| Error::Transport(io::Error::new(io::ErrorKind::InvalidInput, e)))?;
        let conn = ClientConnection::new(Arc::clone(&self.tls), server_name)
            .map_err(|e| Error::Transport(io::Error::other(e)))?;

        let mut stream = StreamOwned::new(conn, tcp);
        // Flushing drives the handshake so certificate errors surface here.
        stream.flush().map_err(Error::Transport)?;

        Ok(Transport::Tls(Box::new(stream)))
    }
}

impl Default for Connector {
    fn default() -> Self {
        Self::new()
    }
}
