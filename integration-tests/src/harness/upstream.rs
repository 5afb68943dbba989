use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// Shared across a group of upstreams to observe how many fetches they are
/// serving at the same moment.
#[derive(Clone, Default)]
pub struct ConcurrencyProbe {
    current: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl ConcurrencyProbe {
    pub fn new() -> Self {
        Self::default()
    }

    fn enter(&self) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }

    /// Highest number of simultaneously in-flight requests seen so far.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
pub struct UpstreamOptions {
    pub body: String,
    pub status: u16,
    pub delay: Duration,
    pub probe: Option<ConcurrencyProbe>,
}

impl Default for UpstreamOptions {
    fn default() -> Self {
        Self {
            body: String::new(),
            status: 200,
            delay: Duration::ZERO,
            probe: None,
        }
    }
}

/// Start a local upstream serving `body` to every connection. Returns its URL.
pub fn start_upstream(body: &str) -> String {
    start_upstream_with(UpstreamOptions {
        body: body.to_string(),
        ..Default::default()
    })
}

pub fn start_upstream_with(options: UpstreamOptions) -> String {
    // Bind on the caller's thread so the listener is ready before we return.
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind upstream");
    let addr = listener.local_addr().expect("no local addr");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            let options = options.clone();
            thread::spawn(move || handle(stream, &options));
        }
    });

    format!("http://{addr}/application.log")
}

/// Address of a port nothing is listening on, for connection-refused tests.
pub fn unreachable_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);

    format!("http://{addr}/application.log")
}

fn handle(mut stream: TcpStream, options: &UpstreamOptions) {
    if let Some(probe) = &options.probe {
        probe.enter();
    }

    // One request per connection; a single read is enough for a small GET.
    let mut buf = [0u8; 1024];
    let _ = stream.read(&mut buf);

    if !options.delay.is_zero() {
        thread::sleep(options.delay);
    }

    // Leave the probe before responding: the client is released by the
    // response, so decrementing after the write would race the next fetch.
    if let Some(probe) = &options.probe {
        probe.exit();
    }

    let reason = if options.status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        options.status,
        reason,
        options.body.len(),
        options.body
    );
    let _ = stream.write_all(response.as_bytes());
}
