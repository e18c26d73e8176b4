//! Mock HTTP server used by the logout integration tests.
//!
//! Each mock binds its own port on the loopback interface, records every
//! request it receives, and answers with whatever its responders produce.

mod macros;
mod mock;
mod pool;
mod request;
mod responder;
mod response;

pub use mock::{Builder, Mock};
pub use request::Request;
pub use responder::Responder;
pub use response::Response;

use crate::pool::pool;
use std::net::{SocketAddr, TcpListener};

/// Get the URL of a loopback port that nothing is listening on, so that
/// connecting to it is refused.
///
/// The port is released before this returns, so another process could bind
/// it in the meantime. Prefer [`hang_up_url`] where any transport failure
/// will do.
pub fn refused_url() -> String {
    let addr: SocketAddr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    format!("http://{}/", addr)
}

/// Get the URL of a server that accepts connections and closes them without
/// sending a response.
///
/// The listener stays bound for the rest of the process, so the failure
/// cannot be turned into a response by something else taking the port.
pub fn hang_up_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    pool().execute(move || {
        for stream in listener.incoming() {
            drop(stream);
        }
    });

    format!("http://{}/", addr)
}
