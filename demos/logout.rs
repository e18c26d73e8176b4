//! Sends a logout request and prints any diagnostic through `env_logger`.
//!
//! ```text
//! RUST_LOG=logout=debug cargo run --example logout -- http://localhost:8080 auth/logout
//! ```

use futures_lite::future::block_on;
use logout::LogoutClient;
use std::env;

fn main() -> Result<(), logout::Error> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let origin = args.next().unwrap_or_else(|| "http://localhost".into());
    let endpoint = args.next().unwrap_or_else(|| "auth/logout".into());

    let client = LogoutClient::builder().origin(origin).build()?;

    // Wait for the outcome to be reported before exiting; a detached
    // `client.logout(..)` would be cut short when main returns.
    block_on(client.logout_async(&endpoint));

    Ok(())
}
