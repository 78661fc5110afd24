//! Builds a small header set and prints it in wire form, with tracing
//! enabled so mutations are visible.
//!
//! Run with: `cargo run --example inspect`

use bytes::BytesMut;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use http_fields::{BasicAuth, Cookie, CookieJar, Headers, SameSite, StandardHeader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut headers = Headers::new();
    headers.add_raw(StandardHeader::Host, "example.com")?;
    headers.add_raw("User-Agent", "inspect/0.1")?;
    headers.add(BasicAuth::new("demo", "secret")?.to_header()?)?;

    let mut jar = CookieJar::new();
    jar.add(Cookie::new("session", "abc123")?.with_same_site(SameSite::Lax).http_only());
    headers.set(StandardHeader::Cookie, jar.cookie_header("example.com", "/", false))?;

    let mut wire = BytesMut::new();
    headers.encode(&mut wire);
    print!("{}", String::from_utf8_lossy(&wire));

    match headers.add_raw("X-Evil", "value\r\nSet-Cookie: pwned=1") {
        Ok(()) => unreachable!(),
        Err(e) => println!("rejected as expected: {e}"),
    }

    Ok(())
}
