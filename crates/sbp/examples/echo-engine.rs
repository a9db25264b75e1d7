//! A stand-in simulation engine: connects to a controller, announces itself,
//! signals readiness, then echoes every frame until the controller closes.
//!
//! Start a controller first:
//!   cargo run -p sbp --features cli -- listen 127.0.0.1:4329
//! then run this example:
//!   cargo run -p sbp --example echo-engine -- 127.0.0.1:4329

use sbp::session::{announce, Session, SessionError};
use sbp::wire::WireError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:4329".to_string());

    let mut session = Session::connect(&addr)?;
    announce(&mut session, "echo-engine")?;

    loop {
        let frame = match session.receive() {
            Ok(frame) => frame,
            Err(SessionError::Wire(WireError::ConnectionClosed)) => break,
            Err(err) => return Err(err.into()),
        };
        session.send(&frame)?;
    }

    Ok(())
}
