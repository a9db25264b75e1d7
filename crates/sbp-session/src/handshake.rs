//! Session-establishment handshake.
//!
//! On connection the engine announces itself with one identity-bearing frame
//! followed by a text frame exactly equal to the readiness sentinel. The
//! controller waits for both before issuing anything else. No other payload
//! content is interpreted at this layer.

use sbp_wire::Payload;

use crate::error::{Result, SessionError};
use crate::session::Session;

/// Text frame the engine sends once it is ready for commands.
pub const READY_SENTINEL: &str = "* READY";

/// What the engine announced at session establishment.
#[derive(Debug, Clone, PartialEq)]
pub struct Greeting {
    /// The identity-bearing frame, delivered verbatim.
    pub identity: Payload,
}

/// Controller side: receive the identity frame, then the readiness sentinel.
pub fn await_ready(session: &mut Session) -> Result<Greeting> {
    let identity = session.receive()?;
    expect_ready(session)?;
    Ok(Greeting { identity })
}

/// Controller side: receive one frame and require it to be the sentinel.
///
/// Also used after later exchanges, since the engine re-announces readiness
/// between commands.
pub fn expect_ready(session: &mut Session) -> Result<()> {
    let frame = session.receive()?;
    match frame.as_str() {
        Some(READY_SENTINEL) => Ok(()),
        _ => Err(SessionError::Handshake {
            message: describe_mismatch(&frame),
        }),
    }
}

/// Engine side: send the identity frame followed by the readiness sentinel.
pub fn announce(session: &mut Session, identity: &str) -> Result<()> {
    session.send(&Payload::from(identity))?;
    signal_ready(session)
}

/// Engine side: send the readiness sentinel.
pub fn signal_ready(session: &mut Session) -> Result<()> {
    session.send(&Payload::from(READY_SENTINEL))
}

fn describe_mismatch(frame: &Payload) -> String {
    match frame.as_str() {
        Some(text) => format!("expected {READY_SENTINEL:?}, got {text:?}"),
        None => format!(
            "expected {READY_SENTINEL:?}, got a {} frame of {} items",
            frame.kind(),
            frame.n_items()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_description_for_text() {
        let message = describe_mismatch(&Payload::from("* ERROR"));
        assert!(message.contains("* READY"));
        assert!(message.contains("* ERROR"));
    }

    #[test]
    fn mismatch_description_for_numeric_frame() {
        let message = describe_mismatch(&Payload::from(vec![1i32, 2, 3]));
        assert!(message.contains("int32"));
        assert!(message.contains('3'));
    }
}
