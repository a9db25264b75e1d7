use sbp_session::{await_ready, Session, SessionError};
use sbp_wire::WireError;
use tracing::info;

use crate::cmd::ListenArgs;
use crate::exit::{session_error, CliResult, SUCCESS};
use crate::output::{print_payload, OutputFormat};

pub fn run(args: ListenArgs, format: OutputFormat) -> CliResult<i32> {
    let mut session =
        Session::listen_once(&args.addr).map_err(|err| session_error("listen failed", err))?;

    if !args.no_handshake {
        let greeting =
            await_ready(&mut session).map_err(|err| session_error("handshake failed", err))?;
        info!(
            identity = greeting.identity.as_str().unwrap_or("<non-text>"),
            "engine ready"
        );
    }

    let mut printed = 0usize;
    loop {
        let payload = match session.receive() {
            Ok(payload) => payload,
            Err(SessionError::Wire(WireError::ConnectionClosed)) => break,
            Err(err) => return Err(session_error("receive failed", err)),
        };

        print_payload(&payload, format);
        printed = printed.saturating_add(1);

        if args.echo {
            session
                .send(&payload)
                .map_err(|err| session_error("echo failed", err))?;
        }

        if let Some(count) = args.count {
            if printed >= count {
                break;
            }
        }
    }

    let _ = session.close();
    Ok(SUCCESS)
}
