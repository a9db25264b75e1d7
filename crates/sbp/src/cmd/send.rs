use std::fs;
use std::time::Duration;

use sbp_session::{announce, Session, SessionConfig};
use sbp_wire::Payload;

use crate::cmd::SendArgs;
use crate::exit::{session_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_payload, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;

    let config = SessionConfig {
        read_timeout: if args.wait {
            Some(parse_duration(&args.wait_timeout)?)
        } else {
            None
        },
        ..SessionConfig::default()
    };

    let mut session = Session::connect_with_config(&args.addr, config)
        .map_err(|err| session_error("connect failed", err))?;

    if let Some(identity) = &args.announce {
        announce(&mut session, identity).map_err(|err| session_error("announce failed", err))?;
    }

    session
        .send(&payload)
        .map_err(|err| session_error("send failed", err))?;

    if args.wait {
        let reply = session
            .receive()
            .map_err(|err| session_error("receive failed", err))?;
        print_payload(&reply, format);
    }

    let _ = session.close();
    Ok(SUCCESS)
}

fn resolve_payload(args: &SendArgs) -> CliResult<Payload> {
    if let Some(text) = &args.text {
        return Ok(Payload::from(text.as_str()));
    }
    if let Some(ints) = &args.ints {
        return Ok(Payload::from(ints.clone()));
    }
    if let Some(floats) = &args.floats {
        return Ok(Payload::from(floats.clone()));
    }
    if let Some(path) = &args.file {
        let raw = fs::read(path).map_err(|err| {
            crate::exit::io_error(&format!("failed reading {}", path.display()), err)
        })?;
        return Ok(Payload::from(raw));
    }
    Ok(Payload::from(""))
}

fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::SendArgs;

    fn args() -> SendArgs {
        SendArgs {
            addr: "127.0.0.1:4329".to_string(),
            text: None,
            ints: None,
            floats: None,
            file: None,
            announce: None,
            wait: false,
            wait_timeout: "5s".to_string(),
        }
    }

    #[test]
    fn resolves_int_payload() {
        let mut a = args();
        a.ints = Some(vec![0, 1, 2]);
        let payload = resolve_payload(&a).expect("ints should resolve");
        assert_eq!(payload.as_i32s(), Some(&[0i32, 1, 2][..]));
    }

    #[test]
    fn defaults_to_empty_text() {
        let payload = resolve_payload(&args()).expect("empty args should resolve");
        assert_eq!(payload.as_str(), Some(""));
    }

    #[test]
    fn parse_duration_seconds_and_millis() {
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("150ms").unwrap(), Duration::from_millis(150));
        assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("bad").is_err());
    }
}
