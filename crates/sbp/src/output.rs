use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use sbp_wire::Payload;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

pub fn print_payload(payload: &Payload, format: OutputFormat) {
    let descriptor = payload.descriptor();
    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "kind": descriptor.kind.to_string(),
                "kind_code": descriptor.kind.code(),
                "n_items": descriptor.n_items,
                "n_bytes": descriptor.n_bytes(),
                "payload": payload_preview(payload),
            });
            println!("{out}");
        }
        OutputFormat::Pretty => {
            println!(
                "kind={} ({}) items={} bytes={} payload={}",
                descriptor.kind.code(),
                descriptor.kind,
                descriptor.n_items,
                descriptor.n_bytes(),
                payload_preview(payload)
            );
        }
        OutputFormat::Raw => {
            let mut out = std::io::stdout();
            let _ = out.write_all(&payload.to_wire());
            let _ = out.flush();
        }
    }
}

fn payload_preview(payload: &Payload) -> String {
    match payload {
        Payload::Text(raw) | Payload::Bytes(raw) => match std::str::from_utf8(raw) {
            Ok(text) => text.to_string(),
            Err(_) => format!("<binary {} bytes>", raw.len()),
        },
        Payload::Int32(items) => format!("{items:?}"),
        Payload::Float64(items) => format!("{items:?}"),
    }
}
