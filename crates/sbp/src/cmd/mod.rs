use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod listen;
pub mod send;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Wait for one engine to connect and print received frames.
    Listen(ListenArgs),
    /// Connect to a listening controller and send a single frame.
    Send(SendArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Listen(args) => listen::run(args, format),
        Command::Send(args) => send::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct ListenArgs {
    /// Address to bind, e.g. 127.0.0.1:4329.
    pub addr: String,
    /// Skip the identity/readiness handshake.
    #[arg(long)]
    pub no_handshake: bool,
    /// Send every received frame back to the peer.
    #[arg(long)]
    pub echo: bool,
    /// Exit after receiving N frames.
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Address to connect to, e.g. 127.0.0.1:4329.
    pub addr: String,
    /// Text payload (kind 1).
    #[arg(long, conflicts_with_all = ["ints", "floats", "file"])]
    pub text: Option<String>,
    /// Comma-separated 32-bit integers (kind 2).
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["text", "floats", "file"])]
    pub ints: Option<Vec<i32>>,
    /// Comma-separated 64-bit floats (kind 3).
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["text", "ints", "file"])]
    pub floats: Option<Vec<f64>>,
    /// Read a raw byte payload (kind 0) from file.
    #[arg(long, conflicts_with_all = ["text", "ints", "floats"])]
    pub file: Option<std::path::PathBuf>,
    /// Announce this identity and signal readiness before sending.
    #[arg(long, value_name = "ID")]
    pub announce: Option<String>,
    /// Wait for one response frame and print it.
    #[arg(long)]
    pub wait: bool,
    /// Maximum time to wait for the response (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub wait_timeout: String,
}
