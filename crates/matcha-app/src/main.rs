//! matcha-os driver entry point.
//!
//! Runs the shell core against a text interface: each stdin line is one
//! input event, each frame is printed as text. The real renderer and
//! animation layer are external; this binary exists to exercise the full
//! state machine end to end (lock screen, layouts, windows, overlays,
//! and the assistant's outbound call).

mod commands;
mod render;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use matcha_net::{GenAiClient, TextGenService};
use matcha_shell::Shell;
use matcha_shell::platform::{TimeService, WallClock};
use matcha_types::config::ShellConfig;

use commands::CommandResult;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from CLI arg, MATCHA_CONFIG env var, or defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MATCHA_CONFIG").ok())
        .map(PathBuf::from);
    let config = match &config_path {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ShellConfig::default(),
    };
    log::info!("starting matcha-os shell");

    let mut shell = Shell::new(config.clone());
    let clock = WallClock;
    let service: Arc<dyn TextGenService> = Arc::new(GenAiClient::new(config.assistant.clone()));

    println!("matcha-os -- type 'help' for commands (pin is {})", config.pin);
    shell.tick(&clock.now());
    print!("{}", render::render(&shell));

    let stdin = std::io::stdin();
    loop {
        print!("matcha> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        // Each loop pass doubles as the 1 s tick and the completion poll.
        shell.tick(&clock.now());
        if shell.poll_assistant() {
            log::debug!("assistant reply landed");
        }

        match commands::execute(&mut shell, &service, &line) {
            CommandResult::Quit => break,
            CommandResult::Output(msg) => {
                if !msg.is_empty() {
                    println!("{msg}");
                }
            },
        }
        print!("{}", render::render(&shell));
    }

    log::info!("matcha-os shut down cleanly");
    Ok(())
}
