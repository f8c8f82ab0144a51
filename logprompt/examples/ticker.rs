// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type commands while a background ticker (and `tracing`) keep logging above the
//! prompt. Run with `cargo run --example ticker -- --help` to see the options.

use std::{str::FromStr, time::Duration};

use clap::Parser;
use logprompt::{DisplayPreference, Editor, EditorError, EditorOptions, LogHandle,
                TracingConfig, WriterConfig, tracing_setup};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tokio::{select, time::interval};

#[derive(Debug, Parser)]
#[command(bin_name = "ticker")]
#[command(about = "Log above a prompt while reading lines from it", long_about = None)]
#[command(version)]
struct CLIArgs {
    /// How many committed lines the up arrow can reach.
    #[arg(long, default_value_t = logprompt::DEFAULT_HISTORY_CAPACITY)]
    history_capacity: usize,

    /// Milliseconds between ticks.
    #[arg(long, default_value_t = 1_000)]
    tick_ms: u64,

    /// Also write `tracing` output to this file.
    #[arg(long)]
    log_file: Option<String>,
}

#[derive(Debug, PartialEq, EnumString, EnumIter, Display)]
enum Command {
    #[strum(ascii_case_insensitive)]
    Pause,

    #[strum(ascii_case_insensitive)]
    Resume,

    #[strum(ascii_case_insensitive)]
    Help,

    #[strum(ascii_case_insensitive)]
    Exit,
}

fn help_message() -> String {
    let commands = Command::iter().map(|it| it.to_string()).collect::<Vec<_>>();
    format!("Commands: {commands:?}. Also try Up, Down, Home, End, Ctrl+C, Ctrl+D.")
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_args = CLIArgs::parse();

    let options = EditorOptions::default().with_history_capacity(cli_args.history_capacity);

    // If the terminal is not fully interactive, then return early.
    let Some(mut editor) = Editor::try_new(options)? else {
        println!("stdin and stdout must be a terminal to run this example");
        return Ok(());
    };

    let display = DisplayPreference::LogHandle(editor.log_handle());
    let writer_config = match cli_args.log_file {
        Some(file) => WriterConfig::DisplayAndFile(display, file),
        None => WriterConfig::Display(display),
    };
    tracing_setup::init(TracingConfig {
        writer_config,
        level: tracing::Level::DEBUG,
    })?;

    editor.info(help_message())?;

    let log_handle = editor.log_handle();
    let mut ticker = interval(Duration::from_millis(cli_args.tick_ms));
    let mut tick_count = 0_u64;
    let mut is_paused = false;

    loop {
        select! {
            _ = ticker.tick() => {
                if !is_paused {
                    tick_count += 1;
                    tick(&log_handle, tick_count)?;
                }
            }
            result = editor.read_line() => {
                match result {
                    Ok(line) => match Command::from_str(line.trim()) {
                        Ok(Command::Pause) => is_paused = true,
                        Ok(Command::Resume) => is_paused = false,
                        Ok(Command::Help) => editor.info(help_message())?,
                        Ok(Command::Exit) => break,
                        Err(_) => tracing::info!(%line, "not a command"),
                    },
                    Err(EditorError::Interrupted) => {
                        editor.info("^C (type `exit` or press Ctrl+D to quit)")?;
                    }
                    Err(EditorError::EndOfInput) => break,
                    Err(error) => return Err(error.into()),
                }
            }
        }
    }

    editor.shutdown()?;
    Ok(())
}

fn tick(log_handle: &LogHandle, tick_count: u64) -> Result<(), EditorError> {
    if tick_count.is_multiple_of(5) {
        tracing::debug!(tick_count, "five more ticks");
    }
    log_handle.info(format!("tick {tick_count}"))
}
