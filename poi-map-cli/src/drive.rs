use anyhow::Context;
use log::warn;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{Result, Widget};

async fn print_step(widget: &Widget) {
    match widget.current_instruction().await {
        Some(step) => println!("> {step}"),
        None => println!("Not driving, type \"start\" to begin"),
    }
}

/// Read navigation commands from stdin until "quit" or EOF
pub async fn drive_loop(widget: &Widget) -> Result {
    print_step(widget).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match line.trim() {
            "start" | "s" => widget.start_drive().await,
            "next" | "n" => widget.next_step().await,
            "prev" | "p" => widget.prev_step().await,
            "quit" | "q" => break,
            "" => continue,
            other => {
                warn!("Unknown command {other:?}, expected start, next, prev or quit");
                continue;
            }
        }
        print_step(widget).await;
    }

    Ok(())
}
