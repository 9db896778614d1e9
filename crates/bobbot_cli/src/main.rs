//! Line-oriented front end.
//!
//! # Responsibility
//! - Read one command per stdin line and print the core's reply.
//! - Stop after `bye` or end of input.

use bobbot_core::{init_logging, BotConfig, BotService, FileTaskStore};
use log::error;
use std::io::{self, BufRead};

const LINE_SEPARATOR: &str = "--------------------------------------------------";

fn main() {
    if std::env::args().any(|arg| arg == "--version") {
        println!("bobbot {}", bobbot_core::core_version());
        return;
    }

    let config = BotConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let mut bot = BotService::open(FileTaskStore::new(&config.data_file));
    print_block(bot.welcome_message());

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("event=stdin_read module=cli status=error error={}", err);
                break;
            }
        };

        let reply = bot.handle(&line);
        print_block(&reply.text);
        if reply.exit {
            break;
        }
    }
}

fn print_block(text: &str) {
    println!("{LINE_SEPARATOR}\n{text}\n{LINE_SEPARATOR}");
}
