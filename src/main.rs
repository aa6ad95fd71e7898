// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use std::path::PathBuf;

const USAGE: &str = "Usage: iced_toast [--duration <ms>] [--tick <ms>] [--config <path>]";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        duration_ms: args.opt_value_from_str("--duration")?,
        tick_ms: args.opt_value_from_str("--tick")?,
        config_path: args.opt_value_from_str::<_, PathBuf>("--config")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", rest);
    }
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
