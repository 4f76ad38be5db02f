// SPDX-License-Identifier: MPL-2.0
use home_deck::app::{self, paths, Flags};
use home_deck::logging;

const HELP: &str = "\
HomeDeck - brand shortcuts and TV quick controls

USAGE:
  home_deck [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --lang <ID>          UI language (e.g. en-US, fr)
      --config-dir <DIR>   Directory holding settings.toml
      --roku-ip <ADDRESS>  TV address, overrides ROKU_IP and the settings file

ENVIRONMENT:
  ROKU_IP                  TV address
  HOME_DECK_CONFIG_DIR     Settings directory
  RUST_LOG                 Log filter (default: info)
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
        roku_ip: read_option(&mut args, "--roku-ip"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting HomeDeck");

    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = name, error = %err, "invalid command-line value");
            None
        }
    }
}
