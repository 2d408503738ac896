// SPDX-License-Identifier: MPL-2.0
use iced_slideshow::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
iced_slideshow - captioned photo slideshow

USAGE:
  iced_slideshow [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --manifest <FILE>      Slide manifest to seed the slideshow with
  --slides-dir <DIR>     Directory that manifest paths are resolved against
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iced_slideshow=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = Flags {
        lang: opt_arg(&mut args, "--lang"),
        config_dir: opt_arg(&mut args, "--config-dir"),
        manifest: opt_arg::<String>(&mut args, "--manifest").map(PathBuf::from),
        slides_dir: opt_arg::<String>(&mut args, "--slides-dir").map(PathBuf::from),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional `--key value` pair, logging malformed values.
fn opt_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, key, "invalid command line value");
        None
    })
}
