// SPDX-License-Identifier: MPL-2.0
use iced_qr::app::{self, paths, Flags};

const USAGE: &str = "\
Usage: iced_qr [OPTIONS] [URL]

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory receiving diagnostics exports
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let lang = read_option(&mut args, "--lang");
    let config_dir = read_option(&mut args, "--config-dir");
    let data_dir = read_option(&mut args, "--data-dir");
    let url = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    app::run(Flags {
        lang,
        url,
        data_dir,
        config_dir,
    })
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        eprintln!("ignoring {key}: {err}");
        None
    })
}
