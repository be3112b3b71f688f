// SPDX-License-Identifier: MPL-2.0
use model_lens::app::{self, paths, Flags};

const HELP: &str = "\
Model Lens - 3D model viewer

USAGE:
  model_lens [OPTIONS] [FILE]

ARGS:
  <FILE>                  glTF/GLB model to open at startup

OPTIONS:
  -h, --help              Print this help and exit
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --i18n-dir <DIR>        Directory with extra .ftl translations
  --config-dir <DIR>      Directory holding settings.toml
  --data-dir <DIR>        Directory for diagnostics reports
  --content-type <MIME>   Declared type of FILE (defaults to its extension)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let content_type = args.opt_value_from_str("--content-type")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        i18n_dir,
        config_dir,
        data_dir,
        content_type,
        file_path,
    })
}
