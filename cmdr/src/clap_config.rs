// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_code::ColorCodeType;

#[derive(Debug, Parser)]
#[command(bin_name = "colorcode")]
#[command(about = "🎨 Convert colors between hex, CSS rgb(a), CSS hsl(a) and CSS keywords")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  colorcode [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        requires = "enable_logging",
        help = "Write the log to this file instead of `log.txt`"
    )]
    pub log_file: Option<String>,

    #[arg(
        global = true,
        long,
        help = "Print plain text, without the color swatch or any other escape codes"
    )]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "🔍 Detect the syntax of a color code, and print it in every other syntax\n💡 Eg: `colorcode parse '#0066aa'`"
    )]
    Parse {
        #[arg(value_name = "CODE", allow_hyphen_values = true)]
        code: String,

        #[arg(
            long = "as",
            value_name = "TYPE",
            ignore_case = true,
            help = "Only accept this syntax"
        )]
        maybe_as_type: Option<CodeTypeArg>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    #[clap(
        about = "🔁 Print a color code in another syntax\n💡 Eg: `colorcode convert white --to cssHSL`"
    )]
    Convert {
        #[arg(value_name = "CODE", allow_hyphen_values = true)]
        code: String,

        #[arg(long, value_name = "TYPE", ignore_case = true, help = "Syntax to print")]
        to: CodeTypeArg,

        #[arg(
            long,
            value_name = "TYPE",
            ignore_case = true,
            help = "Only accept this syntax for the input"
        )]
        from: Option<CodeTypeArg>,
    },

    #[clap(about = "🏷️ Print the hex code of a CSS color keyword\n💡 Eg: `colorcode lookup MidnightBlue`")]
    Lookup {
        #[arg(value_name = "NAME")]
        name: String,
    },

    #[clap(about = "📜 List the CSS color keywords\n💡 Eg: `colorcode keywords --filter blue`")]
    Keywords {
        #[arg(
            long,
            value_name = "TEXT",
            help = "Only list keywords that contain this text (any case)"
        )]
        filter: Option<String>,
    },
}

/// The [`ColorCodeType`]s, as command line values. The names are the same as the
/// library's external names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CodeTypeArg {
    #[value(name = "hex", help = "#rrggbb")]
    Hex,
    #[value(name = "shortHex", help = "#rgb")]
    ShortHex,
    #[value(name = "cssRGB", help = "rgb(r,g,b)")]
    CssRgb,
    #[value(name = "cssRGBa", help = "rgba(r,g,b,a)")]
    CssRgba,
    #[value(name = "cssHSL", help = "hsl(h,s%,l%)")]
    CssHsl,
    #[value(name = "cssHSLa", help = "hsla(h,s%,l%,a)")]
    CssHsla,
    #[value(name = "cssKeyword", help = "CSS color keyword, eg: MidnightBlue")]
    CssKeyword,
}

impl From<CodeTypeArg> for ColorCodeType {
    fn from(arg: CodeTypeArg) -> Self {
        match arg {
            CodeTypeArg::Hex => ColorCodeType::Hex,
            CodeTypeArg::ShortHex => ColorCodeType::ShortHex,
            CodeTypeArg::CssRgb => ColorCodeType::CssRgb,
            CodeTypeArg::CssRgba => ColorCodeType::CssRgba,
            CodeTypeArg::CssHsl => ColorCodeType::CssHsl,
            CodeTypeArg::CssHsla => ColorCodeType::CssHsla,
            CodeTypeArg::CssKeyword => ColorCodeType::CssKeyword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_code_type_arg_names_match_library_names() {
        for (arg, code_type) in CodeTypeArg::value_variants()
            .iter()
            .zip(ColorCodeType::iter())
        {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(name, code_type.to_string());
            assert_eq!(ColorCodeType::from(*arg), code_type);
        }
    }

    #[test]
    fn test_parse_convert_args() {
        let cli_arg = CLIArg::try_parse_from([
            "colorcode",
            "--no-color",
            "convert",
            "#0066aa",
            "--to",
            "SHORTHEX",
        ])
        .unwrap();
        assert!(cli_arg.global_options.no_color);
        let CLICommand::Convert { code, to, from } = cli_arg.command else {
            panic!("expected convert");
        };
        assert_eq!(code, "#0066aa");
        assert_eq!(to, CodeTypeArg::ShortHex);
        assert_eq!(from, None);
    }

    #[test]
    fn test_log_file_requires_logging() {
        assert!(
            CLIArg::try_parse_from(["colorcode", "--log-file", "x.log", "lookup", "red"])
                .is_err()
        );
        assert!(
            CLIArg::try_parse_from(["colorcode", "-l", "--log-file", "x.log", "lookup", "red"])
                .is_ok()
        );
    }
}
