// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Each command returns the text to print, so the binary only has to print it and tests
//! can check it without spawning a process.

use crate::{CLIArg, CLICommand, CodeTypeArg, ColorSupport, UIStrings, dim, emphasis, normal,
            render_swatch};
use color_code::{Color, ColorCodeType, all_color_codes, keyword_table,
                 try_format_color_code, try_parse_color_code};
use miette::IntoDiagnostic;
use serde::Serialize;

/// JSON shape of `colorcode parse --json`.
#[derive(Debug, Serialize)]
pub struct ParseReport<'a> {
    pub input: &'a str,
    pub code_type: ColorCodeType,
    pub color: Color,
    pub codes: Vec<CodeEntry>,
}

#[derive(Debug, Serialize)]
pub struct CodeEntry {
    pub code_type: ColorCodeType,
    pub code: String,
}

/// # Errors
///
/// Returns an error if the input does not parse, or can't be written in the requested
/// syntax.
pub fn try_run_command(cli_arg: &CLIArg) -> miette::Result<String> {
    let color_support = ColorSupport::from(&cli_arg.global_options);

    match &cli_arg.command {
        CLICommand::Parse {
            code,
            maybe_as_type,
            json,
        } => run_parse(code, *maybe_as_type, *json, color_support),
        CLICommand::Convert { code, to, from } => run_convert(code, *to, *from),
        CLICommand::Lookup { name } => run_lookup(name),
        CLICommand::Keywords { filter } => {
            Ok(run_keywords(filter.as_deref(), color_support))
        }
    }
}

/// # Errors
///
/// Returns an error if `code` does not parse.
pub fn run_parse(
    code: &str,
    maybe_as_type: Option<CodeTypeArg>,
    json: bool,
    color_support: ColorSupport,
) -> miette::Result<String> {
    let parsed = try_parse_color_code(code, maybe_as_type.map(ColorCodeType::from))?;
    let codes = all_color_codes(parsed.color);

    if json {
        let report = ParseReport {
            input: code.trim(),
            code_type: parsed.code_type,
            color: parsed.color,
            codes: codes
                .into_iter()
                .map(|(code_type, code)| CodeEntry { code_type, code })
                .collect(),
        };
        return serde_json::to_string_pretty(&report).into_diagnostic();
    }

    let name_width = ColorCodeType::parse_order()
        .map(|it| it.to_string().len())
        .max()
        .unwrap_or_default();

    let mut lines = vec![
        emphasis(
            UIStrings::ParsedAs {
                code_type: parsed.code_type.to_string(),
            },
            color_support,
        ),
        dim(UIStrings::EverySyntax, color_support),
    ];

    for (code_type, code) in &codes {
        let name = format!("{:<name_width$}", code_type.to_string());
        lines.push(format!(
            "  {} {}",
            dim(name, color_support),
            normal(code, color_support)
        ));
    }

    if !codes
        .iter()
        .any(|(code_type, _)| *code_type == ColorCodeType::CssKeyword)
    {
        lines.push(format!(
            "  {}",
            dim(UIStrings::NoKeyword, color_support)
        ));
    }

    let hex = parsed.color.code(ColorCodeType::Hex).unwrap_or_default();
    if let Some(swatch) = render_swatch(parsed.color, &hex, color_support) {
        lines.push(swatch);
    }

    Ok(lines.join("\n"))
}

/// Prints only the converted code, so the output can be piped.
///
/// # Errors
///
/// Returns an error if `code` does not parse (as `maybe_from` when given), or there is no
/// keyword for the color when `to` is [`CodeTypeArg::CssKeyword`].
pub fn run_convert(
    code: &str,
    to: CodeTypeArg,
    maybe_from: Option<CodeTypeArg>,
) -> miette::Result<String> {
    let parsed = try_parse_color_code(code, maybe_from.map(ColorCodeType::from))?;
    let it = try_format_color_code(parsed.color, to.into())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "🔁 convert", from = %parsed.code_type, to = ?to, result = %it);
    Ok(it)
}

/// # Errors
///
/// Returns an error if `name` is not a CSS color keyword.
pub fn run_lookup(name: &str) -> miette::Result<String> {
    let parsed = try_parse_color_code(name, Some(ColorCodeType::CssKeyword))?;
    Ok(try_format_color_code(parsed.color, ColorCodeType::Hex)?)
}

/// One line per keyword, in table order. `maybe_filter` matches any part of the name,
/// ignoring case.
#[must_use]
pub fn run_keywords(maybe_filter: Option<&str>, color_support: ColorSupport) -> String {
    let table = keyword_table();
    let maybe_filter = maybe_filter.map(str::to_lowercase);

    let mut lines = table
        .iter()
        .filter(|it| match &maybe_filter {
            Some(filter) => it.name.to_lowercase().contains(filter.as_str()),
            None => true,
        })
        .map(|it| {
            let hex = it.color.code(ColorCodeType::Hex).unwrap_or_default();
            let swatch = render_swatch(it.color, "", color_support)
                .map(|swatch| format!("{swatch} "))
                .unwrap_or_default();
            format!("{hex} {swatch}{}", normal(it.name, color_support))
        })
        .collect::<Vec<_>>();

    if let Some(filter) = maybe_filter {
        if lines.is_empty() {
            return dim(UIStrings::NoKeywordMatchesFilter { filter }, color_support);
        }
        lines.push(dim(
            UIStrings::KeywordCount {
                count: lines.len(),
                total: table.len(),
            },
            color_support,
        ));
    }

    lines.join("\n")
}
