// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

#[derive(Display)]
pub enum UIStrings {
    #[strum(serialize = "Parsed as {code_type}")]
    ParsedAs { code_type: String },

    #[strum(serialize = "Same color in every syntax:")]
    EverySyntax,

    #[strum(serialize = "No CSS keyword has this color")]
    NoKeyword,

    #[strum(serialize = "No keyword contains '{filter}'")]
    NoKeywordMatchesFilter { filter: String },

    #[strum(serialize = "{count} of {total} keywords")]
    KeywordCount { count: usize, total: usize },

    #[strum(serialize = "Start logging...")]
    StartLogging,

    #[strum(serialize = "Stop logging...")]
    StopLogging,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fields_are_interpolated() {
        assert_eq!(
            UIStrings::ParsedAs {
                code_type: "hex".to_string()
            }
            .to_string(),
            "Parsed as hex"
        );
        assert_eq!(
            UIStrings::KeywordCount {
                count: 2,
                total: 148
            }
            .to_string(),
            "2 of 148 keywords"
        );
    }
}
