use common::App;
use unicode_general_category::{get_general_category, GeneralCategory};

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Word count: runs of Unicode letters (categories L*) are words, every
/// other character separates them.
#[derive(Debug, Default)]
pub struct WcApp;

impl App for WcApp {
    fn map(&self, _filename: String, line: String) -> Vec<(String, String)> {
        line.split(|c: char| !is_letter(c))
            .filter(|w| !w.is_empty())
            .map(|w| (w.to_owned(), "1".to_owned()))
            .collect()
    }

    fn reduce(&self, _word: String, markers: Vec<String>) -> String {
        markers.len().to_string()
    }
}
