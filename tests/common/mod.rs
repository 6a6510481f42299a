//! Test utilities and helper functions for the paste cleaner test suite

use kodegen_tools_paste_cleaner::{PasteConfig, PasteMode, PasteTarget};

/// Host document double recording every insertion it receives
#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub markup: Vec<String>,
    pub text: Vec<String>,
}

impl PasteTarget for RecordingEditor {
    fn insert_content(&mut self, markup: &str) {
        self.markup.push(markup.to_string());
    }

    fn insert_text(&mut self, text: &str) {
        self.text.push(text.to_string());
    }
}

impl RecordingEditor {
    #[allow(dead_code)]
    pub fn insertions(&self) -> usize {
        self.markup.len() + self.text.len()
    }
}

/// Configuration for `mode` with every other option at its default
#[allow(dead_code)]
pub fn config_for(mode: PasteMode) -> PasteConfig {
    PasteConfig::default().with_mode(mode)
}

/// A clipboard payload shaped like a Word for the web copy
#[allow(dead_code)]
pub fn office_clipboard(body: &str) -> String {
    format!(
        r#"<html xmlns:o="urn:schemas-microsoft-com:office:office">
<head>
<meta charset="utf-8">
<style>p.MsoNormal {{ margin: 0; font-family: Calibri; }}</style>
</head>
<body lang="EN-US">
<!--StartFragment-->{body}<!--EndFragment-->
</body>
</html>"#
    )
}
