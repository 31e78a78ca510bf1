//! Plain-text rendering of dictionary data.
//!
//! Every method returns a finished `String`; printing happens in the UI
//! task. Colors come from a light or dark palette picked per call from the
//! shared dark-mode flag, so a theme toggle shows up on the next render.

use std::fmt::Write;

use console::Style;
use dixi_core::DarkModeFlag;
use dixi_types::{
    DictionaryEntry, DictionaryStats, LetterCount, LetterPage, SearchResult, Suggestion,
};

struct Palette {
    headword: Style,
    muted: Style,
    label: Style,
    selected: Style,
    error: Style,
}

impl Palette {
    fn light() -> Self {
        Self {
            headword: Style::new().black().bold(),
            muted: Style::new().color256(243),
            label: Style::new().color256(136).bold(),
            selected: Style::new().black().on_color256(227),
            error: Style::new().red().bold(),
        }
    }

    fn dark() -> Self {
        Self {
            headword: Style::new().white().bold(),
            muted: Style::new().color256(249),
            label: Style::new().color256(220).bold(),
            selected: Style::new().black().on_color256(178),
            error: Style::new().red().bold(),
        }
    }
}

#[derive(Clone)]
pub struct Renderer {
    dark_mode: DarkModeFlag,
}

impl Renderer {
    pub fn new(dark_mode: DarkModeFlag) -> Self {
        Self { dark_mode }
    }

    fn palette(&self) -> Palette {
        if self.dark_mode.is_dark() {
            Palette::dark()
        } else {
            Palette::light()
        }
    }

    pub fn notice(&self, message: &str) -> String {
        self.palette().muted.apply_to(message).to_string()
    }

    pub fn error(&self, message: &str) -> String {
        self.palette().error.apply_to(message).to_string()
    }

    /// Numbered dropdown rows, the highlighted one marked with `>`
    pub fn dropdown(&self, rows: &[Suggestion], selected: Option<usize>) -> String {
        let p = self.palette();
        let mut out = String::new();

        for (i, row) in rows.iter().enumerate() {
            let line = match &row.part_of_speech {
                Some(pos) => format!("{:>2}. {} {}", i + 1, row.headword, p.muted.apply_to(pos)),
                None => format!("{:>2}. {}", i + 1, row.headword),
            };
            if selected == Some(i) {
                let _ = writeln!(out, "> {}", p.selected.apply_to(line));
            } else {
                let _ = writeln!(out, "  {}", line);
            }
        }
        out.trim_end().to_string()
    }

    pub fn results(&self, query: &str, results: &[SearchResult]) -> String {
        let p = self.palette();
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{}",
            p.label
                .apply_to(format!("{} results for \"{}\"", results.len(), query))
        );
        for result in results {
            let entry = &result.entry;
            let _ = write!(out, "  {}", p.headword.apply_to(&entry.headword));
            if let Some(pos) = &entry.part_of_speech {
                let _ = write!(out, " {}", p.muted.apply_to(pos));
            }
            let _ = writeln!(
                out,
                " {}",
                p.muted.apply_to(format!("[{}]", result.match_type.as_str()))
            );
            if let Some(summary) = entry.translation_en.as_ref().or(entry.definition.as_ref()) {
                let _ = writeln!(out, "      {}", summary);
            }
            let _ = writeln!(out, "      {}", p.muted.apply_to(format!(":word {}", entry.id)));
        }
        out.trim_end().to_string()
    }

    /// Full entry card
    pub fn entry(&self, entry: &DictionaryEntry) -> String {
        let p = self.palette();
        let mut out = String::new();

        let _ = write!(out, "{}", p.headword.apply_to(&entry.headword));
        if let Some(pronunciation) = &entry.pronunciation {
            let _ = write!(out, " /{}/", pronunciation);
        }
        if let Some(pos) = &entry.part_of_speech {
            let _ = write!(out, " {}", p.muted.apply_to(pos));
        }
        out.push('\n');

        let fields = [
            ("Inflections", &entry.inflections),
            ("Definition", &entry.definition),
            ("Romanian", &entry.translation_ro),
            ("English", &entry.translation_en),
            ("French", &entry.translation_fr),
            ("Etymology", &entry.etymology),
            ("Context", &entry.context),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                let _ = writeln!(out, "  {}: {}", p.label.apply_to(label), value);
            }
        }

        let lists = [
            ("Examples", &entry.examples),
            ("Expressions", &entry.expressions),
            ("Related", &entry.related_terms),
        ];
        for (label, items) in lists {
            if items.is_empty() {
                continue;
            }
            let _ = writeln!(out, "  {}:", p.label.apply_to(label));
            for item in items {
                let _ = writeln!(out, "    - {}", item);
            }
        }

        match (&entry.source, &entry.source_url) {
            (Some(source), Some(url)) => {
                let _ = writeln!(out, "  {}", p.muted.apply_to(format!("Source: {} ({})", source, url)));
            }
            (Some(source), None) => {
                let _ = writeln!(out, "  {}", p.muted.apply_to(format!("Source: {}", source)));
            }
            (None, Some(url)) => {
                let _ = writeln!(out, "  {}", p.muted.apply_to(format!("Source: {}", url)));
            }
            (None, None) => {}
        }
        out.trim_end().to_string()
    }

    pub fn letters(&self, letters: &[LetterCount]) -> String {
        let p = self.palette();
        letters
            .iter()
            .map(|l| format!("{} {}", p.headword.apply_to(&l.letter), p.muted.apply_to(l.count)))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Entries for `letter`, `number` of `pages` in the header
    pub fn letter_page(&self, letter: &str, page: &LetterPage, number: u32, pages: u32) -> String {
        let p = self.palette();
        let mut out = String::new();

        if page.entries.is_empty() {
            return self.notice("No entries found for this letter.");
        }

        let _ = writeln!(
            out,
            "{} {}",
            p.label.apply_to(letter.to_uppercase()),
            p.muted.apply_to(format!("{} entries, page {} of {}", page.total, number, pages))
        );
        for entry in &page.entries {
            let _ = write!(out, "  {}", entry.headword);
            if let Some(pos) = &entry.part_of_speech {
                let _ = write!(out, " {}", p.muted.apply_to(pos));
            }
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    pub fn stats(&self, stats: &DictionaryStats) -> String {
        let p = self.palette();
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{} {}",
            p.label.apply_to("Total entries:"),
            stats.total_entries
        );
        if !stats.entries_by_pos.is_empty() {
            let _ = writeln!(out, "{}", p.label.apply_to("By part of speech:"));
            for pos in &stats.entries_by_pos {
                let _ = writeln!(out, "  {:<16} {}", pos.part_of_speech, pos.count);
            }
        }
        if !stats.entries_by_letter.is_empty() {
            let _ = writeln!(out, "{}", p.label.apply_to("By letter:"));
            let _ = writeln!(out, "  {}", self.letters(&stats.entries_by_letter));
        }
        out.trim_end().to_string()
    }

    pub fn recent(&self, recent: &[String]) -> String {
        if recent.is_empty() {
            return self.notice("No recent searches.");
        }

        let p = self.palette();
        let mut out = String::new();
        let _ = writeln!(out, "{}", p.label.apply_to("Recent searches:"));
        for (i, query) in recent.iter().enumerate() {
            let _ = writeln!(out, "{:>2}. {}", i + 1, query);
        }
        out.trim_end().to_string()
    }

    pub fn help(&self) -> String {
        let p = self.palette();
        let commands = [
            ("<text>", "type into the search input"),
            ("<empty line>, :enter", "search the typed text or highlighted suggestion"),
            (":down, :up", "move through suggestions"),
            (":pick N", "search suggestion N"),
            (":esc", "close suggestions"),
            (":blur, :focus", "leave or return to the input"),
            (":search Q", "search Q directly"),
            (":word ID", "show one entry"),
            (":random", "word of the day"),
            (":letters, :letter L [P]", "browse by first letter"),
            (":stats", "dictionary statistics"),
            (":recent", "recent searches"),
            (":theme", "toggle light and dark"),
            (":quit", "exit"),
        ];

        let mut out = String::new();
        for (usage, description) in commands {
            let _ = writeln!(out, "  {:<24} {}", p.label.apply_to(usage), p.muted.apply_to(description));
        }
        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;
    use dixi_core::{Theme, ThemeTarget};
    use uuid::Uuid;

    use super::*;

    fn plain(s: String) -> String {
        strip_ansi_codes(&s).into_owned()
    }

    fn entry(headword: &str) -> DictionaryEntry {
        DictionaryEntry {
            id: Uuid::nil(),
            headword: headword.to_string(),
            pronunciation: None,
            part_of_speech: Some("noun".to_string()),
            inflections: None,
            definition: None,
            translation_ro: Some("apă".to_string()),
            translation_en: Some("water".to_string()),
            translation_fr: None,
            etymology: None,
            examples: vec!["apa easte arcoarã".to_string()],
            expressions: Vec::new(),
            related_terms: Vec::new(),
            context: None,
            source: Some("Papahagi".to_string()),
            source_url: None,
        }
    }

    #[test]
    fn dropdown_numbers_rows_and_marks_selection() {
        let renderer = Renderer::new(DarkModeFlag::new());
        let rows = vec![
            Suggestion::new("casă").with_part_of_speech("noun"),
            Suggestion::new("casca"),
        ];

        let out = plain(renderer.dropdown(&rows, Some(1)));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("   1. casă"));
        assert!(lines[0].ends_with("noun"));
        assert!(lines[1].starts_with(">  2. casca"));
    }

    #[test]
    fn entry_lists_present_fields_only() {
        let renderer = Renderer::new(DarkModeFlag::new());
        let out = plain(renderer.entry(&entry("apã")));

        assert!(out.starts_with("apã noun"));
        assert!(out.contains("English: water"));
        assert!(out.contains("    - apa easte arcoarã"));
        assert!(out.contains("Source: Papahagi"));
        assert!(!out.contains("Etymology"));
        assert!(!out.contains("Expressions"));
    }

    #[test]
    fn empty_recent_list_has_a_notice() {
        let renderer = Renderer::new(DarkModeFlag::new());
        assert_eq!(plain(renderer.recent(&[])), "No recent searches.");
        assert_eq!(
            plain(renderer.recent(&["apa".to_string(), "foc".to_string()])),
            "Recent searches:\n 1. apa\n 2. foc"
        );
    }

    #[test]
    fn palette_follows_the_dark_mode_flag() {
        let flag = DarkModeFlag::new();
        let renderer = Renderer::new(flag.clone());

        flag.apply(Theme::Dark);
        let dark = plain(renderer.letters(&[LetterCount {
            letter: "a".to_string(),
            count: 12,
        }]));
        flag.apply(Theme::Light);
        let light = plain(renderer.letters(&[LetterCount {
            letter: "a".to_string(),
            count: 12,
        }]));

        assert_eq!(dark, "a 12");
        assert_eq!(dark, light);
    }
}
