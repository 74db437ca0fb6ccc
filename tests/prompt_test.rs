use nitrogen::error::Result;
use nitrogen::options::{OptionOverrides, Preprocessor, ScriptCompiler, ViewExtension};
use nitrogen::prompt::{collect_answers, Prompter};
use std::cell::Cell;

/// Scripted prompter: answers every question with fixed values and counts
/// how many questions were asked.
struct ScriptedPrompter {
    input_value: String,
    select_value: usize,
    confirm_value: bool,
    asked: Cell<usize>,
}

impl ScriptedPrompter {
    fn new(input_value: &str, select_value: usize, confirm_value: bool) -> Self {
        Self {
            input_value: input_value.to_string(),
            select_value,
            confirm_value,
            asked: Cell::new(0),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, _prompt: &str, _default: &str) -> Result<String> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.input_value.clone())
    }

    fn select(&self, _prompt: &str, _items: &[&str], _default: usize) -> Result<usize> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.select_value)
    }

    fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.confirm_value)
    }
}

#[test]
fn test_all_questions_asked_when_nothing_passed() {
    let prompter = ScriptedPrompter::new("Test App", 0, true);
    let explicit = OptionOverrides::default();

    let answers = collect_answers(&prompter, &explicit, "fallback", false).unwrap();

    assert_eq!(prompter.asked.get(), 8);
    assert_eq!(answers.name.as_deref(), Some("Test App"));
    assert_eq!(answers.preprocessor, Some(Preprocessor::Less));
    assert_eq!(answers.script_compiler, Some(ScriptCompiler::JavaScript));
    assert_eq!(answers.view_extension, Some(ViewExtension::Html));
    assert_eq!(answers.client_templates, Some(true));
    assert_eq!(answers.example_code, Some(true));
    assert_eq!(answers.exporter, Some(true));
    assert_eq!(answers.release, Some(true));
}

#[test]
fn test_explicit_fields_are_not_asked() {
    let prompter = ScriptedPrompter::new("ignored", 1, false);
    let explicit = OptionOverrides {
        name: Some("passed".to_string()),
        preprocessor: Some(Preprocessor::Scss),
        script_compiler: Some(ScriptCompiler::JavaScript),
        view_extension: Some(ViewExtension::Hbs),
        client_templates: Some(false),
        example_code: Some(false),
        exporter: Some(false),
        release: Some(false),
    };

    let answers = collect_answers(&prompter, &explicit, "fallback", false).unwrap();

    assert_eq!(prompter.asked.get(), 0);
    assert!(answers.name.is_none());
    assert!(answers.preprocessor.is_none());
}

#[test]
fn test_skip_questions_returns_empty_layer() {
    let prompter = ScriptedPrompter::new("ignored", 0, true);
    let explicit = OptionOverrides::default();

    let answers = collect_answers(&prompter, &explicit, "fallback", true).unwrap();

    assert_eq!(prompter.asked.get(), 0);
    assert!(answers.name.is_none());
    assert!(answers.release.is_none());
}
