//! User input and interaction handling.
//! The fixed question set is asked only for fields without explicit command
//! line input, and skipped entirely with `--skip-questions` or in update mode
//! (where persisted state substitutes for answers).

use crate::error::{Error, Result};
use crate::options::{OptionOverrides, Preprocessor, ScriptCompiler, ViewExtension};
use dialoguer::{Confirm, Input, Select};

/// Trait for interactive prompting, seam for scripted test doubles.
pub trait Prompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Dialoguer-backed prompter used by the CLI.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Asks whether an already scaffolded destination should be updated.
pub fn confirm_update(prompt: &dyn Prompter) -> Result<bool> {
    prompt.confirm(
        "There is already a scaffolded application in place! Should I serve you an update?",
        true,
    )
}

/// Collects interactive answers for the fields the command line left open.
///
/// `explicit` carries the command line layer; a question is only asked when
/// its field is unset there. With `skip_questions` every question is skipped
/// and an empty answer layer is returned.
pub fn collect_answers(
    prompt: &dyn Prompter,
    explicit: &OptionOverrides,
    default_name: &str,
    skip_questions: bool,
) -> Result<OptionOverrides> {
    let mut answers = OptionOverrides::default();
    if skip_questions {
        return Ok(answers);
    }

    if explicit.name.is_none() {
        answers.name = Some(prompt.input("What's the name of your app?", default_name)?);
    }

    if explicit.preprocessor.is_none() {
        let choice = prompt.select(
            "What's your desired preprocessor?",
            &["less", "scss"],
            1,
        )?;
        answers.preprocessor =
            Some(if choice == 0 { Preprocessor::Less } else { Preprocessor::Scss });
    }

    if explicit.script_compiler.is_none() {
        let choice = prompt.select(
            "What's your desired script compiler?",
            &["JavaScript", "TypeScript"],
            0,
        )?;
        answers.script_compiler = Some(if choice == 0 {
            ScriptCompiler::JavaScript
        } else {
            ScriptCompiler::TypeScript
        });
    }

    if explicit.view_extension.is_none() {
        let choice = prompt.select(
            "What's your desired view file extension?",
            &["html", "hbs", "mustache"],
            1,
        )?;
        answers.view_extension =
            Some(*ViewExtension::ALL.get(choice).unwrap_or(&ViewExtension::ALL[0]));
    }

    if explicit.client_templates.is_none() {
        answers.client_templates =
            Some(prompt.confirm("Would you like to include client side templates?", false)?);
    }

    if explicit.example_code.is_none() {
        answers.example_code =
            Some(prompt.confirm("Would you like to include the example code?", false)?);
    }

    if explicit.exporter.is_none() {
        answers.exporter = Some(prompt.confirm(
            "Would you like to include static exporting functionalities?",
            false,
        )?);
    }

    if explicit.release.is_none() {
        answers.release =
            Some(prompt.confirm("Would you like to include release management?", false)?);
    }

    Ok(answers)
}
