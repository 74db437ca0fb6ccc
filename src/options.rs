//! Option resolution for a projection run.
//! Merges command line input, persisted state and interactive answers into a
//! fully populated, immutable [`OptionSet`] with fixed precedence:
//! explicit input > persisted state (update mode only) > answer > default.

use cruet::to_kebab_case;
use log::warn;
use serde::Serialize;

/// Supported stylesheet preprocessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preprocessor {
    Less,
    Scss,
}

impl Preprocessor {
    /// The file extension (without dot) of sources written in this dialect.
    pub fn extension(&self) -> &'static str {
        match self {
            Preprocessor::Less => "less",
            Preprocessor::Scss => "scss",
        }
    }

    /// Maps a recognized preprocessor extension back to its dialect.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "less" => Some(Preprocessor::Less),
            "scss" => Some(Preprocessor::Scss),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::from_extension(&s.to_lowercase())
    }
}

/// Supported script compilers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScriptCompiler {
    JavaScript,
    TypeScript,
}

impl ScriptCompiler {
    /// The script extension (without dot) this compiler consumes.
    pub fn extension(&self) -> &'static str {
        match self {
            ScriptCompiler::JavaScript => "js",
            ScriptCompiler::TypeScript => "ts",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Some(ScriptCompiler::JavaScript),
            "typescript" | "ts" => Some(ScriptCompiler::TypeScript),
            _ => None,
        }
    }
}

/// Supported view file extensions, in enumeration order. The first variant
/// doubles as the fallback when an unrecognized value is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewExtension {
    Html,
    Hbs,
    Mustache,
}

impl ViewExtension {
    pub const ALL: [ViewExtension; 3] =
        [ViewExtension::Html, ViewExtension::Hbs, ViewExtension::Mustache];

    pub fn extension(&self) -> &'static str {
        match self {
            ViewExtension::Html => "html",
            ViewExtension::Hbs => "hbs",
            ViewExtension::Mustache => "mustache",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "html" => Some(ViewExtension::Html),
            "hbs" => Some(ViewExtension::Hbs),
            "mustache" => Some(ViewExtension::Mustache),
            _ => None,
        }
    }

    /// Parses a view extension token, falling back to the first enumeration
    /// option rather than failing on an unrecognized value.
    pub fn parse_or_first(s: &str) -> Self {
        Self::from_extension(&s.to_lowercase()).unwrap_or(ViewExtension::ALL[0])
    }
}

/// Fully resolved, immutable configuration driving a single projection run.
/// Every field holds a valid value by the time the rule engine sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSet {
    pub name: String,
    pub preprocessor: Preprocessor,
    #[serde(rename = "jscompiler")]
    pub script_compiler: ScriptCompiler,
    pub view_extension: ViewExtension,
    pub client_templates: bool,
    pub example_code: bool,
    pub exporter: bool,
    pub release: bool,
    #[serde(skip)]
    pub update_mode: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        OptionSet {
            name: String::new(),
            preprocessor: Preprocessor::Scss,
            script_compiler: ScriptCompiler::JavaScript,
            view_extension: ViewExtension::Hbs,
            client_templates: false,
            example_code: false,
            exporter: false,
            release: false,
            update_mode: false,
        }
    }
}

/// A partial option layer. Used both for explicit command line input and for
/// interactively collected answers; `None` means "this source has no opinion".
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub name: Option<String>,
    pub preprocessor: Option<Preprocessor>,
    pub script_compiler: Option<ScriptCompiler>,
    pub view_extension: Option<ViewExtension>,
    pub client_templates: Option<bool>,
    pub example_code: Option<bool>,
    pub exporter: Option<bool>,
    pub release: Option<bool>,
}

fn persisted_str(persisted: Option<&serde_json::Value>, key: &str) -> Option<String> {
    let value = persisted?.get(key)?;
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            warn!("Persisted field '{}' is not a string, falling back", key);
            None
        }
    }
}

fn persisted_bool(persisted: Option<&serde_json::Value>, key: &str) -> Option<bool> {
    let value = persisted?.get(key)?;
    match value.as_bool() {
        Some(b) => Some(b),
        None => {
            warn!("Persisted field '{}' is not a boolean, falling back", key);
            None
        }
    }
}

fn persisted_parsed<T>(
    persisted: Option<&serde_json::Value>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = persisted_str(persisted, key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!("Persisted field '{}' holds unknown value '{}', falling back", key, raw);
    }
    parsed
}

/// Resolves a complete [`OptionSet`] from the three layered sources.
///
/// Each field resolves independently; a malformed persisted value falls back
/// to the next source for that field alone and is reported as a warning.
/// The persisted layer only participates in update mode. `fallback_name` is
/// the built-in default for `name` (the output directory basename).
pub fn resolve_options(
    explicit: &OptionOverrides,
    persisted: Option<&serde_json::Value>,
    answers: &OptionOverrides,
    update_mode: bool,
    fallback_name: &str,
) -> OptionSet {
    let persisted = if update_mode { persisted } else { None };
    let defaults = OptionSet::default();

    let name = explicit
        .name
        .clone()
        .or_else(|| persisted_str(persisted, "name"))
        .or_else(|| answers.name.clone())
        .unwrap_or_else(|| fallback_name.to_string());

    OptionSet {
        name: to_kebab_case(&name),
        preprocessor: explicit
            .preprocessor
            .or_else(|| persisted_parsed(persisted, "preprocessor", Preprocessor::parse))
            .or(answers.preprocessor)
            .unwrap_or(defaults.preprocessor),
        script_compiler: explicit
            .script_compiler
            .or_else(|| persisted_parsed(persisted, "jscompiler", ScriptCompiler::parse))
            .or(answers.script_compiler)
            .unwrap_or(defaults.script_compiler),
        view_extension: explicit
            .view_extension
            .or_else(|| {
                persisted_parsed(persisted, "viewExtension", ViewExtension::from_extension)
            })
            .or(answers.view_extension)
            .unwrap_or(defaults.view_extension),
        client_templates: explicit
            .client_templates
            .or_else(|| persisted_bool(persisted, "clientTemplates"))
            .or(answers.client_templates)
            .unwrap_or(defaults.client_templates),
        example_code: explicit
            .example_code
            .or_else(|| persisted_bool(persisted, "exampleCode"))
            .or(answers.example_code)
            .unwrap_or(defaults.example_code),
        exporter: explicit
            .exporter
            .or_else(|| persisted_bool(persisted, "exporter"))
            .or(answers.exporter)
            .unwrap_or(defaults.exporter),
        release: explicit
            .release
            .or_else(|| persisted_bool(persisted, "release"))
            .or(answers.release)
            .unwrap_or(defaults.release),
        update_mode,
    }
}
