//! nitrogen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, option resolution and the
//! projection flow, and coordinates interactions between the modules.

use std::path::Path;

use nitrogen::{
    catalog,
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    install::invoke_package_manager,
    logger::init_logger,
    options::{resolve_options, OptionOverrides, Preprocessor, ScriptCompiler, ViewExtension},
    pipeline::ProjectionPipeline,
    prompt::{collect_answers, confirm_update, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    source::{LocalTemplateSource, TemplateSourceProvider},
    state::{is_existing_project, load_state, save_state},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// The built-in default for the application name: the basename of the
/// output directory, which for `.` is the current directory's basename.
fn default_name(output_dir: &Path) -> String {
    output_dir
        .canonicalize()
        .unwrap_or_else(|_| output_dir.to_path_buf())
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}

/// Builds the explicit option layer from command line arguments.
fn explicit_overrides(args: &Args) -> OptionOverrides {
    OptionOverrides {
        name: args.name.clone(),
        preprocessor: args.pre.as_deref().and_then(Preprocessor::parse),
        script_compiler: args.js.as_deref().and_then(ScriptCompiler::parse),
        view_extension: args.view_ext.as_deref().map(ViewExtension::parse_or_first),
        client_templates: args.client_tpl,
        example_code: args.example_code,
        exporter: args.exporter,
        release: args.release,
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Materializes the template source tree through the provider
/// 2. Detects an existing scaffold in the destination and confirms an update
/// 3. Loads persisted state (update mode only) and collects answers
/// 4. Resolves the option set and persists it for future update runs
/// 5. Enumerates the catalog and projects it into the destination
/// 6. Invokes the package manager, fire-and-forget
fn run(args: Args) -> Result<()> {
    let provider = LocalTemplateSource::new(&args.template);
    let source_root = provider.materialize()?;

    let prompt = DialoguerPrompter::new();

    let update_mode = is_existing_project(&args.output_dir)
        && (args.skip_questions || confirm_update(&prompt)?);

    let persisted = if update_mode { load_state(&args.output_dir) } else { None };

    let explicit = explicit_overrides(&args);
    let fallback_name = default_name(&args.output_dir);

    // Update runs reuse persisted state instead of asking again.
    let answers = if update_mode {
        OptionOverrides::default()
    } else {
        collect_answers(&prompt, &explicit, &fallback_name, args.skip_questions)?
    };

    let options =
        resolve_options(&explicit, persisted.as_ref(), &answers, update_mode, &fallback_name);

    save_state(&args.output_dir, &options)?;

    let catalog = catalog::enumerate(&source_root)?;

    println!("Scaffolding your app");

    let renderer = MiniJinjaRenderer::new();
    let pipeline =
        ProjectionPipeline::new(&options, &renderer, &source_root, &args.output_dir, VERSION);
    let result = pipeline.project(&catalog)?;

    println!(
        "Projected {} files into {} ({} dropped).",
        result.written.len(),
        args.output_dir.display(),
        result.dropped.len()
    );

    if !args.skip_install {
        invoke_package_manager(&args.output_dir);
    }

    println!("All done - have fun");
    Ok(())
}
