use clap::Parser;
use nitrogen::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("nitrogen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./template", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, PathBuf::from("./template"));
    assert_eq!(parsed.output_dir, PathBuf::from("./output"));
    assert!(parsed.name.is_none());
    assert!(parsed.pre.is_none());
    assert!(parsed.client_tpl.is_none());
    assert!(!parsed.skip_questions);
    assert!(!parsed.skip_install);
    assert!(!parsed.verbose);
}

#[test]
fn test_option_flags() {
    let args = make_args(&[
        "--name",
        "My App",
        "--pre",
        "less",
        "--js",
        "TypeScript",
        "--view-ext",
        "mustache",
        "--skip-questions",
        "./template",
        "./output",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name.as_deref(), Some("My App"));
    assert_eq!(parsed.pre.as_deref(), Some("less"));
    assert_eq!(parsed.js.as_deref(), Some("TypeScript"));
    assert_eq!(parsed.view_ext.as_deref(), Some("mustache"));
    assert!(parsed.skip_questions);
}

#[test]
fn test_toggle_flags_distinguish_unset_from_false() {
    let args = make_args(&["--client-tpl", "--exporter=false", "./template", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.client_tpl, Some(true));
    assert_eq!(parsed.exporter, Some(false));
    assert_eq!(parsed.example_code, None);
    assert_eq!(parsed.release, None);
}

#[test]
fn test_missing_args() {
    let args = make_args(&["./template"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./template", "./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
