use markform::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use markform::transform::Markers;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".markformrc");
    let content = r#"
# comment
--verbose

--fence ~~~

--page-break=***
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.verbose);
    assert_eq!(flags.fence.as_deref(), Some("~~~"));
    assert_eq!(flags.page_break.as_deref(), Some("***"));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".markformrc");
    let content = "--verbose\n--fence ~~~\n--page-break ***\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "markform".to_string(),
        "code-block".to_string(),
        "--fence".to_string(),
        "````".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.verbose, "file flags should remain enabled");
    assert_eq!(effective.fence.as_deref(), Some("````"), "cli should override fence");
    assert_eq!(
        effective.page_break.as_deref(),
        Some("***"),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_missing_config_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("absent")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
    assert_eq!(flags.markers(), Markers::default());
}

#[test]
fn test_page_break_value_may_start_with_hyphen() {
    let args = vec!["--page-break".to_string(), "---".to_string()];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.page_break.as_deref(), Some("---"));
}
