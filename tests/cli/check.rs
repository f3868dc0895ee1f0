use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_empty_locales_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("locales")?;

    assert_cmd_snapshot!(test.check_command(), @r"
success: false
exit_code: 1
----- stdout -----
Translation tests complete: Failed (1 checks run)

(no file):
  ✘ Does not include a default locale file

✘ 1 failure

----- stderr -----
");

    Ok(())
}

#[test]
fn test_reference_missing_from_default_locale() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.default.json", "{}"),
        (
            "templates/product.liquid",
            r#"{{ "product.card.title" | t }}"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
success: false
exit_code: 1
----- stdout -----
Translation tests complete: Failed (2 checks run)

./templates/product.liquid:
  ✘ 'product.card.title' does not have a matching entry in 'en.default' (offset 0)

✘ 1 failure

----- stderr -----
");

    Ok(())
}

#[test]
fn test_locale_missing_entries() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "locales/en.default.json",
            r#"{"hello": "Hello!", "bye": "Bye!"}"#,
        ),
        ("locales/fr.json", "{}"),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
success: false
exit_code: 1
----- stdout -----
Translation tests complete: Failed (2 checks run)

./locales/fr.json:
  ✘ Missing entries found: 'hello', 'bye'

✘ 1 failure

----- stderr -----
");

    Ok(())
}

#[test]
fn test_valid_html_value() -> Result<()> {
    let test = CliTest::with_files(&[(
        "locales/en.default.json",
        r#"{"hello_html": "<h1>Hello!</h1>"}"#,
    )])?;

    let mut cmd = test.check_command();
    cmd.arg("--verbose");
    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----
✓ Includes a default locale file --> ./locales/en.default.json
✓ 'hello_html' contains valid HTML --> ./locales/en.default.json
Translation tests complete: Success (2 checks run)

----- stderr -----
note: No .themelintrc.json found, using defaults
note: Loaded 1 locale files and 0 references from 0 templates
note: default-locale: 1 findings, 0 failures
note: referenced-keys: 0 findings, 0 failures
note: key-parity: 0 findings, 0 failures
note: html: 1 findings, 0 failures
");

    Ok(())
}

#[test]
fn test_invalid_html_value() -> Result<()> {
    let test = CliTest::with_files(&[(
        "locales/en.default.json",
        r#"{"hello_html": "<h1>Hello!"}"#,
    )])?;

    assert_cmd_snapshot!(test.check_command(), @r"
success: false
exit_code: 1
----- stdout -----
Translation tests complete: Failed (2 checks run)

./locales/en.default.json:
  ✘ 'hello_html' contains invalid HTML. See https://github.com/htmllint/htmllint/wiki/Options#tag-close

✘ 1 failure

----- stderr -----
");

    Ok(())
}

#[test]
fn test_unterminated_html_value() -> Result<()> {
    let test = CliTest::with_files(&[(
        "locales/en.default.json",
        r#"{"link_html": "Go to <a href=\"{{ url }}"}"#,
    )])?;

    assert_cmd_snapshot!(test.check_command(), @r"
success: false
exit_code: 1
----- stdout -----
Translation tests complete: Failed (2 checks run)

./locales/en.default.json:
  ✘ 'link_html' contains invalid HTML. See https://github.com/htmllint/htmllint/wiki/Options#tag-close

✘ 1 failure

----- stderr -----
");

    Ok(())
}

#[test]
fn test_pluralized_reference() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "locales/en.default.json",
            r#"{"product": {"inventory_with_count": {"one": "{{ count }} item", "other": "{{ count }} items"}}}"#,
        ),
        (
            "templates/product.liquid",
            r#"{{ 'product.inventory_with_count' | t: count: 1 }}"#,
        ),
    ])?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----
✓ Includes a default locale file --> ./locales/en.default.json
✓ 'product.inventory_with_count.other' has a matching entry in 'en.default' --> ./templates/product.liquid:0
Translation tests complete: Success (2 checks run)

----- stderr -----
note: No .themelintrc.json found, using defaults
note: Loaded 1 locale files and 1 references from 1 templates
note: default-locale: 1 findings, 0 failures
note: referenced-keys: 1 findings, 0 failures
note: key-parity: 0 findings, 0 failures
note: html: 0 findings, 0 failures
");

    Ok(())
}

#[test]
fn test_clean_theme() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "locales/en.default.json",
            r#"{"general": {"title": "Shop", "banner_html": "<p><strong>Sale</strong></p>"}}"#,
        ),
        (
            "locales/fr.json",
            r#"{"general": {"title": "Boutique", "banner_html": "<p><strong>Soldes</strong></p>"}}"#,
        ),
        (
            "layout/theme.liquid",
            r#"<title>{{ 'general.title' | t }}</title>"#,
        ),
    ])?;

    // default locale, one reference, fr parity, two html values
    assert_cmd_snapshot!(test.check_command(), @r"
success: true
exit_code: 0
----- stdout -----
Translation tests complete: Success (5 checks run)

----- stderr -----
");

    Ok(())
}

#[test]
fn test_failures_grouped_in_first_seen_order() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.default.json", r#"{"a": "A"}"#),
        ("locales/de.json", r#"{"b": "B"}"#),
        (
            "sections/footer.liquid",
            r#"{{ 'x' | t }} and {{ 'a' | t }} and {{ 'y' | translate }}"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
success: false
exit_code: 1
----- stdout -----
Translation tests complete: Failed (5 checks run)

./sections/footer.liquid:
  ✘ 'x' does not have a matching entry in 'en.default' (offset 0)
  ✘ 'y' does not have a matching entry in 'en.default' (offset 36)

./locales/de.json:
  ✘ Missing entries found: 'a'; Extra entries found: 'b'

✘ 3 failures

----- stderr -----
");

    Ok(())
}

#[test]
fn test_select_checks() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.default.json", r#"{"hello": "Hello!"}"#),
        ("locales/fr.json", r#"{"hello": "Bonjour !"}"#),
        ("index.liquid", r#"{{ 'missing.key' | t }}"#),
    ])?;

    let mut cmd = test.check_command();
    cmd.args(["--check", "key-parity"]);
    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----
Translation tests complete: Success (1 checks run)

----- stderr -----
");

    Ok(())
}

#[test]
fn test_hidden_locale_file_is_ignored() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.default.json", r#"{"hello": "Hello!"}"#),
        ("locales/.backup.json", r#"{"stale": "Old"}"#),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
success: true
exit_code: 0
----- stdout -----
Translation tests complete: Success (1 checks run)

----- stderr -----
");

    Ok(())
}

#[test]
fn test_empty_top_level_segment() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "locales/en.default.json",
            r#"{"": {"title": "Untitled"}, "title": "Shop"}"#,
        ),
        ("index.liquid", r#"{{ '.title' | t }} {{ 'title' | t }}"#),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
success: true
exit_code: 0
----- stdout -----
Translation tests complete: Success (3 checks run)

----- stderr -----
");

    Ok(())
}

#[test]
fn test_malformed_locale_file() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.default.json", r#"{"hello": "#),
        ("index.liquid", r#"{{ 'hello' | t }}"#),
    ])?;

    insta::with_settings!({filters => vec![(r"at line \d+ column \d+", "at [POSITION]")]}, {
        assert_cmd_snapshot!(test.check_command(), @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Failed to parse locale file: "./locales/en.default.json": EOF while parsing a value at [POSITION]
"#);
    });

    Ok(())
}

#[test]
fn test_conflicting_locale_keys() -> Result<()> {
    let test = CliTest::with_files(&[(
        "locales/en.default.json",
        r#"{"a": "x", "a.b": "y"}"#,
    )])?;

    assert_cmd_snapshot!(test.check_command(), @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Invalid locale file: "./locales/en.default.json": key 'a' is both a value and the parent of 'a.b'
"#);

    Ok(())
}

#[test]
fn test_path_is_not_a_directory() -> Result<()> {
    let test = CliTest::with_files(&[("file.txt", "text")])?;

    let mut cmd = test.command();
    cmd.arg("file.txt");
    assert_cmd_snapshot!(cmd, @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: 'file.txt' is not a directory
");

    Ok(())
}

#[test]
fn test_absolute_path_argument() -> Result<()> {
    let test = CliTest::with_files(&[("locales/en.default.json", "{}")])?;

    let mut cmd = test.command();
    cmd.arg(test.root());
    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----
Translation tests complete: Success (1 checks run)

----- stderr -----
");

    Ok(())
}

#[test]
fn test_no_path_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command(), @r"
success: true
exit_code: 0
----- stdout -----
A fast CLI tool for checking translation issues in Liquid themes

Usage: theme-lint [OPTIONS] [PATH]

Arguments:
  [PATH]  Theme root directory to check

Options:
      --locales-dir <LOCALES_DIR>  Locales directory, relative to the theme root (overrides config
                                   file)
      --check <CHECKS>             Checks to run (default: all) Can be specified multiple times:
                                   --check key-parity --check html [possible values: default-locale,
                                   referenced-keys, key-parity, html]
  -v, --verbose                    Enable verbose output
  -h, --help                       Print help
  -V, --version                    Print version

----- stderr -----
");

    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--version");
    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----
theme-lint 0.1.0

----- stderr -----
");

    Ok(())
}
