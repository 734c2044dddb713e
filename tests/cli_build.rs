mod common;

use common::*;

#[test]
fn build_writes_self_contained_page() {
    let env = TestEnv::with_sample_catalog();

    let result = env.run(&["build"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("[OK] Build Complete"), "{}", result.stdout);
    assert!(result.stdout.contains("9 projects"));

    let html = env.read("dist/index.html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>IT Project 2023</title>"));
    assert!(html.contains("Lunar AI - Voice &amp; Text Chatbot"));
    assert!(html.contains("id=\"filter-all\" class=\"filter-input\" checked"));
    assert!(!html.contains("<script"));
}

#[test]
fn second_build_is_unchanged() {
    let env = TestEnv::with_sample_catalog();
    assert!(env.run(&["build"]).success);
    let first = env.read("dist/index.html");

    let result = env.run(&["build"]);
    assert!(result.success);
    assert!(result.stdout.contains("Already up to date"), "{}", result.stdout);
    assert_eq!(env.read("dist/index.html"), first);
}

#[test]
fn tag_flag_checks_matching_control() {
    let env = TestEnv::with_sample_catalog();

    let result = env.run(&["build", "--tag", "AI", "--out", "public"]);
    assert!(result.success, "{}", result.combined_output());

    let html = env.read("public/index.html");
    assert!(html.contains("id=\"filter-0\" class=\"filter-input\" checked"));
    assert!(html.contains("id=\"filter-all\" class=\"filter-input\">"));
}

#[test]
fn unknown_tag_renders_empty_state() {
    let env = TestEnv::with_sample_catalog();

    let result = env.run(&["build", "--tag", "NoSuchTag"]);
    assert!(result.success, "{}", result.combined_output());

    let html = env.read("dist/index.html");
    assert!(html.contains("id=\"filter-extra\""));
    assert!(html.contains("No projects found for this category."));
}

#[test]
fn dry_run_writes_nothing() {
    let env = TestEnv::with_sample_catalog();

    let result = env.run(&["build", "--dry-run"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Dry run"));
    assert!(!env.exists("dist/index.html"));
}

#[test]
fn json_output_is_one_event() {
    let env = TestEnv::with_sample_catalog();

    let result = env.run(&["--json", "build"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.json_lines();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "build");
    assert_eq!(events[0]["status"], "written");
    assert_eq!(events[0]["projects"], 9);
    assert_eq!(events[0]["tags"], 10);
}

#[test]
fn yaml_catalog_builds() {
    let env = TestEnv::new();
    env.write("team.yaml", SAMPLE_CATALOG_YAML);

    let result = env.run(&["build", "-c", "team.yaml", "--theme", "dark", "--no-animation"]);
    assert!(result.success, "{}", result.combined_output());

    let html = env.read("dist/index.html");
    assert!(html.contains("Quiz App"));
    assert!(!html.contains("@keyframes"));
}

#[test]
fn config_file_sets_paths() {
    let env = TestEnv::new();
    env.write("data/team.yaml", SAMPLE_CATALOG_YAML);
    env.write(
        "folio.toml",
        "[build]\ncatalog = \"data/team.yaml\"\nout_dir = \"site\"\n",
    );

    let result = env.run(&["build"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("site/index.html"));
}

#[test]
fn missing_catalog_suggests_init() {
    let env = TestEnv::new();

    let result = env.run(&["build"]);
    assert!(!result.success);
    assert!(result.stderr.contains("catalog not found"), "{}", result.stderr);
    assert!(result.stderr.contains("folio init"));
}

#[test]
fn invalid_catalog_fails_without_writing() {
    let env = TestEnv::new();
    env.write(
        "catalog.toml",
        r#"
[[projects]]
title = "Quiz"
github = "https://github.com/o/quiz"
tags = ["Quiz"]

[[projects]]
title = "Quiz"
github = "https://github.com/o/quiz2"
tags = ["Quiz"]
"#,
    );

    let result = env.run(&["build"]);
    assert!(!result.success);
    assert!(result.stderr.contains("duplicate project title 'Quiz'"), "{}", result.stderr);
    assert!(!env.exists("dist/index.html"));
}

#[test]
fn json_errors_are_events() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "build"]);
    assert!(!result.success);
    let events = result.json_lines();
    assert_eq!(events[0]["event"], "error");
    assert!(events[0]["message"].as_str().unwrap().contains("catalog not found"));
}

#[test]
fn malformed_config_fails_instead_of_using_defaults() {
    let env = TestEnv::with_sample_catalog();
    env.write("folio.toml", "[build\nout_dir = ");

    let result = env.run(&["build"]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("folio.toml"), "{}", result.combined_output());
    assert!(!env.exists("dist/index.html"));
}

#[test]
fn unknown_config_key_shows_in_build_summary() {
    let env = TestEnv::with_sample_catalog();
    env.write("folio.toml", "[build]\nout_dri = \"public\"\n");

    let result = env.run(&["build"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(
        result
            .stdout
            .contains("folio.toml: unknown key 'out_dri' (line 2), did you mean 'out_dir'?"),
        "{}",
        result.stdout
    );
    assert!(env.exists("dist/index.html"));
}

// dirs::config_dir honours XDG_CONFIG_HOME only on Linux
#[cfg(target_os = "linux")]
#[test]
fn project_config_layers_over_user_config() {
    let env = TestEnv::with_sample_catalog();
    let user_dir = env.home.path().join(".config").join("folio");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[build]\nout_dir = \"public\"\n").unwrap();
    env.write("folio.toml", "[theme]\ndefault_mode = \"dark\"\n");

    let result = env.run(&["build"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("public/index.html"));
    assert!(!env.exists("dist/index.html"));
}
