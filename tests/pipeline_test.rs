//! Integration tests for the resolve/link/assemble pipeline
//!
//! Drives the pipeline against a fake JDK (shell-script `java`, `jdeps` and
//! `jlink` stand-ins) so every external interaction is exercised without a
//! real JDK installation.

mod common;

use common::{break_tool, TestProject};

use jrelink::core::config::{BuildConfig, BuildOverrides};
use jrelink::core::manifest::Manifest;
use jrelink::core::pipeline::{Pipeline, PipelineSummary};
use jrelink::error::{AssemblyError, CommandError, JrelinkError};

fn build_config(
    project: &TestProject,
    jdk: std::path::PathBuf,
    tweak: impl FnOnce(&mut BuildOverrides),
) -> BuildConfig {
    let mut overrides = BuildOverrides {
        java_home: Some(jdk),
        ..Default::default()
    };
    tweak(&mut overrides);
    BuildConfig::from_sources(&project.path(), &Manifest::default(), overrides)
        .expect("config should validate")
}

async fn run_pipeline(config: BuildConfig) -> Result<PipelineSummary, JrelinkError> {
    Pipeline::new(config)?.run().await
}

#[tokio::test]
async fn test_no_platform_deps_skips_link_and_leaves_output_untouched() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("plain.jar");
    project.set_jar_deps("plain.jar", &["com.example.util", "not found"]);

    let config = build_config(&project, jdk, |_| {});
    let summary = run_pipeline(config).await.unwrap();

    assert!(!summary.image_built);
    assert!(summary.modules.is_empty());
    assert!(summary.scripts.is_none());
    // jlink never ran and the output directory was not created
    assert!(!project.file_exists("jdk/jlink.args"));
    assert!(!project.file_exists("build/app"));
}

#[tokio::test]
async fn test_single_jar_selected_without_executable_name() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("solo.jar");
    project.set_jar_deps("solo.jar", &["   java.base", "com.example.app"]);

    let config = build_config(&project, jdk, |o| {
        o.main_class = Some("com.example.Main".to_string());
    });
    let summary = run_pipeline(config).await.unwrap();

    assert!(summary.image_built);
    let scripts = summary.scripts.expect("launcher should be assembled");
    assert_eq!(scripts.executable_jar, "solo.jar");
    assert!(project.file_exists("build/app/bin/app"));
    assert!(project.file_exists("build/app/bin/app.bat"));
    assert!(project.file_exists("build/app/lib/solo.jar"));
}

#[tokio::test]
async fn test_ambiguous_executable_fails_before_any_image_build() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("util.jar");
    project.add_jar("app.jar");
    project.set_jar_deps("app.jar", &["java.base", "java.logging"]);
    project.set_jar_deps("util.jar", &["java.base"]);

    let config = build_config(&project, jdk, |o| {
        o.main_class = Some("com.example.Main".to_string());
    });
    let err = run_pipeline(config).await.unwrap_err();

    assert!(matches!(
        err,
        JrelinkError::Assembly(AssemblyError::AmbiguousExecutable { count: 2 })
    ));
    // Failed before resolution and linking: no jlink run, no output tree,
    // no launcher files.
    assert!(!project.file_exists("jdk/jlink.args"));
    assert!(!project.file_exists("build/app"));
}

#[tokio::test]
async fn test_named_executable_missing_from_archives() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("util.jar");

    let config = build_config(&project, jdk, |o| {
        o.main_class = Some("com.example.Main".to_string());
        o.executable_jar = Some("app.jar".to_string());
    });
    let err = run_pipeline(config).await.unwrap_err();

    assert!(matches!(
        err,
        JrelinkError::Assembly(AssemblyError::ExecutableNotFound { .. })
    ));
    assert!(!project.file_exists("build/app"));
}

#[tokio::test]
async fn test_two_jar_scenario_with_named_executable() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("util.jar");
    project.add_jar("app.jar");
    project.set_jar_deps(
        "app.jar",
        &["   java.base", "java.logging/sun.util.logging", "com.example.app"],
    );
    project.set_jar_deps("util.jar", &["java.base", "org.apache.commons"]);

    let config = build_config(&project, jdk, |o| {
        o.main_class = Some("com.example.Main".to_string());
        o.executable_jar = Some("app.jar".to_string());
    });
    let summary = run_pipeline(config).await.unwrap();

    assert_eq!(summary.modules, vec!["java.base", "java.logging"]);

    // jlink received the deduplicated, comma-joined module list
    let jlink_args = project.read_file("jdk/jlink.args");
    assert!(jlink_args.contains("java.base,java.logging"));
    assert!(jlink_args.contains("--no-header-files"));
    assert!(jlink_args.contains("--no-man-pages"));
    assert!(jlink_args.contains("--compress=2"));

    // Both jars were copied into the image
    assert!(project.file_exists("build/app/lib/app.jar"));
    assert!(project.file_exists("build/app/lib/util.jar"));

    // Both scripts reference the executable jar and main class, and differ
    // only in dialect
    let posix = project.read_file("build/app/bin/app");
    let windows = project.read_file("build/app/bin/app.bat");
    for script in [&posix, &windows] {
        assert!(script.contains("-jar ../lib/app.jar"));
        assert!(script.contains("com.example.Main"));
        assert!(script.contains("-cp ../lib/util.jar"));
    }
    assert!(posix.starts_with("#!/usr/bin/env bash\n"));
    assert!(posix.contains("\"$@\""));
    assert!(windows.contains("%*"));
}

#[tokio::test]
async fn test_rerun_over_stale_output_is_idempotent() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("solo.jar");
    project.set_jar_deps("solo.jar", &["java.base"]);
    // Stale content from an older run
    project.create_file("build/app/lib/old-library.jar", "stale");
    project.create_file("build/app/stale-marker", "stale");

    let config = build_config(&project, jdk, |o| {
        o.main_class = Some("com.example.Main".to_string());
    });
    run_pipeline(config).await.unwrap();

    assert!(!project.file_exists("build/app/stale-marker"));
    assert!(!project.file_exists("build/app/lib/old-library.jar"));
    assert!(project.file_exists("build/app/lib/solo.jar"));
    assert!(project.file_exists("build/app/bin/app"));
}

#[tokio::test]
async fn test_fat_jar_mode_resolves_executable_only() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("app.jar");
    project.add_jar("util.jar");
    project.set_jar_deps("app.jar", &["java.base"]);
    project.set_jar_deps("util.jar", &["java.sql"]);

    let config = build_config(&project, jdk, |o| {
        o.main_class = Some("com.example.Main".to_string());
        o.executable_jar = Some("app.jar".to_string());
        o.fat_jar = true;
    });
    let summary = run_pipeline(config).await.unwrap();

    // util.jar was never analyzed, so java.sql is absent
    assert_eq!(summary.modules, vec!["java.base"]);
}

#[tokio::test]
async fn test_all_modules_mode_uses_full_catalogue() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("solo.jar");

    let config = build_config(&project, jdk, |o| {
        o.all_modules = true;
    });
    let summary = run_pipeline(config).await.unwrap();

    // The fake catalogue, version suffixes stripped, sorted
    assert_eq!(
        summary.modules,
        vec!["java.base", "java.logging", "java.sql", "jdk.unsupported"]
    );
    assert!(summary.image_built);
    // No main class configured, so no launcher
    assert!(summary.scripts.is_none());
    assert!(!project.file_exists("build/app/bin/app"));
}

#[tokio::test]
async fn test_launcher_script_depth_follows_script_location() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("solo.jar");
    project.set_jar_deps("solo.jar", &["java.base"]);

    let config = build_config(&project, jdk, |o| {
        o.main_class = Some("com.example.Main".to_string());
        o.script_location = Some("scripts/nested/run".to_string());
    });
    run_pipeline(config).await.unwrap();

    let posix = project.read_file("build/app/scripts/nested/run");
    assert!(posix.contains("../../bin/java"));
    assert!(posix.contains("-jar ../../lib/solo.jar"));
    assert!(project.file_exists("build/app/scripts/nested/run.bat"));
}

#[tokio::test]
async fn test_failing_linker_aborts_the_pipeline() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("solo.jar");
    project.set_jar_deps("solo.jar", &["java.base"]);
    break_tool(&jdk, "jlink", 1);

    let config = build_config(&project, jdk, |o| {
        o.main_class = Some("com.example.Main".to_string());
    });
    let err = run_pipeline(config).await.unwrap_err();

    match err {
        JrelinkError::Command(CommandError::Failed { code, command, .. }) => {
            assert_eq!(code, 1);
            assert!(command.contains("jlink"));
        }
        other => panic!("expected CommandError::Failed, got {other:?}"),
    }
    // No launcher was assembled after the failed link
    assert!(!project.file_exists("build/app/bin/app"));
}

#[tokio::test]
async fn test_failing_dependency_lister_aborts_the_pipeline() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("solo.jar");
    break_tool(&jdk, "jdeps", 2);

    let config = build_config(&project, jdk, |_| {});
    let err = run_pipeline(config).await.unwrap_err();

    assert!(matches!(
        err,
        JrelinkError::Command(CommandError::Failed { code: 2, .. })
    ));
    assert!(!project.file_exists("jdk/jlink.args"));
}

#[tokio::test]
async fn test_scratch_logs_survive_for_post_mortem() {
    let project = TestProject::new();
    let jdk = project.fake_jdk();
    project.add_jar("solo.jar");
    project.set_jar_deps("solo.jar", &["java.base"]);

    let config = build_config(&project, jdk, |_| {});
    run_pipeline(config).await.unwrap();

    let log = project.read_file("build/tmp/jrelink/jdeps-solo.log");
    assert!(log.contains("java.base"));
}
