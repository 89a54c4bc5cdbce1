//! End-to-end update tests against in-memory registries

mod helper;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use tempfile::TempDir;

use gradle_bump::config::FilesConfig;
use gradle_bump::discovery::find_build_files;
use helper::{FakePrimaryRegistry, FakeSecondaryRegistry, create_test_updater};

#[tokio::test]
async fn bumps_outdated_dependencies_across_registries() {
    let primary = Arc::new(
        FakePrimaryRegistry::new()
            .with_module("androidx.core", "core", vec!["1.0.0", "1.1.0-rc01", "1.0.2"])
            .with_module("androidx.core", "core-ktx", vec!["1.0.0", "1.0.1"]),
    );
    let secondary = Arc::new(
        FakeSecondaryRegistry::new()
            .with_artifact("com.google.code.gson", "gson", vec!["2.8.0", "2.8.1", "2.8.2"])
            .with_artifact(
                "com.squareup.retrofit2",
                "retrofit",
                vec!["2.3.0", "2.9.0", "3.0.0"],
            ),
    );
    let mut updater = create_test_updater(primary.clone(), secondary.clone()).await;

    let content = r#"dependencies {
    implementation 'com.google.code.gson:gson:2.8.0'
    implementation 'com.squareup.retrofit2:retrofit:2.3.0' // < 3.0
    implementation "androidx.core:core:1.0.0"
    implementation "androidx.core:core-ktx:1.0.0"
    implementation 'com.example:internal:0.1.0'
}
"#;

    let result = updater.update_content(content).await;

    assert_eq!(
        result.content,
        r#"dependencies {
    implementation 'com.google.code.gson:gson:2.8.2'
    implementation 'com.squareup.retrofit2:retrofit:2.9.0' // < 3.0
    implementation "androidx.core:core:1.0.2"
    implementation "androidx.core:core-ktx:1.0.1"
    implementation 'com.example:internal:0.1.0'
}
"#
    );
    assert_eq!(result.changes.len(), 4);

    // One module-map request for androidx.core, one fallback request per unknown artifact
    assert_eq!(primary.module_requests.load(Ordering::SeqCst), 1);
    assert_eq!(secondary.artifact_requests.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn second_pass_over_updated_content_is_a_noop() {
    let primary = Arc::new(FakePrimaryRegistry::new());
    let secondary = Arc::new(
        FakeSecondaryRegistry::new()
            .with_artifact("com.google.code.gson", "gson", vec!["2.8.0", "2.8.2"]),
    );
    let mut updater = create_test_updater(primary, secondary.clone()).await;

    let first = updater
        .update_content("implementation 'com.google.code.gson:gson:2.8.0'\n")
        .await;
    let second = updater.update_content(&first.content).await;

    assert!(first.changed());
    assert!(!second.changed());
    assert_eq!(second.content, first.content);
    assert_eq!(secondary.artifact_requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn prerelease_declarations_follow_the_newest_entry() {
    let primary = Arc::new(
        FakePrimaryRegistry::new().with_module(
            "androidx.compose.ui",
            "ui",
            vec!["1.0.0", "1.0.1", "1.1.0-alpha01"],
        ),
    );
    let secondary = Arc::new(FakeSecondaryRegistry::new());
    let mut updater = create_test_updater(primary, secondary).await;

    let result = updater
        .update_content(
            "implementation 'androidx.compose.ui:ui:1.0.0-alpha01'\nimplementation 'androidx.compose.ui:ui:1.0.0'\n",
        )
        .await;

    assert_eq!(
        result.content,
        "implementation 'androidx.compose.ui:ui:1.1.0-alpha01'\nimplementation 'androidx.compose.ui:ui:1.0.1'\n"
    );
}

#[tokio::test]
async fn stable_declaration_is_kept_when_only_prereleases_exist() {
    let primary = Arc::new(FakePrimaryRegistry::new());
    let secondary = Arc::new(
        FakeSecondaryRegistry::new()
            .with_artifact("com.example", "early", vec!["1.0.0-alpha", "1.0.1-beta"]),
    );
    let mut updater = create_test_updater(primary, secondary).await;
    let content = "implementation 'com.example:early:1.0.0'\n";

    let result = updater.update_content(content).await;

    assert_eq!(result.content, content);
    assert!(!result.changed());
}

#[tokio::test]
async fn malformed_constraint_keeps_current_version() {
    let primary = Arc::new(FakePrimaryRegistry::new());
    let secondary = Arc::new(
        FakeSecondaryRegistry::new()
            .with_artifact("com.google.code.gson", "gson", vec!["2.8.0", "2.8.2"]),
    );
    let mut updater = create_test_updater(primary, secondary).await;
    let content = "implementation 'com.google.code.gson:gson:2.8.0' // do not touch\n";

    let result = updater.update_content(content).await;

    assert_eq!(result.content, content);
}

#[tokio::test]
async fn run_updates_discovered_project_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join("app/src")).unwrap();
    std::fs::write(
        root.join("build.gradle"),
        "buildscript {\n    dependencies {\n        classpath 'com.android.tools.build:gradle:3.0.0'\n    }\n}\n",
    )
    .unwrap();
    std::fs::write(
        root.join("app/build.gradle"),
        "dependencies {\n    implementation 'com.google.code.gson:gson:2.8.2'\n}\n",
    )
    .unwrap();
    std::fs::write(
        root.join("app/src/build.gradle"),
        "implementation 'com.google.code.gson:gson:2.8.0'\n",
    )
    .unwrap();

    let primary = Arc::new(FakePrimaryRegistry::new().with_module(
        "com.android.tools.build",
        "gradle",
        vec!["3.0.0", "3.0.1", "3.1.0-beta1"],
    ));
    let secondary = Arc::new(
        FakeSecondaryRegistry::new()
            .with_artifact("com.google.code.gson", "gson", vec!["2.8.0", "2.8.2"]),
    );
    let mut updater = create_test_updater(primary, secondary).await;

    let files = find_build_files(root, &FilesConfig::default());
    let summary = updater.run(&files, false).await.unwrap();

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.updated.len(), 1);
    assert_eq!(summary.updated[0].path, root.join("build.gradle"));
    assert_eq!(
        std::fs::read_to_string(root.join("build.gradle")).unwrap(),
        "buildscript {\n    dependencies {\n        classpath 'com.android.tools.build:gradle:3.0.1'\n    }\n}\n"
    );
    assert_eq!(
        std::fs::read_to_string(root.join("app/src/build.gradle")).unwrap(),
        "implementation 'com.google.code.gson:gson:2.8.0'\n"
    );
}
