use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <groupId>com.example</groupId>
    <artifactId>app</artifactId>
    <version>0.1.0</version>
    <dependencies>
        <dependency>
            <groupId>com.example</groupId>
            <artifactId>shared-lib</artifactId>
            <version>1.0.0</version>
        </dependency>
    </dependencies>
</project>
"#;

const BUILD_GRADLE: &str = r#"apply plugin: 'java'

dependencies {
    implementation 'com.example:shared-lib:1.0.0'
    implementation 'com.example:other-lib:1.0.0'
}
"#;

fn write(path: PathBuf, content: &str) -> PathBuf {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&str]) -> anyhow::Result<()> {
    let args = std::iter::once("depbump")
        .chain(args.iter().copied())
        .map(String::from)
        .collect::<Vec<_>>();
    depbump_cli::main(&args)
}

fn root_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_bumps_maven_and_gradle() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let pom = write(root.join("service/pom.xml"), POM);
    let gradle = write(root.join("android/app/build.gradle"), BUILD_GRADLE);

    let result = run(&["shared-lib", "2.0.0", "--root", &root_arg(root)]);

    assert!(result.is_ok());
    let pom = fs::read_to_string(pom).unwrap();
    assert!(pom.contains("            <version>2.0.0</version>"));
    assert!(pom.contains("    <version>0.1.0</version>"));
    let gradle = fs::read_to_string(gradle).unwrap();
    assert!(gradle.contains("'com.example:shared-lib:2.0.0'"));
    assert!(gradle.contains("'com.example:other-lib:1.0.0'"));

    temp_dir.close().unwrap();
}

#[test]
fn test_cli_respects_exclusions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let a = write(root.join("a/pom.xml"), POM);
    let b = write(root.join("b/pom.xml"), POM);

    let result = run(&[
        "shared-lib",
        "2.0.0",
        "--root",
        &root_arg(root),
        "--exclude",
        "b",
    ]);

    assert!(result.is_ok());
    assert!(fs::read_to_string(a).unwrap().contains("<version>2.0.0</version>"));
    assert_eq!(fs::read_to_string(b).unwrap(), POM);

    temp_dir.close().unwrap();
}

#[test]
fn test_cli_second_run_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let pom = write(root.join("pom.xml"), POM);

    run(&["shared-lib", "2.0.0", "--root", &root_arg(root)]).unwrap();
    let first = fs::read_to_string(&pom).unwrap();
    run(&["shared-lib", "2.0.0", "--root", &root_arg(root)]).unwrap();

    assert_eq!(fs::read_to_string(&pom).unwrap(), first);

    temp_dir.close().unwrap();
}

#[test]
fn test_cli_wrong_argument_count_does_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let pom = write(root.join("pom.xml"), POM);

    assert!(run(&["shared-lib", "--root", &root_arg(root)]).is_ok());
    assert!(run(&["shared-lib", "2.0.0", "extra", "--root", &root_arg(root)]).is_ok());
    assert!(run(&[]).is_ok());

    assert_eq!(fs::read_to_string(pom).unwrap(), POM);

    temp_dir.close().unwrap();
}

#[test]
fn test_cli_hyphen_version_needs_separator() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let pom = write(root.join("pom.xml"), POM);

    assert!(run(&["shared-lib", "-rc1", "--root", &root_arg(root)]).is_ok());
    assert_eq!(fs::read_to_string(&pom).unwrap(), POM);

    run(&["--root", &root_arg(root), "shared-lib", "--", "-rc1"]).unwrap();
    assert!(
        fs::read_to_string(&pom)
            .unwrap()
            .contains("<version>-rc1</version>")
    );

    temp_dir.close().unwrap();
}

#[test]
fn test_cli_root_not_directory() {
    let temp_dir = TempDir::new().unwrap();
    let pom = write(temp_dir.path().join("pom.xml"), POM);

    let result = run(&["shared-lib", "2.0.0", "--root", &root_arg(&pom)]);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("must be a directory"));
    assert_eq!(fs::read_to_string(pom).unwrap(), POM);

    temp_dir.close().unwrap();
}

#[test]
fn test_cli_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let all = temp_dir.path().join("all-projects");
    let api = temp_dir.path().join("api");
    let checked_out = write(all.join("api/build.gradle"), BUILD_GRADLE);
    let shared = write(all.join("web/build.gradle"), BUILD_GRADLE);
    let standalone = write(api.join("build.gradle"), BUILD_GRADLE);

    let config = temp_dir.path().join("depbump.json");
    fs::write(
        &config,
        format!(
            r#"{{"roots": [{{"path": {:?}, "exclude": ["api"]}}, {{"path": {:?}}}]}}"#,
            all.to_string_lossy(),
            api.to_string_lossy()
        ),
    )
    .unwrap();

    let result = run(&[
        "shared-lib",
        "3.1.4-SNAPSHOT",
        "--config",
        &config.to_string_lossy(),
        "--verbose",
    ]);

    assert!(result.is_ok());
    assert_eq!(fs::read_to_string(checked_out).unwrap(), BUILD_GRADLE);
    assert!(
        fs::read_to_string(shared)
            .unwrap()
            .contains("shared-lib:3.1.4-SNAPSHOT")
    );
    assert!(
        fs::read_to_string(standalone)
            .unwrap()
            .contains("shared-lib:3.1.4-SNAPSHOT")
    );

    temp_dir.close().unwrap();
}

#[test]
fn test_cli_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();

    let result = run(&[
        "shared-lib",
        "2.0.0",
        "--config",
        &temp_dir.path().join("missing.json").to_string_lossy(),
    ]);

    assert!(result.is_err());

    temp_dir.close().unwrap();
}

#[cfg(unix)]
#[test]
fn test_cli_read_only_file_is_skipped_silently() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let locked = write(root.join("locked/pom.xml"), POM);
    let open = write(root.join("open/pom.xml"), POM);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();

    let result = run(&["shared-lib", "2.0.0", "--root", &root_arg(root)]);

    assert!(result.is_ok());
    let locked_content = fs::read_to_string(&locked).unwrap();
    // Either untouched or fully rewritten when running as root
    assert!(
        locked_content == POM || locked_content == POM.replace("1.0.0", "2.0.0")
    );
    assert!(fs::read_to_string(open).unwrap().contains("<version>2.0.0</version>"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    temp_dir.close().unwrap();
}
