use anyhow::Result;
use generate_endpoints::adapters::source::endpoint_specifications_from_directory;
use generate_endpoints::core::{CodeGenerator, SpecificationOptions};
use generate_endpoints::GoCodeGenerator;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str], current_dir: &Path) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_generate-endpoints"))
        .args(args)
        .current_dir(current_dir)
        .env_remove("GOFILE")
        .env_remove("GOPACKAGE")
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn write_site() -> Result<TempDir> {
    let site = TempDir::new()?;
    std::fs::create_dir_all(site.path().join("css"))?;
    std::fs::write(site.path().join("index.html"), "<h1>Home</h1>\n")?;
    std::fs::write(site.path().join("css").join("site.css"), "body{}")?;
    Ok(site)
}

fn expected_output(site: &Path, package_name: &str) -> Result<Vec<u8>> {
    let options = SpecificationOptions {
        index_aliases: true,
        private: false,
    };
    let specifications = endpoint_specifications_from_directory(site, options)?;
    Ok(GoCodeGenerator::default().generate(&specifications, package_name, "x")?)
}

#[test]
fn test_empty_path_logs_structured_error_and_exits_1() -> Result<()> {
    let work_dir = TempDir::new()?;
    let output = run_cli(&["-path", ""], work_dir.path())?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    let error_line = stderr
        .lines()
        .find(|line| line.contains("\"level\":\"ERROR\""))
        .expect("an error event on stderr");
    assert!(error_line.starts_with('{'));
    assert!(error_line.contains("\"operation\":\"validate config\""));
    assert!(error_line.contains("Empty path."));

    Ok(())
}

#[test]
fn test_missing_directory_exits_1() -> Result<()> {
    let work_dir = TempDir::new()?;
    let output = run_cli(&["-path", "does-not-exist"], work_dir.path())?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("\"operation\":\"endpoint specifications\""));
    assert!(stderr.contains("does-not-exist"));

    Ok(())
}

#[test]
fn test_go_file_writes_generated_file() -> Result<()> {
    let site = write_site()?;
    let work_dir = TempDir::new()?;
    let site_path = site.path().to_str().unwrap();

    let output = run_cli(
        &["-path", site_path, "-package-name", "static", "--go-file", "static.go"],
        work_dir.path(),
    )?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = std::fs::read(work_dir.path().join("static_generated.go"))?;
    assert_eq!(written, expected_output(site.path(), "static")?);

    Ok(())
}

#[test]
fn test_stdout_output_ends_with_newline() -> Result<()> {
    let site = write_site()?;
    let work_dir = TempDir::new()?;
    let site_path = site.path().to_str().unwrap();

    let output = run_cli(&["-path", site_path], work_dir.path())?;

    assert!(output.status.success());
    let mut expected = expected_output(site.path(), "main")?;
    expected.push(b'\n');
    assert_eq!(output.stdout, expected);
    assert_eq!(std::fs::read_dir(work_dir.path())?.count(), 0);

    Ok(())
}

#[test]
fn test_path_comment_precedes_generated_code() -> Result<()> {
    let site = write_site()?;
    let work_dir = TempDir::new()?;
    let site_path = site.path().to_str().unwrap();

    let output = run_cli(&["-path", site_path, "-add-path-comment"], work_dir.path())?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with(&format!("// Path: {}\n// Code generated by ", site_path)));

    Ok(())
}
