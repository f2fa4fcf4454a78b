use anyhow::{Context, Result};
use clap::Parser;
use linuxmain_gen::cli::Cli;
use linuxmain_gen::emit::emit_manifest;
use linuxmain_gen::scanner::{ScanOptions, scan};
use std::io::Read;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = read_input(&cli.files)?;
    let options = ScanOptions {
        excluded_classes: cli.exclude_classes.clone(),
        excluded_tests: cli.exclude_tests.clone(),
    };

    let (mut registry, stats) = scan(&source, &options);
    if cli.require_test_class {
        registry.retain_declared();
    }

    print!("{}", emit_manifest(&registry, &cli.module));

    if cli.stats {
        eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}

/// The scanner consumes one undifferentiated text blob; multiple input files
/// are concatenated in argument order, each terminated by a newline so a
/// truncated last line cannot glue onto the next file's first token.
fn read_input(files: &[impl AsRef<Path>]) -> Result<String> {
    if files.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read standard input")?;
        return Ok(buffer);
    }

    let mut combined = String::new();
    for file in files {
        let path = file.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        combined.push_str(&content);
        if !content.ends_with('\n') {
            combined.push('\n');
        }
    }
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "linuxmain_gen_test_{}_{}_{}",
            std::process::id(),
            nanos,
            name
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn read_input_concatenates_files_in_order() -> Result<()> {
        let a = temp_file("a.swift", "class A: XCTestCase {");
        let b = temp_file("b.swift", "func testA() {} }\n");

        let combined = read_input(&[&a, &b])?;
        assert_eq!(combined, "class A: XCTestCase {\nfunc testA() {} }\n");

        let _ = std::fs::remove_file(a);
        let _ = std::fs::remove_file(b);
        Ok(())
    }

    #[test]
    fn read_input_fails_on_missing_file() {
        let missing = std::env::temp_dir().join("linuxmain_gen_does_not_exist.swift");
        assert!(read_input(&[&missing]).is_err());
    }
}
