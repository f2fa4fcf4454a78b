use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "linuxmain-gen")]
#[command(about = "Generate an XCTest registration manifest (LinuxMain.swift) from Swift test sources")]
pub struct Cli {
    /// Swift source files, concatenated in argument order. Reads stdin when
    /// no files are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Module named by the `@testable import` header line.
    #[arg(long, value_name = "NAME", default_value = "Tests")]
    pub module: String,

    /// Skip a test class (and all its extensions) by name. Repeatable.
    #[arg(long = "exclude-class", value_name = "NAME")]
    pub exclude_classes: Vec<String>,

    /// Drop a test method by exact name. Repeatable.
    #[arg(long = "exclude-test", value_name = "NAME")]
    pub exclude_tests: Vec<String>,

    /// Only emit classes that were declared with the XCTestCase superclass
    /// somewhere in the input; extension-only names are dropped.
    #[arg(long)]
    pub require_test_class: bool,

    /// Print a JSON discovery report to stderr. Stdout is unchanged.
    #[arg(long)]
    pub stats: bool,
}
