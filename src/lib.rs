//! # linuxmain-gen
//!
//! Generates an explicit XCTest registration manifest (`LinuxMain.swift` style)
//! from Swift test sources, for platforms where XCTest cannot discover tests at
//! runtime by reflection.
//!
//! ## Architecture
//!
//! - **lexer**: tolerant tokenizer over raw Swift source (identifiers, braces, colons)
//! - **scanner**: brace-depth-aware discovery of test classes, extensions and test methods
//! - **registry**: insertion-ordered class-to-test-methods mapping
//! - **emit**: deterministic manifest generation (allTests registries + XCTMain aggregator)
//! - **cli**: command line interface

pub mod cli;
pub mod emit;
pub mod lexer;
pub mod registry;
pub mod scanner;
