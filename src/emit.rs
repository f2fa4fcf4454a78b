use crate::registry::TestRegistry;

/// Render the generated manifest. Classes with zero qualifying methods are
/// skipped both in the extension blocks and in the aggregator, which
/// re-iterates the registry independently. Output is a pure function of the
/// registry, so reruns over the same input are byte-identical.
pub fn emit_manifest(registry: &TestRegistry, module_name: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("import XCTest".to_string());
    lines.push(format!("@testable import {module_name}"));
    lines.push(String::new());

    for class in registry.classes() {
        let methods = registry.methods(class);
        if methods.is_empty() {
            continue;
        }
        lines.push(format!("extension {class} {{"));
        lines.push(format!(
            "    static var allTests: [(String, ({class}) -> () throws -> Void)] {{"
        ));
        lines.push("        return [".to_string());
        for method in methods {
            lines.push(format!("    (\"{method}\", {method}),"));
        }
        lines.push("        ]".to_string());
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
    }

    lines.push("XCTMain([".to_string());
    for class in registry.classes() {
        if registry.methods(class).is_empty() {
            continue;
        }
        lines.push(format!("    testCase({class}.allTests),"));
    }
    lines.push("])".to_string());

    let mut manifest = lines.join("\n");
    manifest.push('\n');
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{ScanOptions, scan};

    fn manifest_for(source: &str) -> String {
        let (registry, _) = scan(source, &ScanOptions::default());
        emit_manifest(&registry, "Tests")
    }

    #[test]
    fn round_trip_scenario() {
        let manifest = manifest_for(
            "class Foo: XCTestCase { func testA() {} func helper() {} } \
             extension Foo { func testB() {} }",
        );
        let expected = "\
import XCTest
@testable import Tests

extension Foo {
    static var allTests: [(String, (Foo) -> () throws -> Void)] {
        return [
    (\"testA\", testA),
    (\"testB\", testB),
        ]
    }
}

XCTMain([
    testCase(Foo.allTests),
])
";
        assert_eq!(manifest, expected);
    }

    #[test]
    fn class_with_no_qualifying_methods_is_omitted_everywhere() {
        let manifest = manifest_for(
            "class Empty: XCTestCase { func helper() {} } \
             class Full: XCTestCase { func testA() {} }",
        );
        assert!(!manifest.contains("extension Empty"));
        assert!(!manifest.contains("testCase(Empty.allTests),"));
        assert!(manifest.contains("extension Full {"));
        assert!(manifest.contains("    testCase(Full.allTests),"));
    }

    #[test]
    fn empty_registry_still_produces_header_and_aggregator() {
        let manifest = manifest_for("nothing to see here");
        assert_eq!(
            manifest,
            "import XCTest\n@testable import Tests\n\nXCTMain([\n])\n"
        );
    }

    #[test]
    fn classes_emit_in_first_appearance_order() {
        let manifest = manifest_for(
            "extension Second { func testS() {} } \
             class First: XCTestCase { func testF() {} } \
             class Second: XCTestCase { func testT() {} }",
        );
        let second_pos = manifest.find("extension Second").unwrap();
        let first_pos = manifest.find("extension First").unwrap();
        assert!(second_pos < first_pos);

        let agg_second = manifest.find("testCase(Second.allTests),").unwrap();
        let agg_first = manifest.find("testCase(First.allTests),").unwrap();
        assert!(agg_second < agg_first);
    }

    #[test]
    fn module_name_lands_in_testable_import() {
        let (registry, _) = scan("class A: XCTestCase { func testA() {} }", &ScanOptions::default());
        let manifest = emit_manifest(&registry, "RxSwiftTests");
        assert!(manifest.contains("@testable import RxSwiftTests\n"));
    }
}
