use std::collections::HashMap;

/// Insertion-ordered mapping from class name to discovered test-method names.
///
/// Emission order is a stated invariant, not a property of the container:
/// `order` keeps first-appearance class order, methods append in textual
/// order across every declaration and extension of the same name.
#[derive(Debug, Default)]
pub struct TestRegistry {
    order: Vec<String>,
    buckets: HashMap<String, Bucket>,
}

#[derive(Debug, Default)]
struct Bucket {
    methods: Vec<String>,
    declared: bool,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `class Name: XCTestCase` declaration site.
    pub fn record_class(&mut self, name: &str) {
        self.bucket_mut(name).declared = true;
    }

    /// Record an `extension Name` site. Creates the bucket on first sight;
    /// whether the name was ever declared as a test class is tracked
    /// separately so the merge policy can be applied at the end.
    pub fn record_extension(&mut self, name: &str) {
        self.bucket_mut(name);
    }

    pub fn add_method(&mut self, class: &str, method: &str) {
        self.bucket_mut(class).methods.push(method.to_string());
    }

    /// Class names in first-appearance order, including empty buckets.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn methods(&self, class: &str) -> &[String] {
        self.buckets
            .get(class)
            .map(|b| b.methods.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_declared(&self, class: &str) -> bool {
        self.buckets.get(class).is_some_and(|b| b.declared)
    }

    /// Drop buckets that accumulated only through extensions, never through a
    /// sentinel-qualified class declaration.
    pub fn retain_declared(&mut self) {
        let buckets = &self.buckets;
        self.order
            .retain(|name| buckets.get(name).is_some_and(|b| b.declared));
        self.buckets.retain(|_, b| b.declared);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn bucket_mut(&mut self, name: &str) -> &mut Bucket {
        if !self.buckets.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.buckets.entry(name.to_string()).or_default()
    }
}
