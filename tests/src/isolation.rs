use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_TEST: AtomicU32 = AtomicU32::new(0);

/// Table name prefix unique to one test, so tests sharing a database never
/// see each other's rows.
///
/// Prefixes look like `test_{process_id}_{counter}_`.
#[derive(Debug, Clone)]
pub struct TestIsolation {
    prefix: String,
}

impl TestIsolation {
    pub fn new() -> Self {
        let counter = NEXT_TEST.fetch_add(1, Ordering::Relaxed);

        Self {
            prefix: format!("test_{}_{}_", std::process::id(), counter),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `name` with this test's prefix.
    pub fn table(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    pub fn owns_table(&self, table: &str) -> bool {
        table.starts_with(&self.prefix)
    }
}

impl Default for TestIsolation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_unique() {
        let a = TestIsolation::new();
        let b = TestIsolation::new();

        assert_ne!(a.prefix(), b.prefix());
        assert!(a.table("items").starts_with("test_"));
        assert!(a.owns_table(&a.table("items")));
        assert!(!b.owns_table(&a.table("items")));
    }
}
