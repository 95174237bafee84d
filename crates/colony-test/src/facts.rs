//! Builder for configuration text.
//!
//! # Example
//!
//! ```
//! use colony_test::FactFile;
//!
//! let text = FactFile::new()
//!     .colonists(&["A", "B"])
//!     .resources(&["1", "2"])
//!     .conflict("A", "B")
//!     .preferences("A", &["1", "2"])
//!     .preferences("B", &["2", "1"])
//!     .render();
//! assert!(text.starts_with("colon(A).\n"));
//! ```

/// Accumulates fact lines in insertion order.
///
/// No validation is performed, so out-of-order or malformed files can be
/// produced on purpose with [`FactFile::line`].
#[derive(Clone, Debug, Default)]
pub struct FactFile {
    lines: Vec<String>,
}

impl FactFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `colon(..)` line per name.
    pub fn colonists(mut self, names: &[&str]) -> Self {
        for name in names {
            self.lines.push(format!("colon({name})."));
        }
        self
    }

    /// Appends one `ressource(..)` line per name.
    pub fn resources(mut self, names: &[&str]) -> Self {
        for name in names {
            self.lines.push(format!("ressource({name})."));
        }
        self
    }

    pub fn conflict(mut self, a: &str, b: &str) -> Self {
        self.lines.push(format!("deteste({a},{b})."));
        self
    }

    pub fn preferences(mut self, colonist: &str, ranked: &[&str]) -> Self {
        self.lines
            .push(format!("preferences({colonist},{}).", ranked.join(",")));
        self
    }

    /// Appends a raw line as is.
    pub fn line(mut self, raw: &str) -> Self {
        self.lines.push(raw.to_string());
        self
    }

    /// Lines accumulated so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins the lines with a trailing newline.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// A colony of `n` colonists `C0..` and resources `R0..`, where every
/// colonist ranks resources in the same order and colonist `i` is in
/// conflict with colonist `i + 1`.
///
/// Needs `n >= 2`: a file without any `deteste` line cannot reach the
/// preferences section.
pub fn chain(n: usize) -> FactFile {
    let colonists: Vec<String> = (0..n).map(|i| format!("C{i}")).collect();
    let resources: Vec<String> = (0..n).map(|i| format!("R{i}")).collect();
    let colonist_refs: Vec<&str> = colonists.iter().map(String::as_str).collect();
    let resource_refs: Vec<&str> = resources.iter().map(String::as_str).collect();

    let mut file = FactFile::new()
        .colonists(&colonist_refs)
        .resources(&resource_refs);
    for pair in colonist_refs.windows(2) {
        file = file.conflict(pair[0], pair[1]);
    }
    for colonist in &colonist_refs {
        file = file.preferences(colonist, &resource_refs);
    }
    file
}
