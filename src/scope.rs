//! Narrowing a run to the test under the cursor.
//!
//! A cheap indentation scan over Python source: enough to tell which
//! top-level `def test*` or collected test `class` (and method) a line sits in, without a
//! Python parser. Continuation lines inside brackets or multi-line strings
//! that dedent below their block can confuse it; the fallback is simply
//! running the whole file.

use serde::Serialize;

/// The test (or test class) enclosing a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestScope {
    pub class: Option<String>,
    pub function: Option<String>,
}

impl TestScope {
    /// pytest node id for `path`, e.g. `tests/test_x.py::TestX::test_y`.
    pub fn node_id(&self, path: &str) -> String {
        let mut id = path.to_string();
        for part in [&self.class, &self.function].into_iter().flatten() {
            id.push_str("::");
            id.push_str(part);
        }
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Class,
    Function,
}

#[derive(Debug)]
struct Block<'a> {
    indent: usize,
    kind: BlockKind,
    name: &'a str,
    /// Class header carries a non-empty base list.
    has_bases: bool,
}

/// Find the test enclosing 1-based `line` in `source`.
///
/// Only top-level test functions and methods of top-level classes can be
/// addressed by pytest; nested definitions resolve to their outermost
/// addressable parent.
pub fn enclosing_test(source: &str, line: usize) -> Option<TestScope> {
    if line == 0 {
        return None;
    }
    let mut stack: Vec<Block<'_>> = Vec::new();
    for text in source.lines().take(line) {
        let trimmed = text.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let indent = indent_width(text);
        while stack.last().is_some_and(|block| block.indent >= indent) {
            stack.pop();
        }
        if let Some(block) = block_header(trimmed, indent) {
            stack.push(block);
        }
    }

    let outer = stack.first()?;
    match outer.kind {
        BlockKind::Function => is_test_name(outer.name).then(|| TestScope {
            class: None,
            function: Some(outer.name.to_string()),
        }),
        // pytest only collects `Test*` classes and `unittest.TestCase`
        // subclasses; anything else (helpers, fakes) runs the whole file.
        BlockKind::Class if !is_collected_class(outer) => None,
        BlockKind::Class => {
            let method = stack
                .get(1)
                .filter(|block| block.kind == BlockKind::Function && is_test_name(block.name))
                .map(|block| block.name.to_string());
            Some(TestScope {
                class: Some(outer.name.to_string()),
                function: method,
            })
        }
    }
}

fn is_test_name(name: &str) -> bool {
    name.starts_with("test")
}

fn is_collected_class(block: &Block<'_>) -> bool {
    block.name.starts_with("Test") || block.has_bases
}

fn indent_width(text: &str) -> usize {
    let mut width = 0;
    for ch in text.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width = (width / 8 + 1) * 8,
            _ => break,
        }
    }
    width
}

/// Recognise `def name(`, `async def name(` and `class name` headers.
fn block_header(trimmed: &str, indent: usize) -> Option<Block<'_>> {
    let (kind, rest) = if let Some(rest) = trimmed.strip_prefix("class ") {
        (BlockKind::Class, rest)
    } else if let Some(rest) = trimmed.strip_prefix("def ") {
        (BlockKind::Function, rest)
    } else if let Some(rest) = trimmed.strip_prefix("async def ") {
        (BlockKind::Function, rest)
    } else {
        return None;
    };
    let rest = rest.trim_start();
    let end = rest
        .find(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
        .unwrap_or(rest.len());
    let name = &rest[..end];
    if name.is_empty() {
        return None;
    }
    let has_bases = kind == BlockKind::Class && has_base_list(&rest[end..]);
    Some(Block {
        indent,
        kind,
        name,
        has_bases,
    })
}

/// `(Base, ...)` after a class name; `()` alone doesn't count.
fn has_base_list(after_name: &str) -> bool {
    after_name
        .trim_start()
        .strip_prefix('(')
        .and_then(|rest| rest.split(')').next())
        .is_some_and(|bases| !bases.trim().is_empty())
}
