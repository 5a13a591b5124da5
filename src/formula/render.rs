//! Ruby formula rendering.

use super::model::Formula;

const HEADER: &str = "# Generated by enhance-formula. Do not edit by hand.";

impl Formula {
    /// Render the Homebrew formula source.
    ///
    /// The layout follows `brew create --python`: virtualenv include, metadata,
    /// dependencies, one block per resource in manifest order, install, test.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = vec![
            HEADER.to_string(),
            format!("class {} < Formula", self.class_name()),
            "  include Language::Python::Virtualenv".to_string(),
            String::new(),
            format!("  desc {}", ruby_string(&self.desc)),
            format!("  homepage {}", ruby_string(&self.homepage)),
        ];

        if self.provisional {
            lines.push("  # Provisional source URL; replace before the first release.".to_string());
        }
        lines.push(format!("  url {}", ruby_string(&self.url)));
        lines.push(format!("  sha256 {}", ruby_string(&self.sha256)));

        if !self.depends_on.is_empty() {
            lines.push(String::new());
            for dependency in &self.depends_on {
                lines.push(format!("  depends_on {}", ruby_string(dependency)));
            }
        }

        for resource in &self.resources {
            lines.push(String::new());
            lines.push(format!("  resource {} do", ruby_string(&resource.name)));
            lines.push(format!("    url {}", ruby_string(&resource.url)));
            lines.push(format!("    sha256 {}", ruby_string(&resource.sha256)));
            lines.push("  end".to_string());
        }

        lines.push(String::new());
        lines.push("  def install".to_string());
        lines.push("    virtualenv_install_with_resources".to_string());
        lines.push("  end".to_string());
        lines.push(String::new());
        lines.push("  test do".to_string());
        lines.push(format!("    system {}", self.test_invocation()));
        lines.push("  end".to_string());
        lines.push("end".to_string());

        let mut source = lines.join("\n");
        source.push('\n');
        source
    }

    /// Arguments to `system` in the test block; `#{bin}` is left for Ruby to expand.
    fn test_invocation(&self) -> String {
        let program = format!("\"#{{bin}}/{}\"", escape_ruby(&self.test.command));
        std::iter::once(program)
            .chain(self.test.args.iter().map(String::as_str).map(ruby_string))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Double-quoted Ruby literal for `value`.
pub(crate) fn ruby_string(value: &str) -> String {
    format!("\"{}\"", escape_ruby(value))
}

/// Escape backslashes, quotes, interpolation openers (`#{`, `#$`, `#@`), and
/// control characters, so every literal stays on one line.
fn escape_ruby(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => escaped.push_str("\\#"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => escaped.push(c),
        }
    }

    escaped
}
