// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		render_into(&mut output, d, 0);
		output
	}
}

fn render_into(output: &mut String, d: &Diagnostic, depth: usize) {
	let indent = "  ".repeat(depth);

	let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

	if let Some(label) = &d.label {
		let _ = writeln!(output, "{}  = {}", indent, label);
	}

	if let Some(help) = &d.help {
		let _ = writeln!(output, "\n{}help: {}", indent, help);
	}

	for note in &d.notes {
		let _ = writeln!(output, "\n{}note: {}", indent, note);
	}

	if let Some(cause) = &d.cause {
		let _ = writeln!(output, "\n{}caused by:", indent);
		render_into(output, cause, depth + 1);
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn diagnostic(code: &str, cause: Option<Diagnostic>) -> Diagnostic {
		Diagnostic {
			code: code.to_string(),
			message: format!("{} happened", code),
			label: Some("here".to_string()),
			help: Some("do something else".to_string()),
			notes: vec!["first note".to_string()],
			cause: cause.map(Box::new),
		}
	}

	#[test]
	fn test_render_includes_all_sections() {
		let out = DefaultRenderer::render_string(&diagnostic("X_001", None));
		assert!(out.starts_with("error[X_001]: X_001 happened\n"));
		assert!(out.contains("  = here"));
		assert!(out.contains("help: do something else"));
		assert!(out.contains("note: first note"));
		assert!(!out.contains("caused by"));
	}

	#[test]
	fn test_render_nests_cause() {
		let out = DefaultRenderer::render_string(&diagnostic("OUTER_001", Some(diagnostic("INNER_001", None))));
		assert!(out.contains("caused by:"));
		assert!(out.contains("  error[INNER_001]: INNER_001 happened"));
	}
}
