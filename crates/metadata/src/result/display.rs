// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use unicode_width::UnicodeWidthStr;

use super::MetadataResult;

const NULL: &str = "null";

fn display_width(s: &str) -> usize {
	if s.contains('\n') {
		s.lines().map(|line| line.width()).max().unwrap_or(0)
	} else {
		s.width()
	}
}

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn centered(s: &str, width: usize) -> String {
	let pad = width - display_width(s);
	let l = pad / 2;
	let r = pad - l;
	format!(" {:left$}{}{:right$} ", "", s, "", left = l, right = r)
}

/// Renders the result as a boxed text table.
impl Display for MetadataResult {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let cells: Vec<Vec<String>> = self
			.rows()
			.iter()
			.map(|row| {
				row.values()
					.into_iter()
					.map(|value| escape_control_chars(value.as_deref().unwrap_or(NULL)))
					.collect()
			})
			.collect();

		let mut col_widths: Vec<usize> = self.columns().iter().map(|c| display_width(c.name)).collect();
		for row in &cells {
			for (idx, cell) in row.iter().enumerate() {
				col_widths[idx] = col_widths[idx].max(display_width(cell));
			}
		}
		for w in &mut col_widths {
			*w += 2;
		}

		let sep = format!("+{}+", col_widths.iter().map(|w| "-".repeat(*w + 2)).collect::<Vec<_>>().join("+"));
		writeln!(f, "{}", sep)?;

		let header = self
			.columns()
			.iter()
			.zip(&col_widths)
			.map(|(column, w)| centered(column.name, *w))
			.collect::<Vec<_>>();
		writeln!(f, "|{}|", header.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row in &cells {
			let line = row.iter().zip(&col_widths).map(|(cell, w)| centered(cell, *w)).collect::<Vec<_>>();
			writeln!(f, "|{}|", line.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}
