// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{ColumnType, DataType, error, error::diagnostic::r#type::invalid_type_expression};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnTypeParseError {
	#[error("unexpected end of input")]
	UnexpectedEnd,

	#[error("unexpected character `{ch}` at offset {offset}")]
	UnexpectedChar {
		ch: char,
		offset: usize,
	},

	#[error("`{kind}` expects {expected} type parameter(s), got {actual}")]
	ParameterCount {
		kind: &'static str,
		expected: usize,
		actual: usize,
	},

	#[error("`{0}` does not take type parameters")]
	NotParameterized(String),

	#[error("invalid vector dimension `{0}`")]
	InvalidDimension(String),

	#[error("qualified name `{0}` has too many parts")]
	TooManyQualifiers(String),
}

pub(super) fn parse(text: &str) -> crate::Result<ColumnType> {
	let mut parser = Parser {
		input: text,
		pos: 0,
	};
	parser.parse_complete().map_err(|reason| error!(invalid_type_expression(text, reason.to_string())))
}

struct Parser<'a> {
	input: &'a str,
	pos: usize,
}

type ParseResult<T> = std::result::Result<T, ColumnTypeParseError>;

struct Identifier {
	text: String,
	quoted: bool,
}

impl<'a> Parser<'a> {
	fn parse_complete(&mut self) -> ParseResult<ColumnType> {
		let ty = self.parse_type()?;
		self.skip_whitespace();
		match self.peek() {
			None => Ok(ty),
			Some(ch) => Err(ColumnTypeParseError::UnexpectedChar {
				ch,
				offset: self.pos,
			}),
		}
	}

	fn parse_type(&mut self) -> ParseResult<ColumnType> {
		self.skip_whitespace();
		if self.peek() == Some('\'') {
			return Ok(ColumnType::Custom(self.parse_quoted('\'')?));
		}

		let mut parts = vec![self.parse_identifier()?];
		while self.peek() == Some('.') {
			self.bump();
			parts.push(self.parse_identifier()?);
		}
		self.skip_whitespace();

		if parts.len() == 1 && !parts[0].quoted {
			let name = parts[0].text.as_str();
			match name {
				"frozen" => return self.parse_parameters("frozen", 1).map(|mut p| ColumnType::Frozen(Box::new(p.remove(0)))),
				"list" => return self.parse_parameters("list", 1).map(|mut p| ColumnType::List(Box::new(p.remove(0)))),
				"set" => return self.parse_parameters("set", 1).map(|mut p| ColumnType::Set(Box::new(p.remove(0)))),
				"map" => {
					let mut params = self.parse_parameters("map", 2)?;
					let value = params.remove(1);
					let key = params.remove(0);
					return Ok(ColumnType::Map(Box::new(key), Box::new(value)));
				}
				"tuple" => return self.parse_tuple(),
				"vector" => return self.parse_vector(),
				_ => {}
			}

			if let Some(native) = DataType::ALL.into_iter().find(|t| t.is_native() && t.name() == name) {
				if self.peek() == Some('<') {
					return Err(ColumnTypeParseError::NotParameterized(name.to_string()));
				}
				return Ok(ColumnType::Native(native));
			}
		}

		match parts.len() {
			1 => Ok(ColumnType::Udt {
				keyspace: None,
				name: parts.remove(0).text,
			}),
			2 => {
				let name = parts.remove(1).text;
				let keyspace = parts.remove(0).text;
				Ok(ColumnType::Udt {
					keyspace: Some(keyspace),
					name,
				})
			}
			_ => Err(ColumnTypeParseError::TooManyQualifiers(
				parts.iter().map(|p| p.text.as_str()).collect::<Vec<_>>().join("."),
			)),
		}
	}

	fn parse_parameters(&mut self, kind: &'static str, expected: usize) -> ParseResult<Vec<ColumnType>> {
		let params = self.parse_parameter_list(kind)?;
		if params.len() != expected {
			return Err(ColumnTypeParseError::ParameterCount {
				kind,
				expected,
				actual: params.len(),
			});
		}
		Ok(params)
	}

	fn parse_parameter_list(&mut self, kind: &'static str) -> ParseResult<Vec<ColumnType>> {
		if self.peek() != Some('<') {
			return Err(ColumnTypeParseError::ParameterCount {
				kind,
				expected: 1,
				actual: 0,
			});
		}
		self.bump();

		let mut params = vec![self.parse_type()?];
		loop {
			self.skip_whitespace();
			match self.bump() {
				Some(',') => params.push(self.parse_type()?),
				Some('>') => return Ok(params),
				Some(ch) => {
					return Err(ColumnTypeParseError::UnexpectedChar {
						ch,
						offset: self.pos - ch.len_utf8(),
					});
				}
				None => return Err(ColumnTypeParseError::UnexpectedEnd),
			}
		}
	}

	fn parse_tuple(&mut self) -> ParseResult<ColumnType> {
		Ok(ColumnType::Tuple(self.parse_parameter_list("tuple")?))
	}

	fn parse_vector(&mut self) -> ParseResult<ColumnType> {
		if self.peek() != Some('<') {
			return Err(ColumnTypeParseError::ParameterCount {
				kind: "vector",
				expected: 2,
				actual: 0,
			});
		}
		self.bump();
		let element = self.parse_type()?;
		self.skip_whitespace();
		match self.bump() {
			Some(',') => {}
			Some('>') => {
				return Err(ColumnTypeParseError::ParameterCount {
					kind: "vector",
					expected: 2,
					actual: 1,
				});
			}
			Some(ch) => {
				return Err(ColumnTypeParseError::UnexpectedChar {
					ch,
					offset: self.pos - ch.len_utf8(),
				});
			}
			None => return Err(ColumnTypeParseError::UnexpectedEnd),
		}
		self.skip_whitespace();
		let start = self.pos;
		while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
			self.bump();
		}
		let digits = &self.input[start..self.pos];
		let dimension = digits.parse::<u32>().map_err(|_| ColumnTypeParseError::InvalidDimension(digits.to_string()))?;
		if dimension == 0 {
			return Err(ColumnTypeParseError::InvalidDimension(digits.to_string()));
		}
		self.skip_whitespace();
		match self.bump() {
			Some('>') => Ok(ColumnType::Vector(Box::new(element), dimension)),
			Some(ch) => Err(ColumnTypeParseError::UnexpectedChar {
				ch,
				offset: self.pos - ch.len_utf8(),
			}),
			None => Err(ColumnTypeParseError::UnexpectedEnd),
		}
	}

	/// Unquoted identifiers are case-insensitive and normalized to lowercase;
	/// double-quoted identifiers keep their case.
	fn parse_identifier(&mut self) -> ParseResult<Identifier> {
		self.skip_whitespace();
		match self.peek() {
			Some('"') => Ok(Identifier {
				text: self.parse_quoted('"')?,
				quoted: true,
			}),
			Some(ch) if ch.is_alphanumeric() || ch == '_' => {
				let start = self.pos;
				while matches!(self.peek(), Some(ch) if ch.is_alphanumeric() || ch == '_') {
					self.bump();
				}
				Ok(Identifier {
					text: self.input[start..self.pos].to_lowercase(),
					quoted: false,
				})
			}
			Some(ch) => Err(ColumnTypeParseError::UnexpectedChar {
				ch,
				offset: self.pos,
			}),
			None => Err(ColumnTypeParseError::UnexpectedEnd),
		}
	}

	/// Reads a quoted literal; a doubled quote character escapes itself.
	fn parse_quoted(&mut self, quote: char) -> ParseResult<String> {
		self.bump();
		let mut out = String::new();
		loop {
			match self.bump() {
				Some(ch) if ch == quote => {
					if self.peek() == Some(quote) {
						self.bump();
						out.push(quote);
					} else {
						return Ok(out);
					}
				}
				Some(ch) => out.push(ch),
				None => return Err(ColumnTypeParseError::UnexpectedEnd),
			}
		}
	}

	fn skip_whitespace(&mut self) {
		while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
			self.bump();
		}
	}

	fn peek(&self) -> Option<char> {
		self.input[self.pos..].chars().next()
	}

	fn bump(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += ch.len_utf8();
		Some(ch)
	}
}
