//! The element model: atoms, edges, and their canonical textual rendering.

use crate::err::Error;

const FORBIDDEN: [char; 5] = [' ', '(', ')', '|', '\\'];

/// An atom or a (recursively) nested edge. Elements are values: equality is structural.
///
/// `#[non_exhaustive]` keeps construction behind [`Element::atom`]/[`Element::edge`] for callers
/// outside this crate, so a value can never reach `render`/key encoding without having passed
/// through the well-formedness checks those constructors enforce.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Element {
	Atom(String),
	Edge(Vec<Element>),
}

impl Element {
	/// Build a well-formed atom, rejecting empty strings and reserved delimiters.
	pub fn atom(s: impl Into<String>) -> Result<Element, Error> {
		let s = s.into();
		check_atom(&s)?;
		Ok(Element::Atom(s))
	}

	/// Build a well-formed edge of arity ≥ 2.
	pub fn edge(children: Vec<Element>) -> Result<Element, Error> {
		if children.len() < 2 {
			return Err(Error::NotWellFormed(format!(
				"edge arity must be at least 2, got {}",
				children.len()
			)));
		}
		Ok(Element::Edge(children))
	}

	pub fn is_atom(&self) -> bool {
		matches!(self, Element::Atom(_))
	}

	pub fn is_edge(&self) -> bool {
		matches!(self, Element::Edge(_))
	}

	/// Number of direct children; 0 for an atom.
	pub fn arity(&self) -> usize {
		match self {
			Element::Atom(_) => 0,
			Element::Edge(children) => children.len(),
		}
	}

	pub fn children(&self) -> &[Element] {
		match self {
			Element::Atom(_) => &[],
			Element::Edge(children) => children,
		}
	}

	/// The canonical textual rendering: the atom itself, or `(e1 e2 … en)` recursively.
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_into(&mut out);
		out
	}

	fn render_into(&self, out: &mut String) {
		match self {
			Element::Atom(s) => out.push_str(s),
			Element::Edge(children) => {
				out.push('(');
				for (i, child) in children.iter().enumerate() {
					if i > 0 {
						out.push(' ');
					}
					child.render_into(out);
				}
				out.push(')');
			}
		}
	}

	/// Parse the canonical textual form produced by [`Element::render`].
	pub fn parse(s: &str) -> Result<Element, Error> {
		let mut chars = s.char_indices().peekable();
		let (elem, rest) = parse_one(s, &mut chars)?;
		if let Some((i, _)) = chars.next() {
			return Err(Error::NotWellFormed(format!(
				"trailing input at byte {i} in {s:?}"
			)));
		}
		let _ = rest;
		Ok(elem)
	}

	/// For an atom, the substring up to (not including) the first `/`; the whole atom if none.
	/// For an edge, `None`.
	pub fn root(&self) -> Option<&str> {
		match self {
			Element::Atom(s) => Some(root_of(s)),
			Element::Edge(_) => None,
		}
	}
}

/// The root of an atom string: the substring before the first `/`, or the whole string.
pub fn root_of(atom: &str) -> &str {
	match atom.find('/') {
		Some(idx) => &atom[..idx],
		None => atom,
	}
}

fn check_atom(s: &str) -> Result<(), Error> {
	if s.is_empty() {
		return Err(Error::NotWellFormed("atom must not be empty".into()));
	}
	if let Some(c) = s.chars().find(|c| FORBIDDEN.contains(c)) {
		return Err(Error::NotWellFormed(format!(
			"atom {s:?} contains forbidden character {c:?}"
		)));
	}
	Ok(())
}

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

fn parse_one<'a>(s: &'a str, chars: &mut Chars<'a>) -> Result<(Element, &'a str), Error> {
	match chars.peek() {
		Some(&(_, '(')) => {
			chars.next();
			let mut children = Vec::new();
			loop {
				match chars.peek() {
					Some(&(_, ')')) => {
						chars.next();
						break;
					}
					Some(&(_, ' ')) => {
						chars.next();
					}
					Some(_) => {
						let (child, _) = parse_one(s, chars)?;
						children.push(child);
					}
					None => {
						return Err(Error::NotWellFormed(format!(
							"unterminated edge in {s:?}"
						)));
					}
				}
			}
			Ok((Element::edge(children)?, s))
		}
		Some(&(start, _)) => {
			let end = loop {
				match chars.peek() {
					Some(&(i, c)) if c != ' ' && c != '(' && c != ')' => {
						chars.next();
						let _ = i;
					}
					other => break other.map(|&(i, _)| i).unwrap_or(s.len()),
				}
			};
			Ok((Element::atom(&s[start..end])?, s))
		}
		None => Err(Error::NotWellFormed("empty input".into())),
	}
}

/// Replace every reserved attribute-value character (space, `|`, `\`) with a plain space.
/// Idempotent: `sanitise(sanitise(s)) == sanitise(s)`.
pub fn sanitise(s: &str) -> String {
	s.chars()
		.map(|c| if c == ' ' || c == '|' || c == '\\' { ' ' } else { c })
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn atom_round_trips() {
		let e = Element::atom("graphbrain/1").unwrap();
		assert_eq!(e.render(), "graphbrain/1");
		assert_eq!(Element::parse("graphbrain/1").unwrap(), e);
	}

	#[test]
	fn edge_round_trips() {
		let e = Element::edge(vec![
			Element::atom("is").unwrap(),
			Element::atom("graphbrain/1").unwrap(),
			Element::atom("great/1").unwrap(),
		])
		.unwrap();
		assert_eq!(e.render(), "(is graphbrain/1 great/1)");
		assert_eq!(Element::parse("(is graphbrain/1 great/1)").unwrap(), e);
	}

	#[test]
	fn nested_edge_round_trips() {
		let inner = Element::edge(vec![
			Element::atom("size").unwrap(),
			Element::atom("graphbrain/1").unwrap(),
			Element::atom("7").unwrap(),
		])
		.unwrap();
		let outer =
			Element::edge(vec![Element::atom("src").unwrap(), Element::atom("graphbrain/1").unwrap(), inner.clone()])
				.unwrap();
		let rendered = outer.render();
		assert_eq!(rendered, "(src graphbrain/1 (size graphbrain/1 7))");
		assert_eq!(Element::parse(&rendered).unwrap(), outer);
	}

	#[test]
	fn root_of_atom() {
		assert_eq!(root_of("graphbrain/1"), "graphbrain");
		assert_eq!(root_of("graphbrain"), "graphbrain");
	}

	#[test]
	fn rejects_short_edge_and_bad_atoms() {
		assert!(Element::edge(vec![Element::atom("a").unwrap()]).is_err());
		assert!(Element::atom("").is_err());
		assert!(Element::atom("bad atom").is_err());
	}

	#[test]
	fn sanitise_replaces_reserved_characters_and_is_idempotent() {
		let s = "x0 x0 | test \\ test";
		let out = sanitise(s);
		assert_eq!(out, "x0 x0   test   test");
		assert_eq!(sanitise(&out), out);
	}
}
