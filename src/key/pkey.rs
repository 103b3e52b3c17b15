//! The `p`-key family: one key per permutation of an edge's direct children, letting a range
//! scan over a leading subsequence of concrete values find every edge that matches it.

use crate::elem::Element;
use crate::err::Error;

const TAG: u8 = b'p';
const SEP: u8 = 0x00;
const TAG_LEN: usize = 4;

/// A decoded `p`-key: the permuted children it was built from, and the permutation index.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded {
	pub children: Vec<Element>,
	pub k: u64,
}

/// Build the key for one permutation of an edge's children: `"p" || joined render || 0x00 || k`.
pub fn encode(children_permuted: &[Element], k: u64) -> Vec<u8> {
	let mut key = vec![TAG];
	key.extend_from_slice(joined_text(children_permuted).as_bytes());
	key.push(SEP);
	key.extend_from_slice(&(k as u32).to_be_bytes());
	key
}

/// The space-joined canonical rendering of a child sequence, with no surrounding parens.
pub fn joined_text(children: &[Element]) -> String {
	children
		.iter()
		.map(Element::render)
		.collect::<Vec<_>>()
		.join(" ")
}

/// The byte prefix matching every stored permutation whose leading tokens render exactly as
/// `text` (space-joined), regardless of which permutation index or trailing children follow.
pub fn prefix_for_text(text: &str) -> Vec<u8> {
	let mut key = vec![TAG];
	key.extend_from_slice(text.as_bytes());
	key
}

/// The byte prefix scanning every `p`-key, i.e. the whole permutation-index namespace.
pub fn namespace_prefix() -> Vec<u8> {
	vec![TAG]
}

/// Split a stored `p`-key back into its permuted children and permutation index.
pub fn decode(key: &[u8]) -> Result<Decoded, Error> {
	if key.first() != Some(&TAG) {
		return Err(Error::KeyCodec("not a p-key".into()));
	}
	if key.len() < 1 + 1 + TAG_LEN {
		return Err(Error::KeyCodec("p-key too short".into()));
	}
	let (head, tag) = key.split_at(key.len() - TAG_LEN);
	let k = u32::from_be_bytes(tag.try_into().expect("checked length above")) as u64;
	let (body, sep) = head.split_at(head.len() - 1);
	if sep != [SEP] {
		return Err(Error::KeyCodec("p-key missing 0x00 separator".into()));
	}
	let joined = std::str::from_utf8(&body[1..])
		.map_err(|e| Error::KeyCodec(format!("p-key is not valid UTF-8: {e}")))?;
	let wrapped = format!("({joined})");
	let children = match Element::parse(&wrapped)? {
		Element::Edge(children) => children,
		Element::Atom(_) => unreachable!("parenthesised text always parses as an edge"),
	};
	Ok(Decoded { children, k })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn atom(s: &str) -> Element {
		Element::atom(s).unwrap()
	}

	#[test]
	fn encode_decode_round_trips() {
		let children = vec![atom("is"), atom("graphbrain/1"), atom("great/1")];
		let key = encode(&children, 3);
		let decoded = decode(&key).unwrap();
		assert_eq!(decoded.children, children);
		assert_eq!(decoded.k, 3);
	}

	#[test]
	fn encoded_key_starts_with_the_prefix_for_its_joined_text() {
		let children = vec![atom("is"), atom("graphbrain/1")];
		let key = encode(&children, 0);
		let prefix = prefix_for_text(&joined_text(&children));
		assert!(key.starts_with(&prefix));
	}

	#[test]
	fn k_tag_is_order_preserving_big_endian() {
		let children = vec![atom("a"), atom("b")];
		let k0 = encode(&children, 0);
		let k1 = encode(&children, 1);
		assert!(k0 < k1);
	}

	#[test]
	fn rejects_truncated_or_mistagged_keys() {
		assert!(decode(&[TAG]).is_err());
		assert!(decode(b"v(is a b)").is_err());
	}
}
