//! The `v`-key family: one key per atom or edge, holding its attribute record.

use crate::elem::Element;
use crate::err::Error;

const TAG: u8 = b'v';

/// The full key for an element: `"v" || render(element)`.
pub fn encode(element: &Element) -> Vec<u8> {
	let mut key = vec![TAG];
	key.extend_from_slice(element.render().as_bytes());
	key
}

/// The byte prefix scanning every `v`-key, i.e. the whole element namespace.
pub fn namespace_prefix() -> Vec<u8> {
	vec![TAG]
}

/// The byte prefix matching every atom whose root is exactly `root` and which has a `/` suffix
/// (i.e. every atom strictly under that root, not the bare root atom itself).
pub fn root_prefix(root: &str) -> Vec<u8> {
	let mut key = vec![TAG];
	key.extend_from_slice(root.as_bytes());
	key.push(b'/');
	key
}

/// The exact key for the bare atom matching a root with no namespace suffix.
pub fn bare_root_key(root: &str) -> Vec<u8> {
	let mut key = vec![TAG];
	key.extend_from_slice(root.as_bytes());
	key
}

/// Recover the element whose rendering produced this key.
pub fn decode(key: &[u8]) -> Result<Element, Error> {
	if key.first() != Some(&TAG) {
		return Err(Error::KeyCodec("not a v-key".into()));
	}
	let text = std::str::from_utf8(&key[1..])
		.map_err(|e| Error::KeyCodec(format!("v-key is not valid UTF-8: {e}")))?;
	Element::parse(text)
}
