//! The attribute record: per-element degree plus arbitrary typed user attributes.

use crate::elem::sanitise;
use crate::err::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the three value kinds an attribute can hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
	Int(i64),
	Float(f64),
	Str(String),
}

/// The reserved attribute name holding an element's degree.
pub const DEGREE: &str = "d";

/// A per-element attribute record. The degree field defaults to 0 and is always considered
/// present, even when absent from the underlying map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrRecord(BTreeMap<String, AttrValue>);

impl AttrRecord {
	pub fn new() -> Self {
		Self::default()
	}

	/// Deserialise a record previously produced by [`AttrRecord::to_bytes`].
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		bincode::deserialize(bytes).map_err(|e| Error::CorruptRecord(e.to_string()))
	}

	/// Serialise this record to the bytes stored as the value of a `v`-key.
	pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
		bincode::serialize(self).map_err(|e| Error::CorruptRecord(e.to_string()))
	}

	/// True if this record holds nothing beyond the default (zero) degree — i.e. it may be
	/// garbage-collected.
	pub fn is_empty(&self) -> bool {
		self.degree() == 0 && self.0.iter().all(|(k, _)| k == DEGREE)
	}

	pub fn degree(&self) -> i64 {
		match self.0.get(DEGREE) {
			Some(AttrValue::Int(n)) => *n,
			_ => 0,
		}
	}

	pub fn set_degree(&mut self, d: i64) {
		if d == 0 {
			self.0.remove(DEGREE);
		} else {
			self.0.insert(DEGREE.to_string(), AttrValue::Int(d));
		}
	}

	pub fn inc_degree(&mut self) {
		let d = self.degree();
		self.set_degree(d + 1);
	}

	pub fn dec_degree(&mut self) {
		let d = self.degree();
		self.set_degree((d - 1).max(0));
	}

	pub fn get_int(&self, name: &str, default: Option<i64>) -> Option<i64> {
		match self.0.get(name) {
			Some(AttrValue::Int(n)) => Some(*n),
			Some(_) | None => default,
		}
	}

	pub fn get_float(&self, name: &str, default: Option<f64>) -> Option<f64> {
		match self.0.get(name) {
			Some(AttrValue::Float(f)) => Some(*f),
			Some(_) | None => default,
		}
	}

	pub fn get_str(&self, name: &str, default: Option<&str>) -> Option<String> {
		match self.0.get(name) {
			Some(AttrValue::Str(s)) => Some(s.clone()),
			Some(_) | None => default.map(str::to_string),
		}
	}

	/// Set an attribute. String values pass through the sanitiser. `name` must not be the
	/// reserved degree field.
	pub fn set(&mut self, name: &str, value: AttrValue) {
		let value = match value {
			AttrValue::Str(s) => AttrValue::Str(sanitise(&s)),
			other => other,
		};
		self.0.insert(name.to_string(), value);
	}

	/// Increment an integer attribute by 1, treating an absent attribute as 0.
	pub fn inc(&mut self, name: &str) {
		let cur = self.get_int(name, Some(0)).unwrap_or(0);
		self.set(name, AttrValue::Int(cur + 1));
	}

	/// Decrement an integer attribute by 1, treating an absent attribute as 0.
	pub fn dec(&mut self, name: &str) {
		let cur = self.get_int(name, Some(0)).unwrap_or(0);
		self.set(name, AttrValue::Int(cur - 1));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn degree_defaults_to_zero_and_round_trips() {
		let mut r = AttrRecord::new();
		assert_eq!(r.degree(), 0);
		r.inc_degree();
		r.inc_degree();
		assert_eq!(r.degree(), 2);
		r.dec_degree();
		assert_eq!(r.degree(), 1);
		let bytes = r.to_bytes().unwrap();
		let back = AttrRecord::from_bytes(&bytes).unwrap();
		assert_eq!(back.degree(), 1);
	}

	#[test]
	fn string_attributes_are_sanitised() {
		let mut r = AttrRecord::new();
		r.set("label", AttrValue::Str("x0 x0 | test \\ test".to_string()));
		assert_eq!(r.get_str("label", None).unwrap(), "x0 x0   test   test");
	}

	#[test]
	fn missing_attribute_returns_default() {
		let r = AttrRecord::new();
		assert_eq!(r.get_int("count", Some(5)), Some(5));
		assert_eq!(r.get_int("count", None), None);
	}

	#[test]
	fn inc_dec_treat_absent_as_zero() {
		let mut r = AttrRecord::new();
		r.inc("hits");
		assert_eq!(r.get_int("hits", None), Some(1));
		r.dec("hits");
		r.dec("hits");
		assert_eq!(r.get_int("hits", None), Some(-1));
	}

	#[test]
	fn empty_record_is_garbage_collectible() {
		let mut r = AttrRecord::new();
		assert!(r.is_empty());
		r.inc_degree();
		assert!(!r.is_empty());
		r.dec_degree();
		assert!(r.is_empty());
		r.set("label", AttrValue::Str("x".into()));
		assert!(!r.is_empty());
	}
}
