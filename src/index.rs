//! The hyperedge index: stores every edge as a permutation-indexed fan of `p`-keys plus one
//! `v`-key per distinct element (atom or edge) carrying its attribute record, and answers
//! pattern, star, and root-membership queries over them.

use crate::attr::AttrRecord;
use crate::cnf::PROCESSOR_BATCH_SIZE;
use crate::elem::Element;
use crate::err::Error;
use crate::key::{pkey, vkey};
use crate::kvs::Transactor;
use crate::perm::{permutate, rank};
use std::collections::HashSet;
use std::future::Future;
use std::ops::Range;
use std::pin::Pin;

fn factorial(n: usize) -> u64 {
	(1..=n as u64).product()
}

/// The smallest key strictly greater than every key starting with `prefix`.
fn prefix_upper_bound(prefix: &[u8]) -> Vec<u8> {
	let mut v = prefix.to_vec();
	while let Some(last) = v.pop() {
		if last < 0xff {
			v.push(last + 1);
			return v;
		}
	}
	vec![0xff; prefix.len() + 1]
}

/// The smallest key strictly greater than `key` itself (for resuming a paginated scan).
fn successor(key: &[u8]) -> Vec<u8> {
	let mut v = key.to_vec();
	v.push(0);
	v
}

/// Scan every key/value pair whose key starts with `prefix`, paginating through the backend in
/// batches of [`PROCESSOR_BATCH_SIZE`], in ascending key order.
async fn scan_prefix(tx: &mut Transactor, prefix: Vec<u8>) -> Result<Vec<(Vec<u8>, Vec<u8>)>, Error> {
	let upper = prefix_upper_bound(&prefix);
	let mut start = prefix;
	let mut out = Vec::new();
	loop {
		let rng: Range<Vec<u8>> = start.clone()..upper.clone();
		let batch = tx.scan(rng, *PROCESSOR_BATCH_SIZE).await?;
		let got = batch.len();
		if let Some((last_key, _)) = batch.last() {
			start = successor(last_key);
		}
		out.extend(batch);
		if got < *PROCESSOR_BATCH_SIZE as usize {
			break;
		}
	}
	Ok(out)
}

/// Add an edge to the store. Returns `false` if it was already present.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx))]
pub async fn add(tx: &mut Transactor, edge: &Element) -> Result<bool, Error> {
	if !edge.is_edge() {
		return Err(Error::NotWellFormed("only edges may be added to the index".into()));
	}
	let children = edge.children().to_vec();
	let n = children.len();
	if tx.exists(pkey::encode(&children, 0)).await? {
		return Ok(false);
	}

	// The edge may already have an attribute record from being a not-yet-formally-added nested
	// child of some other edge (see `bump_degree`); preserve whatever degree it accumulated there.
	let vk = vkey::encode(edge);
	if !tx.exists(vk.clone()).await? {
		tx.set(vk, AttrRecord::new().to_bytes()?).await?;
	}

	for k in 0..factorial(n) {
		let permuted = permutate(&children, k)?;
		tx.set(pkey::encode(&permuted, k), Vec::new()).await?;
	}
	for child in &children {
		bump_degree(tx, child, 1).await?;
	}
	Ok(true)
}

/// Remove an edge from the store. Returns `false` if it was not present.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx))]
pub async fn remove(tx: &mut Transactor, edge: &Element) -> Result<bool, Error> {
	if !edge.is_edge() {
		return Err(Error::NotWellFormed("only edges may be removed from the index".into()));
	}
	let children = edge.children().to_vec();
	let n = children.len();
	if !tx.exists(pkey::encode(&children, 0)).await? {
		return Ok(false);
	}

	for k in 0..factorial(n) {
		let permuted = permutate(&children, k)?;
		tx.del(pkey::encode(&permuted, k)).await?;
	}
	for child in &children {
		bump_degree(tx, child, -1).await?;
	}

	// The edge no longer has permutation entries of its own; drop its attribute record unless
	// something else (a custom attribute, or degree from still being nested elsewhere) keeps it alive.
	let vk = vkey::encode(edge);
	if let Some(bytes) = tx.get(vk.clone()).await? {
		if AttrRecord::from_bytes(&bytes)?.is_empty() {
			tx.del(vk).await?;
		}
	}
	Ok(true)
}

/// Change `element`'s stored degree by `by` (positive for `add`, negative for `remove`).
///
/// A direct child that is itself an edge but has no permutation entries of its own was never
/// formally [`add`]-ed: it is only known through this nesting, so this recurses into *its* own
/// children with the same change, without ever writing permutation entries for it. An edge that
/// was formally added keeps its children's degrees untouched by further nesting — §4.6's "not
/// recursively added" governs permutation-index entries, which this never creates for a nested edge.
fn bump_degree<'a>(
	tx: &'a mut Transactor,
	element: &'a Element,
	by: i64,
) -> Pin<Box<dyn Future<Output = Result<(), Error>> + Send + 'a>> {
	Box::pin(async move {
		let key = vkey::encode(element);
		let mut rec = match tx.get(key.clone()).await? {
			Some(bytes) => AttrRecord::from_bytes(&bytes)?,
			None => AttrRecord::new(),
		};
		if by >= 0 {
			for _ in 0..by {
				rec.inc_degree();
			}
		} else {
			for _ in 0..-by {
				rec.dec_degree();
			}
		}

		let has_own_entry = match element {
			Element::Edge(children) => tx.exists(pkey::encode(children, 0)).await?,
			Element::Atom(_) => false,
		};
		if rec.is_empty() && !has_own_entry {
			tx.del(key).await?;
		} else {
			tx.set(key, rec.to_bytes()?).await?;
		}

		if !has_own_entry {
			if let Element::Edge(children) = element {
				for child in children {
					bump_degree(tx, child, by).await?;
				}
			}
		}
		Ok(())
	})
}

/// Whether an edge is present in the store: checked via its `k=0` permutation entry, since a
/// nested, not-separately-added edge can have an attribute record (for degree tracking) without
/// ever having been formally added.
pub async fn exists(tx: &mut Transactor, edge: &Element) -> Result<bool, Error> {
	if !edge.is_edge() {
		return Err(Error::NotWellFormed("only edges can be checked for existence in the index".into()));
	}
	tx.exists(pkey::encode(edge.children(), 0)).await
}

/// Fetch an element's attribute record, or an empty one if it has none.
pub async fn attributes(tx: &mut Transactor, element: &Element) -> Result<AttrRecord, Error> {
	match tx.get(vkey::encode(element)).await? {
		Some(bytes) => AttrRecord::from_bytes(&bytes),
		None => Ok(AttrRecord::new()),
	}
}

/// Overwrite an element's attribute record.
pub async fn set_attributes(tx: &mut Transactor, element: &Element, rec: &AttrRecord) -> Result<(), Error> {
	let key = vkey::encode(element);
	if rec.is_empty() {
		tx.del(key).await?;
	} else {
		tx.set(key, rec.to_bytes()?).await?;
	}
	Ok(())
}

/// The original-position arrangement implied by matching `pattern`'s concrete slots first, left
/// to right, against an edge of arity `n`, followed by every other position left to right.
fn build_position_order(pattern: &[Option<Element>], n: usize) -> Vec<usize> {
	let mut order = Vec::with_capacity(n);
	let mut used = vec![false; n];
	for (i, p) in pattern.iter().enumerate() {
		if p.is_some() && i < n {
			order.push(i);
			used[i] = true;
		}
	}
	for (i, used) in used.iter().enumerate() {
		if !used {
			order.push(i);
		}
	}
	order
}

/// Find every stored edge matching `pattern`: a `None` slot is a wildcard, a `Some` slot must
/// equal that position exactly. If `open_ended`, edges with more children than `pattern.len()`
/// also match, as long as the first `pattern.len()` positions satisfy `pattern`.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx, pattern))]
pub async fn pattern2edges(
	tx: &mut Transactor,
	pattern: &[Option<Element>],
	open_ended: bool,
) -> Result<Vec<Element>, Error> {
	let l = pattern.len();
	let concrete: Vec<Element> = pattern.iter().filter_map(Clone::clone).collect();
	let text = pkey::joined_text(&concrete);
	let prefix = pkey::prefix_for_text(&text);

	let mut out = Vec::new();
	let mut seen = HashSet::new();
	for (key, _) in scan_prefix(tx, prefix).await? {
		let Ok(decoded) = pkey::decode(&key) else {
			continue;
		};
		let n = decoded.children.len();
		if open_ended {
			if n < l {
				continue;
			}
		} else if n != l {
			continue;
		}
		let position_order = build_position_order(pattern, n);
		if rank(&position_order) != decoded.k {
			continue;
		}
		let mut original: Vec<Option<Element>> = vec![None; n];
		for (i, &pos) in position_order.iter().enumerate() {
			original[pos] = Some(decoded.children[i].clone());
		}
		let original: Vec<Element> = match original.into_iter().collect::<Option<Vec<_>>>() {
			Some(v) => v,
			None => continue,
		};
		if pattern.iter().enumerate().any(|(i, want)| matches!(want, Some(w) if &original[i] != w)) {
			continue;
		}
		let edge = Element::edge(original)?;
		if seen.insert(edge.clone()) {
			out.push(edge);
		}
	}
	Ok(out)
}

/// Find every stored edge containing `element` as a direct child, in ascending-key order (the
/// deterministic tie-break for `limit`), up to `limit` distinct edges if given.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx))]
pub async fn star(tx: &mut Transactor, element: &Element, limit: Option<usize>) -> Result<Vec<Element>, Error> {
	let prefix = pkey::prefix_for_text(&element.render());
	let mut out = Vec::new();
	let mut seen = HashSet::new();
	for (key, _) in scan_prefix(tx, prefix).await? {
		let Ok(decoded) = pkey::decode(&key) else {
			continue;
		};
		if decoded.children.first() != Some(element) {
			continue;
		}
		let n = decoded.children.len();
		let position_order = permutate(&(0..n).collect::<Vec<_>>(), decoded.k)?;
		let mut original: Vec<Option<Element>> = vec![None; n];
		for (i, &pos) in position_order.iter().enumerate() {
			original[pos] = Some(decoded.children[i].clone());
		}
		let original: Vec<Element> = match original.into_iter().collect::<Option<Vec<_>>>() {
			Some(v) => v,
			None => continue,
		};
		let edge = Element::edge(original)?;
		if seen.insert(edge.clone()) {
			out.push(edge);
			if limit.is_some_and(|l| out.len() >= l) {
				break;
			}
		}
	}
	Ok(out)
}

/// Every stored atom whose root is exactly `root`, including the bare root atom itself.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx))]
pub async fn symbols_with_root(tx: &mut Transactor, root: &str) -> Result<Vec<Element>, Error> {
	let mut out = Vec::new();
	if tx.exists(vkey::bare_root_key(root)).await? {
		out.push(Element::atom(root)?);
	}
	for (key, _) in scan_prefix(tx, vkey::root_prefix(root)).await? {
		out.push(vkey::decode(&key)?);
	}
	Ok(out)
}

/// Every stored edge directly containing all of `atoms`, optionally also requiring one direct
/// child atom whose root is `root`.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx, atoms))]
pub async fn edges_with_symbols(
	tx: &mut Transactor,
	atoms: &[Element],
	root: Option<&str>,
) -> Result<Vec<Element>, Error> {
	let candidates = match atoms.first() {
		Some(first) => star(tx, first, None).await?,
		None => all(tx).await?,
	};
	let out = candidates
		.into_iter()
		.filter(|edge| atoms.iter().all(|a| edge.children().contains(a)))
		.filter(|edge| match root {
			Some(root) => edge
				.children()
				.iter()
				.any(|c| c.is_atom() && c.root() == Some(root)),
			None => true,
		})
		.collect();
	Ok(out)
}

/// Every stored edge.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx))]
pub async fn all(tx: &mut Transactor) -> Result<Vec<Element>, Error> {
	let mut out = Vec::new();
	for (key, _) in scan_prefix(tx, vkey::namespace_prefix()).await? {
		let elem = vkey::decode(&key)?;
		if elem.is_edge() {
			out.push(elem);
		}
	}
	Ok(out)
}

/// Every stored element (atom or edge) paired with its attribute record.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx))]
pub async fn all_attributes(tx: &mut Transactor) -> Result<Vec<(Element, AttrRecord)>, Error> {
	let mut out = Vec::new();
	for (key, val) in scan_prefix(tx, vkey::namespace_prefix()).await? {
		let elem = vkey::decode(&key)?;
		let rec = AttrRecord::from_bytes(&val)?;
		out.push((elem, rec));
	}
	Ok(out)
}

/// The number of distinct atoms with a stored attribute record.
pub async fn symbol_count(tx: &mut Transactor) -> Result<u64, Error> {
	Ok(all_attributes(tx).await?.iter().filter(|(e, _)| e.is_atom()).count() as u64)
}

/// The number of distinct edges in the store.
pub async fn edge_count(tx: &mut Transactor) -> Result<u64, Error> {
	Ok(all_attributes(tx).await?.iter().filter(|(e, _)| e.is_edge()).count() as u64)
}

/// The sum of every stored element's degree.
pub async fn total_degree(tx: &mut Transactor) -> Result<i64, Error> {
	Ok(all_attributes(tx).await?.iter().map(|(_, rec)| rec.degree()).sum())
}

/// Delete every key in the store, in both the `v` and `p` namespaces.
#[instrument(level = "trace", target = "hyperstore::index", skip(tx))]
pub async fn destroy(tx: &mut Transactor) -> Result<(), Error> {
	for namespace in [vkey::namespace_prefix(), pkey::namespace_prefix()] {
		for (key, _) in scan_prefix(tx, namespace).await? {
			tx.del(key).await?;
		}
	}
	Ok(())
}
