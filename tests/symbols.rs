mod common;

use common::{atom, edge, graph};

#[tokio::test]
async fn edges_with_symbols_matches_root_exactly_not_as_prefix() {
	let g = graph().await;
	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	g.add(&e).await.unwrap();

	let atoms = vec![atom("graphbrain/1")];
	let matched = g.edges_with_symbols(&atoms, Some("great")).await.unwrap();
	assert_eq!(matched, vec![e]);

	let unmatched = g.edges_with_symbols(&atoms, Some("grea")).await.unwrap();
	assert!(unmatched.is_empty());
}

#[tokio::test]
async fn edges_with_symbols_without_root_requires_all_atoms_present() {
	let g = graph().await;
	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	g.add(&e).await.unwrap();

	let atoms = vec![atom("graphbrain/1"), atom("great/1")];
	assert_eq!(g.edges_with_symbols(&atoms, None).await.unwrap(), vec![e.clone()]);

	let missing = vec![atom("graphbrain/1"), atom("bad/1")];
	assert!(g.edges_with_symbols(&missing, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn symbols_with_root_only_returns_atoms_sharing_the_root() {
	let g = graph().await;
	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("graphbrain/2")]);
	g.add(&e).await.unwrap();

	let mut syms = g.symbols_with_root("graphbrain").await.unwrap();
	syms.sort();
	assert_eq!(syms, vec![atom("graphbrain/1"), atom("graphbrain/2")]);

	assert!(g.symbols_with_root("nonexistent").await.unwrap().is_empty());
}
