mod common;

use common::{atom, edge, graph};

#[tokio::test]
async fn add_exists_remove_idempotence() {
	let g = graph().await;
	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);

	assert!(g.add(&e).await.unwrap());
	assert!(!g.add(&e).await.unwrap());
	assert!(g.exists(&e).await.unwrap());

	assert!(g.remove(&e).await.unwrap());
	assert!(!g.remove(&e).await.unwrap());
	assert!(!g.exists(&e).await.unwrap());
}

#[tokio::test]
async fn scenario_single_edge() {
	let g = graph().await;
	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	g.add(&e).await.unwrap();

	assert!(g.exists(&e).await.unwrap());
	let other = edge(vec![atom("is"), atom("graphbrain/1"), atom("bad/1")]);
	assert!(!g.exists(&other).await.unwrap());

	assert_eq!(g.degree(&atom("graphbrain/1")).await.unwrap(), 1);
	assert_eq!(
		g.symbols_with_root("graphbrain").await.unwrap(),
		vec![atom("graphbrain/1")]
	);
}

#[tokio::test]
async fn scenario_nested_edge() {
	let g = graph().await;
	let inner = edge(vec![atom("size"), atom("graphbrain/1"), atom("7")]);
	let outer = edge(vec![atom("src"), atom("graphbrain/1"), inner.clone()]);
	g.add(&outer).await.unwrap();

	assert!(g.exists(&outer).await.unwrap());
	assert_eq!(g.degree(&inner).await.unwrap(), 1);
	assert_eq!(g.degree(&atom("graphbrain/1")).await.unwrap(), 2);
}

#[tokio::test]
async fn scenario_pattern2edges_exact_vs_open_ended() {
	let g = graph().await;
	let e3 = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	let e4 = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1"), atom("really/1")]);
	g.add(&e3).await.unwrap();
	g.add(&e4).await.unwrap();

	let pattern = vec![Some(atom("is")), Some(atom("graphbrain/1")), None];
	let exact = g.pattern2edges(&pattern, false).await.unwrap();
	assert_eq!(exact, vec![e3.clone()]);

	let mut open = g.pattern2edges(&pattern, true).await.unwrap();
	open.sort();
	let mut expected = vec![e3, e4];
	expected.sort();
	assert_eq!(open, expected);
}

#[tokio::test]
async fn pattern2edges_exact_is_subset_of_open_ended() {
	let g = graph().await;
	let e3 = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	let e4 = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1"), atom("really/1")]);
	g.add(&e3).await.unwrap();
	g.add(&e4).await.unwrap();

	let pattern = vec![Some(atom("is")), None, None];
	let exact = g.pattern2edges(&pattern, false).await.unwrap();
	let open = g.pattern2edges(&pattern, true).await.unwrap();
	for e in &exact {
		assert!(open.contains(e));
	}
}

#[tokio::test]
async fn star_respects_limit_and_is_deterministic() {
	let g = graph().await;
	let v = atom("v");
	let e1 = edge(vec![atom("a"), v.clone()]);
	let e2 = edge(vec![atom("b"), v.clone()]);
	let e3 = edge(vec![atom("c"), v.clone()]);
	g.add(&e1).await.unwrap();
	g.add(&e2).await.unwrap();
	g.add(&e3).await.unwrap();

	assert_eq!(g.star(&v, None).await.unwrap().len(), 3);
	assert_eq!(g.star(&v, Some(1)).await.unwrap().len(), 1);
	assert_eq!(g.star(&v, Some(2)).await.unwrap().len(), 2);
	assert_eq!(g.star(&v, Some(10)).await.unwrap().len(), 3);

	let first = g.star(&v, Some(1)).await.unwrap();
	let first_again = g.star(&v, Some(1)).await.unwrap();
	assert_eq!(first, first_again);
}

#[tokio::test]
async fn round_trip_parse_render_and_sanitise() {
	use hyperstore::Element;

	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	assert_eq!(Element::parse(&e.render()).unwrap(), e);

	let inner = edge(vec![atom("size"), atom("graphbrain/1"), atom("7")]);
	let outer = edge(vec![atom("src"), atom("graphbrain/1"), inner]);
	assert_eq!(Element::parse(&outer.render()).unwrap(), outer);
}
