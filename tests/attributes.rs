mod common;

use common::{atom, edge, graph};
use hyperstore::AttrValue;

#[tokio::test]
async fn set_attribute_sanitises_string_values() {
	let g = graph().await;
	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	g.add(&e).await.unwrap();

	g.set_attribute(&e, "label", AttrValue::Str("x0 x0 | test \\ test".to_string()))
		.await
		.unwrap();
	assert_eq!(
		g.get_str_attribute(&e, "label", None).await.unwrap(),
		Some("x0 x0   test   test".to_string())
	);
}

#[tokio::test]
async fn missing_attribute_returns_provided_default() {
	let g = graph().await;
	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	g.add(&e).await.unwrap();

	assert_eq!(g.get_int_attribute(&e, "count", Some(5)).await.unwrap(), Some(5));
	assert_eq!(g.get_int_attribute(&e, "count", None).await.unwrap(), None);
	assert_eq!(g.get_float_attribute(&e, "weight", Some(1.5)).await.unwrap(), Some(1.5));
}

#[tokio::test]
async fn inc_dec_attribute_treat_absent_as_zero() {
	let g = graph().await;
	let a = atom("graphbrain/1");
	let e = edge(vec![atom("is"), a.clone(), atom("great/1")]);
	g.add(&e).await.unwrap();

	g.inc_attribute(&a, "hits").await.unwrap();
	g.inc_attribute(&a, "hits").await.unwrap();
	assert_eq!(g.get_int_attribute(&a, "hits", None).await.unwrap(), Some(2));
	g.dec_attribute(&a, "hits").await.unwrap();
	assert_eq!(g.get_int_attribute(&a, "hits", None).await.unwrap(), Some(1));
}

#[tokio::test]
async fn degree_equals_direct_child_edge_count() {
	let g = graph().await;
	let v = atom("v");
	g.add(&edge(vec![atom("a"), v.clone()])).await.unwrap();
	g.add(&edge(vec![atom("b"), v.clone()])).await.unwrap();
	assert_eq!(g.degree(&v).await.unwrap(), 2);

	g.remove(&edge(vec![atom("a"), v.clone()])).await.unwrap();
	assert_eq!(g.degree(&v).await.unwrap(), 1);
}

#[tokio::test]
async fn all_attributes_includes_every_stored_element() {
	let g = graph().await;
	let e = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	g.add(&e).await.unwrap();

	let all = g.all_attributes().await.unwrap();
	let elements: Vec<_> = all.iter().map(|(el, _)| el.clone()).collect();
	assert!(elements.contains(&e));
	assert!(elements.contains(&atom("graphbrain/1")));
	assert!(elements.contains(&atom("great/1")));
}
