mod common;

use common::{atom, edge, graph};

#[tokio::test]
async fn symbol_and_edge_counts_partition_all_elements() {
	let g = graph().await;
	let inner = edge(vec![atom("size"), atom("graphbrain/1"), atom("7")]);
	let outer = edge(vec![atom("src"), atom("graphbrain/1"), inner]);
	g.add(&outer).await.unwrap();

	let all = g.all_attributes().await.unwrap();
	let symbol_count = g.symbol_count().await.unwrap();
	let edge_count = g.edge_count().await.unwrap();
	assert_eq!(symbol_count + edge_count, all.len() as u64);
	assert_eq!(g.all().await.unwrap().len() as u64, edge_count);
}

#[tokio::test]
async fn total_degree_equals_sum_of_every_elements_degree() {
	let g = graph().await;
	let e1 = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	let e2 = edge(vec![atom("is"), atom("graphbrain/1"), atom("nice/1")]);
	g.add(&e1).await.unwrap();
	g.add(&e2).await.unwrap();

	let all = g.all_attributes().await.unwrap();
	let expected: i64 = all.iter().map(|(_, rec)| rec.degree()).sum();
	assert_eq!(g.total_degree().await.unwrap(), expected);
}

#[tokio::test]
async fn destroy_clears_every_edge_and_attribute() {
	let g = graph().await;
	let e1 = edge(vec![atom("is"), atom("graphbrain/1"), atom("great/1")]);
	let e2 = edge(vec![atom("is"), atom("graphbrain/1"), atom("nice/1")]);
	g.add(&e1).await.unwrap();
	g.add(&e2).await.unwrap();

	g.destroy().await.unwrap();

	assert!(g.all().await.unwrap().is_empty());
	assert!(!g.exists(&e1).await.unwrap());
	assert!(!g.exists(&e2).await.unwrap());
	assert_eq!(g.symbol_count().await.unwrap(), 0);
	assert_eq!(g.edge_count().await.unwrap(), 0);
	assert_eq!(g.total_degree().await.unwrap(), 0);
}
