use hyperstore::{Config, Element, HyperGraph};

pub fn atom(s: &str) -> Element {
	Element::atom(s).unwrap()
}

pub fn edge(children: Vec<Element>) -> Element {
	Element::edge(children).unwrap()
}

pub async fn graph() -> HyperGraph {
	HyperGraph::new(Config {
		backend: "mem".to_string(),
		hg: String::new(),
	})
	.await
	.unwrap()
}
