use hyperstore::perm::{permutate, rank};

#[test]
fn permutate_of_k_zero_is_the_identity() {
	assert_eq!(permutate(&["is", "graphbrain/1", "great/1"], 0).unwrap(), vec!["is", "graphbrain/1", "great/1"]);
}

#[test]
fn permutate_is_a_bijection_for_every_arity_used_by_the_index() {
	for n in 2..=4 {
		let tuple: Vec<usize> = (0..n).collect();
		let total: u64 = (1..=n as u64).product();
		let mut seen = std::collections::HashSet::new();
		for k in 0..total {
			let p = permutate(&tuple, k).unwrap();
			assert_eq!(rank(&p), k);
			assert!(seen.insert(p));
		}
		assert_eq!(seen.len(), total as usize);
	}
}
