//! Deterministic ranking of permutations of an n-tuple, used to seed the permutation index.

use crate::err::Error;

/// Returns the `k`-th permutation of `tuple` under the factorial-number-system ordering: `k` is
/// treated as a factorial-base numeral of length `n`, and digit `dᵢ = (k / (n-1-i)!) mod (n-i)`
/// selects, for position `i`, the `dᵢ`-th still-unused element of `tuple` in left-to-right order.
///
/// `permutate(t, 0) == t` always. Domain: `0 <= k < n!`.
pub fn permutate<T: Clone>(tuple: &[T], k: u64) -> Result<Vec<T>, Error> {
	let n = tuple.len();
	let total = factorial(n);
	if k >= total {
		return Err(Error::OutOfRange { k, n });
	}
	let mut remaining: Vec<T> = tuple.to_vec();
	let mut out = Vec::with_capacity(n);
	let mut k = k;
	for i in 0..n {
		let f = factorial(n - 1 - i);
		let digit = (k / f) as usize;
		k %= f;
		out.push(remaining.remove(digit));
	}
	Ok(out)
}

fn factorial(n: usize) -> u64 {
	(1..=n as u64).product()
}

/// The inverse of [`permutate`]: given the `position_order` such that
/// `permutate(tuple, k) == position_order.iter().map(|&i| tuple[i]).collect()`, recover `k`.
///
/// `position_order` must be a permutation of `0..position_order.len()`. Computes the standard
/// Lehmer code: for each position left to right, the digit is how many not-yet-used original
/// indices less than `position_order[i]` remain, then that index is marked used.
pub fn rank(position_order: &[usize]) -> u64 {
	let n = position_order.len();
	let mut used = vec![false; n];
	let mut k = 0u64;
	for (i, &target) in position_order.iter().enumerate() {
		let digit = (0..target).filter(|&v| !used[v]).count() as u64;
		used[target] = true;
		k += digit * factorial(n - 1 - i);
	}
	k
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identity_permutation_is_k_zero() {
		assert_eq!(permutate(&['a', 'b', 'c'], 0).unwrap(), vec!['a', 'b', 'c']);
		assert_eq!(permutate(&[1, 2, 3, 4], 0).unwrap(), vec![1, 2, 3, 4]);
	}

	#[test]
	fn two_tuple() {
		assert_eq!(permutate(&['a', 'b'], 0).unwrap(), vec!['a', 'b']);
		assert_eq!(permutate(&['a', 'b'], 1).unwrap(), vec!['b', 'a']);
	}

	#[test]
	fn three_tuple_pinned_sequence() {
		let t = ['a', 'b', 'c'];
		let expect = [
			vec!['a', 'b', 'c'],
			vec!['a', 'c', 'b'],
			vec!['b', 'a', 'c'],
			vec!['b', 'c', 'a'],
			vec!['c', 'a', 'b'],
			vec!['c', 'b', 'a'],
		];
		for (k, want) in expect.iter().enumerate() {
			assert_eq!(&permutate(&t, k as u64).unwrap(), want, "k={k}");
		}
	}

	#[test]
	fn three_tuple_scenario_pin() {
		assert_eq!(permutate(&['a', 'b', 'c'], 3).unwrap(), vec!['b', 'c', 'a']);
	}

	#[test]
	fn four_tuple_pinned() {
		assert_eq!(permutate(&['a', 'b', 'c', 'd'], 0).unwrap(), vec!['a', 'b', 'c', 'd']);
		assert_eq!(permutate(&['a', 'b', 'c', 'd'], 1).unwrap(), vec!['a', 'b', 'd', 'c']);
	}

	#[test]
	fn is_a_bijection_over_its_domain() {
		let t = [0, 1, 2, 3];
		let n = factorial(4);
		let mut seen = std::collections::HashSet::new();
		for k in 0..n {
			let p = permutate(&t, k).unwrap();
			assert!(seen.insert(p), "duplicate permutation at k={k}");
		}
		assert_eq!(seen.len(), n as usize);
	}

	#[test]
	fn out_of_range_is_an_error() {
		assert!(permutate(&['a', 'b', 'c'], 6).is_err());
	}

	#[test]
	fn rank_is_the_inverse_of_permutate() {
		let t = [0usize, 1, 2, 3];
		for k in 0..factorial(4) {
			let permuted = permutate(&t, k).unwrap();
			assert_eq!(rank(&permuted), k, "k={k} permuted={permuted:?}");
		}
	}

	#[test]
	fn rank_of_identity_is_zero() {
		assert_eq!(rank(&[0, 1, 2, 3]), 0);
	}

	#[test]
	fn rank_pinned_vectors() {
		assert_eq!(rank(&[1, 0]), 1);
		assert_eq!(rank(&[1, 2, 0]), 3);
	}
}
