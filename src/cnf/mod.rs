use once_cell::sync::Lazy;

/// The number of `(key, value)` pairs fetched per round-trip when paging through a range scan in
/// `all()`, `all_attributes()`, `pattern2edges`, and `star`. A scan larger than this is served by
/// repeated calls to the backend adapter rather than a single unbounded one.
pub static PROCESSOR_BATCH_SIZE: Lazy<u32> =
	lazy_env_parse!("HYPERSTORE_PROCESSOR_BATCH_SIZE", u32, 1_000);
