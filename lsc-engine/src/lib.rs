pub mod dict;
pub mod keys;
pub mod suggest;

pub use dict::{DictError, WordList};
pub use keys::{KeyError, KeyId, SizeClass};
pub use suggest::{apply_selection, current_token, recompute};
