//! Deterministic element identifiers built from strings and numbers.
//!
//! [`HashBuilder`] folds bytes through Jenkins' one-at-a-time mixing step
//! and keeps a human-readable tag of everything it was fed, so an ID can
//! be traced back to the inputs that produced it. The output depends only
//! on the seed, the input sequence and the joiner; there is no hidden
//! state, so the same element gets the same ID on every frame and in
//! every process.

use std::borrow::Cow;
use std::fmt;

/// A stable element identifier with its recoverable string tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct HashElementId {
    /// The identifier. Never zero for a freshly built ID unless the hash
    /// state wrapped to `u32::MAX`.
    pub id: u32,
    /// Positional offset from `base_id`. Always 0 from [`HashBuilder`].
    pub offset: u32,
    /// The identifier before any positional offset. Equals `id` at build time.
    pub base_id: u32,
    /// Every hashed input, joined in call order.
    pub string_id: String,
}

impl fmt::Display for HashElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.string_id, self.id)
    }
}

/// How successive inputs are appended to a builder's string tag.
///
/// The joiner is always applied as `joiner(tag, input)`, including for
/// the very first input, so `Separator("-")` turns a first input `"a"`
/// into the tag `"-a"`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Joiner {
    /// `tag + input`.
    #[default]
    Concat,
    /// `tag + separator + input`.
    Separator(Cow<'static, str>),
    /// Arbitrary joining function.
    Custom(fn(&str, &str) -> String),
}

impl Joiner {
    /// Join `tag` and `input` into a new tag.
    pub fn join(&self, tag: &str, input: &str) -> String {
        match self {
            Self::Concat => {
                let mut out = String::with_capacity(tag.len() + input.len());
                out.push_str(tag);
                out.push_str(input);
                out
            }
            Self::Separator(sep) => {
                let mut out = String::with_capacity(tag.len() + sep.len() + input.len());
                out.push_str(tag);
                out.push_str(sep);
                out.push_str(input);
                out
            }
            Self::Custom(join) => join(tag, input),
        }
    }
}

/// Options applied to string and number inputs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct HashOptions {
    /// Tag joiner. Default: [`Joiner::Concat`].
    pub joiner: Joiner,
}

impl HashOptions {
    /// Options using the given joiner.
    pub fn with_joiner(joiner: Joiner) -> Self {
        Self { joiner }
    }
}

/// Incremental, order-sensitive ID builder.
///
/// Every `add_*` method returns `&mut Self`, so calls chain:
///
/// ```
/// use framemem_core::{HashBuilder, HashOptions};
///
/// let opts = HashOptions::default();
/// let id = HashBuilder::new(0)
///     .add_string("sidebar", &opts)
///     .add_number(3, &opts)
///     .build();
/// assert_eq!(id.string_id, "sidebar3");
/// assert_eq!(id.id, id.base_id);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashBuilder {
    hash: u32,
    string_id: String,
}

impl HashBuilder {
    /// Start a builder from `seed` with an empty tag.
    pub fn new(seed: u32) -> Self {
        Self {
            hash: seed,
            string_id: String::new(),
        }
    }

    /// Current hash state.
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Current string tag.
    pub fn string_id(&self) -> &str {
        &self.string_id
    }

    /// Fold a single byte into the hash.
    pub fn add_byte(&mut self, byte: u8) -> &mut Self {
        self.mix(byte as u32);
        self
    }

    /// Fold the first `count` bytes of `data` into the hash.
    ///
    /// `count` larger than `data.len()` folds the whole slice. The tag is
    /// not touched.
    pub fn add_bytes(&mut self, data: &[u8], count: usize) -> &mut Self {
        for &byte in data.iter().take(count) {
            self.mix(byte as u32);
        }
        self
    }

    /// Fold every byte of `key`, then append `key` to the tag.
    pub fn add_string(&mut self, key: &str, options: &HashOptions) -> &mut Self {
        for &byte in key.as_bytes() {
            self.mix(byte as u32);
        }
        self.string_id = options.joiner.join(&self.string_id, key);
        self
    }

    /// Fold `number + 48`, then append its decimal form to the tag.
    ///
    /// The `+ 48` offset keeps small numbers from colliding with the raw
    /// byte values that [`add_byte`](Self::add_byte) would fold.
    pub fn add_number(&mut self, number: u32, options: &HashOptions) -> &mut Self {
        self.mix(number.wrapping_add(48));
        self.string_id = options.joiner.join(&self.string_id, &number.to_string());
        self
    }

    /// [`add_number`](Self::add_number) for each element, in order.
    pub fn add_numbers(&mut self, numbers: &[u32], options: &HashOptions) -> &mut Self {
        for &number in numbers {
            self.add_number(number, options);
        }
        self
    }

    /// Produce the identifier. The builder is left untouched.
    ///
    /// `id` is the hash state plus one so that a zero state does not map
    /// to the zero "no element" sentinel.
    #[must_use]
    pub fn build(&self) -> HashElementId {
        let id = self.hash.wrapping_add(1);
        HashElementId {
            id,
            offset: 0,
            base_id: id,
            string_id: self.string_id.clone(),
        }
    }

    #[inline]
    fn mix(&mut self, value: u32) {
        let mut h = self.hash.wrapping_add(value);
        h = h.wrapping_add(h << 10);
        h ^= h >> 6;
        self.hash = h;
    }
}

/// Build the ID of a single string.
pub fn hash_string(key: &str, seed: u32, options: &HashOptions) -> HashElementId {
    HashBuilder::new(seed).add_string(key, options).build()
}

/// Build the ID of a single number.
pub fn hash_number(number: u32, seed: u32, options: &HashOptions) -> HashElementId {
    HashBuilder::new(seed).add_number(number, options).build()
}

/// Build the ID of a sequence of numbers.
pub fn hash_many_numbers(seed: u32, numbers: &[u32], options: &HashOptions) -> HashElementId {
    HashBuilder::new(seed).add_numbers(numbers, options).build()
}
