//! Replaceable entries.
//!
//! A cache model hands victim selection a slice of borrowed slots. Each slot
//! owns exactly one metadata instance for the policy in use and exposes it
//! read-only through [`ReplaceableEntry`].

/// A storage slot that carries replacement metadata.
///
/// # Examples
///
/// ```
/// use replacement_core::cache::ReplaceableEntry;
/// use replacement_core::cache::policies::LruReplData;
///
/// struct Way {
///     tag: u64,
///     repl: LruReplData,
/// }
///
/// impl ReplaceableEntry for Way {
///     type Data = LruReplData;
///
///     fn replacement_data(&self) -> &LruReplData {
///         &self.repl
///     }
/// }
///
/// let way = Way { tag: 0x40, repl: LruReplData::default() };
/// assert_eq!(way.tag, 0x40);
/// assert_eq!(way.replacement_data().last_touch_tick(), 0);
/// ```
pub trait ReplaceableEntry {
    /// Metadata type this entry carries.
    type Data;

    /// Returns the entry's replacement metadata.
    fn replacement_data(&self) -> &Self::Data;
}
