use std::{
    collections::{hash_map, HashMap},
    convert::Infallible,
    fmt,
    marker::PhantomData,
    str::FromStr,
};

use smol_str::SmolStr;

use crate::{traverse, Error, MessageInstance};

/// The reserved segment that matches any field name or map key in a [`WildcardFieldMask`].
pub const WILDCARD: &str = "*";

/// A tree structure that represents a set of nested fields.
///
/// This is based on the `FieldMaskTree` that is found in the C++ & Java protobuf libraries. A field mask contains a series of paths to
/// attributes such as `["foo.a", "foo.b", "bar"]`. Internally that would be represented as a tree like below:
/// ```text
///     foo    bar
///    /   \
///   a     b
/// ```
/// A node without children is a leaf, it matches the whole field. A node with children matches only the
/// listed sub-fields, elements of a repeated field, or map entries.
///
/// The type parameter selects how keys are resolved while walking a message: [`Exact`] only matches
/// keys verbatim, while [`Wildcard`] falls back to the `*` segment. Masks are immutable once built and can be
/// shared between any number of [`FieldMask::filter`] and [`FieldMask::prune`] calls.
pub struct FieldMask<R = Exact> {
    children: HashMap<SmolStr, FieldMask<R>>,
    resolution: PhantomData<fn() -> R>,
}

/// A [`FieldMask`] that understands `*` segments.
pub type WildcardFieldMask = FieldMask<Wildcard>;

/// Decides which subtree of a [`FieldMask`] applies to a field name or map key.
pub trait KeyResolution: Sized {
    fn resolve<'m>(mask: &'m FieldMask<Self>, key: &str) -> Option<&'m FieldMask<Self>>;
}

/// Keys match verbatim.
#[derive(Debug, Clone, Copy)]
pub enum Exact {}

/// Keys match verbatim first, then against the `*` segment.
#[derive(Debug, Clone, Copy)]
pub enum Wildcard {}

impl KeyResolution for Exact {
    #[inline]
    fn resolve<'m>(mask: &'m FieldMask<Self>, key: &str) -> Option<&'m FieldMask<Self>> {
        mask.children.get(key)
    }
}

impl KeyResolution for Wildcard {
    #[inline]
    fn resolve<'m>(mask: &'m FieldMask<Self>, key: &str) -> Option<&'m FieldMask<Self>> {
        mask.children
            .get(key)
            .or_else(|| mask.children.get(WILDCARD))
    }
}

impl FieldMask {
    /// Builds an exact mask from a list of paths. See [`FieldMask::from_paths`].
    pub fn new<I, S>(paths: I) -> FieldMask
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FieldMask::from_paths(paths)
    }

    /// Builds an exact mask, failing on malformed paths. See [`FieldMask::try_from_paths`].
    pub fn try_new<I, S>(paths: I) -> Result<FieldMask, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FieldMask::try_from_paths(paths)
    }
}

impl<R> FieldMask<R> {
    /// Builds a mask from a list of paths.
    ///
    /// Paths are split on `.`. Empty segments, from leading, trailing or doubled delimiters, are
    /// skipped, so `"..."` contributes nothing at all. The result doesn't depend on the order of the paths.
    ///
    /// ```
    /// use fieldmask::WildcardFieldMask;
    ///
    /// let mask = WildcardFieldMask::from_paths(["attributes.*.tags", "user..name"]);
    /// assert_eq!(mask.paths(), vec!["attributes.*.tags", "user.name"]);
    /// ```
    pub fn from_paths<I, S>(paths: I) -> FieldMask<R>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mask = FieldMask::default();
        for path in paths {
            mask.insert(path.as_ref().split('.').filter(|s| !s.is_empty()));
        }
        mask
    }

    /// Builds a mask, rejecting empty paths and paths with empty segments instead of skipping them.
    pub fn try_from_paths<I, S>(paths: I) -> Result<FieldMask<R>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mask = FieldMask::default();
        for path in paths {
            let path = path.as_ref();
            if path.is_empty() {
                return Err(Error::EmptyPath);
            }
            if let Some(position) = path.split('.').position(str::is_empty) {
                return Err(Error::EmptySegment {
                    path: path.into(),
                    position,
                });
            }
            mask.insert(path.split('.'));
        }
        Ok(mask)
    }

    fn insert<'a>(&mut self, segments: impl Iterator<Item = &'a str>) {
        let mut node = self;
        for segment in segments {
            node = node.children.entry(SmolStr::new(segment)).or_default();
        }
    }

    /// Returns true when the mask has no paths. For a nested node this means it is a leaf.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if this node matches its whole field.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns a field mask for a specific field, without wildcard fallback.
    pub fn child(&self, path: &str) -> Option<&FieldMask<R>> {
        self.children.get(path)
    }

    /// Iterates over the direct children in arbitrary order.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            inner: self.children.iter(),
        }
    }

    /// Returns the normalized paths of every leaf, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths(&mut String::new(), &mut paths);
        paths.sort();
        paths
    }

    fn collect_paths(&self, prefix: &mut String, paths: &mut Vec<String>) {
        for (key, child) in &self.children {
            let len = prefix.len();
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(key);
            if child.is_leaf() {
                paths.push(prefix.clone());
            } else {
                child.collect_paths(prefix, paths);
            }
            prefix.truncate(len);
        }
    }
}

impl<R: KeyResolution> FieldMask<R> {
    /// Returns the subtree that applies to `key`, using this mask's key resolution.
    pub fn resolve(&self, key: &str) -> Option<&FieldMask<R>> {
        R::resolve(self, key)
    }

    /// Keeps the fields listed in the mask and clears all the rest. An empty mask keeps everything.
    pub fn filter<M: MessageInstance + ?Sized>(&self, msg: &mut M) {
        traverse::apply(self, msg.as_message_mut(), traverse::Mode::Filter)
    }

    /// Clears the fields listed in the mask, keeping all the rest. An empty mask clears nothing.
    pub fn prune<M: MessageInstance + ?Sized>(&self, msg: &mut M) {
        traverse::apply(self, msg.as_message_mut(), traverse::Mode::Prune)
    }
}

impl<R> Default for FieldMask<R> {
    fn default() -> Self {
        FieldMask {
            children: HashMap::new(),
            resolution: PhantomData,
        }
    }
}

impl<R> Clone for FieldMask<R> {
    fn clone(&self) -> Self {
        FieldMask {
            children: self.children.clone(),
            resolution: PhantomData,
        }
    }
}

impl<R> PartialEq for FieldMask<R> {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl<R> Eq for FieldMask<R> {}

impl<R> fmt::Debug for FieldMask<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.children.iter()).finish()
    }
}

/// Formats the mask as comma separated paths, the JSON form of `google.protobuf.FieldMask`.
impl<R> fmt::Display for FieldMask<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paths().join(","))
    }
}

/// Parses comma separated paths. Like [`FieldMask::from_paths`] this never fails.
impl<R> FromStr for FieldMask<R> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FieldMask::from_paths(s.split(',').map(str::trim)))
    }
}

impl<R, S: AsRef<str>> FromIterator<S> for FieldMask<R> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FieldMask::from_paths(iter)
    }
}

impl<'a, R> IntoIterator for &'a FieldMask<R> {
    type Item = (&'a SmolStr, &'a FieldMask<R>);
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the children of a [`FieldMask`].
pub struct Iter<'a, R> {
    inner: hash_map::Iter<'a, SmolStr, FieldMask<R>>,
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = (&'a SmolStr, &'a FieldMask<R>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
