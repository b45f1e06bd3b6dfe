//! Named, heterogeneously typed values attached to nodes, edges and graphs.
//!
//! The analysis algorithms never look at attributes; they exist for callers
//! and for the exporters in [`crate::dot`] and [`crate::json`].

use std::collections::BTreeMap;

use crate::error::AttributeError;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<AttrValue>),
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    /// A short name for the value's type, used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Bool(_) => "bool",
            AttrValue::Int(_) => "int",
            AttrValue::Float(_) => "float",
            AttrValue::Str(_) => "string",
            AttrValue::List(_) => "list",
            AttrValue::Map(_) => "map",
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(value: Vec<AttrValue>) -> Self {
        AttrValue::List(value)
    }
}

impl From<BTreeMap<String, AttrValue>> for AttrValue {
    fn from(value: BTreeMap<String, AttrValue>) -> Self {
        AttrValue::Map(value)
    }
}

/// Types that can be extracted from an [`AttrValue`] by the typed accessors.
pub trait FromAttr: Sized {
    /// The name reported as `expected` in a type mismatch.
    const TYPE_NAME: &'static str;

    fn from_attr(value: &AttrValue) -> Option<Self>;
}

macro_rules! impl_from_attr {
    ($ty:ty, $name:literal, $variant:ident) => {
        impl FromAttr for $ty {
            const TYPE_NAME: &'static str = $name;

            fn from_attr(value: &AttrValue) -> Option<Self> {
                match value {
                    AttrValue::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }
    };
}

impl_from_attr!(bool, "bool", Bool);
impl_from_attr!(i64, "int", Int);
impl_from_attr!(f64, "float", Float);
impl_from_attr!(String, "string", Str);
impl_from_attr!(Vec<AttrValue>, "list", List);
impl_from_attr!(BTreeMap<String, AttrValue>, "map", Map);

/// An ordered name → value bag.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct Attributes(BTreeMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the named value converted to `T`.
    pub fn get<T: FromAttr>(&self, name: &str) -> Result<T, AttributeError> {
        let value = self.0.get(name).ok_or_else(|| AttributeError::NotFound {
            name: name.to_string(),
        })?;
        T::from_attr(value).ok_or_else(|| AttributeError::TypeMismatch {
            name: name.to_string(),
            expected: T::TYPE_NAME,
            found: value.type_name(),
        })
    }

    /// Runs `f` on the named value converted to `T`. `f` is not called when
    /// the lookup fails.
    pub fn with<T: FromAttr, R>(
        &self,
        name: &str,
        f: impl FnOnce(T) -> R,
    ) -> Result<R, AttributeError> {
        self.get(name).map(f)
    }

    /// Returns the raw stored value.
    pub fn value(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Stores a value, returning the one it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
