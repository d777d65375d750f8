// file: src/dispatch/options.rs
// version: 1.0.0
// guid: 1d3f5b7a-9e0c-4b2d-8f4a-6c8e0a2b4d6f

//! Ordered `--key=value` option sets

/// Value of one option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// `true` renders a bare `--key`, `false` omits the option
    Flag(bool),
    Text(String),
    /// Rendered comma-separated
    List(Vec<String>),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        OptionValue::List(value.into_iter().map(str::to_string).collect())
    }
}

macro_rules! numeric_option_value {
    ($($t:ty),*) => {
        $(impl From<$t> for OptionValue {
            fn from(value: $t) -> Self {
                OptionValue::Text(value.to_string())
            }
        })*
    };
}

numeric_option_value!(i32, i64, u16, u32, u64, usize);

/// Options in insertion order; setting a key again replaces it in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, Option<OptionValue>)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.put(key.into(), Some(value.into()));
        self
    }

    /// `None` keeps the key but renders nothing
    pub fn set_opt<V: Into<OptionValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        self.put(key.into(), value.map(Into::into));
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn put(&mut self, key: String, value: Option<OptionValue>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Argument tokens in insertion order
    pub fn to_args(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|(key, value)| match value {
                None | Some(OptionValue::Flag(false)) => None,
                Some(OptionValue::Flag(true)) => Some(format!("--{}", key)),
                Some(OptionValue::Text(text)) => Some(format!("--{}={}", key, text)),
                Some(OptionValue::List(items)) => Some(format!("--{}={}", key, items.join(","))),
            })
            .collect()
    }
}
