//! Symbol model filled in by the parser.

/// A constant or enumerator: its protocol name and decimal value.
///
/// `value` is always the decimal form of an `i64`; the accumulator in
/// `xdr_parse` is the only producer and it never commits anything else.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ConstItem {
    pub name: String,
    pub value: String,
}

impl ConstItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ConstItem {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Everything the generator extracts from a protocol file.
///
/// Both lists keep parse order; that order is the emission order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolModel {
    pub enums: Vec<ConstItem>,
    pub consts: Vec<ConstItem>,
}

impl SymbolModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries across both lists.
    pub fn len(&self) -> usize {
        self.enums.len() + self.consts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.consts.is_empty()
    }

    /// Rewrite every entry name, enums first, then consts.
    pub fn rename_all(&mut self, mut rename: impl FnMut(&str) -> String) {
        for item in self.enums.iter_mut().chain(self.consts.iter_mut()) {
            item.name = rename(&item.name);
        }
    }
}
