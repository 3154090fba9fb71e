use super::*;

/// Plain nested form of a document: globals first, then one entry per section.
pub type Object = IndexMap<String, Property>;

#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Value(Value),
    Section(IndexMap<String, Value>),
}

impl Property {
    pub fn as_value(&self) -> Option<&Value> {
        if let Property::Value(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_section(&self) -> Option<&IndexMap<String, Value>> {
        if let Property::Section(keys) = self {
            Some(keys)
        } else {
            None
        }
    }
}

impl From<Value> for Property {
    fn from(value: Value) -> Self {
        Property::Value(value)
    }
}

impl From<IndexMap<String, Value>> for Property {
    fn from(keys: IndexMap<String, Value>) -> Self {
        Property::Section(keys)
    }
}

impl Document {
    /// Build a document from a plain nested structure.
    ///
    /// Scalar properties become global keys and nested maps become sections.
    /// All scalars are written before any section so the globals end up
    /// above the first header whatever the input order.
    ///
    /// # Errors
    /// Returns a type error for a key, section name or string that cannot be
    /// written as a single INI line (see [`Document::set`]).
    pub fn from_object(object: &Object, options: FormatOptions) -> Result<Self, IniError> {
        let mut doc = Self::with_format(options);

        for (key, value) in object.iter().filter_map(|(k, p)| Some((k, p.as_value()?))) {
            doc.set(key, value.clone())?;
        }

        for (name, keys) in object.iter().filter_map(|(k, p)| Some((k, p.as_section()?))) {
            doc.add_section(name)?;
            for (key, value) in keys {
                doc.set_in(name, key, value.clone())?;
            }
        }

        Ok(doc)
    }

    /// Render to a plain nested structure.
    ///
    /// Keys are kept in the order they were first defined. Re-opened sections
    /// are merged, the latest definition of a key winning.
    pub fn to_object(&self) -> Object {
        let mut out = Object::new();

        for (key, id) in &self.globals {
            if let Some(entry) = self.entry(*id) {
                out.insert(key.clone(), Property::Value(entry.value.clone()));
            }
        }

        for name in self.sections.keys() {
            let mut keys = IndexMap::new();
            for block in self.section_blocks(name) {
                for (key, id) in &block.keys {
                    if let Some(entry) = self.entry(*id) {
                        keys.insert(key.clone(), entry.value.clone());
                    }
                }
            }
            out.insert(name.clone(), Property::Section(keys));
        }

        out
    }
}
