use gridlink_core::{err, stmt::Value, Result};

use indexmap::IndexMap;

/// A named instance of a wire map: scalar attributes plus named lists of
/// child documents.
///
/// Documents are created when decoding a wire buffer or when building an
/// insert payload, mutated in place during update merges, and dropped with
/// the statement that produced them. A parent exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    properties: IndexMap<String, Value>,
    children: IndexMap<String, Vec<Document>>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &IndexMap<String, Value> {
        &self.properties
    }

    /// Set a scalar attribute, replacing any previous value.
    pub fn set(&mut self, attribute: impl Into<String>, value: Value) {
        self.properties.insert(attribute.into(), value);
    }

    /// Append one element to an array attribute.
    pub fn push(&mut self, attribute: &str, value: Value) {
        match self.properties.get_mut(attribute) {
            Some(Value::List(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::List(vec![first, value]);
            }
            None => {
                self.properties
                    .insert(attribute.to_string(), Value::List(vec![value]));
            }
        }
    }

    /// Look up a scalar attribute. Absent attributes read as null.
    pub fn property(&self, attribute: &str) -> &Value {
        self.properties.get(attribute).unwrap_or(&Value::Null)
    }

    pub fn has_property(&self, attribute: &str) -> bool {
        self.properties.contains_key(attribute)
    }

    /// The first child document under `attribute`, created on demand.
    pub fn ensure_child(&mut self, attribute: &str) -> &mut Document {
        let children = self.children.entry(attribute.to_string()).or_default();
        if children.is_empty() {
            children.push(Document::new(attribute));
        }
        &mut children[0]
    }

    /// Set a value at a `/`-separated attribute path, creating intermediate
    /// child documents as needed.
    pub fn set_at(&mut self, path: &str, value: Value) {
        match path.split_once('/') {
            None => self.set(path, value),
            Some((group, rest)) => self.ensure_child(group).set_at(rest, value),
        }
    }

    pub fn add_child(&mut self, attribute: impl Into<String>, child: Document) {
        self.children.entry(attribute.into()).or_default().push(child);
    }

    pub fn child_docs(&self, attribute: &str) -> &[Document] {
        self.children
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn child_docs_mut(&mut self, attribute: &str) -> Option<&mut Vec<Document>> {
        self.children.get_mut(attribute)
    }

    pub fn children(&self) -> &IndexMap<String, Vec<Document>> {
        &self.children
    }

    /// Look up a value by `/`-separated attribute path, descending into the
    /// first child document at each group step.
    pub fn value_at(&self, path: &str) -> Result<&Value> {
        match path.split_once('/') {
            None => Ok(self.property(path)),
            Some((group, rest)) => match self.children.get(group) {
                Some(docs) if !docs.is_empty() => docs[0].value_at(rest),
                _ => Err(err!("document `{}` has no child group `{group}`", self.name)),
            },
        }
    }

    /// Lenient path lookup: an absent group or attribute reads as null.
    fn lookup(&self, path: &str) -> &Value {
        match path.split_once('/') {
            None => self.property(path),
            Some((group, rest)) => match self.children.get(group) {
                Some(docs) if !docs.is_empty() => docs[0].lookup(rest),
                _ => &Value::Null,
            },
        }
    }

    /// Project the document onto rows along the given attribute paths.
    ///
    /// Paths rooted at the document read straight out of the attribute map.
    /// Paths crossing into a child group expand to one row per child
    /// document, with root-level values repeated on every row; a group with
    /// no children therefore produces no rows at all (inner-join shape).
    /// Expansion over several distinct groups is a cross product, matching
    /// how the relational layer joins a parent to its folded children.
    pub fn flatten(&self, paths: &[String]) -> Result<Vec<Vec<Value>>> {
        let mut groups: Vec<&str> = vec![];
        for path in paths {
            if let Some((group, _)) = path.split_once('/') {
                if !groups.contains(&group) {
                    groups.push(group);
                }
            }
        }

        if groups.is_empty() {
            let row = paths
                .iter()
                .map(|path| self.property(path).clone())
                .collect();
            return Ok(vec![row]);
        }

        let mut rows = vec![];
        let mut combination: Vec<(&str, &Document)> = vec![];
        self.expand(&groups, paths, &mut combination, &mut rows)?;
        Ok(rows)
    }

    fn expand<'a>(
        &'a self,
        groups: &[&'a str],
        paths: &[String],
        combination: &mut Vec<(&'a str, &'a Document)>,
        rows: &mut Vec<Vec<Value>>,
    ) -> Result<()> {
        let [group, remaining @ ..] = groups else {
            let mut row = Vec::with_capacity(paths.len());
            for path in paths {
                match path.split_once('/') {
                    None => row.push(self.property(path).clone()),
                    Some((group, rest)) => {
                        let doc = combination
                            .iter()
                            .find(|(name, _)| name == &group)
                            .map(|(_, doc)| *doc)
                            .ok_or_else(|| {
                                err!("no child group `{group}` for projected path `{path}`")
                            })?;
                        row.push(doc.lookup(rest).clone());
                    }
                }
            }
            rows.push(row);
            return Ok(());
        };

        for child in self.child_docs(group) {
            combination.push((group, child));
            self.expand(remaining, paths, combination, rows)?;
            combination.pop();
        }

        Ok(())
    }
}
