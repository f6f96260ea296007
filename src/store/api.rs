use std::collections::HashMap;

/// One parsed catalog row, before store construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRow<T> {
    /// The member's stable identifier.
    pub doc_id: String,
    /// Full namespace of the declaring type.
    pub namespace_name: String,
    /// Simple name of the declaring type.
    pub type_name: String,
    /// Display signature of the member.
    pub signature: String,
    /// The document's data columns, parsed.
    pub data: T,
}

/// A stored catalog entry: the DocId plus the document's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEntry<T> {
    doc_id: String,
    data: T,
}

impl<T> ApiEntry<T> {
    /// The entry's stable identifier.
    #[must_use]
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// The entry's data.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }
}

/// Fast lookup over a parsed catalog document.
///
/// Entries are bucketed under a coarse (namespace, type, member) key and
/// disambiguated inside the bucket by exact DocId. The coarse key is
/// deliberately lossy so that callers resolving from symbol information can
/// build it cheaply: only the last namespace segment, and the member name
/// with any signature suffix stripped.
#[derive(Debug)]
pub struct ApiStore<T> {
    entries: HashMap<(String, String, String), HashMap<String, ApiEntry<T>>>,
    len: usize,
}

impl<T> ApiStore<T> {
    /// Builds a store from parsed rows.
    pub fn create(rows: impl IntoIterator<Item = ApiRow<T>>) -> Self {
        let mut entries: HashMap<(String, String, String), HashMap<String, ApiEntry<T>>> =
            HashMap::new();
        let mut len = 0;

        for row in rows {
            let key = (
                last_segment(&row.namespace_name).to_string(),
                row.type_name,
                member_name(&row.signature).to_string(),
            );
            let bucket = entries.entry(key).or_default();
            if bucket
                .insert(
                    row.doc_id.clone(),
                    ApiEntry {
                        doc_id: row.doc_id,
                        data: row.data,
                    },
                )
                .is_none()
            {
                len += 1;
            }
        }

        ApiStore { entries, len }
    }

    /// Looks an entry up by its identity columns and exact DocId.
    ///
    /// `namespace_name` may be the full dotted namespace and `signature` the
    /// full display signature; both are reduced to the coarse key.
    #[must_use]
    pub fn lookup(
        &self,
        namespace_name: &str,
        type_name: &str,
        signature: &str,
        doc_id: &str,
    ) -> Option<&ApiEntry<T>> {
        let key = (
            last_segment(namespace_name).to_string(),
            type_name.to_string(),
            member_name(signature).to_string(),
        );
        self.entries.get(&key)?.get(doc_id)
    }

    /// Finds an entry by DocId alone, scanning the whole store.
    #[must_use]
    pub fn find_doc_id(&self, doc_id: &str) -> Option<&ApiEntry<T>> {
        self.entries
            .values()
            .find_map(|bucket| bucket.get(doc_id))
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &ApiEntry<T>> {
        self.entries.values().flat_map(HashMap::values)
    }

    /// Number of entries in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn last_segment(dotted_name: &str) -> &str {
    match dotted_name.rfind('.') {
        Some(dot) => &dotted_name[dot + 1..],
        None => dotted_name,
    }
}

/// Reduces a display signature to the bare member name: everything from the
/// first `<` (generic arity) or `(` (parameter list) on is dropped.
fn member_name(signature: &str) -> &str {
    let end = signature
        .find('<')
        .into_iter()
        .chain(signature.find('('))
        .min()
        .unwrap_or(signature.len());
    &signature[..end]
}
