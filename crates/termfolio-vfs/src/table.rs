//! Insertion-ordered table of virtual files.

use std::borrow::Cow;

/// A named constant document exposed as if it were a readable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    name: Cow<'static, str>,
    content: Cow<'static, str>,
}

impl VirtualFile {
    pub fn new(name: impl Into<Cow<'static, str>>, content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The exact-cased file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The listing tag for this file's extension.
    pub fn tag(&self) -> &'static str {
        file_tag(&self.name)
    }
}

/// Map a file name's extension to its listing tag.
///
/// Tags are padded so that `[TXT] a` and `[MD]  b` line up in `ls` output.
pub fn file_tag(name: &str) -> &'static str {
    let ext = match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return "[FILE]",
    };
    match ext.as_str() {
        "txt" => "[TXT]",
        "md" => "[MD] ",
        "js" | "ts" | "tsx" => "[JS] ",
        "json" => "[JSON]",
        "css" => "[CSS]",
        "html" => "[HTML]",
        _ => "[FILE]",
    }
}

/// Virtual files in a stable (insertion) order.
///
/// Names are unique ignoring ASCII case, since every lookup is
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct FileTable {
    files: Vec<VirtualFile>,
}

impl FileTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a file. A file whose name matches an existing one (ignoring case)
    /// replaces it in place, keeping its listing position.
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        content: impl Into<Cow<'static, str>>,
    ) {
        let file = VirtualFile::new(name, content);
        match self.position(file.name()) {
            Some(i) => self.files[i] = file,
            None => self.files.push(file),
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&VirtualFile> {
        self.position(name).map(|i| &self.files[i])
    }

    /// Content of the file named `name` (case-insensitive).
    pub fn read(&self, name: &str) -> Option<&str> {
        self.get(name).map(VirtualFile::content)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// File names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(VirtualFile::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.files
            .iter()
            .position(|f| f.name().eq_ignore_ascii_case(name))
    }
}
