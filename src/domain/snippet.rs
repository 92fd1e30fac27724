#[derive(Debug, Clone)]
pub struct SnippetFile {
    pub filename: String,
    pub content: String,
}

/// Files are kept in the order the store listed them.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub id: String,
    pub files: Vec<SnippetFile>,
}

impl Snippet {
    pub fn first_file(&self) -> Option<&SnippetFile> {
        self.files.first()
    }
}
