use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file: FileSpec) {
    if let Some(parent) = file.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }

    std::fs::write(&file.path, &file.content).expect("Failed to write file");
}

/// Random newline-terminated lines of lorem words.
pub fn generated_lines(count: usize) -> String {
    use fake::Fake;
    use fake::faker::lorem::en::Words;

    (0..count)
        .map(|_| Words(3..8).fake::<Vec<String>>().join(" ") + "\n")
        .collect()
}
