use std::fs;

use walkdir::WalkDir;

use tocify::toc;

/// Every file in the data folder must either yield headings or come back
/// with a non-empty error message
#[test]
fn smoke_test_data_files() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");
    let mut tested = 0;

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let data = fs::read_to_string(entry.path())
            .unwrap_or_else(|e| panic!("could not read the file {}: {}", entry.path().display(), e));
        let result = toc::generate(&data).unwrap();

        assert!(
            result.heading_count > 0 || !result.error_msg.is_empty(),
            "headings could not be extracted from the file: {}",
            entry.path().display()
        );
        tested += 1;
    }

    assert!(tested > 0, "no data files were tested");
}

#[test]
fn smoke_test_nested_article_round_trip() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/nested_article.html");
    let data = fs::read_to_string(path).unwrap();
    let result = toc::generate(&data).unwrap();

    // every TOC anchor points at an id that now exists in the updated text
    assert!(result.error_msg.is_empty());
    assert!(result.heading_count > 0);
    assert!(result.toc_list.contains("<a href='#getting-started'>Getting Started</a>"));
    assert!(result.updated_text.contains("<h2 id='getting-started'>Getting Started</h2>"));
}
