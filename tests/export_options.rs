// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic.
//
use std::path::{Path, PathBuf};
use parts_tracker::config::options::{ExportFormat, ExportOptions, ExportType, PageKind};
use parts_tracker::config::options::PageKind::{Overview, Parts};

#[test]
fn default_path_ext_changes_when_fully_default() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.export_type = ExportType::SingleFile;

    // Fresh default for Parts
    opts.set_default_dir_for_page(PageKind::Parts);
    let p_csv = opts.out_path();
    assert!(p_csv.to_string_lossy().ends_with(".csv"));

    // Switch format; still fully-default → extension should reflect new format
    opts.format = ExportFormat::Tsv;
    let p_tsv = opts.out_path();
    assert!(p_tsv.to_string_lossy().ends_with(".tsv"));
}

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn filename_preserved_on_dir_migration() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;
    export.export_type = ExportType::SingleFile;

    // Simulate the text box value before tab switch
    let prev_dir = ExportOptions::default_dir_for(Overview);
    let text_before: String = prev_dir.join("hello.csv").to_string_lossy().into_owned();

    // --- What tabs.rs does on tab switch ---
    // 1) detect directory shown in the text box
    let text_path = Path::new(&text_before);
    let dir_in_text = text_path.parent().unwrap_or(&prev_dir);

    // 2) if it equals the prev default dir, migrate DIR but keep the filename
    let new_default = ExportOptions::default_dir_for(Parts);
    let text_after = if norm(dir_in_text) == norm(&prev_dir) {
        export.set_default_dir_for_page(Parts); // update ExportOptions' dir
        let file_name = text_path.file_name().unwrap_or_default();
        ExportOptions::join_dir_and_filename(&new_default, file_name)
            .to_string_lossy().into_owned()
    } else {
        text_before.clone()
    };
    // --- end UI logic ---

    let expected = norm(&new_default.join("hello.csv"));
    assert_eq!(norm(Path::new(&text_after)), expected,
        "DIR should migrate and filename be preserved");
}

#[test]
fn custom_dir_is_not_migrated() {
    let prev_dir = PathBuf::from("my/custom/dir");
    let text_before: String = prev_dir.join("data.csv").to_string_lossy().into_owned();

    let text_path = Path::new(&text_before);
    let dir_in_text = text_path.parent().unwrap();

    // Custom dir differs from the Overview default → text stays put
    let overview_default = ExportOptions::default_dir_for(Overview);
    assert_ne!(norm(dir_in_text), norm(&overview_default));
}

#[test]
fn per_brand_path_is_directory_only() {
    let mut opts = ExportOptions::default();
    opts.export_type = ExportType::PerBrand;
    opts.set_path("out/parts");

    let p = opts.out_path();
    assert_eq!(norm(&p), norm(Path::new("out/parts")));
    assert!(p.extension().is_none());
}

#[test]
fn set_path_ignores_pasted_extension() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.export_type = ExportType::SingleFile;
    opts.set_path("somewhere/else/table.csv");

    let p = opts.out_path();
    assert!(p.to_string_lossy().ends_with("table.tsv"),
        "format controls the extension, got {}", p.display());
}

#[test]
fn is_fully_default_tracks_dir_and_stem() {
    let mut opts = ExportOptions::default();
    opts.set_default_dir_for_page(Parts);
    assert!(opts.is_fully_default_for(Parts));
    assert!(!opts.is_fully_default_for(Overview));

    opts.set_path("out/parts/renamed.csv");
    assert!(!opts.is_fully_default_for(Parts));
}
