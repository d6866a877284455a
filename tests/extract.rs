//! End-to-end extraction tests over on-disk project fixtures.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use po_extract::error::ExtractError;
use po_extract::occurrence::LocalizableStringCollection;
use po_extract::po::write_pot;
use po_extract::processor::{ExtractionMode, ProjectProcessor};

fn write_file(root: &Path, relative: &str, code: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, code).unwrap();
}

fn scan(project: &Path, mode: ExtractionMode) -> Result<LocalizableStringCollection, ExtractError> {
    let processor = ProjectProcessor::new(project, mode);
    let mut strings = LocalizableStringCollection::new();
    processor.process(project, &mut strings)?;
    Ok(strings)
}

#[test]
fn scans_files_in_sorted_order_and_skips_build_output() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "Views/Zebra.cs",
        r#"public class Zebra { public string R() => T["From Zebra"]; }"#,
    );
    write_file(
        dir.path(),
        "Views/Apple.cs",
        r#"public class Apple { public string R() => T["From Apple"]; }"#,
    );
    write_file(
        dir.path(),
        "obj/Generated.cs",
        r#"public class Generated { public string R() => T["From generated code"]; }"#,
    );

    let strings = scan(dir.path(), ExtractionMode::Syntactic).unwrap();
    let ids: Vec<_> = strings.entries().map(|e| e.msg_id.as_str()).collect();

    assert_eq!(ids, vec!["From Apple", "From Zebra"]);
}

#[test]
fn rerunning_on_unchanged_input_yields_an_identical_collection() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "A.cs",
        r#"
            namespace App
            {
                public partial class Home
                {
                    public string R() => T["Shared"] + T["Only in A"];
                }
            }
        "#,
    );
    write_file(
        dir.path(),
        "B.cs",
        r#"
            namespace App
            {
                public partial class Home
                {
                    [Display(Name = "Save")]
                    public string Button { get; set; }

                    public string S() => T["Shared"];
                }
            }
        "#,
    );

    let first = scan(dir.path(), ExtractionMode::Syntactic).unwrap();
    let second = scan(dir.path(), ExtractionMode::Syntactic).unwrap();

    let entries_of = |c: &LocalizableStringCollection| {
        c.entries().cloned().collect::<Vec<_>>()
    };
    assert_eq!(entries_of(&first), entries_of(&second));

    let ids: Vec<_> = first.entries().map(|e| e.msg_id.as_str()).collect();
    assert_eq!(ids, vec!["Shared", "Only in A", "Save"]);

    let shared = first.entries().next().unwrap();
    assert_eq!(shared.locations.len(), 2);
    assert_eq!(shared.locations[0].file, "A.cs");
    assert_eq!(shared.locations[1].file, "B.cs");
}

#[test]
fn semantic_mode_extracts_only_verified_localizers() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "Index.cs",
        r#"
            using Microsoft.Extensions.Localization;

            namespace App.Pages
            {
                public class IndexModel
                {
                    private readonly IStringLocalizer<IndexModel> _localizer;
                    private readonly Dictionary<string, string> _cache;

                    public string Greeting() => _localizer["Hello"];
                    public string Cached() => _cache["Hello"];
                }
            }
        "#,
    );

    let strings = scan(dir.path(), ExtractionMode::Semantic).unwrap();

    assert_eq!(strings.len(), 1);
    let entry = strings.entries().next().unwrap();
    assert_eq!(entry.msg_id, "Hello");
    assert_eq!(entry.context.as_deref(), Some("App.Pages.IndexModel"));
    assert_eq!(entry.locations.len(), 1);
}

#[test]
fn malformed_localizer_call_aborts_the_scan() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "Bad.cs",
        r#"using Microsoft.Extensions.Localization;
public class Bad
{
    private IStringLocalizer<Bad> localizer;

    public string R(string key) => localizer[key];
}
"#,
    );

    let err = scan(dir.path(), ExtractionMode::Semantic).unwrap_err();
    match err {
        ExtractError::MalformedCall { file, line } => {
            assert_eq!(file, "Bad.cs");
            assert_eq!(line, 6);
        }
        other => panic!("expected MalformedCall, got {other:?}"),
    }
}

#[test]
fn populated_collection_round_trips_through_the_pot_writer() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "Cart.cs",
        r#"namespace App
{
    public class Cart
    {
        public string Count(int n) => T.Plural(n, "one item", "{0} items");
    }
}
"#,
    );

    let strings = scan(dir.path(), ExtractionMode::Syntactic).unwrap();
    let mut out = Vec::new();
    write_pot(&strings, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "#: Cart.cs:5\n\
         msgctxt \"App.Cart\"\n\
         msgid \"one item\"\n\
         msgid_plural \"{0} items\"\n\
         msgstr[0] \"\"\n\
         msgstr[1] \"\"\n\
         \n"
    );
}

#[test]
fn unreadable_project_root_is_a_fatal_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let processor = ProjectProcessor::new(&missing, ExtractionMode::Syntactic);
    let mut strings = LocalizableStringCollection::new();
    let err = processor.process(&missing, &mut strings).unwrap_err();

    assert!(matches!(err, ExtractError::Io { .. }));
}
