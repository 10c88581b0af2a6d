//! Tests for XML translation sources: inline documents, files, directories
//! and embedded resources.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use lingo::loader::load_xml;
use lingo::{
    EmbeddedResources, LoadError, LoadSession, Lingo, LingoOptions, MissingTranslationMode,
    TextFormat,
};
use tempfile::TempDir;

fn strict_options() -> LingoOptions {
    LingoOptions::builder()
        .missing_translation_mode(MissingTranslationMode::AsError)
        .build()
}

fn load_inline(xml: &'static str) -> Lingo {
    let mut options = strict_options();
    options.add_loader(move |session: &mut LoadSession<'_>| -> Result<(), LoadError> {
        load_xml(session, Path::new("inline.xml"), xml).map(|_| ())
    });
    let lingo = Lingo::new(options);
    lingo.load().unwrap();
    lingo
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// =========================================================================
// Document Structure
// =========================================================================

#[test]
fn nested_elements_form_dotted_keys() {
    let lingo = load_inline(
        r#"<Translations Language="fr">
             <Greeting>Bonjour</Greeting>
             <Orders>
               <Title>Commandes</Title>
               <Fields><Total>Montant</Total></Fields>
             </Orders>
           </Translations>"#,
    );

    let translator = lingo.get_translator(Some("fr"), None);
    assert_eq!(translator.translate("Greeting").unwrap(), "Bonjour");
    assert_eq!(translator.translate("Orders.Title").unwrap(), "Commandes");
    assert_eq!(translator.translate("Orders.Fields.Total").unwrap(), "Montant");
    assert_eq!(translator.dictionary().len(), 3);
}

#[test]
fn translations_elements_anywhere_in_document() {
    let lingo = load_inline(
        r#"<Root>
             <Translations Language="en"><Hi>Hello</Hi></Translations>
             <Group>
               <Translations Language="de"><Hi>Hallo</Hi></Translations>
             </Group>
           </Root>"#,
    );

    assert_eq!(lingo.get_translator(Some("en"), None).text("Hi"), "Hello");
    assert_eq!(lingo.get_translator(Some("de"), None).text("Hi"), "Hallo");
}

#[test]
fn translations_without_language_are_skipped() {
    let lingo = load_inline(
        r#"<Root>
             <Translations><Hi>Nobody</Hi></Translations>
             <Translations Language="en"><Hi>Hello</Hi></Translations>
           </Root>"#,
    );

    assert_eq!(lingo.languages(), vec!["en".to_string()]);
}

#[test]
fn element_with_text_and_children_defines_both_keys() {
    let lingo = load_inline(
        r#"<Translations Language="en">
             <Orders>Orders<Title>Your orders</Title></Orders>
           </Translations>"#,
    );

    let translator = lingo.get_translator(Some("en"), None);
    assert_eq!(translator.translate("Orders").unwrap(), "Orders");
    assert_eq!(translator.translate("Orders.Title").unwrap(), "Your orders");
}

#[test]
fn markup_attribute_sets_entry_format() {
    let lingo = load_inline(
        r#"<Translations Language="en">
             <Intro Markup="Paragraphed">First&#10;&#10;Second</Intro>
             <Note Markup="true">&lt;b&gt;Note&lt;/b&gt;</Note>
             <Plain>Text</Plain>
           </Translations>"#,
    );

    let dictionary = lingo.get_dictionary(Some("en"));
    assert_eq!(
        dictionary.get("Intro").map(|e| e.format),
        Some(TextFormat::ParagraphedMarkup)
    );
    assert_eq!(dictionary.get("Intro").unwrap().value, "First\n\nSecond");
    assert_eq!(dictionary.get("Note").map(|e| e.format), Some(TextFormat::Markup));
    assert_eq!(dictionary.get("Note").unwrap().value, "<b>Note</b>");
    assert_eq!(dictionary.get("Plain").map(|e| e.format), Some(TextFormat::Plain));
}

#[test]
fn empty_element_does_not_replace_existing_value() {
    let lingo = load_inline(
        r#"<Root>
             <Translations Language="en"><Hi>Hello</Hi><Blank/></Translations>
             <Translations Language="en"><Hi/><Blank>Filled</Blank></Translations>
           </Root>"#,
    );

    let translator = lingo.get_translator(Some("en"), None);
    assert_eq!(translator.translate("Hi").unwrap(), "Hello");
    assert_eq!(translator.translate("Blank").unwrap(), "Filled");
}

#[test]
fn later_text_replaces_earlier_text() {
    let lingo = load_inline(
        r#"<Root>
             <Translations Language="en"><Hi>Hello</Hi></Translations>
             <Translations Language="EN"><Hi>Hey</Hi></Translations>
           </Root>"#,
    );

    assert_eq!(lingo.get_translator(Some("en"), None).text("Hi"), "Hey");
}

#[test]
fn empty_element_yields_empty_translation() {
    let lingo = load_inline(r#"<Translations Language="en"><Hi /></Translations>"#);

    let translator = lingo.get_translator(Some("en"), None);
    assert_eq!(translator.translate("Hi").unwrap(), "");
}

#[test]
fn comment_only_element_yields_no_translation() {
    let lingo = load_inline(
        r#"<Translations Language="en"><Hi><!-- todo --></Hi><Bye> </Bye></Translations>"#,
    );

    let translator = lingo.get_translator(Some("en"), None);
    assert!(translator.translate("Hi").is_err());
    assert_eq!(translator.translate("Bye").unwrap(), "");
}

// =========================================================================
// Files and Directories
// =========================================================================

#[test]
fn load_single_file() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "fr.xml",
        r#"<?xml version="1.0"?><Translations Language="fr"><Greeting>Bonjour</Greeting></Translations>"#,
    );

    let mut options = strict_options();
    options.add_translation_xml(dir.path().join("fr.xml"), true);
    let lingo = Lingo::new(options);
    lingo.load().unwrap();

    assert_eq!(lingo.get_translator(Some("fr"), None).text("Greeting"), "Bonjour");
}

#[test]
fn load_directory_recursively_in_path_order() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "a.xml",
        r#"<Translations Language="en"><Hi>from a</Hi><OnlyA>a</OnlyA></Translations>"#,
    );
    write(
        dir.path(),
        "nested/b.XML",
        r#"<Translations Language="en"><Hi>from b</Hi></Translations>"#,
    );
    write(dir.path(), "notes.txt", "<Translations Language=\"en\"><Hi>txt</Hi></Translations>");
    write(dir.path(), ".hidden/c.xml", r#"<Translations Language="de"><Hi>Hallo</Hi></Translations>"#);

    let mut options = strict_options();
    options.add_translation_xml(dir.path(), true);
    let lingo = Lingo::new(options);
    lingo.load().unwrap();

    let translator = lingo.get_translator(Some("en"), None);
    assert_eq!(translator.text("Hi"), "from b");
    assert_eq!(translator.text("OnlyA"), "a");
    assert_eq!(lingo.get_translator(Some("de"), None).text("Hi"), "Hallo");
}

fn load_bytes(bytes: &[u8]) -> Result<Lingo, LoadError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strings.xml");
    fs::write(&path, bytes).unwrap();

    let mut options = strict_options();
    options.add_translation_xml(&path, true);
    let lingo = Lingo::new(options);
    lingo.load()?;
    Ok(lingo)
}

#[test]
fn utf16_file_with_byte_order_mark() {
    let xml = r#"<?xml version="1.0" encoding="utf-16"?><Translations Language="fr"><Cafe>Café</Cafe></Translations>"#;
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(xml.encode_utf16().flat_map(u16::to_le_bytes));

    let lingo = load_bytes(&bytes).unwrap();
    assert_eq!(lingo.get_translator(Some("fr"), None).text("Cafe"), "Café");
}

#[test]
fn utf8_file_with_byte_order_mark() {
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice("<Translations Language=\"fr\"><Cafe>Café</Cafe></Translations>".as_bytes());

    let lingo = load_bytes(&bytes).unwrap();
    assert_eq!(lingo.get_translator(Some("fr"), None).text("Cafe"), "Café");
}

#[test]
fn latin1_file_from_encoding_declaration() {
    let bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\
<Translations Language=\"fr\"><Cafe>Caf\xE9</Cafe></Translations>";

    let lingo = load_bytes(bytes).unwrap();
    assert_eq!(lingo.get_translator(Some("fr"), None).text("Cafe"), "Café");
}

#[test]
fn invalid_utf8_without_declaration_is_an_io_error() {
    let err = load_bytes(b"<Translations Language=\"fr\"><Cafe>Caf\xE9</Cafe></Translations>")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "{err:?}");
}

#[test]
fn reload_picks_up_changed_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "en.xml", r#"<Translations Language="en"><Hi>One</Hi></Translations>"#);

    let mut options = strict_options();
    options.add_translation_xml(dir.path(), true);
    let lingo = Lingo::new(options);
    lingo.load().unwrap();
    assert_eq!(lingo.get_translator(Some("en"), None).text("Hi"), "One");

    write(dir.path(), "en.xml", r#"<Translations Language="en"><Hi>Two</Hi></Translations>"#);
    lingo.load().unwrap();
    assert_eq!(lingo.get_translator(Some("en"), None).text("Hi"), "Two");
}

#[test]
fn missing_path_is_an_error_when_required() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let mut options = strict_options();
    options.add_translation_xml(&missing, true);
    let lingo = Lingo::new(options);

    let err = lingo.load().unwrap_err();
    assert!(matches!(&err, LoadError::NotFound { path } if *path == missing));
    assert!(err.to_string().starts_with("could not find path"));
}

#[test]
fn missing_path_is_skipped_when_optional() {
    let dir = TempDir::new().unwrap();

    let mut options = strict_options();
    options.add_translation_xml(dir.path().join("missing"), false);
    let lingo = Lingo::new(options);

    lingo.load().unwrap();
    assert!(lingo.snapshot().is_empty());
}

#[test]
fn malformed_file_reports_location() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "broken.xml",
        "<Translations Language=\"en\">\n  <Hi>Hello</Greeting>\n</Translations>",
    );

    let mut options = strict_options();
    options.add_translation_xml(dir.path(), true);
    let lingo = Lingo::new(options);

    match lingo.load().unwrap_err() {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path, dir.path().join("broken.xml"));
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

// =========================================================================
// Embedded Resources
// =========================================================================

fn resources() -> Arc<EmbeddedResources> {
    Arc::new(
        EmbeddedResources::new("MyApp")
            .with(
                "MyApp.Translations.en.xml",
                r#"<Translations Language="en"><Hi>Hello</Hi></Translations>"#,
            )
            .with(
                "MyApp.Translations.Sub.fr.XML",
                r#"<Translations Language="fr"><Hi>Bonjour</Hi></Translations>"#,
            )
            .with(
                "MyApp.Other.de.xml",
                r#"<Translations Language="de"><Hi>Hallo</Hi></Translations>"#,
            )
            .with("MyApp.Translations.readme.txt", "not xml"),
    )
}

#[test]
fn resource_pattern_resolution() {
    let resources = resources();
    assert_eq!(resources.resolve_pattern("/Translations/"), "MyApp.Translations.");
    assert_eq!(resources.resolve_pattern(".Translations"), "MyApp.Translations.");
    assert_eq!(resources.resolve_pattern("Other.App/en.xml"), "Other.App.en.xml");
}

#[test]
fn load_resources_below_namespace_directory() {
    let mut options = strict_options();
    options.add_translation_resources(resources(), "/translations/", true);
    let lingo = Lingo::new(options);
    lingo.load().unwrap();

    assert_eq!(lingo.languages(), vec!["en".to_string(), "fr".to_string()]);
}

#[test]
fn load_single_resource_by_full_id() {
    let mut options = strict_options();
    options.add_translation_resources(resources(), "MyApp/Other/de.xml", true);
    let lingo = Lingo::new(options);
    lingo.load().unwrap();

    assert_eq!(lingo.get_translator(Some("de"), None).text("Hi"), "Hallo");
    assert_eq!(lingo.languages(), vec!["de".to_string()]);
}

#[test]
fn unmatched_resource_pattern() {
    let mut required = strict_options();
    required.add_translation_resources(resources(), "/Missing/", true);
    let err = Lingo::new(required).load().unwrap_err();
    assert_eq!(err.to_string(), "could not find resource 'MyApp.Missing.'");

    let mut optional = strict_options();
    optional.add_translation_resources(resources(), "/Missing/", false);
    let lingo = Lingo::new(optional);
    lingo.load().unwrap();
    assert!(lingo.snapshot().is_empty());
}

// =========================================================================
// Loaded Set
// =========================================================================

#[test]
fn loaded_set_dump() {
    let lingo = load_inline(
        r#"<?xml version="1.0" encoding="utf-8"?>
           <Root>
             <Translations Language="en">
               <Orders>
                 <Title>Your orders</Title>
                 <Empty/>
                 <Help Markup="Paragraphed">Read this.</Help>
               </Orders>
             </Translations>
             <Translations Language="fr">
               <Orders><Title>Vos commandes</Title></Orders>
             </Translations>
           </Root>"#,
    );

    let mut dump = String::new();
    for dictionary in lingo.snapshot().iter() {
        for (key, entry) in dictionary.iter() {
            dump.push_str(&format!(
                "{} {key} = {:?} ({:?})\n",
                dictionary.language(),
                entry.value,
                entry.format
            ));
        }
    }

    insta::assert_snapshot!(dump, @r#"
    en Orders.Title = "Your orders" (Plain)
    en Orders.Empty = "" (Plain)
    en Orders.Help = "Read this." (ParagraphedMarkup)
    fr Orders.Title = "Vos commandes" (Plain)
    "#);
}
