//! Tests for display metadata of types, properties and enum values.

use lingo::{
    DisplayLiterals, DisplayMetadata, EnumField, EnumValueDisplay, LoadError, LoadSession, Lingo,
    LingoOptions, LookupError, MetadataResolver, MissingTranslationMode, TextFormat, TypeInfo,
};

fn catalog(session: &mut LoadSession<'_>) -> Result<(), LoadError> {
    let fr = session.dictionary("fr");
    for (key, value) in [
        ("Models.Order.DisplayName", "Commande"),
        ("Models.Order.Description", "Une commande client"),
        ("Models.Order.Fields.Total.DisplayName", "Montant"),
        ("Models.Order.Fields.Total.Placeholder", "0,00"),
        ("Shared.Name", "Nom"),
        ("Enums.Color.Values.Red", "Rouge"),
        ("Enums.Color.Values.Green", "Vert"),
    ] {
        fr.add(key, value, TextFormat::Plain, true);
    }
    Ok(())
}

fn lingo(mode: MissingTranslationMode) -> Lingo {
    let mut options = LingoOptions::builder().missing_translation_mode(mode).build();
    options
        .add_base_prefix_str("Entity", "Models")
        .register_type(TypeInfo::class("Order").with_base("Entity"))
        .register_type(TypeInfo::enumeration("Color"))
        .add_loader(catalog);
    let lingo = Lingo::new(options);
    lingo.load().unwrap();
    lingo
}

// =========================================================================
// Types and Properties
// =========================================================================

#[test]
fn type_metadata_from_dictionary() {
    let lingo = lingo(MissingTranslationMode::AsReadable);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let metadata = resolver
        .type_metadata("Order", &DisplayLiterals::default())
        .unwrap();

    assert_eq!(
        metadata,
        DisplayMetadata {
            display_name: "Commande".to_string(),
            description: "Une commande client".to_string(),
            placeholder: String::new(),
        }
    );
}

#[test]
fn property_metadata_from_dictionary() {
    let lingo = lingo(MissingTranslationMode::AsReadable);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let metadata = resolver
        .property_metadata(Some("Order"), "Total", &DisplayLiterals::default())
        .unwrap();

    assert_eq!(metadata.display_name, "Montant");
    assert_eq!(metadata.description, "");
    assert_eq!(metadata.placeholder, "0,00");
}

#[test]
fn missing_display_name_is_readable_name() {
    let lingo = lingo(MissingTranslationMode::AsReadable);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let metadata = resolver
        .property_metadata(Some("Order"), "ShippingAddress", &DisplayLiterals::default())
        .unwrap();

    assert_eq!(metadata.display_name, "Shipping Address");
    assert_eq!(metadata.placeholder, "");
}

#[test]
fn missing_display_name_is_empty_as_name() {
    let lingo = lingo(MissingTranslationMode::AsName);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let metadata = resolver
        .property_metadata(Some("Order"), "ShippingAddress", &DisplayLiterals::default())
        .unwrap();

    assert_eq!(metadata, DisplayMetadata::default());
}

#[test]
fn missing_metadata_fails_as_error() {
    let lingo = lingo(MissingTranslationMode::AsError);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let err = resolver
        .property_metadata(Some("Order"), "Total", &DisplayLiterals::default())
        .unwrap_err();

    assert!(matches!(
        err,
        LookupError::Missing { ref key, .. } if key == "Models.Order.Fields.Total.Description"
    ));
}

#[test]
fn literals_take_precedence() {
    let lingo = lingo(MissingTranslationMode::AsError);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let literals = DisplayLiterals {
        display_name: Some("#Shared.Name".to_string()),
        description: Some("Saisie libre".to_string()),
        placeholder: Some("Dupont".to_string()),
    };
    let metadata = resolver
        .property_metadata(Some("Order"), "Customer", &literals)
        .unwrap();

    assert_eq!(metadata.display_name, "Nom");
    assert_eq!(metadata.description, "Saisie libre");
    assert_eq!(metadata.placeholder, "Dupont");
}

#[test]
fn blank_literal_falls_back_to_dictionary() {
    let lingo = lingo(MissingTranslationMode::AsReadable);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let literals = DisplayLiterals {
        display_name: Some("  ".to_string()),
        ..DisplayLiterals::default()
    };
    let metadata = resolver.type_metadata("Order", &literals).unwrap();

    assert_eq!(metadata.display_name, "Commande");
}

#[test]
fn missing_key_literal_uses_placeholder() {
    let lingo = lingo(MissingTranslationMode::AsError);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let text = resolver
        .meta_string("DisplayName", None, Some("#Shared.Missing"), "Missing")
        .unwrap();
    assert_eq!(text, "[fr] #Shared.Missing");
}

// =========================================================================
// Enum Values
// =========================================================================

#[test]
fn enum_values_sorted_by_order() {
    let lingo = lingo(MissingTranslationMode::AsReadable);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let fields = vec![
        EnumField::new("Red"),
        EnumField {
            order: Some(1),
            group: Some("Primary".to_string()),
            ..EnumField::new("Green")
        },
        EnumField::new("DarkBlue"),
    ];
    let values = resolver.enum_values("Color", &fields).unwrap();

    assert_eq!(
        values,
        vec![
            EnumValueDisplay {
                name: "Green".to_string(),
                group: "Primary".to_string(),
                display_name: "Vert".to_string(),
            },
            EnumValueDisplay {
                name: "Red".to_string(),
                group: String::new(),
                display_name: "Rouge".to_string(),
            },
            EnumValueDisplay {
                name: "DarkBlue".to_string(),
                group: String::new(),
                display_name: "Dark Blue".to_string(),
            },
        ]
    );
}

#[test]
fn enum_value_literal_wins() {
    let lingo = lingo(MissingTranslationMode::AsError);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let fields = vec![EnumField {
        display_name: Some("Cramoisi".to_string()),
        ..EnumField::new("Red")
    }];
    let values = resolver.enum_values("Color", &fields).unwrap();

    assert_eq!(values[0].display_name, "Cramoisi");
}

#[test]
fn missing_enum_value_fails_as_error() {
    let lingo = lingo(MissingTranslationMode::AsError);
    let resolver = MetadataResolver::new(&lingo, Some("fr"));

    let err = resolver
        .enum_values("Color", &[EnumField::new("Blue")])
        .unwrap_err();
    assert_eq!(
        err,
        LookupError::Missing {
            language: "fr".to_string(),
            key: "Enums.Color.Values.Blue".to_string(),
            suggestions: vec![],
        }
    );
}
