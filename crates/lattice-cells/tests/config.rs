//! Integration tests for loading factory style from TOML files.

use std::io::Write;

use lattice_cells::{
    CellControlFactory, CellDefinition, CheckStyle, ControlKind, Error, FactoryStyle, Thickness,
};

#[test]
fn load_style_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
swatch_size = 20.0
check_style = "toggle"
editor_border_thickness = 1.0
text_padding = {{ left = 2.0, top = 0.0, right = 2.0, bottom = 0.0 }}
"#
    )
    .unwrap();

    let style = FactoryStyle::load(file.path()).unwrap();
    assert_eq!(style.swatch_size, 20.0);
    assert_eq!(style.check_style, CheckStyle::Toggle);
    assert_eq!(style.text_padding, Thickness::symmetric(2.0, 0.0));

    let factory = CellControlFactory::new().with_style(style);

    let swatch = factory.create_display_control(&CellDefinition::color("Tint"));
    assert!(matches!(
        swatch.leaf().kind(),
        ControlKind::ColorSwatch { width, .. } if *width == 20.0
    ));

    let edit = factory.create_edit_control(&CellDefinition::text("Name")).unwrap();
    assert_eq!(edit.border_thickness(), Some(1.0));

    let label = factory.create_display_control(&CellDefinition::text("Name"));
    assert_eq!(label.leaf().padding(), Thickness::symmetric(2.0, 0.0));
}

#[test]
fn save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cells.toml");

    let style = FactoryStyle::default().with_swatch_size(12.0);
    std::fs::write(&path, style.to_toml_string().unwrap()).unwrap();

    assert_eq!(FactoryStyle::load(&path).unwrap(), style);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = FactoryStyle::load(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "swatch_size = -4.0").unwrap();

    let err = FactoryStyle::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}
