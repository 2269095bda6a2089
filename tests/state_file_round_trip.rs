use std::fs;

use mandelbrot_explorer::{
    ConfigError, Field, Palette, PersistenceError, Precision, Session, StateFile, ViewportState,
    deserialize, parse_args, serialize,
};

#[test]
fn test_saved_view_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.txt");
    let state = ViewportState {
        x: -0.743643887037151,
        y: 0.13182590420533,
        x_scale: 0.000000001234,
        y_scale: 0.000000001234,
        max_it: 4000,
        palette: Palette::Spectrum,
        precision: Precision::Double,
        display_text: false,
        ..ViewportState::default()
    };

    StateFile::new().save(&state, &path).unwrap();
    let loaded = parse_args(&["-l", path.to_str().unwrap()]).unwrap();

    assert!(loaded.persisted_eq(&state));
}

#[test]
fn test_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.txt");
    let state = ViewportState {
        palette: Palette::Abyss,
        ..ViewportState::default()
    };

    StateFile::new().save(&state, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        ["-d,750", "-x,-0.5", "-y,0", "-s,1.5", "-i,250", "-c,abyss", "-p,single", "-t,true"]
    );
}

#[test]
fn test_hand_written_file_with_float_alias() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hand.txt");
    fs::write(&path, "-p,float\n\n-s,0.5\n-c,woodstock\n").unwrap();

    let state = parse_args(&["-l", path.to_str().unwrap()]).unwrap();

    assert_eq!(state.precision, Precision::Single);
    assert_eq!(state.x_scale, 0.5);
    assert_eq!(state.palette, Palette::Woodstock);
    assert!(serialize(&state).contains("-p,single\n"));
}

#[test]
fn test_nested_load_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loop.txt");
    fs::write(&path, format!("-l,{}\n", path.display())).unwrap();

    let err = parse_args(&["-l", path.to_str().unwrap()]).unwrap_err();

    assert!(matches!(err, ConfigError::ExclusivityViolation));
}

#[test]
fn test_values_keep_later_commas() {
    let pairs = deserialize("-c,abyss,extra\n");

    assert_eq!(pairs[0].flag, "-c");
    assert_eq!(pairs[0].value, "abyss,extra");
}

#[test]
fn test_failed_save_leaves_session_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("view.txt");
    let mut session = Session::new(ViewportState::default());
    session.on_scroll(1.0);
    let before = session.state().clone();

    let err = session.save(&path).unwrap_err();

    assert!(matches!(err, PersistenceError::SaveFailure { .. }));
    assert_eq!(session.state(), &before);
    assert!(!path.exists());
}

#[test]
fn test_undecodable_value_is_reported_as_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"-d,500\n-c,gr\xe9yscale\n").unwrap();

    let err = parse_args(&["-l", path.to_str().unwrap()]).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: Field::Palette,
            ..
        }
    ));
}
